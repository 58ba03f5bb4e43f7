//! The scheduler entry points.
//!
//! [`schedule`] is the per-TTI decision function: caller supplies the roster,
//! the cursor carried from the previous TTI and the allocation primitive, and
//! gets back the pass summary with the cursor for the next TTI.
//!
//! [`SchedulerEngine`] wraps it for MAC layers that drive several cells from
//! one thread: it keeps one cursor per cell, counts what happened and logs a
//! summary of every pass.

use tracing::{debug, field, instrument, warn};

use crate::eligibility::{Eligibility, check_eligibility};
use crate::error::SchedulerError;
use crate::metrics::Counters;
use crate::policy::weighted_round_robin;
use crate::state::{Cursor, SchedulerState};
use crate::types::{Allocator, Candidate, CellId, PassOutcome};

/// Run one scheduling pass.
///
/// A missing allocator is rejected before anything else is looked at, even
/// when the roster is empty: it is a wiring bug, not a runtime condition.
pub fn schedule(
    roster: &[Candidate],
    cursor: Cursor,
    allocator: Option<&mut dyn Allocator>,
) -> Result<PassOutcome, SchedulerError> {
    let Some(alloc) = allocator else {
        return Err(SchedulerError::MissingAllocator);
    };

    Ok(weighted_round_robin(roster, cursor, alloc))
}

/// Drives weighted round robin passes for any number of independent cells.
#[derive(Debug, Default)]
pub struct SchedulerEngine {
    state: SchedulerState,
    counters: Counters,
}

impl SchedulerEngine {
    pub fn new(counters: Counters) -> Self {
        Self {
            state: SchedulerState::new(),
            counters,
        }
    }

    /// Cursor the next pass of `cell` will start from.
    pub fn cursor(&self, cell: CellId) -> Cursor {
        self.state
            .cell(cell)
            .map(|c| c.cursor)
            .unwrap_or_default()
    }

    /// Override the cursor of `cell`, e.g. when restoring from a checkpoint.
    pub fn set_cursor(&mut self, cell: CellId, cursor: Cursor) {
        self.state.cell_mut(cell).cursor = cursor;
    }

    /// Forget `cell`; its next pass starts at position 0.
    pub fn reset(&mut self, cell: CellId) {
        self.state.remove(cell);
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Run one TTI for `cell` and store the resulting cursor.
    #[instrument(
        skip(self, roster, alloc),
        target = "scheduler",
        fields(ues = roster.len(), start = field::Empty)
    )]
    pub fn on_tti(
        &mut self,
        cell: CellId,
        roster: &[Candidate],
        alloc: &mut dyn Allocator,
    ) -> PassOutcome {
        let cell_state = self.state.cell_mut(cell);
        let cursor = cell_state.cursor;
        tracing::Span::current().record("start", field::display(cursor.normalize(roster.len())));

        let out = weighted_round_robin(roster, cursor, alloc);

        cell_state.cursor = out.next_cursor;
        cell_state.passes += 1;

        self.record(roster, &out);

        out
    }

    fn record(&self, roster: &[Candidate], out: &PassOutcome) {
        let c = &self.counters;
        Counters::bump(&c.passes, 1);
        Counters::bump(&c.attempts, out.attempts as u64);
        Counters::bump(&c.grants, out.grants as u64);

        for candidate in roster {
            match check_eligibility(candidate) {
                Eligibility::Eligible => {}
                Eligibility::Inactive => Counters::bump(&c.skip_inactive, 1),
                Eligibility::ZeroWeight => Counters::bump(&c.skip_zero_weight, 1),
            }
        }

        if roster.is_empty() {
            Counters::bump(&c.empty_roster, 1);
            debug!("empty roster; nothing to schedule");
            return;
        }

        if out.served.is_empty() {
            Counters::bump(&c.no_eligible, 1);
            debug!(next = %out.next_cursor, "no eligible candidates; cursor kept");
            return;
        }

        if !out.any_grant() {
            Counters::bump(&c.starved, 1);
            warn!(
                attempts = out.attempts,
                next = %out.next_cursor,
                "no allocation succeeded this tti; cursor kept"
            );
            return;
        }

        debug!(
            served = out.served.len(),
            attempts = out.attempts,
            grants = out.grants,
            next = %out.next_cursor,
            "pass complete"
        );
    }
}
