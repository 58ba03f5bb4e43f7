//! Shared types used by the scheduler subsystem.

use std::fmt;

use serde::{Deserialize, Serialize};

/// UE identifier (RNTI or roster index).
pub type UeId = u16;

/// Per-TTI attempt budget of a UE. Zero marks the UE ineligible.
pub type Weight = u8;

/// Identifies an independent scheduling domain (one radio cell / carrier).
pub type CellId = u32;

/// A schedulable UE as seen by the scheduler for one TTI.
///
/// `active` and `weight` are refreshed by external collaborators (buffer
/// status, CQI, HARQ, QoS) before the TTI starts; the scheduler only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: UeId,
    pub weight: Weight,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Candidate {
    pub fn new(id: UeId, weight: Weight, active: bool) -> Self {
        Self { id, weight, active }
    }

    /// Active candidate with the given weight.
    pub fn active(id: UeId, weight: Weight) -> Self {
        Self::new(id, weight, true)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UE {} (weight={})", self.id, self.weight)
    }
}

/// Result of one allocation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocOutcome {
    Fail,
    Success,
}

impl AllocOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AllocOutcome::Success)
    }
}

impl From<bool> for AllocOutcome {
    fn from(granted: bool) -> Self {
        if granted {
            AllocOutcome::Success
        } else {
            AllocOutcome::Fail
        }
    }
}

/// The resource-commitment primitive invoked by the scheduler.
///
/// Each call is one independent attempt to commit resources to `candidate`.
/// Implementations must complete synchronously within the TTI budget.
pub trait Allocator {
    fn allocate(&mut self, candidate: &Candidate) -> AllocOutcome;
}

impl<F> Allocator for F
where
    F: FnMut(&Candidate) -> AllocOutcome,
{
    fn allocate(&mut self, candidate: &Candidate) -> AllocOutcome {
        self(candidate)
    }
}

/// Per-UE summary of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Served {
    pub ue_id: UeId,
    pub attempts: u32,
    pub grants: u32,
}

/// Everything a single scheduling pass produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassOutcome {
    /// Total calls made to the allocator.
    pub attempts: usize,

    /// Calls that returned `Success`.
    pub grants: usize,

    /// Where the next TTI should start, already normalized to the roster.
    pub next_cursor: crate::state::Cursor,

    /// Eligible UEs in visitation order.
    pub served: Vec<Served>,
}

impl PassOutcome {
    /// A pass that touched nobody and left the cursor at `cursor`.
    pub fn idle(cursor: crate::state::Cursor) -> Self {
        Self {
            next_cursor: cursor,
            ..Default::default()
        }
    }

    pub fn any_grant(&self) -> bool {
        self.grants > 0
    }
}
