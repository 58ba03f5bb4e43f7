//! Selection policy: weighted round robin over a fixed roster.
//!
//! One pass visits every roster position exactly once, starting at the
//! cursor and wrapping around. Each eligible UE gets exactly `weight`
//! allocation attempts. Once any attempt in the pass has succeeded, every
//! eligible UE processed afterwards pulls the cursor to the position just
//! past itself, so the returned cursor sits after the last eligible UE
//! touched. A pass with no grants leaves the cursor where it was.

use crate::eligibility::{count_eligible, is_eligible};
use crate::state::Cursor;
use crate::types::{Allocator, Candidate, PassOutcome, Served};

/// Run one weighted round robin pass over `roster` starting at `cursor`.
///
/// Never fails: empty rosters and rosters without eligible UEs are no-ops,
/// and allocation failures only affect where the cursor lands.
pub fn weighted_round_robin<A>(roster: &[Candidate], cursor: Cursor, alloc: &mut A) -> PassOutcome
where
    A: Allocator + ?Sized,
{
    let n = roster.len();
    if n == 0 {
        return PassOutcome::idle(Cursor::default());
    }

    let start = cursor.normalize(n);

    // Keep the pointer stable while nobody can be served.
    if count_eligible(roster) == 0 {
        return PassOutcome::idle(Cursor::from(start));
    }

    let mut out = PassOutcome {
        next_cursor: Cursor::from(start),
        served: Vec::with_capacity(n),
        ..Default::default()
    };

    let mut any_success = false;
    let mut idx = start;
    for _ in 0..n {
        let candidate = &roster[idx];

        if is_eligible(candidate) {
            let attempts = u32::from(candidate.weight);
            let mut grants = 0u32;

            // Attempts are unconditional; earlier results never cut them short.
            for _ in 0..attempts {
                if alloc.allocate(candidate).is_success() {
                    grants += 1;
                }
            }

            any_success |= grants > 0;
            if any_success {
                out.next_cursor = Cursor::from((idx + 1) % n);
            }

            out.attempts += attempts as usize;
            out.grants += grants as usize;
            out.served.push(Served {
                ue_id: candidate.id,
                attempts,
                grants,
            });
        }

        idx = (idx + 1) % n;
    }

    out
}
