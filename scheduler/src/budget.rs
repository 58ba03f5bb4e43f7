//! Resource-block budget allocator.
//!
//! Models the simplest resource accounting a MAC layer could plug in: every
//! attempt consumes one RB unit while budget remains, and fails once the
//! TTI's budget is exhausted.

use tracing::trace;

use crate::types::{AllocOutcome, Allocator, Candidate};

#[derive(Debug, Clone, Default)]
pub struct RbBudget {
    remaining: u32,
}

impl RbBudget {
    pub fn new(units: u32) -> Self {
        Self { remaining: units }
    }

    /// Reset the budget for the next TTI.
    pub fn refill(&mut self, units: u32) {
        self.remaining = units;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl Allocator for RbBudget {
    fn allocate(&mut self, candidate: &Candidate) -> AllocOutcome {
        if self.remaining == 0 {
            return AllocOutcome::Fail;
        }

        self.remaining -= 1;

        trace!(
            ue_id = candidate.id,
            weight = candidate.weight,
            remaining_budget = self.remaining,
            "rb allocated"
        );

        AllocOutcome::Success
    }
}
