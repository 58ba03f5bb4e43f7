//! Determines whether a candidate takes part in the current pass.
//
//  Classification only: no IO, no logging.

use crate::types::Candidate;

/// Result of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Inactive,
    ZeroWeight,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// A candidate is eligible when it is flagged active and has a weight of at
/// least one. A zero weight wins over the active flag.
pub fn check_eligibility(candidate: &Candidate) -> Eligibility {
    if candidate.weight == 0 {
        return Eligibility::ZeroWeight;
    }

    if !candidate.active {
        return Eligibility::Inactive;
    }

    Eligibility::Eligible
}

pub fn is_eligible(candidate: &Candidate) -> bool {
    check_eligibility(candidate).is_eligible()
}

/// Number of eligible candidates in `roster`.
pub fn count_eligible(roster: &[Candidate]) -> usize {
    roster.iter().filter(|c| is_eligible(c)).count()
}
