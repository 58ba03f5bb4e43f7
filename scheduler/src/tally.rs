//! Long-run share accounting across many passes.

use std::collections::BTreeMap;

use crate::types::{PassOutcome, UeId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UeTally {
    pub attempts: u64,
    pub grants: u64,
}

/// Accumulates attempts and grants per UE.
#[derive(Debug, Clone, Default)]
pub struct ShareTally {
    per_ue: BTreeMap<UeId, UeTally>,
    passes: u64,
}

impl ShareTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pass: &PassOutcome) {
        self.passes += 1;
        for s in &pass.served {
            let t = self.per_ue.entry(s.ue_id).or_default();
            t.attempts += u64::from(s.attempts);
            t.grants += u64::from(s.grants);
        }
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn get(&self, ue_id: UeId) -> UeTally {
        self.per_ue.get(&ue_id).copied().unwrap_or_default()
    }

    pub fn grants(&self, ue_id: UeId) -> u64 {
        self.get(ue_id).grants
    }

    pub fn total_grants(&self) -> u64 {
        self.per_ue.values().map(|t| t.grants).sum()
    }

    /// Fraction of all grants that went to `ue_id` (0.0 when nothing was granted).
    pub fn share(&self, ue_id: UeId) -> f64 {
        let total = self.total_grants();
        if total == 0 {
            return 0.0;
        }
        self.grants(ue_id) as f64 / total as f64
    }

    /// UEs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (UeId, UeTally)> + '_ {
        self.per_ue.iter().map(|(id, t)| (*id, *t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Cursor;
    use crate::types::Served;

    fn pass(served: &[(UeId, u32, u32)]) -> PassOutcome {
        PassOutcome {
            attempts: served.iter().map(|s| s.1 as usize).sum(),
            grants: served.iter().map(|s| s.2 as usize).sum(),
            next_cursor: Cursor::default(),
            served: served
                .iter()
                .map(|&(ue_id, attempts, grants)| Served {
                    ue_id,
                    attempts,
                    grants,
                })
                .collect(),
        }
    }

    #[test]
    fn accumulates_across_passes() {
        let mut tally = ShareTally::new();
        tally.record(&pass(&[(1, 1, 1), (2, 2, 1)]));
        tally.record(&pass(&[(2, 2, 2)]));

        assert_eq!(tally.passes(), 2);
        assert_eq!(tally.get(2), UeTally { attempts: 4, grants: 3 });
        assert_eq!(tally.total_grants(), 4);
        assert!((tally.share(1) - 0.25).abs() < f64::EPSILON);

        let ids: Vec<UeId> = tally.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn share_without_grants_is_zero() {
        let tally = ShareTally::new();
        assert_eq!(tally.share(7), 0.0);
    }
}
