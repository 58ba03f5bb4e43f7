use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Minimal counters for operational visibility.
#[derive(Clone, Default, Debug)]
pub struct Counters {
    pub passes: Arc<AtomicU64>,

    // passes that issued no attempts
    pub empty_roster: Arc<AtomicU64>,
    pub no_eligible: Arc<AtomicU64>,

    // passes that issued attempts but got nothing
    pub starved: Arc<AtomicU64>,

    pub attempts: Arc<AtomicU64>,
    pub grants: Arc<AtomicU64>,

    // skip reasons
    pub skip_inactive: Arc<AtomicU64>,
    pub skip_zero_weight: Arc<AtomicU64>,
}

impl Counters {
    pub fn bump(counter: &AtomicU64, by: u64) {
        counter.fetch_add(by, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CountersSnapshot {
        let load = |c: &Arc<AtomicU64>| c.load(Ordering::Relaxed);
        CountersSnapshot {
            passes: load(&self.passes),
            empty_roster: load(&self.empty_roster),
            no_eligible: load(&self.no_eligible),
            starved: load(&self.starved),
            attempts: load(&self.attempts),
            grants: load(&self.grants),
            skip_inactive: load(&self.skip_inactive),
            skip_zero_weight: load(&self.skip_zero_weight),
        }
    }
}

/// Point-in-time copy of [`Counters`].
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CountersSnapshot {
    pub passes: u64,
    pub empty_roster: u64,
    pub no_eligible: u64,
    pub starved: u64,
    pub attempts: u64,
    pub grants: u64,
    pub skip_inactive: u64,
    pub skip_zero_weight: u64,
}
