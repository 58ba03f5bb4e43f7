//! Weighted round robin scheduler for per-TTI resource allocation.
//!
//! Once per TTI the MAC layer hands over a roster of UEs, the cursor kept
//! from the previous TTI and an allocation primitive. The scheduler walks
//! the roster once in circular order, offers every eligible UE `weight`
//! allocation attempts and returns where the next TTI should start.

pub mod budget;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod state;
pub mod tally;
pub mod types;

pub use budget::RbBudget;
pub use engine::{SchedulerEngine, schedule};
pub use error::SchedulerError;
pub use policy::weighted_round_robin;
pub use state::Cursor;
pub use tally::ShareTally;
pub use types::{AllocOutcome, Allocator, Candidate, CellId, PassOutcome, Served, UeId, Weight};
