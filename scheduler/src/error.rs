use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// No allocation primitive was wired in. Always a caller bug.
    #[error("invalid argument: allocation primitive is missing")]
    MissingAllocator,
}
