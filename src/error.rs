use std::time::SystemTimeError;

use thiserror::Error;

use crate::probe::Container;

/// BenchError enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Configuration rejected by [`Config::validate`](crate::Config::validate).
    #[error("invalid value for field '{field}': {message}")]
    InvalidConfig { field: String, message: String },
    /// System clock is behind UNIX epoch, cannot derive a seed.
    #[error("system clock error: {0}")]
    Clock(#[from] SystemTimeError),
    /// Target was drawn from the dataset, yet the container failed to
    /// find it in at least one trial.
    #[error("self-check failed, {0} did not find the target value")]
    SelfCheck(Container),
}

pub type Result<T> = std::result::Result<T, BenchError>;
