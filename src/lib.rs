mod aggregate;
mod bench;
mod config;
mod dataset;
mod error;
mod probe;
mod timer;
mod trial;

pub use crate::aggregate::{Aggregate, Tally};
pub use crate::bench::Bench;
pub use crate::config::{Config, NUMBER_OF_ITEMS, NUMBER_OF_TRIALS};
pub use crate::dataset::{key_of, Dataset, Value, MISSING_TARGET};
pub use crate::error::{BenchError, Result};
pub use crate::probe::Container;
pub use crate::timer::{MonotonicTimer, Timer};
pub use crate::trial::{run_trial, TimedTest, Trial};
