use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{BenchError, Result};

/// Default number of values generated for the dataset.
pub const NUMBER_OF_ITEMS: usize = 100_000;

/// Default number of timed trials.
pub const NUMBER_OF_TRIALS: usize = 10_000;

/// Parameters for a single benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    items: usize,
    trials: usize,
    seed: u128,
}

impl Config {
    /// Default configuration, seeded from the wall-clock in nanoseconds.
    pub fn new() -> Result<Config> {
        let seed = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos();
        Ok(Config {
            items: NUMBER_OF_ITEMS,
            trials: NUMBER_OF_TRIALS,
            seed,
        })
    }

    /// Number of values to generate.
    pub fn set_items(mut self, items: usize) -> Config {
        self.items = items;
        self
    }

    /// Number of timed trials to run, must be non-zero.
    pub fn set_trials(mut self, trials: usize) -> Config {
        self.trials = trials;
        self
    }

    /// Seed for the dataset generator, same seed yields same dataset.
    pub fn set_seed(mut self, seed: u128) -> Config {
        self.seed = seed;
        self
    }

    #[inline]
    pub fn items(&self) -> usize {
        self.items
    }

    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    #[inline]
    pub fn seed(&self) -> u128 {
        self.seed
    }

    /// Averages are undefined for zero trials.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(BenchError::InvalidConfig {
                field: "trials".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
