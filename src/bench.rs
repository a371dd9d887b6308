use log::{debug, info};

use crate::{
    aggregate::Aggregate,
    config::Config,
    dataset::Dataset,
    error::{BenchError, Result},
    timer::{MonotonicTimer, Timer},
    trial::run_trial,
};

/// Bench owns the dataset and drives the timed trials over it.
pub struct Bench {
    config: Config,
    dataset: Dataset,
}

impl Bench {
    /// Validate `config` and generate the dataset it describes.
    pub fn new(config: Config) -> Result<Bench> {
        config.validate()?;
        info!(
            "generating {} items with seed {}",
            config.items(),
            config.seed()
        );
        let dataset = Dataset::generate(config.items(), config.seed());
        Ok(Bench { config, dataset })
    }

    /// Benchmark a pre-built dataset, `config.items()` is ignored.
    pub fn from_dataset(config: Config, dataset: Dataset) -> Result<Bench> {
        config.validate()?;
        Ok(Bench { config, dataset })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Run all trials with the monotonic timer.
    pub fn run(&self) -> Aggregate {
        self.run_with(&mut MonotonicTimer)
    }

    /// Run all trials sequentially, timing every probe with `timer`.
    pub fn run_with<T>(&self, timer: &mut T) -> Aggregate
    where
        T: Timer,
    {
        let target = self.dataset.target();
        debug!("target value {}", target);

        let mut aggregate = Aggregate::default();
        for _ in 0..self.config.trials() {
            let trial = run_trial(&self.dataset, target, timer);
            aggregate.add(&trial);
        }
        info!("completed {} trials", aggregate.trials());
        aggregate.log_summary();
        aggregate
    }

    /// The target is drawn from the dataset, so every container must
    /// have found it unless the dataset is empty.
    pub fn self_check(&self, aggregate: &Aggregate) -> Result<()> {
        if self.dataset.is_empty() {
            return Ok(());
        }
        match aggregate.first_miss() {
            Some(container) => Err(BenchError::SelfCheck(container)),
            None => Ok(()),
        }
    }
}
