use std::{fmt, time::Duration};

use crate::{
    probe::Container,
    trial::{TimedTest, Trial},
};

/// Tally accumulates timed probes for a single container: whether every
/// probe found the target, and total, minimum and maximum latency.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tally {
    samples: usize,
    found: bool,
    total: Duration,
    min: Option<Duration>,
    max: Option<Duration>,
}

impl Tally {
    pub(crate) fn sample(&mut self, test: TimedTest) {
        self.samples += 1;
        self.found = self.found && test.found;
        self.total += test.elapsed;
        self.min = Some(self.min.map_or(test.elapsed, |m| m.min(test.elapsed)));
        self.max = Some(self.max.map_or(test.elapsed, |m| m.max(test.elapsed)));
    }

    /// Combine two tallies, order does not matter.
    pub fn merge(&self, other: &Tally) -> Tally {
        let min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        let max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        Tally {
            samples: self.samples + other.samples,
            found: self.found && other.found,
            total: self.total + other.total,
            min,
            max,
        }
    }

    /// Return number of probes sampled.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return whether every sampled probe found the target. True when
    /// nothing was sampled.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Return the sum of elapsed time across samples.
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn min(&self) -> Option<Duration> {
        self.min
    }

    pub fn max(&self) -> Option<Duration> {
        self.max
    }

    /// Return mean latency in milliseconds, zero when nothing was sampled.
    pub fn mean_ms(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        as_millis_f64(self.total) / (self.samples as f64)
    }
}

impl Default for Tally {
    fn default() -> Self {
        Tally {
            samples: 0,
            found: true,
            total: Duration::default(),
            min: None,
            max: None,
        }
    }
}

/// Aggregate folds [`Trial`] results, one [`Tally`] per container.
/// `Aggregate::default()` is the identity for [`Aggregate::merge`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregate {
    trials: usize,
    tallies: [Tally; 4],
}

impl Aggregate {
    pub fn add(&mut self, trial: &Trial) {
        self.trials += 1;
        for (container, test) in trial.iter() {
            self.tallies[container.index()].sample(test);
        }
    }

    /// Combine aggregates accumulated independently, say by separate
    /// workers, into one.
    pub fn merge(&self, other: &Aggregate) -> Aggregate {
        let mut tallies = self.tallies;
        for (i, tally) in tallies.iter_mut().enumerate() {
            *tally = tally.merge(&other.tallies[i]);
        }
        Aggregate {
            trials: self.trials + other.trials,
            tallies,
        }
    }

    /// Return number of trials folded into this aggregate.
    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn get(&self, container: Container) -> &Tally {
        &self.tallies[container.index()]
    }

    /// Return the first container that missed the target in any trial.
    pub fn first_miss(&self) -> Option<Container> {
        Container::ALL
            .iter()
            .find(|c| !self.get(**c).found())
            .cloned()
    }

    /// Return mean latency per trial in milliseconds for `container`.
    pub fn average_ms(&self, container: Container) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        as_millis_f64(self.get(container).total()) / (self.trials as f64)
    }

    /// Render the report, one line per container.
    pub fn report(&self) -> String {
        let lines: Vec<String> = Container::ALL
            .iter()
            .map(|c| format!("{} average: {}ms", c.name(), self.average_ms(*c)))
            .collect();
        lines.join("\n")
    }

    /// Log latency spread per container, useful while debugging noisy
    /// measurements.
    pub fn log_summary(&self) {
        for container in Container::ALL.iter() {
            let tally = self.get(*container);
            log::debug!(
                "{} samples:{} found:{} latency (min, mean, max): {:?}",
                container,
                tally.samples(),
                tally.found(),
                (tally.min(), tally.mean_ms(), tally.max())
            );
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.report())
    }
}

fn as_millis_f64(elapsed: Duration) -> f64 {
    (elapsed.as_nanos() as f64) / 1_000_000_f64
}
