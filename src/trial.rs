use std::time::Duration;

use crate::{dataset::Dataset, probe::Container, timer::Timer};

/// Outcome of one timed probe, whether the target was found and how long
/// the lookup took.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedTest {
    pub found: bool,
    pub elapsed: Duration,
}

/// One trial, a [`TimedTest`] for each container, indexed in
/// [`Container::ALL`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct Trial {
    tests: [TimedTest; 4],
}

impl Trial {
    pub fn get(&self, container: Container) -> TimedTest {
        self.tests[container.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Container, TimedTest)> + '_ {
        self.tests
            .iter()
            .enumerate()
            .map(|(i, test)| (Container::ALL[i], *test))
    }
}

/// Probe every view of `dataset` for `target`, one after another, each
/// under its own timing window.
pub fn run_trial<T>(dataset: &Dataset, target: f64, timer: &mut T) -> Trial
where
    T: Timer,
{
    let mut tests = [TimedTest {
        found: false,
        elapsed: Duration::default(),
    }; 4];
    for container in Container::ALL.iter() {
        let (found, elapsed) = timer.time(|| dataset.contains(*container, target));
        tests[container.index()] = TimedTest { found, elapsed };
    }
    Trial { tests }
}
