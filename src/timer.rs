use std::{hint::black_box, time::Duration, time::Instant};

/// Timer measures a single probe invocation. The same timer is used for
/// every probe within a run.
pub trait Timer {
    /// Run `probe` exactly once and return its result with the elapsed
    /// time of the call.
    fn time<F>(&mut self, probe: F) -> (bool, Duration)
    where
        F: FnOnce() -> bool;
}

/// Monotonic high-resolution timer backed by [`Instant`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicTimer;

impl Timer for MonotonicTimer {
    fn time<F>(&mut self, probe: F) -> (bool, Duration)
    where
        F: FnOnce() -> bool,
    {
        let start = Instant::now();
        let found = black_box(probe());
        (found, start.elapsed())
    }
}
