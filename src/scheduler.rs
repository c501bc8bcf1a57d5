//! Periodic driver for evaluation cycles.
//!
//! Each cycle is awaited before the next tick is taken, so cycles never
//! overlap; ticks missed while a cycle runs are delayed, not bursted.
//! Shutdown is only observed between cycles.

use crate::guard::Guard;
use crate::signal::Signal;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Shortest interval a scheduler will tick at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Runs a guard on a fixed interval.
#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    max_cycles: Option<usize>,
}

impl Scheduler {
    /// Create a scheduler ticking every `interval`; the first cycle runs
    /// immediately. Intervals below `MIN_INTERVAL` are raised to it.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            max_cycles: None,
        }
    }

    /// Stop after `count` cycles.
    pub fn with_max_cycles(mut self, count: usize) -> Self {
        self.max_cycles = Some(count);
        self
    }

    /// Get the interval between cycles.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run cycles until `shutdown` resolves or the cycle limit is reached.
    ///
    /// Every produced signal is handed to `on_signal`. Returns the number of
    /// cycles run.
    pub async fn run<F, S>(&self, guard: &Guard, mut on_signal: F, shutdown: S) -> usize
    where
        F: FnMut(Signal),
        S: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(
            interval_ms = self.interval.as_millis() as u64,
            "scheduler started"
        );
        let mut cycles = 0;

        loop {
            if self.max_cycles.is_some_and(|max| cycles >= max) {
                debug!(cycles, "cycle limit reached");
                break;
            }

            tokio::select! {
                _ = &mut shutdown => {
                    info!(cycles, "shutdown requested");
                    break;
                }
                _ = ticker.tick() => {
                    if let Some(signal) = guard.run_cycle().await {
                        on_signal(signal);
                    }
                    cycles += 1;
                }
            }
        }

        cycles
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_INTERVAL)
    }
}
