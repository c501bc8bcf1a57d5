//! Watch subcommand implementation.
//!
//! Runs evaluation cycles on an interval until Ctrl-C.

use super::GuardArgs;
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output;
use crate::scheduler::Scheduler;
use clap::Parser;
use std::time::Duration;
use tracing::{error, warn};

/// Run evaluation cycles periodically.
#[derive(Parser, Debug)]
pub struct WatchCommand {
    #[command(flatten)]
    pub guard: GuardArgs,

    /// Seconds between cycles (defaults to the settings value, 1200)
    #[arg(short, long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Stop after this many cycles
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,
}

impl WatchCommand {
    /// Execute the watch command.
    pub async fn execute(&self, settings: &AppSettings) -> CliResult<()> {
        let guard = self.guard.build_guard(settings)?;
        let format = self.guard.output_format(settings);

        let interval = self
            .interval
            .map(Duration::from_secs)
            .unwrap_or_else(|| settings.interval());
        if interval.is_zero() {
            return Err(crate::error::CliError::Other(
                "interval must be at least one second".to_string(),
            ));
        }

        let mut scheduler = Scheduler::new(interval);
        if let Some(count) = self.count {
            scheduler = scheduler.with_max_cycles(count);
        }

        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "could not listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        };

        scheduler
            .run(
                &guard,
                |signal| {
                    if let Err(e) = output::print_signal(&signal, format) {
                        error!(error = %e, "failed to write signal");
                    }
                },
                shutdown,
            )
            .await;

        Ok(())
    }
}
