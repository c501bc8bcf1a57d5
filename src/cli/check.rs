//! Check subcommand implementation.
//!
//! Runs a single evaluation cycle and maps the signal to an exit status.

use super::GuardArgs;
use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::signal::Signal;
use clap::Parser;

/// Run one evaluation cycle and exit.
///
/// Exit status: 0 when every port is in the expected state, 1 when at least
/// one is not, 2 when the ports could not be evaluated.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub guard: GuardArgs,
}

/// Result of a check, as seen by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Healthy,
    Unhealthy,
    Failed,
}

impl CheckOutcome {
    /// Classify an emitted signal.
    pub fn from_signal(signal: &Signal) -> Self {
        if signal.is_error() {
            Self::Failed
        } else if signal.is_healthy() {
            Self::Healthy
        } else {
            Self::Unhealthy
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Healthy => 0,
            Self::Unhealthy => 1,
            Self::Failed => 2,
        }
    }
}

impl CheckCommand {
    /// Execute the check command.
    pub async fn execute(&self, settings: &AppSettings) -> CliResult<CheckOutcome> {
        let guard = self.guard.build_guard(settings)?;
        let format = self.guard.output_format(settings);

        let signal = guard
            .run_cycle()
            .await
            .ok_or_else(|| CliError::Other("guard is not configured".to_string()))?;

        output::print_signal(&signal, format)?;
        Ok(CheckOutcome::from_signal(&signal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{DisplayResult, Severity};
    use crate::types::CycleId;

    #[test]
    fn test_outcome_exit_codes() {
        let ok = Signal::from_display(
            "g",
            DisplayResult {
                severity: Severity::Ok,
                message: String::new(),
            },
            CycleId::new(),
        );
        let alert = Signal::from_display(
            "g",
            DisplayResult {
                severity: Severity::Error,
                message: String::new(),
            },
            CycleId::new(),
        );
        let failed = Signal::failure("g", CycleId::new());

        assert_eq!(CheckOutcome::from_signal(&ok).exit_code(), 0);
        assert_eq!(CheckOutcome::from_signal(&alert).exit_code(), 1);
        assert_eq!(CheckOutcome::from_signal(&failed).exit_code(), 2);
    }
}
