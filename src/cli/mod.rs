//! CLI subcommand definitions and handlers.
//!
//! - `firewall-guard check` - run one evaluation cycle
//! - `firewall-guard watch` - run cycles on an interval until interrupted
//! - `firewall-guard config show|init` - inspect or create the settings file

mod check;
mod config;
mod watch;

pub use check::CheckCommand;
pub use config::{ConfigAction, ConfigCommand};
pub use watch::WatchCommand;

use crate::config::{AppSettings, RawConfig};
use crate::error::{CliError, CliResult};
use crate::guard::Guard;
use crate::output;
use crate::probe::TcpProber;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Firewall Guard - watch a host's TCP ports for drift.
///
/// Probes every port of a range and reports whether all of them are in the
/// expected state (all opened or all closed).
#[derive(Parser, Debug)]
#[command(name = "firewall-guard")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Signals when a host's ports drift from the expected state", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to custom settings file
    #[arg(long, global = true, value_name = "PATH", env = "FIREWALL_GUARD_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one evaluation cycle and exit
    #[command(alias = "c")]
    Check(CheckCommand),

    /// Run evaluation cycles periodically
    #[command(alias = "w")]
    Watch(WatchCommand),

    /// Inspect or create the settings file
    Config(ConfigCommand),
}

/// Guard options shared by `check` and `watch`.
///
/// Anything left unset falls back to the settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct GuardArgs {
    /// Host to monitor (name or IP address)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port or port range to monitor (e.g. "8080" or "8080-8090")
    #[arg(short, long, value_name = "RANGE")]
    pub ports: Option<String>,

    /// Expected state of every port: "opened" or "closed"
    #[arg(short, long, value_name = "STATUS")]
    pub expect: Option<String>,

    /// Connection timeout per port in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Name carried by emitted signals
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output format for signals
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl GuardArgs {
    /// The guard fields given on the command line.
    pub fn raw_config(&self) -> RawConfig {
        RawConfig {
            host: self.host.clone(),
            port_range: self.ports.clone(),
            port_status: self.expect.clone(),
        }
    }

    /// Output format from the flag, else from settings.
    pub fn output_format(&self, settings: &AppSettings) -> OutputFormat {
        if let Some(format) = self.output {
            return format;
        }
        <OutputFormat as clap::ValueEnum>::from_str(&settings.output_format, true).unwrap_or_else(
            |_| {
                output::print_warning(&format!(
                    "unknown output format '{}' in settings, using plain",
                    settings.output_format
                ));
                OutputFormat::Plain
            },
        )
    }

    /// Build and configure a guard from flags layered over settings.
    pub fn build_guard(&self, settings: &AppSettings) -> CliResult<Guard> {
        let timeout = self
            .timeout
            .map(Duration::from_millis)
            .unwrap_or_else(|| settings.probe_timeout());
        if timeout.is_zero() {
            return Err(CliError::Other(
                "timeout must be at least one millisecond".to_string(),
            ));
        }
        let name = self.name.clone().unwrap_or_else(|| settings.signal_name.clone());
        let raw = settings.guard.clone().merge(self.raw_config());

        let mut guard = Guard::new(Arc::new(TcpProber::new(timeout))).with_signal_name(name);
        guard.apply_config(&raw)?;
        Ok(guard)
    }
}

/// Output format for signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// One JSON object per signal
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "firewall-guard",
            "check",
            "--host",
            "localhost",
            "--ports",
            "27301-27302",
            "--expect",
            "closed",
            "-o",
            "json",
        ])
        .unwrap();

        let Commands::Check(cmd) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(cmd.guard.host.as_deref(), Some("localhost"));
        assert_eq!(cmd.guard.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = AppSettings {
            guard: RawConfig::new("old.example", "22", "opened"),
            ..AppSettings::default()
        };
        let args = GuardArgs {
            ports: Some("8080-8081".to_string()),
            ..GuardArgs::default()
        };

        let guard = args.build_guard(&settings).unwrap();
        let config = guard.config().unwrap();

        assert_eq!(config.host.as_str(), "old.example");
        assert_eq!(config.ports.to_string(), "8080-8081");
    }

    #[test]
    fn test_invalid_flags_fail() {
        let args = GuardArgs {
            host: Some("localhost".to_string()),
            ports: Some("70000".to_string()),
            expect: Some("opened".to_string()),
            ..GuardArgs::default()
        };

        let err = args.build_guard(&AppSettings::default()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let args = GuardArgs {
            host: Some("localhost".to_string()),
            ports: Some("8080".to_string()),
            expect: Some("opened".to_string()),
            timeout: Some(0),
            ..GuardArgs::default()
        };
        let err = args.build_guard(&AppSettings::default()).unwrap_err();
        assert_eq!(err.to_string(), "timeout must be at least one millisecond");

        let settings = AppSettings {
            probe_timeout_ms: 0,
            guard: RawConfig::new("localhost", "8080", "opened"),
            ..AppSettings::default()
        };
        assert!(matches!(
            GuardArgs::default().build_guard(&settings),
            Err(CliError::Other(_))
        ));

        let args = GuardArgs {
            timeout: Some(1),
            ..GuardArgs::default()
        };
        assert!(args.build_guard(&settings).is_ok());
    }

    #[test]
    fn test_output_format_from_settings() {
        let settings = AppSettings {
            output_format: "JSON".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(GuardArgs::default().output_format(&settings), OutputFormat::Json);
    }
}
