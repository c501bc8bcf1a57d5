//! Firewall Guard command-line entry point.

use anyhow::Context;
use clap::Parser;
use firewall_guard::cli::{Cli, Commands};
use firewall_guard::config::{AppSettings, Paths};
use firewall_guard::output;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let settings = load_settings(&cli)?;

    match &cli.command {
        Commands::Check(cmd) => {
            let outcome = cmd.execute(&settings).await?;
            Ok(outcome.exit_code())
        }
        Commands::Watch(cmd) => {
            cmd.execute(&settings).await?;
            Ok(0)
        }
        Commands::Config(cmd) => {
            cmd.execute(&settings, cli.config.as_deref())?;
            Ok(0)
        }
    }
}

/// Settings from `--config`, else the XDG location, else defaults.
fn load_settings(cli: &Cli) -> anyhow::Result<AppSettings> {
    if let Some(path) = &cli.config {
        return AppSettings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()));
    }

    match Paths::discover() {
        Ok(paths) => AppSettings::load(&paths).context("loading settings"),
        Err(e) => {
            warn!(error = %e, "using default settings");
            Ok(AppSettings::default())
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("firewall_guard={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
