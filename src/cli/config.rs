//! Config subcommand implementation.
//!
//! Handles `firewall-guard config` for inspecting and creating settings.

use crate::config::{AppSettings, Paths};
use crate::error::{CliError, CliResult};
use crate::output;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Inspect or create the settings file.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Settings actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,

    /// Print the settings file location
    Path,

    /// Write a settings file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(&self, settings: &AppSettings, explicit: Option<&Path>) -> CliResult<()> {
        match &self.action {
            ConfigAction::Show => {
                let json = serde_json::to_string_pretty(settings)
                    .map_err(|e| CliError::Other(e.to_string()))?;
                println!("{}", json);
            }
            ConfigAction::Path => {
                println!("{}", settings_path(explicit)?.display());
            }
            ConfigAction::Init { force } => {
                let path = settings_path(explicit)?;
                if path.exists() && !force {
                    return Err(CliError::Other(format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    )));
                }
                AppSettings::default().save_to(&path)?;
                output::print_info(&format!("Settings written to {}", path.display()));
            }
        }

        Ok(())
    }
}

/// The `--config` path if given, else the XDG settings file.
fn settings_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::discover()?.settings_file()),
    }
}
