//! Application settings and paths.
//!
//! Settings live in a JSON file under the XDG config directory. A missing
//! file means defaults; command-line flags override whatever is loaded.

use super::guard::RawConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::probe::DEFAULT_PROBE_TIMEOUT;
use crate::signal::DEFAULT_SIGNAL_NAME;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default delay between evaluation cycles (20 minutes).
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(20 * 60);

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/firewall-guard)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the XDG directories for this application.
    pub fn discover() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "firewall-guard", "firewall-guard")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Per-probe connection timeout in milliseconds.
    pub probe_timeout_ms: u64,
    /// Seconds between evaluation cycles in watch mode.
    pub interval_secs: u64,
    /// Name carried by every emitted signal.
    pub signal_name: String,
    /// Default output format ("plain" or "json").
    pub output_format: String,
    /// Guard configuration used when no flags are given.
    pub guard: RawConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT.as_millis() as u64,
            interval_secs: DEFAULT_INTERVAL.as_secs(),
            signal_name: DEFAULT_SIGNAL_NAME.to_string(),
            output_format: "plain".to_string(),
            guard: RawConfig::default(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, or defaults if absent.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let file = paths.settings_file();
        if !file.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Save settings to a specific file, creating its directory.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Per-probe timeout.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Delay between cycles.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
