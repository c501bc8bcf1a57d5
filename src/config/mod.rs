//! Configuration management for firewall-guard.
//!
//! Provides XDG-compliant settings storage and the validation of the
//! user-supplied guard fields.

mod guard;
mod settings;

pub use guard::{GuardConfig, RawConfig};
pub use settings::{AppSettings, Paths, DEFAULT_INTERVAL};
