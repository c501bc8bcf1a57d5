//! Prober trait abstraction.
//!
//! Defines the interface the batch evaluator fans out over, so the TCP
//! implementation can be swapped for a double in tests.

use crate::types::{Host, Port};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Reachability of a single port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortStatus {
    /// A TCP connection completed within the timeout.
    #[serde(rename = "opened")]
    Open,
    /// The connection was refused, failed, or timed out.
    #[serde(rename = "closed")]
    Closed,
}

/// The state every monitored port is expected to be in.
pub type ExpectedPortStatus = PortStatus;

impl PortStatus {
    /// The opposite status.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "opened"),
            Self::Closed => write!(f, "closed"),
        }
    }
}

/// Error for an unrecognized status token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid port status '{0}': should be 'opened' or 'closed'")]
pub struct StatusError(pub String);

impl FromStr for PortStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "opened" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(StatusError(s.to_string())),
        }
    }
}

/// Result of probing a single port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortState {
    /// The port that was probed.
    pub port: Port,
    /// Observed reachability.
    pub status: PortStatus,
}

impl PortState {
    /// Create a new port state.
    pub const fn new(port: Port, status: PortStatus) -> Self {
        Self { port, status }
    }

    /// Check if the port is open.
    pub fn is_open(&self) -> bool {
        self.status == PortStatus::Open
    }
}

/// Trait for reachability probes.
///
/// Implementations classify, they never fail: every outcome of an attempt
/// (success, refusal, timeout, resolution failure) maps to a `PortState`.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe a single port on `host`.
    async fn probe(&self, host: &Host, port: Port) -> PortState;

    /// Upper bound of a single `probe` call.
    fn timeout(&self) -> Duration;
}

/// A shared prober for fan-out across spawned tasks.
pub type SharedProber = Arc<dyn Prober>;
