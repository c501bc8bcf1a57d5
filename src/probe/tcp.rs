//! TCP connect prober.
//!
//! Performs one full TCP handshake per port using the operating system's
//! socket API, then closes the connection without exchanging data.

use crate::probe::traits::{PortState, PortStatus, Prober};
use crate::types::{Host, Port};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Default bound on a single connection attempt.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1000);

/// TCP connect prober.
///
/// The connect future races the timeout: whichever finishes first decides
/// the outcome, and the loser is dropped together with its socket.
#[derive(Debug, Clone)]
pub struct TcpProber {
    timeout: Duration,
}

impl TcpProber {
    /// Create a new TCP prober with the given per-port timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, host: &Host, port: Port) -> PortState {
        debug!(%host, %port, "testing port status");
        let start = Instant::now();

        // Name resolution happens inside the connect future, so it counts
        // toward the timeout as well.
        let status = match timeout(self.timeout, TcpStream::connect((host.as_str(), port.as_u16())))
            .await
        {
            Ok(Ok(stream)) => {
                debug!(
                    %host,
                    %port,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "connection established"
                );
                drop(stream);
                PortStatus::Open
            }
            Ok(Err(e)) => {
                debug!(%host, %port, error = %e, "connection error");
                PortStatus::Closed
            }
            Err(_) => {
                debug!(%host, %port, timeout_ms = self.timeout.as_millis() as u64, "connection timed out");
                PortStatus::Closed
            }
        };

        PortState::new(port, status)
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
