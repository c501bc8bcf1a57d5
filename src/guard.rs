//! The guard: validated configuration plus an injected prober.
//!
//! A `Guard` is built explicitly by the caller and exposes the two
//! operations the host environment drives: applying a configuration change
//! and running one evaluation cycle.

use crate::config::{GuardConfig, RawConfig};
use crate::error::ConfigResult;
use crate::evaluator::evaluate;
use crate::probe::SharedProber;
use crate::report::format_verdict;
use crate::signal::{Signal, DEFAULT_SIGNAL_NAME};
use crate::types::CycleId;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};

/// Port-state monitor for one host and port spec.
pub struct Guard {
    prober: SharedProber,
    signal_name: String,
    config: Option<GuardConfig>,
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("signal_name", &self.signal_name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Guard {
    /// Create an unconfigured guard using `prober` for every probe.
    pub fn new(prober: SharedProber) -> Self {
        Self {
            prober,
            signal_name: DEFAULT_SIGNAL_NAME.to_string(),
            config: None,
        }
    }

    /// Set the name carried by emitted signals.
    pub fn with_signal_name(mut self, name: impl Into<String>) -> Self {
        self.signal_name = name.into();
        self
    }

    /// Validate and apply a configuration change.
    ///
    /// On failure the guard becomes unconfigured: the previous valid
    /// configuration is dropped, not kept running silently.
    pub fn apply_config(&mut self, raw: &RawConfig) -> ConfigResult<()> {
        match raw.validate() {
            Ok(config) => {
                info!(
                    host = %config.host,
                    ports = %config.ports,
                    expected = %config.expected,
                    "configuration applied"
                );
                self.config = Some(config);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "configuration rejected");
                self.config = None;
                Err(e)
            }
        }
    }

    /// The active configuration, if any.
    pub fn config(&self) -> Option<&GuardConfig> {
        self.config.as_ref()
    }

    /// Whether a valid configuration is applied.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Run one evaluation cycle.
    ///
    /// Returns `None` when the guard is unconfigured. An evaluation fault
    /// yields an error signal rather than a verdict.
    pub async fn run_cycle(&self) -> Option<Signal> {
        let Some(config) = self.config.as_ref() else {
            error!("guard is not configured; skipping cycle");
            return None;
        };

        let cycle_id = CycleId::new();
        let span = info_span!("cycle", id = %cycle_id.short());

        async move {
            info!(host = %config.host, ports = %config.ports, "cycle started");
            let outcome = evaluate(
                Arc::clone(&self.prober),
                &config.ports,
                &config.host,
                config.expected,
            )
            .await;

            let signal = match outcome {
                Ok(verdict) => {
                    if !verdict.healthy {
                        info!(
                            first = %verdict.offending_ports[0].port,
                            count = verdict.offending_ports.len(),
                            "some ports are in the wrong state"
                        );
                    }
                    let display =
                        format_verdict(&verdict, &config.host, &config.ports, config.expected);
                    Signal::from_display(&self.signal_name, display, cycle_id)
                }
                Err(e) => {
                    error!(error = %e, "error while trying to evaluate ports");
                    Signal::failure(&self.signal_name, cycle_id)
                }
            };

            Some(signal)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{PortState, PortStatus, Prober, TcpProber};
    use crate::signal::{Effect, FAILURE_MESSAGE, HEALTHY_COLOR, UNHEALTHY_COLOR};
    use crate::types::{Host, Port};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::time::Duration;
    use tokio::net::TcpListener;

    struct FixedProber {
        open: HashSet<u16>,
    }

    #[async_trait]
    impl Prober for FixedProber {
        async fn probe(&self, _host: &Host, port: Port) -> PortState {
            let status = if self.open.contains(&port.as_u16()) {
                PortStatus::Open
            } else {
                PortStatus::Closed
            };
            PortState::new(port, status)
        }

        fn timeout(&self) -> Duration {
            Duration::from_millis(100)
        }
    }

    struct BrokenProber;

    #[async_trait]
    impl Prober for BrokenProber {
        async fn probe(&self, _host: &Host, _port: Port) -> PortState {
            panic!("connection machinery unavailable");
        }

        fn timeout(&self) -> Duration {
            Duration::from_millis(100)
        }
    }

    fn guard_with_open(open: &[u16]) -> Guard {
        Guard::new(Arc::new(FixedProber {
            open: open.iter().copied().collect(),
        }))
    }

    /// Bind two listeners on consecutive loopback ports.
    async fn consecutive_listeners() -> (TcpListener, TcpListener) {
        for _ in 0..100 {
            let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let port = first.local_addr().unwrap().port();
            if port == u16::MAX {
                continue;
            }
            if let Ok(second) = TcpListener::bind(("127.0.0.1", port + 1)).await {
                return (first, second);
            }
        }
        panic!("no consecutive free ports found");
    }

    #[tokio::test]
    async fn test_open_ports_guarded_closed_blink_red() {
        let mut guard = guard_with_open(&[27301, 27302]);
        guard
            .apply_config(&RawConfig::new("localhost", "27301-27302", "closed"))
            .unwrap();

        let signal = guard.run_cycle().await.unwrap();

        let point = signal.point.as_ref().unwrap();
        assert_eq!(point.color, UNHEALTHY_COLOR);
        assert_eq!(point.effect, Effect::Blink);
        assert_eq!(
            signal.message,
            "localhost has 2 opened ports!\n27301\n27302\nopened (should be closed)"
        );
    }

    #[tokio::test]
    async fn test_open_ports_guarded_open_set_green() {
        let mut guard = guard_with_open(&[27301, 27302]);
        guard
            .apply_config(&RawConfig::new("localhost", "27301-27302", "opened"))
            .unwrap();

        let signal = guard.run_cycle().await.unwrap();

        let point = signal.point.as_ref().unwrap();
        assert_eq!(point.color, HEALTHY_COLOR);
        assert_eq!(point.effect, Effect::SetColor);
        assert_eq!(signal.message, "localhost:27301-27302 opened");
    }

    #[tokio::test]
    async fn test_single_closed_port_guarded_open() {
        let mut guard = guard_with_open(&[]);
        guard
            .apply_config(&RawConfig::new("localhost", "8080", "opened"))
            .unwrap();

        let signal = guard.run_cycle().await.unwrap();

        assert!(!signal.is_healthy());
        assert_eq!(signal.message, "localhost:8080 error closed (should be opened)");
    }

    #[tokio::test]
    async fn test_real_listeners_guarded_closed_and_open() {
        let (first, _second) = consecutive_listeners().await;
        let start = first.local_addr().unwrap().port();
        let range = format!("{}-{}", start, start + 1);

        let mut guard = Guard::new(Arc::new(TcpProber::default()));

        guard
            .apply_config(&RawConfig::new("127.0.0.1", range.as_str(), "closed"))
            .unwrap();
        let signal = guard.run_cycle().await.unwrap();
        assert_eq!(signal.point.as_ref().unwrap().effect, Effect::Blink);
        assert_eq!(
            signal.message,
            format!(
                "127.0.0.1 has 2 opened ports!\n{}\n{}\nopened (should be closed)",
                start,
                start + 1
            )
        );

        guard
            .apply_config(&RawConfig::new("127.0.0.1", range.as_str(), "opened"))
            .unwrap();
        let signal = guard.run_cycle().await.unwrap();
        assert!(signal.is_healthy());
        assert_eq!(signal.message, format!("127.0.0.1:{} opened", range));
    }

    #[tokio::test]
    async fn test_real_closed_port_guarded_open() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let mut guard = Guard::new(Arc::new(TcpProber::new(Duration::from_millis(500))));
        guard
            .apply_config(&RawConfig::new("127.0.0.1", port.to_string(), "opened"))
            .unwrap();

        let signal = guard.run_cycle().await.unwrap();

        assert_eq!(
            signal.message,
            format!("127.0.0.1:{} error closed (should be opened)", port)
        );
    }

    #[test]
    fn test_debug_shows_name_and_config() {
        let mut guard = guard_with_open(&[]).with_signal_name("Edge Firewall");
        guard
            .apply_config(&RawConfig::new("localhost", "8080", "opened"))
            .unwrap();

        let debug = format!("{:?}", guard);

        assert!(debug.starts_with("Guard {"));
        assert!(debug.contains("Edge Firewall"));
        assert!(debug.contains("localhost"));
        assert!(debug.ends_with(".. }"));
    }

    #[tokio::test]
    async fn test_unconfigured_guard_skips_cycle() {
        let guard = guard_with_open(&[]);
        assert!(!guard.is_configured());
        assert!(guard.run_cycle().await.is_none());
    }

    #[tokio::test]
    async fn test_invalid_update_discards_previous_config() {
        let mut guard = guard_with_open(&[80]);
        guard
            .apply_config(&RawConfig::new("localhost", "80", "opened"))
            .unwrap();
        assert!(guard.is_configured());

        let err = guard
            .apply_config(&RawConfig::new("localhost", "80-0", "opened"))
            .unwrap_err();

        assert_eq!(err.to_string(), "invalid port '0': should be in [1:65535]");
        assert!(!guard.is_configured());
        assert!(guard.run_cycle().await.is_none());
    }

    #[tokio::test]
    async fn test_evaluation_fault_emits_error_signal() {
        let mut guard = Guard::new(Arc::new(BrokenProber)).with_signal_name("Edge Firewall");
        guard
            .apply_config(&RawConfig::new("localhost", "80-81", "opened"))
            .unwrap();

        let signal = guard.run_cycle().await.unwrap();

        assert!(signal.is_error());
        assert!(signal.point.is_none());
        assert_eq!(signal.name, "Edge Firewall");
        assert_eq!(signal.message, FAILURE_MESSAGE);
    }
}
