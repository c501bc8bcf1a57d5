//! # Firewall Guard - TCP Port State Monitor
//!
//! Firewall Guard probes every port of a range on one host and reports
//! whether all of them are in the state the user expects: all opened, or
//! all closed. The result is a single signal (green, blinking red, or an
//! error) meant for an external renderer such as a keyboard LED.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use firewall_guard::{Guard, RawConfig, TcpProber};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let prober = Arc::new(TcpProber::new(Duration::from_millis(1000)));
//!     let mut guard = Guard::new(prober);
//!     guard
//!         .apply_config(&RawConfig::new("localhost", "8080-8090", "closed"))
//!         .unwrap();
//!
//!     if let Some(signal) = guard.run_cycle().await {
//!         println!("{}", signal.message);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - validated ports, port specs and hosts
//! - [`probe`] - single-port reachability probes and the `Prober` trait
//! - [`evaluator`] - concurrent fan-out over a port spec and reduction to a verdict
//! - [`report`] - verdict formatting
//! - [`signal`] - payload handed to the renderer
//! - [`guard`] - configuration + prober, runs one cycle at a time
//! - [`scheduler`] - periodic driver
//! - [`config`] - settings file and guard field validation
//! - [`error`] - error types

pub mod cli;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod guard;
pub mod output;
pub mod probe;
pub mod report;
pub mod scheduler;
pub mod signal;
pub mod types;

// Re-export commonly used types
pub use config::{AppSettings, GuardConfig, RawConfig};
pub use error::{CliError, ConfigError, EvaluationError};
pub use evaluator::{evaluate, Verdict};
pub use guard::Guard;
pub use probe::{ExpectedPortStatus, PortState, PortStatus, Prober, TcpProber};
pub use report::{format_verdict, DisplayResult, Severity};
pub use scheduler::Scheduler;
pub use signal::Signal;
pub use types::{CycleId, Host, Port, PortSpec};
