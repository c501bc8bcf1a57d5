//! Reachability probing.
//!
//! A probe makes exactly one bounded-time TCP connection attempt and turns
//! whatever happens into an open/closed classification.

pub mod tcp;
pub mod traits;

pub use tcp::{TcpProber, DEFAULT_PROBE_TIMEOUT};
pub use traits::{ExpectedPortStatus, PortState, PortStatus, Prober, SharedProber, StatusError};
