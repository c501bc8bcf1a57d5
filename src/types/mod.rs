//! Core type definitions using newtype patterns for type safety.
//!
//! Ports, port specs and hosts can only be built through validation, so the
//! rest of the crate never sees an out-of-range port or an unnormalized host.

mod cycle_id;
mod host;
mod port;

pub use cycle_id::CycleId;
pub use host::{Host, HostError};
pub use port::{Port, PortError, PortSpec};
