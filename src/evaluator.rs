//! Batch evaluation of a port spec against the expected status.
//!
//! One task is spawned per port, all tasks are joined, and the results are
//! reduced into a single `Verdict`. Completion order never leaks into the
//! verdict: results are consumed in spawn order, which is port order.

use crate::error::{EvaluationError, EvaluationResult};
use crate::probe::{ExpectedPortStatus, PortState, SharedProber};
use crate::types::{Host, Port, PortSpec};
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Aggregate outcome of one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// True when no port disagrees with the expected status.
    pub healthy: bool,
    /// Ports whose status disagrees with the expectation, ascending.
    pub offending_ports: Vec<PortState>,
    /// The status every port was expected to be in.
    pub expected: ExpectedPortStatus,
    /// Number of ports probed.
    pub probed: usize,
    /// Number of probed ports found open.
    pub open: usize,
}

impl Verdict {
    /// Reduce a full set of port states against the expected status.
    pub fn from_states(states: &[PortState], expected: ExpectedPortStatus) -> Self {
        let mut offending_ports: Vec<PortState> = states
            .iter()
            .filter(|state| state.status != expected)
            .copied()
            .collect();
        offending_ports.sort_by_key(|state| state.port);

        Self {
            healthy: offending_ports.is_empty(),
            offending_ports,
            expected,
            probed: states.len(),
            open: states.iter().filter(|state| state.is_open()).count(),
        }
    }
}

/// Probe every port of `spec` on `host` concurrently and judge the result.
///
/// Every probe is awaited, even after a mismatch has been seen, so the
/// verdict always lists all offending ports. A probe task that panics or is
/// cancelled fails the whole evaluation; no partial verdict is returned.
pub async fn evaluate(
    prober: SharedProber,
    spec: &PortSpec,
    host: &Host,
    expected: ExpectedPortStatus,
) -> EvaluationResult<Verdict> {
    let start = Instant::now();
    let timeout = prober.timeout();
    let host = Arc::new(host.clone());

    let (ports, handles): (Vec<Port>, Vec<_>) = spec
        .iter()
        .map(|port| {
            let prober = Arc::clone(&prober);
            let host = Arc::clone(&host);
            let handle = tokio::spawn(async move { prober.probe(&host, port).await });
            (port, handle)
        })
        .unzip();

    debug!(
        %host,
        %spec,
        tasks = spec.count(),
        timeout_ms = timeout.as_millis() as u64,
        "connection attempts launched"
    );

    let outcomes = join_all(handles).await;

    let mut states = Vec::with_capacity(spec.count());
    for (port, outcome) in ports.into_iter().zip(outcomes) {
        let state = outcome.map_err(|e| EvaluationError::ProbeTask {
            port: port.as_u16(),
            reason: e.to_string(),
        })?;
        states.push(state);
    }

    let verdict = Verdict::from_states(&states, expected);
    info!(
        %host,
        %spec,
        %expected,
        healthy = verdict.healthy,
        open = verdict.open,
        offending = verdict.offending_ports.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "evaluation complete"
    );

    Ok(verdict)
}
