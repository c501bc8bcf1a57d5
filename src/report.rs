//! Verdict formatting.
//!
//! Turns a `Verdict` into the short human-readable summary shown by the
//! rendering host. Purely presentational: no I/O.

use crate::evaluator::Verdict;
use crate::probe::ExpectedPortStatus;
use crate::types::{Host, PortSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a formatted verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Every port is in the expected state.
    Ok,
    /// At least one port is in the wrong state.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A formatted verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResult {
    pub severity: Severity,
    pub message: String,
}

/// Format a verdict for display.
///
/// - healthy: `"<host>:<spec> <expected>"`
/// - one offending port: `"<host>:<port> error <observed> (should be <expected>)"`
/// - several: a count line, one line per port, then the mismatch once
pub fn format_verdict(
    verdict: &Verdict,
    host: &Host,
    spec: &PortSpec,
    expected: ExpectedPortStatus,
) -> DisplayResult {
    // Every offending port has the same observed status: the opposite of
    // what was expected.
    let observed = expected.inverse();
    let mismatch = format!("{observed} (should be {expected})");

    match verdict.offending_ports.as_slice() {
        [] => DisplayResult {
            severity: Severity::Ok,
            message: format!("{host}:{spec} {expected}"),
        },
        [single] => DisplayResult {
            severity: Severity::Error,
            message: format!("{host}:{} error {mismatch}", single.port),
        },
        several => {
            let mut lines = Vec::with_capacity(several.len() + 2);
            lines.push(format!("{host} has {} {observed} ports!", several.len()));
            lines.extend(several.iter().map(|state| state.port.to_string()));
            lines.push(mismatch);
            DisplayResult {
                severity: Severity::Error,
                message: lines.join("\n"),
            }
        }
    }
}
