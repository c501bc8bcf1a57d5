//! Signal payloads for the rendering host.
//!
//! A signal carries a color point (color + effect) and the formatted
//! message. Evaluation faults produce an error-kind signal with no color
//! point, so an infrastructure failure is never shown as red or green.

use crate::report::{DisplayResult, Severity};
use crate::types::CycleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default signal name.
pub const DEFAULT_SIGNAL_NAME: &str = "Firewall Guard";

/// Color shown when every port is in the expected state.
pub const HEALTHY_COLOR: &str = "#00FF00";

/// Color shown when at least one port is in the wrong state.
pub const UNHEALTHY_COLOR: &str = "#FF0000";

/// Message carried by a failure signal.
pub const FAILURE_MESSAGE: &str = "Error while trying to evaluate port range";

/// Animation applied to a color point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    /// Static color.
    SetColor,
    /// Blinking color.
    Blink,
}

/// A single colored point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub color: String,
    pub effect: Effect,
}

/// Whether a signal reports a verdict or a failure to reach one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Status,
    Error,
}

/// Payload emitted once per evaluation cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    pub kind: SignalKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<Point>,
    pub message: String,
    pub cycle_id: CycleId,
    pub evaluated_at: DateTime<Utc>,
}

impl Signal {
    /// Build a status signal from a formatted verdict.
    pub fn from_display(name: impl Into<String>, result: DisplayResult, cycle_id: CycleId) -> Self {
        let point = match result.severity {
            Severity::Ok => Point {
                color: HEALTHY_COLOR.to_string(),
                effect: Effect::SetColor,
            },
            Severity::Error => Point {
                color: UNHEALTHY_COLOR.to_string(),
                effect: Effect::Blink,
            },
        };

        Self {
            name: name.into(),
            kind: SignalKind::Status,
            point: Some(point),
            message: result.message,
            cycle_id,
            evaluated_at: Utc::now(),
        }
    }

    /// Build an error signal for a cycle whose health could not be determined.
    pub fn failure(name: impl Into<String>, cycle_id: CycleId) -> Self {
        Self {
            name: name.into(),
            kind: SignalKind::Error,
            point: None,
            message: FAILURE_MESSAGE.to_string(),
            cycle_id,
            evaluated_at: Utc::now(),
        }
    }

    /// True for a status signal reporting every port in the expected state.
    pub fn is_healthy(&self) -> bool {
        self.kind == SignalKind::Status
            && self
                .point
                .as_ref()
                .is_some_and(|p| p.effect == Effect::SetColor)
    }

    /// True for a failure signal.
    pub fn is_error(&self) -> bool {
        self.kind == SignalKind::Error
    }
}
