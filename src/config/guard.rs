//! User-facing guard configuration.
//!
//! `RawConfig` holds the strings exactly as the configuration host supplies
//! them; `GuardConfig` is the validated form the guard runs with.

use crate::error::{ConfigError, ConfigResult};
use crate::probe::ExpectedPortStatus;
use crate::types::{Host, PortSpec};
use serde::{Deserialize, Serialize};

/// Unvalidated configuration fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    /// Host to monitor.
    #[serde(default)]
    pub host: Option<String>,
    /// `P1` or `P1-P2`.
    #[serde(default)]
    pub port_range: Option<String>,
    /// `opened` or `closed`.
    #[serde(default)]
    pub port_status: Option<String>,
}

impl RawConfig {
    /// Create a raw configuration with every field set.
    pub fn new(
        host: impl Into<String>,
        port_range: impl Into<String>,
        port_status: impl Into<String>,
    ) -> Self {
        Self {
            host: Some(host.into()),
            port_range: Some(port_range.into()),
            port_status: Some(port_status.into()),
        }
    }

    /// Overlay the fields that are set in `other`.
    pub fn merge(mut self, other: RawConfig) -> Self {
        if other.host.is_some() {
            self.host = other.host;
        }
        if other.port_range.is_some() {
            self.port_range = other.port_range;
        }
        if other.port_status.is_some() {
            self.port_status = other.port_status;
        }
        self
    }

    /// Validate every field.
    ///
    /// Each field contributes at most one message; all messages are joined
    /// into a single `ConfigError::Invalid`.
    pub fn validate(&self) -> ConfigResult<GuardConfig> {
        let mut errors = Vec::new();

        let host = match self.host.as_deref() {
            Some(raw) => Host::parse(raw).map_err(|e| errors.push(e.to_string())).ok(),
            None => {
                errors.push("host is required".to_string());
                None
            }
        };

        let ports = match self.port_range.as_deref() {
            Some(raw) => PortSpec::parse(raw)
                .map_err(|e| errors.push(e.to_string()))
                .ok(),
            None => {
                errors.push("port range is required".to_string());
                None
            }
        };

        let expected = match self.port_status.as_deref() {
            Some(raw) => raw
                .parse::<ExpectedPortStatus>()
                .map_err(|e| errors.push(e.to_string()))
                .ok(),
            None => {
                errors.push("port status is required".to_string());
                None
            }
        };

        match (host, ports, expected) {
            (Some(host), Some(ports), Some(expected)) => Ok(GuardConfig {
                host,
                ports,
                expected,
            }),
            _ => Err(ConfigError::Invalid(errors.join(", "))),
        }
    }
}

/// Validated guard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardConfig {
    pub host: Host,
    pub ports: PortSpec,
    pub expected: ExpectedPortStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::PortStatus;

    #[test]
    fn test_valid_config() {
        let config = RawConfig::new(" LOCALHOST ", "27301-27302", "opened")
            .validate()
            .unwrap();

        assert_eq!(config.host.as_str(), "localhost");
        assert_eq!(config.ports.to_string(), "27301-27302");
        assert_eq!(config.expected, PortStatus::Open);
    }

    #[test]
    fn test_all_messages_are_collected() {
        let err = RawConfig::new("", "8080-10", "ajar").validate().unwrap_err();

        let message = err.to_string();
        assert_eq!(
            message,
            "host should not be empty, \
             invalid port range: 8080 is greater than 10, \
             invalid port status 'ajar': should be 'opened' or 'closed'"
        );
    }

    #[test]
    fn test_missing_fields() {
        let err = RawConfig::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "host is required, port range is required, port status is required"
        );
    }

    #[test]
    fn test_single_invalid_field() {
        let err = RawConfig::new("localhost", "dummyPort", "closed")
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid port 'dummyPort': should be a number");
    }

    #[test]
    fn test_merge_prefers_set_fields() {
        let base = RawConfig::new("a.example", "80", "opened");
        let merged = base.merge(RawConfig {
            host: None,
            port_range: Some("443".to_string()),
            port_status: None,
        });

        assert_eq!(merged, RawConfig::new("a.example", "443", "opened"));
    }

    #[test]
    fn test_raw_config_json_field_names() {
        let raw: RawConfig = serde_json::from_str(
            r#"{"host":"localhost","portRange":"8080","portStatus":"closed"}"#,
        )
        .unwrap();
        assert_eq!(raw, RawConfig::new("localhost", "8080", "closed"));
    }
}
