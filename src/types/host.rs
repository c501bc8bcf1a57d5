//! Monitored host type.
//!
//! The host is normalized (trimmed, lower-cased) once when the
//! configuration is applied, then shared read-only by every probe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// A normalized host name or IP literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Host(String);

/// Error type for host validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("host should not be empty")]
    Empty,
    #[error("invalid host '{0}'")]
    InvalidFormat(String),
}

impl Host {
    /// Normalize and validate a raw host string.
    ///
    /// IPv4/IPv6 literals (IPv6 optionally bracketed) are normalized. Any
    /// other non-blank token is kept as a name for the resolver to judge.
    pub fn parse(raw: &str) -> Result<Self, HostError> {
        let host = raw.trim().to_lowercase();
        if host.is_empty() {
            return Err(HostError::Empty);
        }

        let unbracketed = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host.as_str());
        if let Ok(ip) = unbracketed.parse::<IpAddr>() {
            return Ok(Self(ip.to_string()));
        }

        if host.chars().any(char::is_whitespace) {
            return Err(HostError::InvalidFormat(host));
        }
        Ok(Self(host))
    }

    /// The normalized host string, suitable for connecting.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Host {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Host {
    type Error = HostError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Host> for String {
    fn from(host: Host) -> Self {
        host.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_is_trimmed_and_lowercased() {
        let host = Host::parse("  LocalHost ").unwrap();
        assert_eq!(host.as_str(), "localhost");
    }

    #[test]
    fn test_ip_literals() {
        assert_eq!(Host::parse("127.0.0.1").unwrap().as_str(), "127.0.0.1");
        assert_eq!(Host::parse("::1").unwrap().as_str(), "::1");
        assert_eq!(Host::parse("[::1]").unwrap().as_str(), "::1");
        assert_eq!(
            Host::parse("[FE80::0001]").unwrap().as_str(),
            "fe80::1"
        );
    }

    #[test]
    fn test_empty_host() {
        assert_eq!(Host::parse("   "), Err(HostError::Empty));
    }

    #[test]
    fn test_invalid_host() {
        assert_eq!(
            Host::parse("bad host"),
            Err(HostError::InvalidFormat("bad host".to_string()))
        );
        assert!(matches!(
            Host::parse("db\t.local"),
            Err(HostError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_resolvable_names_are_kept() {
        for name in ["exa_mple.local", "my_service", "sub.example.com.", "edge-fw"] {
            assert_eq!(Host::parse(name).unwrap().as_str(), name);
        }
        assert_eq!(
            Host::parse(" Redis_Cache ").unwrap().as_str(),
            "redis_cache"
        );
    }
}
