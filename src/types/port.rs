//! Port types with validation and parsing.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortSpec` is the validated form of a user-supplied `P1` or `P1-P2` string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated network port number (1-65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Parse a single port token.
    ///
    /// Only ASCII digits are accepted, so signs, decimals and letters are
    /// reported as malformed before any range check happens.
    fn parse_token(token: &str) -> Result<Self, PortError> {
        let token = token.trim();
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PortError::Malformed(token.to_string()));
        }

        // A digit-only token that overflows u32 is simply a very large number.
        token
            .parse::<u32>()
            .ok()
            .and_then(|value| u16::try_from(value).ok())
            .and_then(Self::new)
            .ok_or_else(|| PortError::OutOfRange(token.to_string()))
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| PortError::OutOfRange(value.to_string()))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl FromStr for Port {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

/// Error type for port parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("invalid port '{0}': should be a number")]
    Malformed(String),
    #[error("invalid port '{0}': should be in [1:65535]")]
    OutOfRange(String),
    #[error("invalid port range: {0} is greater than {1}")]
    RangeOrder(u16, u16),
    #[error("empty port specification")]
    Empty,
}

/// A validated port specification: a single port or an inclusive range.
///
/// Supports formats:
/// - Single port: "8080"
/// - Range: "8080-8090"
///
/// A `PortSpec` is never empty and its ports are strictly ascending. It
/// serializes as the same string it parses from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PortSpec {
    start: Port,
    end: Port,
}

impl PortSpec {
    /// Create a spec containing a single port.
    pub const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    /// Create an inclusive range, rejecting inverted bounds.
    pub fn range(start: Port, end: Port) -> Result<Self, PortError> {
        if start > end {
            Err(PortError::RangeOrder(start.0, end.0))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Parse and validate a raw `P1` or `P1-P2` string.
    ///
    /// The first violation found is reported: the first port is checked
    /// before the second, and both before the range order.
    pub fn parse(raw: &str) -> Result<Self, PortError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PortError::Empty);
        }

        match raw.split_once('-') {
            None => Ok(Self::single(Port::parse_token(raw)?)),
            Some((first, second)) => {
                if second.contains('-') {
                    return Err(PortError::Malformed(raw.to_string()));
                }
                let start = Port::parse_token(first)?;
                let end = Port::parse_token(second)?;
                Self::range(start, end)
            }
        }
    }

    /// First port of the spec.
    pub const fn start(&self) -> Port {
        self.start
    }

    /// Last port of the spec (equal to `start` for a single port).
    pub const fn end(&self) -> Port {
        self.end
    }

    /// Whether the spec names exactly one port.
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of ports covered (at least one).
    pub const fn count(&self) -> usize {
        (self.end.0 - self.start.0) as usize + 1
    }

    /// Iterate over all ports in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Port> {
        (self.start.0..=self.end.0).map(Port)
    }
}

impl FromStr for PortSpec {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PortSpec {
    type Error = PortError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PortSpec> for String {
    fn from(spec: PortSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
