//! Port domain types and the port safety classifier.
//!
//! The `Port` newtype covers the full 16-bit range; out-of-domain input is
//! rejected at the parse boundary, never silently coerced. Safety
//! classification is a constant-time membership test against the
//! browser-blocked port set, built once and never mutated.

use crate::error::PortError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Standard DNS port.
pub const STANDARD_DNS_PORT: u16 = 53;
/// Standard plain-HTTP web port.
pub const STANDARD_WEB_PORT: u16 = 80;
/// Standard HTTPS port.
pub const STANDARD_HTTPS_PORT: u16 = 443;

/// Ports historically blocked by browsers for outbound connections.
///
/// These sit on protocols (mail transfer, IRC, directory services, and a
/// tail of legacy services) susceptible to cross-protocol request abuse.
/// Membership lookups are O(1); the set is immutable after first use.
static UNSAFE_PORTS: LazyLock<HashSet<u16>> = LazyLock::new(|| {
    HashSet::from([
        1, 7, 9, 11, 13, 15, 17, 19, 20, 21, 22, 23, 25, 37, 42, 43, 53, 77, 79, 87, 95, 101,
        102, 103, 104, 109, 110, 111, 113, 115, 117, 119, 123, 135, 139, 143, 179, 389, 465, 512,
        513, 514, 515, 526, 530, 531, 532, 540, 556, 563, 587, 601, 636, 993, 995, 2049, 3659,
        4045, 6000, 6665, 6666, 6667, 6668, 6669,
    ])
});

/// Check whether a port is on the browser-blocked list.
///
/// Independent of [`standard_port_name`]: a port can be both unsafe and
/// well-known (53 is both).
pub fn is_unsafe_port(port: u16) -> bool {
    UNSAFE_PORTS.contains(&port)
}

/// The well-known services flagged for informational purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardPort {
    /// DNS (port 53).
    Dns,
    /// HTTP (port 80).
    Http,
    /// HTTPS (port 443).
    Https,
}

impl fmt::Display for StandardPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dns => "dns",
            Self::Http => "http",
            Self::Https => "https",
        };
        write!(f, "{}", name)
    }
}

/// Report which well-known service a port belongs to, if any.
///
/// Purely informational: used to warn the user, never to reject input.
pub fn standard_port_name(port: u16) -> Option<StandardPort> {
    match port {
        STANDARD_DNS_PORT => Some(StandardPort::Dns),
        STANDARD_WEB_PORT => Some(StandardPort::Http),
        STANDARD_HTTPS_PORT => Some(StandardPort::Https),
        _ => None,
    }
}

/// A validated network port number (0-65535).
///
/// Every `u16` is a valid port value; the newtype exists so text and
/// wide-integer inputs pass through exactly one validating boundary
/// before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum port value.
    pub const MIN: u16 = 0;
    /// Maximum port value.
    pub const MAX: u16 = 65535;

    /// Wrap a raw port number. All `u16` values are in-domain.
    #[inline]
    pub const fn new(port: u16) -> Self {
        Self(port)
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Check whether this port is on the browser-blocked list.
    #[inline]
    pub fn is_unsafe(self) -> bool {
        is_unsafe_port(self.0)
    }

    /// Which well-known service this port belongs to, if any.
    #[inline]
    pub fn standard_service(self) -> Option<StandardPort> {
        standard_port_name(self.0)
    }

    /// Check if this is a privileged port (< 1024).
    #[inline]
    pub const fn is_privileged(self) -> bool {
        self.0 < 1024
    }

    /// Check if this is an ephemeral port (49152-65535).
    #[inline]
    pub const fn is_ephemeral(self) -> bool {
        self.0 >= 49152
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Port {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl TryFrom<i64> for Port {
    type Error = PortError;

    /// Validate a wide integer into the port domain. Negative and >65535
    /// values are an error for the caller to surface, never clamped.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .map(Self)
            .map_err(|_| PortError::OutOfRange(value))
    }
}

impl FromStr for Port {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PortError::Empty);
        }
        let value: i64 = s
            .parse()
            .map_err(|_| PortError::InvalidFormat(s.to_string()))?;
        Self::try_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsafe_port_membership() {
        assert!(is_unsafe_port(25));
        assert!(is_unsafe_port(1));
        assert!(is_unsafe_port(6669));
        assert!(!is_unsafe_port(8080));
        assert!(!is_unsafe_port(0));
        assert!(!is_unsafe_port(65535));
    }

    #[test]
    fn test_unsafe_and_well_known_are_independent() {
        // 53 carries both flags at once.
        assert!(is_unsafe_port(53));
        assert_eq!(standard_port_name(53), Some(StandardPort::Dns));

        // 443 is well-known but not blocked.
        assert!(!is_unsafe_port(443));
        assert_eq!(standard_port_name(443), Some(StandardPort::Https));
    }

    #[test]
    fn test_standard_port_lookup() {
        assert_eq!(standard_port_name(80), Some(StandardPort::Http));
        assert_eq!(standard_port_name(8080), None);
        assert_eq!(standard_port_name(0), None);
    }

    #[test]
    fn test_port_parse_boundaries() {
        assert_eq!("0".parse::<Port>().unwrap().as_u16(), 0);
        assert_eq!("65535".parse::<Port>().unwrap().as_u16(), 65535);
        assert!(matches!(
            "65536".parse::<Port>(),
            Err(PortError::OutOfRange(65536))
        ));
        assert!(matches!("-1".parse::<Port>(), Err(PortError::OutOfRange(-1))));
        assert!(matches!(
            "http".parse::<Port>(),
            Err(PortError::InvalidFormat(_))
        ));
        assert!(matches!("8.5".parse::<Port>(), Err(PortError::InvalidFormat(_))));
        assert!(matches!("".parse::<Port>(), Err(PortError::Empty)));
    }

    #[test]
    fn test_port_try_from_wide_integer() {
        assert!(Port::try_from(443i64).is_ok());
        assert!(matches!(
            Port::try_from(70000i64),
            Err(PortError::OutOfRange(70000))
        ));
        assert!(matches!(
            Port::try_from(-5i64),
            Err(PortError::OutOfRange(-5))
        ));
    }

    #[test]
    fn test_port_properties() {
        let dns = Port::new(53);
        assert!(dns.is_unsafe());
        assert_eq!(dns.standard_service(), Some(StandardPort::Dns));
        assert!(dns.is_privileged());
        assert!(!dns.is_ephemeral());

        let high = Port::new(50000);
        assert!(!high.is_privileged());
        assert!(high.is_ephemeral());
        assert!(!high.is_unsafe());
    }
}
