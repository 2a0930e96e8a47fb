//! Port specification parsing and validation
//!
//! Parses the firewall-cmd style port syntax (`80/tcp`, `8000-8100/udp`,
//! comma-separated) into validated entries. Parsing is all-or-nothing: the
//! first malformed segment aborts with a descriptive error and no partial
//! list is ever returned.
//!
//! The original port text is preserved verbatim in each entry rather than
//! being rebuilt from the parsed integers, so the generated rules display
//! ports exactly as the user wrote them.

use crate::core::error::{Error, Result};
use std::str::FromStr;

/// Transport protocol accepted in a port specification
///
/// RouterOS NAT rules match on a concrete transport protocol, so only TCP
/// and UDP are supported. Input is case-insensitive; the canonical form is
/// lowercase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Protocol {
    /// Transmission Control Protocol
    #[strum(serialize = "tcp")]
    Tcp,
    /// User Datagram Protocol
    #[strum(serialize = "udp")]
    Udp,
}

impl Protocol {
    /// Returns the lowercase protocol keyword used in rule text
    pub const fn as_str(self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        }
    }
}

/// A single validated (port-or-range, protocol) entry
///
/// `ports` keeps the exact text the user supplied ("32400" or
/// "40000-40010"), already checked against the 1-65535 bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec {
    pub ports: String,
    pub protocol: Protocol,
}

/// Inclusive port bounds
const PORT_MIN: u64 = 1;
const PORT_MAX: u64 = 65535;

fn port_in_bounds(port: u64) -> bool {
    (PORT_MIN..=PORT_MAX).contains(&port)
}

/// Validates the port part of a segment (single port or `start-end` range).
///
/// Returns the range/port errors per the input shape: a port part containing
/// `-` is judged as a range even when a bound is non-numeric.
fn validate_port_part(port_part: &str) -> Result<()> {
    if port_part.contains('-') {
        let parts: Vec<&str> = port_part.split('-').collect();
        if parts.len() != 2 {
            return Err(Error::InvalidPortRange {
                ports: port_part.to_string(),
            });
        }

        let start = u64::from_str(parts[0]).map_err(|_| Error::InvalidPortRange {
            ports: port_part.to_string(),
        })?;
        let end = u64::from_str(parts[1]).map_err(|_| Error::InvalidPortRange {
            ports: port_part.to_string(),
        })?;

        if !(port_in_bounds(start) && port_in_bounds(end) && start <= end) {
            return Err(Error::PortOutOfRange {
                ports: port_part.to_string(),
            });
        }
    } else {
        let port = u64::from_str(port_part).map_err(|_| Error::InvalidPort {
            ports: port_part.to_string(),
        })?;

        if !port_in_bounds(port) {
            return Err(Error::PortOutOfRange {
                ports: port_part.to_string(),
            });
        }
    }

    Ok(())
}

/// Parses a comma-separated port specification.
///
/// Each segment is `port/protocol` or `start-end/protocol`. Whitespace
/// around a whole segment is trimmed; whitespace inside the port part or
/// around the `/` is not, and fails validation. The split happens at the
/// *last* `/` so a malformed port part can never swallow the protocol.
///
/// # Errors
///
/// Returns the first validation failure in left-to-right segment order.
/// An empty segment (e.g. a trailing comma) is an error, not a skip.
///
/// # Examples
///
/// ```
/// use rosnat::core::ports::{parse_port_specs, Protocol};
///
/// let specs = parse_port_specs("21/tcp,40000-40010/tcp,2001/udp").unwrap();
/// assert_eq!(specs.len(), 3);
/// assert_eq!(specs[0].ports, "21");
/// assert_eq!(specs[1].protocol, Protocol::Tcp);
/// assert_eq!(specs[2].protocol, Protocol::Udp);
/// ```
pub fn parse_port_specs(spec: &str) -> Result<Vec<PortSpec>> {
    let mut entries = Vec::new();

    for segment in spec.split(',') {
        let segment = segment.trim();

        let Some((port_part, protocol_part)) = segment.rsplit_once('/') else {
            return Err(Error::InvalidFormat {
                segment: segment.to_string(),
            });
        };

        let protocol =
            Protocol::from_str(protocol_part).map_err(|_| Error::InvalidProtocol {
                protocol: protocol_part.to_string(),
            })?;

        validate_port_part(port_part)?;

        entries.push(PortSpec {
            ports: port_part.to_string(),
            protocol,
        });
    }

    tracing::debug!(count = entries.len(), "parsed port specification");
    Ok(entries)
}
