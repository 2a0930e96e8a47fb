use thiserror::Error;

/// Errors raised while parsing a port specification string.
///
/// All variants carry the offending input text so the CLI can print a
/// message the user can act on without re-reading their command line.
/// The rule formatter has no failure modes; only the parser raises.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Segment is missing the `/protocol` suffix
    #[error("invalid port format: {segment}. Expected 'port/protocol' or 'port-range/protocol'")]
    InvalidFormat { segment: String },

    /// Protocol is not tcp or udp
    #[error("invalid protocol: {protocol}. Must be 'tcp' or 'udp'")]
    InvalidProtocol { protocol: String },

    /// Port range is malformed (wrong shape or non-numeric bounds)
    #[error("invalid port range: {ports}")]
    InvalidPortRange { ports: String },

    /// Single port is not a base-10 integer
    #[error("invalid port: {ports}")]
    InvalidPort { ports: String },

    /// Port or range bound falls outside 1-65535, or range start exceeds end
    #[error("port out of valid range (1-65535): {ports}")]
    PortOutOfRange { ports: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_includes_offending_text() {
        let err = Error::PortOutOfRange {
            ports: "40010-40000".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("40010-40000"));
        assert!(msg.contains("1-65535"));
    }

    #[test]
    fn test_invalid_format_message_suggests_syntax() {
        let err = Error::InvalidFormat {
            segment: "8080".to_string(),
        };
        assert!(err.to_string().contains("port/protocol"));
    }
}
