//! RouterOS NAT rule generation
//!
//! Renders validated port specifications into `/ip firewall nat add`
//! statements ready to paste into a RouterOS console. For every entry the
//! generator emits a dst-nat forwarding rule and, when hairpin NAT is
//! enabled, a second dst-nat rule plus a src-nat rule so internal clients
//! can reach the service through its public address.
//!
//! Output formatting is load-bearing: field order, `key=value` tokens,
//! backslash line continuations and the quoted `comment=` string all follow
//! RouterOS console syntax exactly. The generator never fails; all
//! validation happens in [`crate::core::ports`] beforehand.

use crate::core::ports::PortSpec;
use std::fmt::Write;

/// A complete NAT rule set: addressing parameters plus the ordered entries.
///
/// `gateway_ip` is optional; when absent it is derived from `dest_ip` by
/// [`NatRuleSet::gateway_ip`]. `app` prefixes every rule comment when
/// non-empty, tying generated rules back to the service they forward.
#[derive(Debug, Clone)]
pub struct NatRuleSet {
    pub public_ip: String,
    pub dest_ip: String,
    pub gateway_ip: Option<String>,
    pub hairpin: bool,
    pub app: String,
    pub entries: Vec<PortSpec>,
}

impl NatRuleSet {
    /// Resolves the src-nat gateway address.
    ///
    /// An explicit `gateway_ip` always wins. Otherwise the gateway defaults
    /// to `.1` in the destination subnet by replacing the last dot-separated
    /// component of `dest_ip` - a plain string operation that assumes a
    /// dotted-quad destination and does not validate the result. Non-IPv4
    /// input produces garbage in, garbage out.
    pub fn gateway_ip(&self) -> String {
        if let Some(gateway) = &self.gateway_ip {
            return gateway.clone();
        }

        let derived = match self.dest_ip.rsplit_once('.') {
            Some((subnet, _)) => format!("{subnet}.1"),
            None => ".1".to_string(),
        };
        tracing::debug!(gateway = %derived, "derived gateway from destination IP");
        derived
    }

    /// Generates the RouterOS console script for this rule set.
    ///
    /// Rules are emitted in entry order. Per entry: one dst-nat rule, then
    /// (with hairpin) a second dst-nat rule and a src-nat rule. The two
    /// dst-nat rules differ only in their comment; the duplication is
    /// intentional so operators can audit which rule exists for hairpin
    /// traffic. Each rule block ends with a blank separator line.
    pub fn to_ros_text(&self) -> String {
        let gateway_ip = self.gateway_ip();

        let app_prefix = if self.app.is_empty() {
            String::new()
        } else {
            format!("{}: ", self.app)
        };

        let mut out = String::new();

        for entry in &self.entries {
            let ports = &entry.ports;
            let protocol = entry.protocol.as_str();
            let target = format!("{}:{}/{}", self.dest_ip, ports, protocol);

            // dst-nat rule (public to internal)
            let _ = writeln!(
                out,
                "/ip firewall nat add chain=dstnat action=dst-nat protocol={protocol} \\"
            );
            let _ = writeln!(out, "  dst-address={} dst-port={ports} \\", self.public_ip);
            let _ = writeln!(out, "  to-addresses={} to-ports={ports} \\", self.dest_ip);
            let _ = writeln!(out, "  comment=\"{app_prefix}dstnat {target}\"");
            let _ = writeln!(out);

            if self.hairpin {
                // hairpin dst-nat rule (internal to internal via public IP)
                let _ = writeln!(
                    out,
                    "/ip firewall nat add chain=dstnat action=dst-nat protocol={protocol} \\"
                );
                let _ = writeln!(out, "  dst-address={} dst-port={ports} \\", self.public_ip);
                let _ = writeln!(out, "  to-addresses={} to-ports={ports} \\", self.dest_ip);
                let _ = writeln!(out, "  comment=\"{app_prefix}hairpin dstnat {target}\"");
                let _ = writeln!(out);

                // hairpin src-nat rule (masquerade internal traffic)
                let _ = writeln!(
                    out,
                    "/ip firewall nat add chain=srcnat action=src-nat protocol={protocol} \\"
                );
                let _ = writeln!(out, "  dst-address={} dst-port={ports} \\", self.dest_ip);
                let _ = writeln!(out, "  to-addresses={gateway_ip} \\");
                let _ = writeln!(out, "  comment=\"{app_prefix}hairpin srcnat {target}\"");
                let _ = writeln!(out);
            }
        }

        out
    }
}
