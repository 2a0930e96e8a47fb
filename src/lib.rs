//! rosnat - MikroTik RouterOS NAT rule generator
//!
//! Generates dst-nat port-forwarding rules and the matching hairpin-NAT
//! rule pairs for a single internal host behind a RouterOS device. The
//! output is console script text, ready to paste.
//!
//! # Architecture
//!
//! - [`core::ports`] - Port specification parsing (`80/tcp,8000-8100/udp`)
//! - [`core::nat`] - Rule text generation
//! - [`core::error`] - Parse error taxonomy
//!
//! The whole pipeline is pure: the CLI resolves flags and environment
//! variables once at startup, then hands explicit values to the parser and
//! generator. No network I/O, no state.
//!
//! # Usage
//!
//! ```bash
//! rosnat --public-ip 195.136.68.11 --dest-ip 172.16.1.10 --ports 32400/tcp
//! rosnat --public-ip 195.136.68.11 --dest-ip 172.16.1.10 \
//!        --ports 21/tcp,40000-40010/tcp,2001/udp --app ftp
//! ```

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod core;

// Re-export commonly used types
pub use core::error::{Error, Result};
pub use core::nat::NatRuleSet;
pub use core::ports::{parse_port_specs, PortSpec, Protocol};
