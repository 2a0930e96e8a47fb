//! Core NAT rule generation functionality
//!
//! This module contains the pure logic of the generator:
//!
//! - [`ports`]: Port specification parsing and validation
//! - [`nat`]: RouterOS NAT rule text generation
//! - [`error`]: Error types for port specification parsing

pub mod error;
pub mod nat;
pub mod ports;

#[cfg(test)]
mod tests;
