//! CLI utilities for snmp-ber.
//!
//! Argument parsing, hex input handling, output formatting and OID hint
//! lookup for the `snmp-decode` tool.
//!
//! This module is only available with the `cli` feature.

pub mod args;
pub mod hex;
pub mod hints;
pub mod output;
