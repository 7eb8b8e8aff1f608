//! BER (Basic Encoding Rules) decoding for SNMP.
//!
//! This module provides decoding of BER-encoded data as used in SNMP.
//! The implementation follows X.690 with permissive parsing aligned with net-snmp behavior.

mod decode;
mod integer;
mod length;
pub mod tag;

pub use decode::*;
pub use integer::*;
pub use length::*;
pub use tag::Tag;
