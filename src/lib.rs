//! # snmp-ber
//!
//! BER value decoding for SNMP response packets.
//!
//! ## Features
//!
//! - Tag-driven decoding of INTEGER, Counter32/64, Gauge32, TimeTicks,
//!   OCTET STRING and OBJECT IDENTIFIER values
//! - Zero-copy TLV reader over [`bytes::Bytes`]
//! - SNMPv1/v2c message and PDU envelope decoding
//! - Per-variable failures that never affect sibling VarBinds
//!
//! ## Quick Start
//!
//! ```rust
//! use snmp_ber::{Tag, Value, decode_value, oid};
//!
//! // TimeTicks 123456
//! let var = decode_value(0x43, &[0x01, 0xE2, 0x40])?;
//! assert_eq!(var.value_type, Tag::TimeTicks);
//! assert_eq!(var.value, Value::Integer(123_456));
//!
//! // OBJECT IDENTIFIER 1.3.6.1.2.1
//! let var = decode_value(0x06, &[0x2B, 0x06, 0x01, 0x02, 0x01])?;
//! assert_eq!(var.value.as_oid(), Some(&oid!(1, 3, 6, 1, 2, 1)));
//! # Ok::<(), snmp_ber::Error>(())
//! ```
//!
//! ## Decoding a packet
//!
//! ```rust
//! use bytes::Bytes;
//! use snmp_ber::{Message, Version};
//!
//! let packet = Bytes::from_static(&[
//!     0x30, 0x29, 0x02, 0x01, 0x01, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c',
//!     0xA2, 0x1C, 0x02, 0x01, 0x01, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00,
//!     0x30, 0x11, 0x30, 0x0F, 0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x03, 0x00,
//!     0x43, 0x03, 0x01, 0xE2, 0x40,
//! ]);
//!
//! let msg = Message::decode(packet)?;
//! assert_eq!(msg.version, Version::V2c);
//!
//! for result in msg.pdu()?.decode_variables() {
//!     match result {
//!         Ok(var) => println!("{var}"),
//!         Err(e) => eprintln!("skipped: {e}"),
//!     }
//! }
//! # Ok::<(), snmp_ber::Error>(())
//! ```

pub mod ber;
pub mod error;
pub mod message;
pub mod oid;
pub mod pdu;
pub mod prelude;
pub mod value;
pub mod varbind;
pub mod variable;
pub mod version;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use ber::{Decoder, RawValue, Tag, parse_uint16};
pub use error::{DecodeErrorKind, Error, ErrorStatus, OidErrorKind, Result};
pub use message::Message;
pub use oid::Oid;
pub use pdu::{Pdu, PduResponse};
pub use value::Value;
pub use varbind::{VarBind, decode_varbind_list};
pub use variable::{Variable, decode_value, decode_value_bytes};
pub use version::Version;
