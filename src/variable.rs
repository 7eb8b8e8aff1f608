//! Decoded variables and the tag dispatcher.
//!
//! [`decode_value`] is the boundary with the surrounding protocol engine: it takes a
//! tag byte and the content octets of one TLV and produces a typed [`Variable`].

use crate::ber::{Tag, parse_int, parse_uint64};
use crate::error::{Error, Result};
use crate::oid::Oid;
use crate::value::Value;
use bytes::Bytes;

/// A decoded variable.
///
/// `size` is always the length of the content octets the value came from, and the
/// shape of `value` is determined by `value_type`:
///
/// | `value_type` | `value` |
/// |---|---|
/// | Integer, Counter32, Gauge32, TimeTicks | [`Value::Integer`] |
/// | Counter64 | [`Value::Unsigned`] |
/// | OctetString | [`Value::OctetString`] |
/// | ObjectIdentifier | [`Value::ObjectIdentifier`] |
/// | GetResponse | [`Value::Raw`] |
/// | Sequence | [`Value::Absent`] |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// OID this value is bound to (empty until the caller attaches it).
    pub name: Oid,
    /// Tag the value was decoded from.
    pub value_type: Tag,
    /// Byte length of the content octets.
    pub size: usize,
    /// Decoded value.
    pub value: Value,
}

impl Variable {
    /// Attach the OID this value was bound to.
    pub fn with_name(mut self, name: Oid) -> Self {
        self.name = name;
        self
    }

    /// Check that `value` has the shape `value_type` calls for.
    pub fn is_consistent(&self) -> bool {
        matches!(
            (self.value_type, &self.value),
            (
                Tag::Integer | Tag::Counter32 | Tag::Gauge32 | Tag::TimeTicks,
                Value::Integer(_)
            ) | (Tag::Counter64, Value::Unsigned(_))
                | (Tag::OctetString, Value::OctetString(_))
                | (Tag::ObjectIdentifier, Value::ObjectIdentifier(_))
                | (Tag::GetResponse, Value::Raw(_))
                | (Tag::Sequence, Value::Absent)
        )
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}: {}", self.name, self.value_type, self.value)
    }
}

/// Decode the content octets of one TLV according to its tag.
///
/// Copies `content`; use [`decode_value_bytes`] when the content is already in a
/// [`Bytes`] buffer.
///
/// # Examples
///
/// ```
/// use snmp_ber::{Tag, Value, decode_value};
///
/// let var = decode_value(0x02, &[0xFF, 0x7F]).unwrap();
/// assert_eq!(var.value_type, Tag::Integer);
/// assert_eq!(var.value, Value::Integer(-129));
/// assert_eq!(var.size, 2);
///
/// assert!(decode_value(0xFF, &[]).is_err());
/// ```
pub fn decode_value(tag: u8, content: &[u8]) -> Result<Variable> {
    decode_value_bytes(tag, Bytes::copy_from_slice(content))
}

/// Decode the content octets of one TLV according to its tag, without copying.
///
/// Failures:
/// - `NoSuchObject` / `NoSuchInstance` for the SNMP exception tags
/// - `MalformedInteger` for an integer-typed tag with empty content
/// - `MalformedOid` for OBJECT IDENTIFIER content that does not unpack
/// - `UnsupportedTag` for every tag outside the table on [`Variable`]
pub fn decode_value_bytes(tag: u8, content: Bytes) -> Result<Variable> {
    let size = content.len();

    let Some(value_type) = Tag::from_u8(tag) else {
        tracing::debug!(target: "snmp_ber::value", { tag = tag, size = size }, "unrecognized tag byte");
        return Err(Error::UnsupportedTag { tag });
    };

    let value = match value_type {
        Tag::Integer | Tag::Counter32 | Tag::Gauge32 | Tag::TimeTicks => {
            Value::Integer(parse_int(&content).ok_or_else(|| malformed_integer(tag))?)
        }
        Tag::Counter64 => {
            Value::Unsigned(parse_uint64(&content).ok_or_else(|| malformed_integer(tag))?)
        }
        Tag::OctetString => Value::OctetString(content),
        Tag::ObjectIdentifier => Value::ObjectIdentifier(Oid::from_ber(&content)?),
        Tag::Sequence => Value::Absent,
        Tag::GetResponse => Value::Raw(content),
        Tag::NoSuchObject => return Err(Error::NoSuchObject),
        Tag::NoSuchInstance => return Err(Error::NoSuchInstance),
        _ => {
            tracing::debug!(target: "snmp_ber::value", { tag = %value_type, size = size }, "tag not decodable");
            return Err(Error::UnsupportedTag { tag });
        }
    };

    Ok(Variable {
        name: Oid::empty(),
        value_type,
        size,
        value,
    })
}

fn malformed_integer(tag: u8) -> Error {
    tracing::debug!(target: "snmp_ber::value", { tag = tag }, "zero-length integer");
    Error::MalformedInteger { tag }
}
