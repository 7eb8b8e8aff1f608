//! Decoded SNMP value payloads.
//!
//! The shape of a [`Value`] is fixed by the tag it was decoded from; see
//! [`decode_value`](crate::variable::decode_value) for the table.

use crate::oid::Oid;
use bytes::Bytes;
use std::borrow::Cow;

/// Decoded value of a single variable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Value {
    /// INTEGER, Counter32, Gauge32 and TimeTicks (signed rule).
    Integer(i64),

    /// Counter64 (unsigned rule).
    Unsigned(u64),

    /// OCTET STRING.
    ///
    /// Kept as the raw content octets: no UTF-8 validation happens during decode.
    /// Use [`Value::as_str`] or [`Value::to_string_lossy`] to read it as text.
    OctetString(Bytes),

    /// OBJECT IDENTIFIER.
    ObjectIdentifier(Oid),

    /// Undecoded content passed through for the caller (GetResponse payloads).
    Raw(Bytes),

    /// No value (structural tags such as SEQUENCE).
    #[default]
    Absent,
}

impl Value {
    /// Try to get as i64.
    ///
    /// ```
    /// use snmp_ber::Value;
    ///
    /// assert_eq!(Value::Integer(-5).as_i64(), Some(-5));
    /// assert_eq!(Value::Unsigned(5).as_i64(), None);
    /// ```
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u64.
    ///
    /// Returns `Some` for [`Value::Unsigned`] and for non-negative [`Value::Integer`].
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Unsigned(v) => Some(*v),
            Value::Integer(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Read an integer value as an unsigned 32-bit quantity.
    ///
    /// Counter32, Gauge32 and TimeTicks are decoded with the signed rule, so an agent
    /// that omits the 0x00 pad byte produces a negative [`Value::Integer`]. This
    /// reinterprets the low 32 bits, recovering the unsigned reading for values that
    /// came from at most 4 content bytes.
    ///
    /// ```
    /// use snmp_ber::Value;
    ///
    /// assert_eq!(Value::Integer(4_294_967_295).as_u32(), Some(u32::MAX));
    /// assert_eq!(Value::Integer(-1).as_u32(), Some(u32::MAX));
    /// assert_eq!(Value::Integer(1 << 40).as_u32(), None);
    /// ```
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Integer(v) if (i64::from(i32::MIN)..=i64::from(u32::MAX)).contains(v) => {
                Some(*v as u32)
            }
            Value::Unsigned(v) => u32::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get the OCTET STRING content as UTF-8 text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::OctetString(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// OCTET STRING content as text, replacing invalid UTF-8 sequences.
    pub fn to_string_lossy(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::OctetString(bytes) => Some(String::from_utf8_lossy(bytes)),
            _ => None,
        }
    }

    /// Raw byte content for [`Value::OctetString`] and [`Value::Raw`].
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::OctetString(bytes) | Value::Raw(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Try to get as an OID.
    pub fn as_oid(&self) -> Option<&Oid> {
        match self {
            Value::ObjectIdentifier(oid) => Some(oid),
            _ => None,
        }
    }

    /// Whether this is [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Unsigned(v) => write!(f, "{}", v),
            Value::OctetString(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            Value::ObjectIdentifier(oid) => write!(f, "{}", oid),
            Value::Raw(bytes) => {
                for (i, b) in bytes.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:02X}", b)?;
                }
                Ok(())
            }
            Value::Absent => write!(f, "(absent)"),
        }
    }
}
