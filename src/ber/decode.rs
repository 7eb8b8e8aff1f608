//! BER decoding.
//!
//! Zero-copy TLV reading using `Bytes` to avoid allocations.

use super::length::decode_length;
use super::tag::Tag;
use crate::error::{DecodeErrorKind, Error, Result};
use crate::oid::Oid;
use bytes::Bytes;

/// A tag with its undecoded content octets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue {
    /// Tag byte as seen on the wire.
    pub tag: u8,
    /// Content octets (length already stripped).
    pub content: Bytes,
}

impl RawValue {
    /// Create a new raw value.
    pub fn new(tag: u8, content: impl Into<Bytes>) -> Self {
        Self {
            tag,
            content: content.into(),
        }
    }
}

/// BER decoder that reads from a byte buffer.
pub struct Decoder {
    data: Bytes,
    offset: usize,
}

impl Decoder {
    /// Create a new decoder from bytes.
    pub fn new(data: Bytes) -> Self {
        Self { data, offset: 0 }
    }

    /// Create a decoder from a byte slice (copies the data).
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    /// Get the current offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get remaining bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Check if we've reached the end.
    pub fn is_empty(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Peek at the next tag without consuming it.
    pub fn peek_tag(&self) -> Option<u8> {
        self.data.get(self.offset).copied()
    }

    /// Read a tag byte.
    pub fn read_tag(&mut self) -> Result<u8> {
        let Some(tag) = self.peek_tag() else {
            tracing::debug!(target: "snmp_ber::ber", { snmp.offset = %self.offset, kind = %DecodeErrorKind::TruncatedData }, "truncated data: unexpected end of input");
            return Err(Error::decode(self.offset, DecodeErrorKind::TruncatedData));
        };
        self.offset += 1;
        Ok(tag)
    }

    /// Read a definite length.
    pub fn read_length(&mut self) -> Result<usize> {
        let (len, consumed) = decode_length(&self.data[self.offset..], self.offset)?;
        self.offset += consumed;
        Ok(len)
    }

    /// Read raw bytes without copying.
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes> {
        // Use saturating_add to prevent overflow from bypassing bounds check
        if self.offset.saturating_add(len) > self.data.len() {
            let kind = DecodeErrorKind::InsufficientData {
                needed: len,
                available: self.remaining(),
            };
            tracing::debug!(target: "snmp_ber::ber", { snmp.offset = %self.offset, kind = %kind }, "insufficient data");
            return Err(Error::decode(self.offset, kind));
        }
        let bytes = self.data.slice(self.offset..self.offset + len);
        self.offset += len;
        Ok(bytes)
    }

    /// Read one complete TLV, whatever its tag.
    pub fn read_tlv(&mut self) -> Result<RawValue> {
        let tag = self.read_tag()?;
        let len = self.read_length()?;
        let content = self.read_bytes(len)?;
        Ok(RawValue { tag, content })
    }

    /// Read and expect a specific tag, returning the content length.
    pub fn expect_tag(&mut self, expected: u8) -> Result<usize> {
        let tag = self.read_tag()?;
        if tag != expected {
            let kind = DecodeErrorKind::UnexpectedTag {
                expected,
                actual: tag,
            };
            tracing::debug!(target: "snmp_ber::ber", { snmp.offset = %(self.offset - 1), kind = %kind }, "unexpected tag");
            return Err(Error::decode(self.offset - 1, kind));
        }
        self.read_length()
    }

    /// Read a BER INTEGER that must fit in 32 bits (envelope fields).
    pub fn read_integer(&mut self) -> Result<i32> {
        let len = self.expect_tag(Tag::Integer.as_u8())?;
        let offset = self.offset;
        let bytes = self.read_bytes(len)?;
        if bytes.len() > 4 {
            tracing::debug!(target: "snmp_ber::ber", { snmp.offset = %offset, length = len }, "integer does not fit in 32 bits");
            return Err(Error::decode(offset, DecodeErrorKind::IntegerOverflow));
        }
        super::integer::parse_int(&bytes)
            .map(|v| v as i32)
            .ok_or_else(|| Error::decode(offset, DecodeErrorKind::ZeroLengthInteger))
    }

    /// Read an OCTET STRING.
    pub fn read_octet_string(&mut self) -> Result<Bytes> {
        let len = self.expect_tag(Tag::OctetString.as_u8())?;
        self.read_bytes(len)
    }

    /// Read an OBJECT IDENTIFIER.
    pub fn read_oid(&mut self) -> Result<Oid> {
        let len = self.expect_tag(Tag::ObjectIdentifier.as_u8())?;
        let bytes = self.read_bytes(len)?;
        Oid::from_ber(&bytes)
    }

    /// Read a SEQUENCE, returning a decoder for its contents.
    pub fn read_sequence(&mut self) -> Result<Decoder> {
        self.read_constructed(Tag::Sequence.as_u8())
    }

    /// Read a constructed type with a specific tag, returning a decoder for its contents.
    pub fn read_constructed(&mut self, expected_tag: u8) -> Result<Decoder> {
        let len = self.expect_tag(expected_tag)?;
        let content = self.read_bytes(len)?;
        Ok(Decoder::new(content))
    }

    /// Fail if anything is left unread.
    pub fn finish(&self) -> Result<()> {
        if !self.is_empty() {
            let kind = DecodeErrorKind::TrailingData {
                length: self.remaining(),
            };
            tracing::debug!(target: "snmp_ber::ber", { snmp.offset = %self.offset, kind = %kind }, "trailing data");
            return Err(Error::decode(self.offset, kind));
        }
        Ok(())
    }
}
