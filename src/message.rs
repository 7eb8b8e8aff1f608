//! Community-based SNMP message envelope (v1/v2c).
//!
//! `SEQUENCE { version INTEGER, community OCTET STRING, data PDU }`
//!
//! The PDU is kept undecoded; call [`Message::pdu`] to open it.

use crate::ber::{Decoder, RawValue};
use crate::error::{DecodeErrorKind, Error, Result};
use crate::pdu::Pdu;
use crate::version::Version;
use bytes::Bytes;

/// Community-based SNMP message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// SNMP version (V1 or V2c)
    pub version: Version,
    /// Community string
    pub community: Bytes,
    /// The PDU, not yet decoded
    pub data: RawValue,
}

impl Message {
    /// Decode from BER.
    ///
    /// SNMPv3 messages are rejected with `UnknownVersion(3)`.
    pub fn decode(data: Bytes) -> Result<Self> {
        let mut decoder = Decoder::new(data);
        let mut seq = decoder.read_sequence()?;

        let version_offset = seq.offset();
        let raw_version = seq.read_integer()?;
        let version = match Version::from_i32(raw_version) {
            Some(v) => v,
            None => {
                let kind = DecodeErrorKind::UnknownVersion(raw_version);
                tracing::debug!(target: "snmp_ber::message", { snmp.offset = %version_offset, kind = %kind }, "unsupported version");
                return Err(Error::decode(version_offset, kind));
            }
        };

        let community = seq.read_octet_string()?;
        let data = seq.read_tlv()?;

        if let Err(err) = seq.finish() {
            tracing::warn!(target: "snmp_ber::message", { error = %err }, "ignoring trailing bytes after PDU");
        }

        tracing::trace!(target: "snmp_ber::message", { snmp.version = %version, snmp.pdu_tag = data.tag, snmp.pdu_len = data.content.len() }, "decoded message envelope");

        Ok(Message {
            version,
            community,
            data,
        })
    }

    /// Decode the enclosed PDU.
    pub fn pdu(&self) -> Result<Pdu> {
        Pdu::from_raw(&self.data)
    }
}
