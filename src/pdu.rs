//! SNMP Protocol Data Units (PDUs).
//!
//! [`Pdu`] is the envelope with raw VarBinds; [`PduResponse`] holds decoded
//! [`Variable`]s.

use crate::ber::{Decoder, RawValue, Tag};
use crate::error::{DecodeErrorKind, Error, ErrorStatus, Result};
use crate::variable::Variable;
use crate::varbind::{VarBind, decode_varbind_list};

/// Generic PDU structure for request/response operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdu {
    /// PDU type
    pub pdu_type: Tag,
    /// Request ID for correlating requests and responses
    pub request_id: i32,
    /// Error status (0 for requests, error code for responses)
    pub error_status: i32,
    /// Error index (1-based index of problematic varbind)
    pub error_index: i32,
    /// Variable bindings
    pub varbinds: Vec<VarBind>,
}

impl Pdu {
    /// Decode from BER.
    ///
    /// Accepts every PDU tag that shares the request/response layout. The SNMPv1
    /// Trap PDU has a different body and is rejected.
    pub fn decode(decoder: &mut Decoder) -> Result<Self> {
        let offset = decoder.offset();
        let raw = decoder.read_tlv()?;
        Self::decode_raw(&raw, offset)
    }

    /// Decode a PDU already split out of its enclosing message.
    pub fn from_raw(raw: &RawValue) -> Result<Self> {
        Self::decode_raw(raw, 0)
    }

    fn decode_raw(raw: &RawValue, offset: usize) -> Result<Self> {
        let pdu_type = match Tag::from_u8(raw.tag) {
            Some(t) if t.is_pdu() && t != Tag::Trap => t,
            _ => {
                let kind = DecodeErrorKind::UnknownPduType(raw.tag);
                tracing::debug!(target: "snmp_ber::pdu", { snmp.offset = %offset, kind = %kind }, "unknown PDU type");
                return Err(Error::decode(offset, kind));
            }
        };

        let mut pdu = Decoder::new(raw.content.clone());
        let request_id = pdu.read_integer()?;
        let error_status = pdu.read_integer()?;
        let error_index = pdu.read_integer()?;
        let varbinds = decode_varbind_list(&mut pdu)?;

        if let Err(err) = pdu.finish() {
            tracing::warn!(target: "snmp_ber::pdu", { snmp.request_id = request_id, error = %err }, "ignoring trailing bytes after varbind list");
        }

        Ok(Pdu {
            pdu_type,
            request_id,
            error_status,
            error_index,
            varbinds,
        })
    }

    /// Typed error status.
    pub fn status(&self) -> ErrorStatus {
        ErrorStatus::from_i32(self.error_status)
    }

    /// Check if this is an error response.
    pub fn is_error(&self) -> bool {
        self.error_status != 0
    }

    /// Decode every VarBind value independently.
    ///
    /// Results are in VarBind order; a failure in one entry does not affect the others.
    pub fn decode_variables(&self) -> Vec<Result<Variable>> {
        self.varbinds.iter().map(VarBind::to_variable).collect()
    }
}

/// PDU with decoded variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PduResponse {
    /// Request ID copied from the PDU
    pub request_id: i32,
    /// Error status copied from the PDU
    pub error_status: i32,
    /// Error index copied from the PDU
    pub error_index: i32,
    /// Decoded variables, in VarBind order
    pub variables: Vec<Variable>,
}

impl PduResponse {
    /// Build a response, skipping VarBinds whose value fails to decode.
    ///
    /// Each skipped entry is logged at debug level.
    pub fn from_pdu_lossy(pdu: Pdu) -> Self {
        let variables = pdu
            .varbinds
            .iter()
            .filter_map(|vb| match vb.to_variable() {
                Ok(var) => Some(var),
                Err(err) => {
                    tracing::debug!(target: "snmp_ber::pdu", { snmp.request_id = pdu.request_id, oid = %vb.name, error = %err }, "skipping varbind");
                    None
                }
            })
            .collect();

        Self {
            request_id: pdu.request_id,
            error_status: pdu.error_status,
            error_index: pdu.error_index,
            variables,
        }
    }

    /// Typed error status.
    pub fn status(&self) -> ErrorStatus {
        ErrorStatus::from_i32(self.error_status)
    }
}

impl TryFrom<Pdu> for PduResponse {
    type Error = Error;

    /// Decode all VarBinds, failing on the first one that does not decode.
    fn try_from(pdu: Pdu) -> Result<Self> {
        let variables = pdu
            .varbinds
            .iter()
            .map(VarBind::to_variable)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            request_id: pdu.request_id,
            error_status: pdu.error_status,
            error_index: pdu.error_index,
            variables,
        })
    }
}
