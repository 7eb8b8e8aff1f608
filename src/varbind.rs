//! Variable binding (VarBind) type.
//!
//! A VarBind pairs an OID with a still-encoded value.

use crate::ber::{Decoder, RawValue};
use crate::error::Result;
use crate::oid::Oid;
use crate::variable::{Variable, decode_value_bytes};

/// Variable binding as it appears on the wire, before value decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBind {
    /// The object identifier.
    pub name: Oid,
    /// The tagged value, undecoded.
    pub value: RawValue,
}

impl VarBind {
    /// Create a new VarBind.
    pub fn new(name: Oid, value: RawValue) -> Self {
        Self { name, value }
    }

    /// Decode the value and attach this binding's OID.
    pub fn to_variable(&self) -> Result<Variable> {
        decode_value_bytes(self.value.tag, self.value.content.clone())
            .map(|var| var.with_name(self.name.clone()))
    }

    /// Decode from BER: `SEQUENCE { name OBJECT IDENTIFIER, value ANY }`.
    pub fn decode(decoder: &mut Decoder) -> Result<Self> {
        let mut seq = decoder.read_sequence()?;
        let name = seq.read_oid()?;
        let value = seq.read_tlv()?;
        Ok(VarBind { name, value })
    }
}

/// Decode a list of VarBinds.
pub fn decode_varbind_list(decoder: &mut Decoder) -> Result<Vec<VarBind>> {
    let mut seq = decoder.read_sequence()?;
    let mut varbinds = Vec::new();

    while !seq.is_empty() {
        varbinds.push(VarBind::decode(&mut seq)?);
    }

    Ok(varbinds)
}
