//! Minimal BER encoding for building test inputs.

use snmp_ber::{Oid, Tag};

/// Encode a definite length (short or long form).
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }
    let bytes: Vec<u8> = len
        .to_be_bytes()
        .into_iter()
        .skip_while(|&b| b == 0)
        .collect();
    let mut out = vec![0x80 | bytes.len() as u8];
    out.extend(bytes);
    out
}

/// Wrap content in a TLV.
pub fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    out.extend(encode_length(content.len()));
    out.extend_from_slice(content);
    out
}

/// Minimal two's complement content octets for a signed value.
pub fn signed_content(value: i64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let mut start = 0;
    while start < 7 {
        let redundant = (bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
            || (bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0);
        if !redundant {
            break;
        }
        start += 1;
    }
    bytes[start..].to_vec()
}

/// Minimal content octets for an unsigned value, with a 0x00 pad when the
/// high bit would otherwise be set.
pub fn unsigned_content(value: u64) -> Vec<u8> {
    let mut out: Vec<u8> = value
        .to_be_bytes()
        .into_iter()
        .skip_while(|&b| b == 0)
        .collect();
    if out.is_empty() || out[0] & 0x80 != 0 {
        out.insert(0, 0x00);
    }
    out
}

/// Base-128 content octets for an OID with at least two arcs.
pub fn oid_content(arcs: &[u32]) -> Vec<u8> {
    assert!(arcs.len() >= 2, "BER OIDs need at least two arcs");
    let mut out = Vec::new();
    push_subidentifier(&mut out, u64::from(arcs[0]) * 40 + u64::from(arcs[1]));
    for &arc in &arcs[2..] {
        push_subidentifier(&mut out, u64::from(arc));
    }
    out
}

fn push_subidentifier(out: &mut Vec<u8>, value: u64) {
    let mut groups = vec![(value & 0x7F) as u8];
    let mut rest = value >> 7;
    while rest > 0 {
        groups.push(0x80 | (rest & 0x7F) as u8);
        rest >>= 7;
    }
    out.extend(groups.into_iter().rev());
}

/// `SEQUENCE { name, value }`.
pub fn varbind(name: &Oid, tag: u8, content: &[u8]) -> Vec<u8> {
    let mut body = tlv(Tag::ObjectIdentifier.as_u8(), &oid_content(name.arcs()));
    body.extend(tlv(tag, content));
    tlv(Tag::Sequence.as_u8(), &body)
}

/// A request/response PDU with the given VarBind entries.
pub fn pdu(
    pdu_tag: u8,
    request_id: i32,
    error_status: i32,
    error_index: i32,
    varbinds: &[Vec<u8>],
) -> Vec<u8> {
    let mut body = tlv(Tag::Integer.as_u8(), &signed_content(request_id.into()));
    body.extend(tlv(Tag::Integer.as_u8(), &signed_content(error_status.into())));
    body.extend(tlv(Tag::Integer.as_u8(), &signed_content(error_index.into())));
    body.extend(tlv(Tag::Sequence.as_u8(), &varbinds.concat()));
    tlv(pdu_tag, &body)
}

/// A community message wrapping an encoded PDU.
pub fn message(version: i32, community: &[u8], pdu: &[u8]) -> Vec<u8> {
    let mut body = tlv(Tag::Integer.as_u8(), &signed_content(version.into()));
    body.extend(tlv(Tag::OctetString.as_u8(), community));
    body.extend_from_slice(pdu);
    tlv(Tag::Sequence.as_u8(), &body)
}

