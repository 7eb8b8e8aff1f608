#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

use snmp_ber::ber::Decoder;
use snmp_ber::variable::decode_value;
use snmp_ber::varbind::VarBind;

fuzz_target!(|data: &[u8]| {
    // First byte picks the tag, the rest is content
    if let Some((&tag, content)) = data.split_first() {
        if let Ok(var) = decode_value(tag, content) {
            assert_eq!(var.size, content.len());
            assert!(var.is_consistent());
        }
    }

    let bytes = Bytes::copy_from_slice(data);

    // TLV reader primitives
    let mut decoder = Decoder::new(bytes.clone());
    let _ = decoder.read_tlv();

    let mut decoder = Decoder::new(bytes.clone());
    let _ = decoder.read_integer();

    let mut decoder = Decoder::new(bytes.clone());
    let _ = decoder.read_oid();

    let mut decoder = Decoder::new(bytes.clone());
    let _ = decoder.read_sequence();

    // VarBind framing plus value decode
    let mut decoder = Decoder::new(bytes);
    if let Ok(vb) = VarBind::decode(&mut decoder) {
        let _ = vb.to_variable();
    }
});
