#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

use snmp_ber::message::Message;
use snmp_ber::pdu::{Pdu, PduResponse};

fuzz_target!(|data: &[u8]| {
    let bytes = Bytes::copy_from_slice(data);

    // Full envelope, then every VarBind
    if let Ok(msg) = Message::decode(bytes.clone())
        && let Ok(pdu) = msg.pdu()
    {
        assert_eq!(pdu.decode_variables().len(), pdu.varbinds.len());
        let _ = PduResponse::from_pdu_lossy(pdu);
    }

    // Bare PDU
    let mut decoder = snmp_ber::ber::Decoder::new(bytes);
    let _ = Pdu::decode(&mut decoder);
});
