#![no_main]

use libfuzzer_sys::fuzz_target;

use snmp_ber::oid::Oid;

fuzz_target!(|data: &[u8]| {
    // BER content octets
    if let Ok(oid) = Oid::from_ber(data) {
        assert!(oid.len() >= 2);
        assert!(oid.len() <= snmp_ber::oid::MAX_OID_LEN);
    }

    // Dotted string notation (if data is valid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = Oid::parse(s);
    }
});
