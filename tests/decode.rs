//! End-to-end decoding of values, PDUs and messages through the public API.

mod common;

use bytes::Bytes;
use common::*;
use snmp_ber::{
    DecodeErrorKind, Error, ErrorStatus, Message, OidErrorKind, PduResponse, Tag, Value, Version,
    decode_value, oid, parse_uint16,
};

// =============================================================================
// Value dispatcher
// =============================================================================

#[test]
fn counter64_nine_bytes_is_two_to_the_56() {
    let var = decode_value(
        Tag::Counter64.as_u8(),
        &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    )
    .unwrap();
    assert_eq!(var.value, Value::Unsigned(72_057_594_037_927_936));
    assert_eq!(var.size, 9);
}

#[test]
fn counter64_max_with_pad() {
    let content = unsigned_content(u64::MAX);
    assert_eq!(content.len(), 9);
    let var = decode_value(0x46, &content).unwrap();
    assert_eq!(var.value.as_u64(), Some(u64::MAX));
}

#[test]
fn object_identifier_mib2() {
    let var = decode_value(0x06, &[0x2B, 0x06, 0x01, 0x02, 0x01]).unwrap();
    assert_eq!(var.value.as_oid().map(|o| o.arcs()), Some(&[1, 3, 6, 1, 2, 1][..]));
}

#[test]
fn object_identifier_multibyte_arcs() {
    let name = net_snmp_enterprise();
    let var = decode_value(0x06, &oid_content(name.arcs())).unwrap();
    assert_eq!(var.value, Value::ObjectIdentifier(name));
}

#[test]
fn exceptions_are_never_values() {
    for content in [&[][..], &[0x00][..], &[0x05, 0x00][..]] {
        assert_eq!(decode_value(0x80, content).unwrap_err(), Error::NoSuchObject);
        assert_eq!(decode_value(0x81, content).unwrap_err(), Error::NoSuchInstance);
    }
}

#[test]
fn unknown_tag_names_the_byte() {
    let err = decode_value(0xFF, &[0x01, 0x02]).unwrap_err();
    assert_eq!(err, Error::UnsupportedTag { tag: 0xFF });
    assert!(err.to_string().contains("0xff"), "{err}");
}

#[test]
fn uint16_field() {
    assert_eq!(parse_uint16(&[0x01, 0x02]).unwrap(), 258);
    assert_eq!(parse_uint16(&[0xFF, 0xFF, 0x00]).unwrap(), u16::MAX);
    assert!(matches!(
        parse_uint16(&[0x01]),
        Err(Error::Decode {
            kind: DecodeErrorKind::InsufficientData { .. },
            ..
        })
    ));
}

#[test]
fn malformed_oid_is_an_error() {
    assert_eq!(
        decode_value(0x06, &[0x2B, 0xFF]).unwrap_err(),
        Error::MalformedOid {
            kind: OidErrorKind::Truncated
        }
    );
}

// =============================================================================
// Envelopes
// =============================================================================

#[test]
fn captured_uptime_response() {
    init_tracing();
    let msg = Message::decode(Bytes::from_static(CAPTURED_UPTIME_RESPONSE)).unwrap();
    assert_eq!(msg.version, Version::V2c);
    assert_eq!(&msg.community[..], COMMUNITY);

    let pdu = msg.pdu().unwrap();
    assert_eq!(pdu.pdu_type, Tag::GetResponse);
    assert_eq!(pdu.request_id, 0x4B1D);
    assert_eq!(pdu.status(), ErrorStatus::NoError);

    let vars = PduResponse::try_from(pdu).unwrap().variables;
    assert_eq!(vars.len(), 1);
    assert_eq!(vars[0].name, sys_uptime());
    assert_eq!(vars[0].value_type, Tag::TimeTicks);
    assert_eq!(vars[0].value, Value::Integer(123_456));
    assert_eq!(vars[0].to_string(), "1.3.6.1.2.1.1.3.0 = TimeTicks: 123456");
}

#[test]
fn mixed_response_isolates_failures() {
    init_tracing();
    let packet = message(
        1,
        COMMUNITY,
        &pdu(
            0xA2,
            77,
            0,
            0,
            &[
                varbind(&sys_descr(), 0x04, b"Linux router 6.1"),
                varbind(&nonexistent_oid(), 0x81, &[]),
                varbind(&if_in_octets(1), 0x41, &[0x00, 0x80, 0x00, 0x00, 0x00]),
                varbind(&if_hc_in_octets(1), 0x46, &unsigned_content(1 << 40)),
                varbind(&sys_name(), 0x05, &[]),
                varbind(&sys_object_id(), 0x06, &oid_content(net_snmp_enterprise().arcs())),
            ],
        ),
    );

    let pdu = Message::decode(Bytes::from(packet)).unwrap().pdu().unwrap();
    assert_eq!(pdu.request_id, 77);

    let results = pdu.decode_variables();
    assert_eq!(results.len(), 6);

    let descr = results[0].as_ref().unwrap();
    assert_eq!(descr.name, sys_descr());
    assert_eq!(descr.value.as_str(), Some("Linux router 6.1"));

    assert_eq!(results[1].as_ref().unwrap_err(), &Error::NoSuchInstance);

    let octets = results[2].as_ref().unwrap();
    assert_eq!(octets.value, Value::Integer(0x8000_0000));
    assert_eq!(octets.value.as_u32(), Some(0x8000_0000));

    let hc = results[3].as_ref().unwrap();
    assert_eq!(hc.value, Value::Unsigned(1 << 40));

    assert_eq!(
        results[4].as_ref().unwrap_err(),
        &Error::UnsupportedTag { tag: 0x05 }
    );

    let object_id = results[5].as_ref().unwrap();
    assert_eq!(object_id.value, Value::ObjectIdentifier(net_snmp_enterprise()));

    let lossy = PduResponse::from_pdu_lossy(pdu);
    assert_eq!(lossy.variables.len(), 4);
    assert!(lossy.variables.iter().all(|v| v.is_consistent()));
}

#[test]
fn error_status_response() {
    let packet = message(
        0,
        COMMUNITY,
        &pdu(0xA2, 3, 2, 1, &[varbind(&if_speed(9), 0x05, &[])]),
    );
    let msg = Message::decode(Bytes::from(packet)).unwrap();
    assert_eq!(msg.version, Version::V1);

    let pdu = msg.pdu().unwrap();
    assert!(pdu.is_error());
    assert_eq!(pdu.status(), ErrorStatus::NoSuchName);
    assert_eq!(pdu.error_index, 1);
}

#[test]
fn long_form_lengths() {
    let descr = vec![b'x'; 300];
    let packet = message(
        1,
        COMMUNITY,
        &pdu(0xA2, 1, 0, 0, &[varbind(&sys_descr(), 0x04, &descr)]),
    );
    // Outer SEQUENCE length needs two octets
    assert_eq!(packet[1], 0x82);

    let pdu = Message::decode(Bytes::from(packet)).unwrap().pdu().unwrap();
    let var = pdu.varbinds[0].to_variable().unwrap();
    assert_eq!(var.size, 300);
    assert_eq!(var.value.as_bytes(), Some(&descr[..]));
}

#[test]
fn v3_and_unknown_versions_rejected() {
    for version in [3, 2, -1] {
        let packet = message(version, COMMUNITY, &pdu(0xA2, 1, 0, 0, &[]));
        assert_eq!(
            Message::decode(Bytes::from(packet)).unwrap_err(),
            Error::Decode {
                offset: 0,
                kind: DecodeErrorKind::UnknownVersion(version)
            }
        );
    }
}

#[test]
fn trap_pdu_rejected() {
    let packet = message(0, COMMUNITY, &pdu(0xA4, 1, 0, 0, &[]));
    let msg = Message::decode(Bytes::from(packet)).unwrap();
    assert!(matches!(
        msg.pdu(),
        Err(Error::Decode {
            kind: DecodeErrorKind::UnknownPduType(0xA4),
            ..
        })
    ));
}

#[test]
fn indefinite_length_rejected() {
    let err = Message::decode(Bytes::from_static(&[0x30, 0x80, 0x02, 0x01, 0x01, 0x00, 0x00]))
        .unwrap_err();
    assert_eq!(
        err,
        Error::Decode {
            offset: 1,
            kind: DecodeErrorKind::IndefiniteLength
        }
    );
}

#[test]
fn test_encoder_helpers() {
    assert_eq!(signed_content(0), vec![0x00]);
    assert_eq!(signed_content(128), vec![0x00, 0x80]);
    assert_eq!(signed_content(-129), vec![0xFF, 0x7F]);
    assert_eq!(unsigned_content(128), vec![0x00, 0x80]);
    assert_eq!(
        oid_content(&[1, 3, 6, 1, 4, 1, 2680]),
        vec![0x2B, 0x06, 0x01, 0x04, 0x01, 0x94, 0x78]
    );
    assert_eq!(encode_length(200), vec![0x81, 0xC8]);
    assert_eq!(oid!(1, 3).arcs(), &[1, 3]);
}
