//! Common test fixtures and constants.

use snmp_ber::{Oid, oid};

// =============================================================================
// Standard system MIB OIDs (1.3.6.1.2.1.1.*)
// =============================================================================

pub fn sys_descr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)
}
pub fn sys_object_id() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 2, 0)
}
pub fn sys_uptime() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)
}
pub fn sys_name() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)
}

// =============================================================================
// Interface table columns
// =============================================================================

pub fn if_in_octets(index: u32) -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 10, index)
}
pub fn if_hc_in_octets(index: u32) -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 6, index)
}
pub fn if_speed(index: u32) -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 5, index)
}

/// Nonexistent OID for testing NoSuchObject/NoSuchInstance
pub fn nonexistent_oid() -> Oid {
    oid!(1, 3, 6, 1, 99, 99, 99, 0)
}

/// Net-SNMP enterprise root: 1.3.6.1.4.1.8072
pub fn net_snmp_enterprise() -> Oid {
    oid!(1, 3, 6, 1, 4, 1, 8072)
}

pub const COMMUNITY: &[u8] = b"public";

// =============================================================================
// Captured packets
// =============================================================================

/// v2c GetResponse for sysUpTime.0 as net-snmp sends it:
/// request-id 0x4B1D, `sysUpTime.0 = TimeTicks: 123456`.
pub const CAPTURED_UPTIME_RESPONSE: &[u8] = &[
    0x30, 0x2A, //
    0x02, 0x01, 0x01, //
    0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c', //
    0xA2, 0x1D, //
    0x02, 0x02, 0x4B, 0x1D, //
    0x02, 0x01, 0x00, //
    0x02, 0x01, 0x00, //
    0x30, 0x11, //
    0x30, 0x0F, 0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x03, 0x00, //
    0x43, 0x03, 0x01, 0xE2, 0x40,
];
