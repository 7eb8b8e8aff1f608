//! Well-known OID name hints.
//!
//! A small hardcoded table of common OID names for display purposes. This is
//! not MIB support.

use crate::Oid;

/// Well-known scalar instances.
static WELL_KNOWN_OIDS: &[(&[u32], &str)] = &[
    // SNMPv2-MIB::system
    (&[1, 3, 6, 1, 2, 1, 1, 1, 0], "sysDescr.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 2, 0], "sysObjectID.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 3, 0], "sysUpTime.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 4, 0], "sysContact.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 5, 0], "sysName.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 6, 0], "sysLocation.0"),
    (&[1, 3, 6, 1, 2, 1, 1, 7, 0], "sysServices.0"),
    // IF-MIB::interfaces
    (&[1, 3, 6, 1, 2, 1, 2, 1, 0], "ifNumber.0"),
    // Subtree roots
    (&[1, 3, 6, 1, 2, 1, 1], "system"),
    (&[1, 3, 6, 1, 2, 1, 2], "interfaces"),
    (&[1, 3, 6, 1, 2, 1, 2, 2], "ifTable"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1], "ifEntry"),
];

/// Table columns; instances under them are shown as `column.index`.
static WELL_KNOWN_COLUMNS: &[(&[u32], &str)] = &[
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 1], "ifIndex"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 2], "ifDescr"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 3], "ifType"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 5], "ifSpeed"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 8], "ifOperStatus"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 10], "ifInOctets"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 16], "ifOutOctets"),
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 1], "ifName"),
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 6], "ifHCInOctets"),
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 10], "ifHCOutOctets"),
];

/// Look up a friendly name for an exact OID.
///
/// Returns `None` if the OID is not in the well-known table.
pub fn lookup(oid: &Oid) -> Option<&'static str> {
    let arcs = oid.arcs();
    WELL_KNOWN_OIDS
        .iter()
        .find(|(pattern, _)| *pattern == arcs)
        .map(|(_, name)| *name)
}

/// Friendly name for an OID, including instances of well-known table columns.
pub fn describe(oid: &Oid) -> Option<String> {
    if let Some(name) = lookup(oid) {
        return Some(name.to_string());
    }

    let arcs = oid.arcs();
    WELL_KNOWN_COLUMNS
        .iter()
        .find(|(column, _)| arcs.len() > column.len() && arcs.starts_with(column))
        .map(|(column, name)| {
            let index: Vec<String> = arcs[column.len()..].iter().map(u32::to_string).collect();
            format!("{}.{}", name, index.join("."))
        })
}
