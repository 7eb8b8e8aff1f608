//! BER tag definitions for SNMP.
//!
//! Tag encoding follows X.690 Section 8.1.2:
//! - Bits 7-6: Class (00=Universal, 01=Application, 10=Context-specific, 11=Private)
//! - Bit 5: Primitive (0) or Constructed (1)
//! - Bits 4-0: Tag number (0-30, or 31 for long form)

/// Tag class bits (bits 7-6)
pub mod class {
    pub const UNIVERSAL: u8 = 0x00;
    pub const APPLICATION: u8 = 0x40;
    pub const CONTEXT_SPECIFIC: u8 = 0x80;
    pub const PRIVATE: u8 = 0xC0;
}

/// Constructed bit (bit 5)
pub const CONSTRUCTED: u8 = 0x20;

/// Semantic type of a one-byte BER/SNMP tag.
///
/// Discriminants are the wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    Integer = 0x02,
    BitString = 0x03,
    OctetString = 0x04,
    Null = 0x05,
    ObjectIdentifier = 0x06,
    Sequence = 0x30,
    Counter32 = 0x41,
    /// Also Unsigned32
    Gauge32 = 0x42,
    TimeTicks = 0x43,
    Opaque = 0x44,
    NsapAddress = 0x45,
    Counter64 = 0x46,
    Uinteger32 = 0x47,
    NoSuchObject = 0x80,
    NoSuchInstance = 0x81,
    GetRequest = 0xA0,
    GetNextRequest = 0xA1,
    GetResponse = 0xA2,
    SetRequest = 0xA3,
    Trap = 0xA4,
    GetBulkRequest = 0xA5,
}

impl Tag {
    /// Look up the tag for a wire byte.
    pub const fn from_u8(byte: u8) -> Option<Self> {
        Some(match byte {
            0x02 => Self::Integer,
            0x03 => Self::BitString,
            0x04 => Self::OctetString,
            0x05 => Self::Null,
            0x06 => Self::ObjectIdentifier,
            0x30 => Self::Sequence,
            0x41 => Self::Counter32,
            0x42 => Self::Gauge32,
            0x43 => Self::TimeTicks,
            0x44 => Self::Opaque,
            0x45 => Self::NsapAddress,
            0x46 => Self::Counter64,
            0x47 => Self::Uinteger32,
            0x80 => Self::NoSuchObject,
            0x81 => Self::NoSuchInstance,
            0xA0 => Self::GetRequest,
            0xA1 => Self::GetNextRequest,
            0xA2 => Self::GetResponse,
            0xA3 => Self::SetRequest,
            0xA4 => Self::Trap,
            0xA5 => Self::GetBulkRequest,
            _ => return None,
        })
    }

    /// The wire byte.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether this is one of the PDU envelope tags.
    pub const fn is_pdu(self) -> bool {
        matches!(
            self,
            Self::GetRequest
                | Self::GetNextRequest
                | Self::GetResponse
                | Self::SetRequest
                | Self::Trap
                | Self::GetBulkRequest
        )
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> u8 {
        tag.as_u8()
    }
}

impl TryFrom<u8> for Tag {
    type Error = crate::error::Error;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_u8(byte).ok_or(crate::error::Error::UnsupportedTag { tag: byte })
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::BitString => "BIT STRING",
            Self::OctetString => "OCTET STRING",
            Self::Null => "NULL",
            Self::ObjectIdentifier => "OBJECT IDENTIFIER",
            Self::Sequence => "SEQUENCE",
            Self::Counter32 => "Counter32",
            Self::Gauge32 => "Gauge32",
            Self::TimeTicks => "TimeTicks",
            Self::Opaque => "Opaque",
            Self::NsapAddress => "NsapAddress",
            Self::Counter64 => "Counter64",
            Self::Uinteger32 => "UInteger32",
            Self::NoSuchObject => "noSuchObject",
            Self::NoSuchInstance => "noSuchInstance",
            Self::GetRequest => "GetRequest",
            Self::GetNextRequest => "GetNextRequest",
            Self::GetResponse => "GetResponse",
            Self::SetRequest => "SetRequest",
            Self::Trap => "Trap",
            Self::GetBulkRequest => "GetBulkRequest",
        };
        f.write_str(name)
    }
}

/// Check if a tag indicates a constructed type
#[inline]
pub const fn is_constructed(tag: u8) -> bool {
    tag & CONSTRUCTED != 0
}

/// Get the class of a tag
#[inline]
pub const fn tag_class(tag: u8) -> u8 {
    tag & 0xC0
}

/// Get the tag number (bits 4-0)
#[inline]
pub const fn tag_number(tag: u8) -> u8 {
    tag & 0x1F
}
