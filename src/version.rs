//! Interface version tag codec
//!
//! An interface revision is a (major, minor) pair of 16-bit integers. On the
//! wire it is 4 bytes: major first, minor second, each little-endian. The
//! text form is "major.minor" in plain decimal.

use crate::error::{Result, UuidError};
use bytes::{Buf, BufMut};
use std::fmt;
use std::str::FromStr;

/// Interface version tag (major, minor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct InterfaceVersion {
    pub major: u16,
    pub minor: u16,
}

impl InterfaceVersion {
    /// Size of the wire form in bytes
    pub const SIZE: usize = 4;

    /// Create a new version tag
    pub fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Decode from the 4-byte wire form
    pub fn from_bytes(bytes: &[u8; 4]) -> Self {
        Self {
            major: u16::from_le_bytes([bytes[0], bytes[1]]),
            minor: u16::from_le_bytes([bytes[2], bytes[3]]),
        }
    }

    /// Encode to the 4-byte wire form
    pub fn to_bytes(&self) -> [u8; 4] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..2].copy_from_slice(&self.major.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.minor.to_le_bytes());
        bytes
    }

    /// Decode from a buffer
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self> {
        if buf.remaining() < Self::SIZE {
            return Err(UuidError::BufferUnderflow {
                needed: Self::SIZE,
                have: buf.remaining(),
            });
        }
        Ok(Self {
            major: buf.get_u16_le(),
            minor: buf.get_u16_le(),
        })
    }

    /// Encode to a buffer
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16_le(self.major);
        buf.put_u16_le(self.minor);
    }
}

impl FromStr for InterfaceVersion {
    type Err = UuidError;

    /// Parse "major.minor". Exactly one separator; both parts must be
    /// plain decimal and fit in 16 bits.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || UuidError::MalformedVersion(s.to_string());
        let (major, minor) = s.split_once('.').ok_or_else(bad)?;
        if minor.contains('.') {
            return Err(bad());
        }
        Ok(Self {
            major: parse_part(major).ok_or_else(bad)?,
            minor: parse_part(minor).ok_or_else(bad)?,
        })
    }
}

impl fmt::Display for InterfaceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

fn parse_part(part: &str) -> Option<u16> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn test_wire_form() {
        let version: InterfaceVersion = "3.0".parse().unwrap();
        assert_eq!(version, InterfaceVersion::new(3, 0));
        assert_eq!(version.to_bytes(), [0x03, 0x00, 0x00, 0x00]);

        let version = InterfaceVersion::new(0x0102, 0x0304);
        assert_eq!(version.to_bytes(), [0x02, 0x01, 0x04, 0x03]);
        assert_eq!(InterfaceVersion::from_bytes(&version.to_bytes()), version);
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for version in [
            InterfaceVersion::new(1, 0),
            InterfaceVersion::new(3, 141),
            InterfaceVersion::new(65535, 65535),
        ] {
            let reparsed: InterfaceVersion = version.to_string().parse().unwrap();
            assert_eq!(reparsed, version);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "", "3", "3.", ".0", "3.0.1", "3.a", "a.0", "-1.0", " 3.0", "3 .0", "70000.0",
            "0.65536",
        ] {
            assert!(bad.parse::<InterfaceVersion>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_encode_decode() {
        let version = InterfaceVersion::new(5, 2);
        let mut buf = BytesMut::new();
        version.encode(&mut buf);
        assert_eq!(buf.len(), InterfaceVersion::SIZE);

        let decoded = InterfaceVersion::decode(&mut buf.freeze()).unwrap();
        assert_eq!(decoded, version);

        let mut short = bytes::Bytes::from_static(&[0u8; 3]);
        assert!(InterfaceVersion::decode(&mut short).is_err());
    }
}
