//! DCE RPC UUID wire and text codec
//!
//! UUIDs travel on the wire in the DCE "variant 2" layout (C706 appendix A):
//! the first three fields are little-endian, the remainder big-endian.
//!
//! Wire layout (16 bytes):
//! ```text
//! +--------+--------+--------+--------+
//! |           time_low (LE)           |
//! +--------+--------+--------+--------+
//! |  time_mid (LE)  | time_hi_v (LE)  |
//! +--------+--------+--------+--------+
//! |  clock_seq (BE) |  node_hi (BE)   |
//! +--------+--------+--------+--------+
//! |           node_low (BE)           |
//! +--------+--------+--------+--------+
//! ```

use crate::error::{Result, UuidError};
use bytes::{Buf, BufMut, Bytes};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Canonical string form length ("XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX")
pub const UUID_STRING_LEN: usize = 36;

/// Upper bound for each generated 32-bit field.
///
/// Generated identifiers keep the high bit of every field clear, matching
/// a 31-bit-safe legacy random source. The bound is part of the contract.
const RANDOM_FIELD_MAX: u32 = (1 << 31) - 1;

/// UUID structure (128 bits) in the mixed-endian DCE wire layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Uuid {
    /// Bytes 0-3, little-endian
    pub time_low: u32,
    /// Bytes 4-5, little-endian
    pub time_mid: u16,
    /// Bytes 6-7, little-endian
    pub time_hi_and_version: u16,
    /// Bytes 8-9, big-endian
    pub clock_seq: u16,
    /// Bytes 10-11, big-endian
    pub node_hi: u16,
    /// Bytes 12-15, big-endian
    pub node_low: u32,
}

impl Uuid {
    /// Size of a UUID in bytes
    pub const SIZE: usize = 16;

    /// Nil UUID (all zeros)
    pub const NIL: Self = Self {
        time_low: 0,
        time_mid: 0,
        time_hi_and_version: 0,
        clock_seq: 0,
        node_hi: 0,
        node_low: 0,
    };

    /// Generate a random UUID from the supplied generator.
    ///
    /// Four fields are drawn uniformly from `[0, 2^31 - 1]` and packed as
    /// little-endian u32 values. The result only needs apparent uniqueness;
    /// it is not suitable for anything requiring unpredictability.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; Self::SIZE];
        for chunk in bytes.chunks_exact_mut(4) {
            let field = rng.gen_range(0..=RANDOM_FIELD_MAX);
            chunk.copy_from_slice(&field.to_le_bytes());
        }
        Self::from_bytes(&bytes)
    }

    /// Generate a random UUID from the thread-local generator
    pub fn new_random() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    /// Check if this is the nil UUID
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Decode from the 16-byte wire form
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        Self {
            time_low: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            time_mid: u16::from_le_bytes([bytes[4], bytes[5]]),
            time_hi_and_version: u16::from_le_bytes([bytes[6], bytes[7]]),
            clock_seq: u16::from_be_bytes([bytes[8], bytes[9]]),
            node_hi: u16::from_be_bytes([bytes[10], bytes[11]]),
            node_low: u32::from_be_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        }
    }

    /// Encode to the 16-byte wire form
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.time_low.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.time_mid.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.time_hi_and_version.to_le_bytes());
        bytes[8..10].copy_from_slice(&self.clock_seq.to_be_bytes());
        bytes[10..12].copy_from_slice(&self.node_hi.to_be_bytes());
        bytes[12..16].copy_from_slice(&self.node_low.to_be_bytes());
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
            time_low: buf.get_u32_le(),
            time_mid: buf.get_u16_le(),
            time_hi_and_version: buf.get_u16_le(),
            clock_seq: buf.get_u16(),
            node_hi: buf.get_u16(),
            node_low: buf.get_u32(),
        })
    }

    /// Encode to a buffer
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.time_low);
        buf.put_u16_le(self.time_mid);
        buf.put_u16_le(self.time_hi_and_version);
        buf.put_u16(self.clock_seq);
        buf.put_u16(self.node_hi);
        buf.put_u32(self.node_low);
    }

    /// Parse from canonical string format "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
    /// (case-insensitive)
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if !is_canonical_shape(trimmed.as_bytes()) {
            return Err(UuidError::MalformedUuid(s.to_string()));
        }
        let bad = || UuidError::MalformedUuid(s.to_string());
        Ok(Self {
            time_low: u32::from_str_radix(&trimmed[0..8], 16).map_err(|_| bad())?,
            time_mid: u16::from_str_radix(&trimmed[9..13], 16).map_err(|_| bad())?,
            time_hi_and_version: u16::from_str_radix(&trimmed[14..18], 16).map_err(|_| bad())?,
            clock_seq: u16::from_str_radix(&trimmed[19..23], 16).map_err(|_| bad())?,
            node_hi: u16::from_str_radix(&trimmed[24..28], 16).map_err(|_| bad())?,
            node_low: u32::from_str_radix(&trimmed[28..36], 16).map_err(|_| bad())?,
        })
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:04X}-{:04X}{:08X}",
            self.time_low,
            self.time_mid,
            self.time_hi_and_version,
            self.clock_seq,
            self.node_hi,
            self.node_low
        )
    }
}

/// Check whether `bytes` is exactly the canonical hyphenated UUID shape:
/// hex digit groups 8-4-4-4-12 with hyphens at offsets 8, 13, 18 and 23.
pub(crate) fn is_canonical_shape(bytes: &[u8]) -> bool {
    bytes.len() == UUID_STRING_LEN
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        })
}

/// Decode a UUID string to wire bytes.
///
/// Two shapes are accepted:
/// - bare hex without hyphens ("0000...0000") is decoded directly, whatever
///   its length; callers use this path for plain hex blobs
/// - the canonical hyphenated form is re-encoded through the mixed-endian
///   field layout to exactly 16 bytes
pub fn string_to_bytes(s: &str) -> Result<Bytes> {
    if !s.contains('-') {
        return Ok(Bytes::from(hex::decode(s)?));
    }
    let uuid = Uuid::parse(s)?;
    Ok(Bytes::copy_from_slice(&uuid.to_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mixed_endian_decode() {
        let bytes: [u8; 16] = [
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D,
            0x0E, 0x0F,
        ];
        let uuid = Uuid::from_bytes(&bytes);
        assert_eq!(uuid.time_low, 0x03020100);
        assert_eq!(uuid.time_mid, 0x0504);
        assert_eq!(uuid.time_hi_and_version, 0x0706);
        assert_eq!(uuid.clock_seq, 0x0809);
        assert_eq!(uuid.node_hi, 0x0A0B);
        assert_eq!(uuid.node_low, 0x0C0D0E0F);
        assert_eq!(uuid.to_string(), "03020100-0504-0706-0809-0A0B0C0D0E0F");
        assert_eq!(uuid.to_bytes(), bytes);
    }

    #[test]
    fn test_nil_display() {
        assert_eq!(
            Uuid::from_bytes(&[0u8; 16]).to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert!(Uuid::NIL.is_nil());
        assert_eq!(Uuid::default(), Uuid::NIL);
    }

    #[test]
    fn test_parse() {
        let uuid = Uuid::parse("8a885d04-1ceb-11c9-9fe8-08002b104860").unwrap();
        assert_eq!(uuid.time_low, 0x8a885d04);
        assert_eq!(uuid.time_mid, 0x1ceb);
        assert_eq!(uuid.time_hi_and_version, 0x11c9);
        assert_eq!(uuid.clock_seq, 0x9fe8);
        assert_eq!(uuid.node_hi, 0x0800);
        assert_eq!(uuid.node_low, 0x2b104860);
        assert_eq!(uuid.to_string(), "8A885D04-1CEB-11C9-9FE8-08002B104860");

        // Case-insensitive, same value
        let upper: Uuid = "8A885D04-1CEB-11C9-9FE8-08002B104860".parse().unwrap();
        assert_eq!(upper, uuid);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "8a885d04",
            "8a885d04-1ceb-11c9-9fe8-08002b10486",   // too short
            "8a885d04-1ceb-11c9-9fe8-08002b1048600", // too long
            "8a885d0-41ceb-11c9-9fe8-08002b104860",  // hyphen misplaced
            "8a885d04-1ceb-11c9-9fe8-08002g104860",  // non-hex
            "8a885d04_1ceb_11c9_9fe8_08002b104860",
        ] {
            assert!(Uuid::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let uuid = Uuid::parse("e1af8308-5d1f-11c9-91a4-08002b14a0fa").unwrap();
        let mut buf = BytesMut::new();
        uuid.encode(&mut buf);
        assert_eq!(buf.len(), Uuid::SIZE);
        assert_eq!(&buf[..], &uuid.to_bytes()[..]);

        let decoded = Uuid::decode(&mut buf.freeze()).unwrap();
        assert_eq!(decoded, uuid);
    }

    #[test]
    fn test_decode_underflow() {
        let mut short = Bytes::from_static(&[0u8; 15]);
        let err = Uuid::decode(&mut short).unwrap_err();
        assert!(matches!(
            err,
            UuidError::BufferUnderflow {
                needed: 16,
                have: 15
            }
        ));
    }

    #[test]
    fn test_string_to_bytes_hex_passthrough() {
        let decoded = string_to_bytes("0102ff").unwrap();
        assert_eq!(decoded.as_ref(), &[0x01, 0x02, 0xff]);

        // Any even length passes through, not only 16 bytes
        assert_eq!(string_to_bytes("").unwrap().len(), 0);
        assert_eq!(string_to_bytes("00112233445566").unwrap().len(), 7);

        assert!(string_to_bytes("012").is_err()); // odd length
        assert!(string_to_bytes("01zz").is_err()); // non-hex
    }

    #[test]
    fn test_string_to_bytes_canonical() {
        let uuid = Uuid::parse("10000000-2000-3000-4000-500000000000").unwrap();
        let decoded = string_to_bytes("10000000-2000-3000-4000-500000000000").unwrap();
        assert_eq!(decoded.as_ref(), &uuid.to_bytes()[..]);

        // Hyphenated input must match the exact grouping
        assert!(string_to_bytes("10000000-2000").is_err());
    }

    #[test]
    fn test_generate_fields_are_31_bit() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let uuid = Uuid::generate(&mut rng);
            let bytes = uuid.to_bytes();
            for chunk in bytes.chunks_exact(4) {
                let field = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                assert!((field as i32) >= 0, "high bit set in {field:#010x}");
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let a = Uuid::generate(&mut StdRng::seed_from_u64(42));
        let b = Uuid::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_random_differs() {
        assert_ne!(Uuid::new_random(), Uuid::new_random());
    }
}
