//! Interface identifiers: UUID plus version
//!
//! RPC bind and endpoint-resolution logic identifies an interface by the
//! 20-byte concatenation of its UUID wire form and its 4-byte version tag.
//! This module also carries the lenient text helpers used when interface
//! identifiers are pulled out of operator-supplied strings.

use crate::error::Result;
use crate::uuid::{is_canonical_shape, string_to_bytes, Uuid, UUID_STRING_LEN};
use crate::version::InterfaceVersion;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::fmt;

/// Interface identifier: UUID with version (20 bytes on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct InterfaceId {
    pub uuid: Uuid,
    pub version: InterfaceVersion,
}

impl InterfaceId {
    /// Size of the wire form in bytes
    pub const SIZE: usize = Uuid::SIZE + InterfaceVersion::SIZE;

    /// Create a new interface identifier
    pub fn new(uuid: Uuid, version: InterfaceVersion) -> Self {
        Self { uuid, version }
    }

    /// Decode from the 20-byte wire form.
    ///
    /// The length precondition is carried by the array type; callers holding
    /// a slice convert with `try_into` and handle the length mismatch there.
    pub fn from_bytes(bytes: &[u8; 20]) -> Self {
        let mut uuid = [0u8; Uuid::SIZE];
        uuid.copy_from_slice(&bytes[..Uuid::SIZE]);
        let mut version = [0u8; InterfaceVersion::SIZE];
        version.copy_from_slice(&bytes[Uuid::SIZE..]);
        Self {
            uuid: Uuid::from_bytes(&uuid),
            version: InterfaceVersion::from_bytes(&version),
        }
    }

    /// Encode to the 20-byte wire form
    pub fn to_bytes(&self) -> [u8; 20] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[..Uuid::SIZE].copy_from_slice(&self.uuid.to_bytes());
        bytes[Uuid::SIZE..].copy_from_slice(&self.version.to_bytes());
        bytes
    }

    /// Decode from a buffer
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self> {
        let uuid = Uuid::decode(buf)?;
        let version = InterfaceVersion::decode(buf)?;
        Ok(Self { uuid, version })
    }

    /// Encode to a buffer
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        self.uuid.encode(buf);
        self.version.encode(buf);
    }

    /// Canonical UUID string and "major.minor" version string
    pub fn to_string_pair(&self) -> (String, String) {
        (self.uuid.to_string(), self.version.to_string())
    }
}

impl fmt::Display for InterfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.uuid, self.version)
    }
}

/// Encode a ("uuid", "major.minor") string pair to wire bytes.
///
/// A slice that is not a two-element pair yields `Ok(None)`: call sites
/// passing the wrong arity get "nothing to encode" rather than an error.
/// Malformed component strings are errors. The UUID component goes through
/// [`string_to_bytes`], so bare hex blobs of any length are accepted there.
pub fn tuple_to_bytes(parts: &[&str]) -> Result<Option<Bytes>> {
    let &[uuid, version] = parts else {
        return Ok(None);
    };
    let version: InterfaceVersion = version.parse()?;
    let mut buf = BytesMut::new();
    buf.put_slice(&string_to_bytes(uuid)?);
    version.encode(&mut buf);
    Ok(Some(buf.freeze()))
}

/// Format a UUID string with a version tag as "<uuid> v<major>.<minor>"
pub fn format_identifier(uuid: &str, version: InterfaceVersion) -> String {
    format!("{uuid} v{version}")
}

/// Scan free text for an interface identifier.
///
/// Finds the first canonical-shaped UUID substring (case-insensitive), then
/// the first dotted decimal version pattern (up to five digits on each side)
/// anywhere after it. A " 1.0" sentinel is appended before the version scan,
/// so a UUID with no trailing version yields the default "1.0". Returns the
/// substrings as found, or `None` when no UUID-shaped substring exists.
///
/// ```
/// use dcerpc_uuid::find_identifier;
///
/// let (uuid, version) =
///     find_identifier("MGMT 10000000-2000-3000-4000-500000000000 v 3.0").unwrap();
/// assert_eq!(uuid, "10000000-2000-3000-4000-500000000000");
/// assert_eq!(version, "3.0");
/// ```
pub fn find_identifier(text: &str) -> Option<(String, String)> {
    let (start, end) = find_uuid(text.as_bytes())?;
    // The sentinel cannot disturb the UUID scan: neither ' ' nor '.' fits
    // the canonical shape, so it is enough to append it to the tail.
    let tail = format!("{} 1.0", &text[end..]);
    let (vstart, vend) = find_version(tail.as_bytes())?;
    Some((text[start..end].to_string(), tail[vstart..vend].to_string()))
}

/// Offsets of the first canonical-shaped window, if any
fn find_uuid(bytes: &[u8]) -> Option<(usize, usize)> {
    if bytes.len() < UUID_STRING_LEN {
        return None;
    }
    (0..=bytes.len() - UUID_STRING_LEN).find_map(|start| {
        let end = start + UUID_STRING_LEN;
        is_canonical_shape(&bytes[start..end]).then_some((start, end))
    })
}

/// Offsets of the first `\d{1,5}\.\d{1,5}` match, leftmost start first,
/// greedy within the bounds
fn find_version(bytes: &[u8]) -> Option<(usize, usize)> {
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let run = digit_run(&bytes[i..]);
        if bytes.get(i + run) == Some(&b'.') {
            let frac = digit_run(&bytes[i + run + 1..]);
            if frac > 0 {
                // Only the last five digits before the dot can belong to a
                // match; the fractional side takes at most five greedily.
                let start = i + run.saturating_sub(5);
                let end = i + run + 1 + frac.min(5);
                return Some((start, end));
            }
        }
        i += run;
    }
    None
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
