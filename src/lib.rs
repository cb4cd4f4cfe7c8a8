//! DCE RPC interface identifier (UUID + version) codec
//!
//! An RPC interface is identified on the wire by 20 bytes: a 16-byte UUID in
//! the DCE "variant 2" mixed-endian layout followed by a 4-byte version tag.
//! This crate implements that wire format, the canonical 36-character string
//! form, and the lenient text scanning used when identifiers are pulled out
//! of operator-supplied strings.
//!
//! # Examples
//!
//! Canonical string form:
//!
//! ```
//! use dcerpc_uuid::Uuid;
//!
//! let uuid = Uuid::parse("8a885d04-1ceb-11c9-9fe8-08002b104860").unwrap();
//! assert_eq!(uuid.to_string(), "8A885D04-1CEB-11C9-9FE8-08002B104860");
//! assert_eq!(Uuid::from_bytes(&uuid.to_bytes()), uuid);
//! ```
//!
//! Interface identifier wire form:
//!
//! ```
//! use dcerpc_uuid::{InterfaceId, InterfaceVersion, Uuid};
//!
//! let id = InterfaceId::new(
//!     Uuid::parse("e1af8308-5d1f-11c9-91a4-08002b14a0fa").unwrap(),
//!     InterfaceVersion::new(3, 0),
//! );
//! let bytes = id.to_bytes();
//! assert_eq!(bytes.len(), 20);
//! assert_eq!(&bytes[16..], &[0x03, 0x00, 0x00, 0x00]);
//! ```
//!
//! Scanning free text, with "1.0" as the default version:
//!
//! ```
//! use dcerpc_uuid::find_identifier;
//!
//! let found = find_identifier("10000000-2000-3000-4000-500000000000").unwrap();
//! assert_eq!(found.1, "1.0");
//! ```

pub mod error;
pub mod interface;
pub mod uuid;
pub mod version;

pub use error::{Result, UuidError};
pub use interface::{find_identifier, format_identifier, tuple_to_bytes, InterfaceId};
pub use uuid::{string_to_bytes, Uuid, UUID_STRING_LEN};
pub use version::InterfaceVersion;
