//! Canonical UUID validation and UUIDv7 timestamp extraction.
//!
//! This crate answers three questions about a UUID string without parsing it into a full UUID
//! type first:
//! - Is it in canonical RFC 4122 textual form? ([`is_valid_uuid`])
//! - Is it a version 7 (time-ordered) UUID? ([`is_uuid_v7`])
//! - When was it created? ([`uuid_v7_to_timestamp`])
//!
//! ## Canonical UUID form
//! - Length: 36
//! - Layout: `8-4-4-4-12` hexadecimal groups separated by `-`
//! - Hyphens at byte offsets 8, 13, 18 and 23
//! - Hex digits are case-insensitive
//! - Example: `01939c67-06f5-7faf-ae43-6b450bff06af`
//!
//! ## Call order
//! The free functions are independent and never call each other. [`is_uuid_v7`] and
//! [`uuid_v7_to_timestamp`] assume their input already passed [`is_valid_uuid`]; they do not
//! re-validate. The usual sequence is:
//!
//! ```
//! use uuidcheck::{is_uuid_v7, is_valid_uuid, uuid_v7_to_timestamp};
//!
//! let id = "01939c67-06f5-7faf-ae43-6b450bff06af";
//! if is_valid_uuid(id) && is_uuid_v7(id) {
//!     let created = uuid_v7_to_timestamp(id).unwrap();
//!     assert_eq!(created.timestamp_millis(), 1_733_495_817_973);
//! }
//! ```
//!
//! [`UuidV7`] wraps that sequence in a type that is only constructible from a valid v7 identifier,
//! and orders by creation time.

mod check;
mod v7;

// Re-export public types
pub use check::{
    is_uuid_v7, is_valid_uuid, try_is_uuid_v7, uuid_v7_to_timestamp, HYPHEN_POSITIONS, UUID_LEN,
    VERSION_INDEX,
};
pub use v7::{Uuid, UuidV7};

/// Error type for UUID checks and timestamp extraction.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UuidCheckError {
    /// The input does not have the structure the operation needs
    #[error("invalid UUID format: {0}")]
    InvalidFormat(String),
    /// The 48-bit timestamp field contains a non-hex character
    #[error("failed to parse timestamp '{field}': {source}")]
    InvalidTimestamp {
        field: String,
        #[source]
        source: std::num::ParseIntError,
    },
    /// The timestamp field cannot be represented as a point in time
    #[error("timestamp out of range: '{0}'")]
    TimestampOutOfRange(String),
    /// The input is too short to carry a version nibble
    #[error("UUID too short to carry a version nibble: {len} characters")]
    TooShort { len: usize },
    /// The version nibble is not `7`
    #[error("not a version 7 UUID: version nibble is '{0}'")]
    NotVersion7(char),
}

/// Result type for UUID checks and timestamp extraction.
pub type UuidCheckResult<T> = Result<T, UuidCheckError>;
