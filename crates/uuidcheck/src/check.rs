//! Format validation, version classification and timestamp extraction.
//!
//! These are plain functions over `&str`. None of them allocates beyond a 12-character scratch
//! buffer, and none of them holds on to its input.

use crate::{UuidCheckError, UuidCheckResult};
use chrono::{DateTime, Utc};
use std::num::IntErrorKind;

/// Length of a canonical UUID string (`8-4-4-4-12` plus four hyphens).
pub const UUID_LEN: usize = 36;

/// Byte offsets of the hyphens in a canonical UUID string.
pub const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Byte offset of the version nibble: the first character of `time_hi_and_version`.
pub const VERSION_INDEX: usize = 14;

/// Number of `time_mid` characters that belong to the 48-bit UUIDv7 timestamp.
const TIME_MID_TIMESTAMP_CHARS: usize = 4;

/// Returns true if `input` is a syntactically valid UUID in canonical RFC 4122 form.
///
/// A valid UUID is exactly 36 characters, with `-` at offsets 8, 13, 18 and 23 and a hex digit
/// (`0-9`, `a-f`, `A-F`) everywhere else. Any other input yields `false`; this never panics.
///
/// The version and variant bits are not inspected.
///
/// # Examples
///
/// ```
/// use uuidcheck::is_valid_uuid;
///
/// assert!(is_valid_uuid("f47ac10b-58cc-0372-8567-0e02b2c3d479"));
/// assert!(is_valid_uuid("F47AC10B-58CC-0372-8567-0E02B2C3D479"));
/// assert!(!is_valid_uuid("f47ac10b58cc037285670e02b2c3d479"));
/// assert!(!is_valid_uuid("f47ac10b-58cc-0372-8567-0e02b2c3d47z"));
/// ```
pub fn is_valid_uuid(input: &str) -> bool {
    if input.len() != UUID_LEN {
        return false;
    }

    input.bytes().enumerate().all(|(i, b)| {
        if HYPHEN_POSITIONS.contains(&i) {
            b == b'-'
        } else {
            is_hex_digit(b)
        }
    })
}

/// Returns true if the version nibble of `input` is `7`.
///
/// Only the character at [`VERSION_INDEX`] is read. The input is assumed to have passed
/// [`is_valid_uuid`] already; a 36-character string with no hyphens at all is still classified
/// by that one character.
///
/// # Panics
///
/// Panics if `input` is shorter than 15 bytes. Calling this on unvalidated input is a caller bug;
/// use [`try_is_uuid_v7`] where the length is not already known.
pub fn is_uuid_v7(input: &str) -> bool {
    input.as_bytes()[VERSION_INDEX] == b'7'
}

/// Like [`is_uuid_v7`], but reports short input as an error instead of panicking.
///
/// # Errors
///
/// Returns [`UuidCheckError::TooShort`] if `input` has no character at [`VERSION_INDEX`].
pub fn try_is_uuid_v7(input: &str) -> UuidCheckResult<bool> {
    match input.as_bytes().get(VERSION_INDEX) {
        Some(&b) => Ok(b == b'7'),
        None => Err(UuidCheckError::TooShort { len: input.len() }),
    }
}

/// Extracts the creation time embedded in a UUIDv7, in UTC.
///
/// The first group (`time_low`, 8 hex characters) and the first 4 characters of the second group
/// (`time_mid`) together hold 48 bits: milliseconds since the Unix epoch.
///
/// **Precondition:** `input` has passed [`is_valid_uuid`] and [`is_uuid_v7`]. Neither is checked
/// here. Any format-valid UUID yields a timestamp, because the version nibble sits just past the
/// 48-bit field; for non-v7 UUIDs that timestamp is meaningless.
///
/// # Errors
///
/// - [`UuidCheckError::InvalidFormat`] if `input` contains no `-`, or its second group is shorter
///   than 4 characters.
/// - [`UuidCheckError::InvalidTimestamp`] if the 48-bit field contains a non-hex character. The
///   underlying [`std::num::ParseIntError`] is available through `source()`.
/// - [`UuidCheckError::TimestampOutOfRange`] if the field does not fit a calendar timestamp. This
///   only happens when the precondition is skipped and `time_low` is oversized.
pub fn uuid_v7_to_timestamp(input: &str) -> UuidCheckResult<DateTime<Utc>> {
    let field = timestamp_field(input)?;
    let millis = parse_hex_u64(&field)?;

    i64::try_from(millis)
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .ok_or(UuidCheckError::TimestampOutOfRange(field))
}

/// Joins `time_low` with the leading half of `time_mid`.
fn timestamp_field(input: &str) -> UuidCheckResult<String> {
    let mut groups = input.split('-');
    let time_low = groups.next().unwrap_or_default();
    let time_mid = groups.next().ok_or_else(|| {
        UuidCheckError::InvalidFormat(format!("no '-' separated groups in '{}'", input))
    })?;

    let time_mid_high = time_mid.get(..TIME_MID_TIMESTAMP_CHARS).ok_or_else(|| {
        UuidCheckError::InvalidFormat(format!(
            "second group must have at least {} characters, got: '{}'",
            TIME_MID_TIMESTAMP_CHARS, time_mid
        ))
    })?;

    let mut field = String::with_capacity(time_low.len() + TIME_MID_TIMESTAMP_CHARS);
    field.push_str(time_low);
    field.push_str(time_mid_high);
    Ok(field)
}

/// Parses an unsigned base-16 number. No sign, prefix or separators are accepted.
fn parse_hex_u64(field: &str) -> UuidCheckResult<u64> {
    // `from_str_radix` tolerates a leading '+', so parse only up to the first non-hex byte
    let digits = match field.bytes().position(|b| !is_hex_digit(b)) {
        Some(i) => field.get(..=i).unwrap_or(field),
        None => field,
    };

    u64::from_str_radix(digits, 16).map_err(|source| match source.kind() {
        IntErrorKind::PosOverflow => UuidCheckError::TimestampOutOfRange(field.to_owned()),
        _ => UuidCheckError::InvalidTimestamp {
            field: field.to_owned(),
            source,
        },
    })
}

/// Returns true if `b` is an ASCII hex digit (`0-9`, `a-f`, `A-F`).
fn is_hex_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F')
}
