//! A validated UUIDv7 with its creation time.

use crate::check::{is_uuid_v7, is_valid_uuid, uuid_v7_to_timestamp, VERSION_INDEX};
use crate::{UuidCheckError, UuidCheckResult};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// A UUID that is known to be in canonical form and to carry version 7.
///
/// Once you have a `UuidV7` you can rely on [`UuidV7::timestamp`] being the embedded creation
/// time; the checks done by [`is_valid_uuid`] and [`is_uuid_v7`] have already passed.
///
/// # Construction
/// [`UuidV7::parse`] (or `FromStr`/`TryFrom`) is the only way in. There is no generator.
///
/// # Ordering
/// Values order by creation time first, then by the full 128-bit value, so sorting a collection
/// of `UuidV7` puts it in creation order.
///
/// # Display format
/// Always the lowercase hyphenated canonical form, whatever case the input used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UuidV7 {
    uuid: Uuid,
    timestamp: DateTime<Utc>,
}

impl UuidV7 {
    /// Validates `input` as a canonical UUIDv7 and extracts its timestamp.
    ///
    /// Upper and mixed case are accepted.
    ///
    /// # Errors
    ///
    /// - [`UuidCheckError::InvalidFormat`] if `input` is not in canonical `8-4-4-4-12` form.
    /// - [`UuidCheckError::NotVersion7`] if the version nibble is anything other than `7`.
    pub fn parse(input: &str) -> UuidCheckResult<Self> {
        if !is_valid_uuid(input) {
            tracing::debug!(len = input.len(), "rejected UUID: not in canonical form");
            return Err(UuidCheckError::InvalidFormat(format!(
                "UUID must be 36 characters in 8-4-4-4-12 hex form, got {} bytes",
                input.len()
            )));
        }

        // Length is 36 from here on, so indexing the version nibble cannot panic
        if !is_uuid_v7(input) {
            let version = char::from(input.as_bytes()[VERSION_INDEX]);
            tracing::debug!(%version, "rejected UUID: not version 7");
            return Err(UuidCheckError::NotVersion7(version));
        }

        let timestamp = uuid_v7_to_timestamp(input)?;
        let uuid = Uuid::parse_str(input)
            .map_err(|e| UuidCheckError::InvalidFormat(e.to_string()))?;

        Ok(Self { uuid, timestamp })
    }

    /// Returns the creation time embedded in the first 48 bits.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the creation time as milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// Returns the identifier as a `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl Ord for UuidV7 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.uuid.cmp(&other.uuid))
    }
}

impl PartialOrd for UuidV7 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for UuidV7 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uuid.hyphenated())
    }
}

impl FromStr for UuidV7 {
    type Err = UuidCheckError;

    /// Equivalent to [`UuidV7::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UuidV7::parse(s)
    }
}

impl TryFrom<&str> for UuidV7 {
    type Error = UuidCheckError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        UuidV7::parse(value)
    }
}

impl TryFrom<String> for UuidV7 {
    type Error = UuidCheckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UuidV7::parse(&value)
    }
}

impl From<UuidV7> for Uuid {
    fn from(value: UuidV7) -> Self {
        value.uuid
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UuidV7 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UuidV7 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        UuidV7::parse(&s).map_err(serde::de::Error::custom)
    }
}
