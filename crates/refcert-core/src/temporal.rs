//! # Temporal Types
//!
//! UTC-only timestamp with millisecond precision. Millisecond precision is
//! what the time-ordered identifier kind stores in its 48-bit time field,
//! so a `Timestamp` round-trips through a [`TestAttemptId`] exactly.
//!
//! Non-UTC inputs are rejected by [`Timestamp::parse`]; there is no silent
//! offset conversion.
//!
//! [`TestAttemptId`]: crate::identity::TestAttemptId

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A UTC timestamp truncated to millisecond precision.
///
/// Serializes as the canonical string and deserializes through
/// [`Timestamp::parse`], so the wire form obeys the same UTC-only rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current UTC time, truncated to milliseconds.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating
    /// sub-millisecond components.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(3))
    }

    /// Create a timestamp from Unix epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if the value is outside
    /// the range chrono can represent.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, ValidationError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidTimestamp {
                value: millis.to_string(),
                reason: "out of range for a UTC datetime".to_string(),
            })
    }

    /// Parse an RFC 3339 timestamp. Only the `Z` suffix is accepted;
    /// explicit offsets, including `+00:00`, are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if the string is not
    /// RFC 3339 or is not expressed in UTC.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !s.ends_with('Z') {
            return Err(ValidationError::InvalidTimestamp {
                value: s.to_string(),
                reason: "must use Z suffix (UTC only)".to_string(),
            });
        }
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| ValidationError::InvalidTimestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_datetime(dt.with_timezone(&Utc)))
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unix epoch milliseconds. Negative before 1970.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub fn to_canonical_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}
