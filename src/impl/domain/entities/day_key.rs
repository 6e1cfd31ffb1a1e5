use std::fmt;

use chrono::{DateTime, FixedOffset};
use fractic_server_error::ServerError;

use crate::errors::InvalidTimestamp;

/// Identifies a calendar day, ex. `2024_March_05`.
///
/// The day is taken in the UTC offset carried by the timestamp itself, so two
/// transactions share a key iff they fall on the same local date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(String);

impl DayKey {
    pub fn from_timestamp(timestamp: &DateTime<FixedOffset>) -> Self {
        DayKey(timestamp.format("%Y_%B_%d").to_string())
    }

    /// Parses an RFC 3339 creation timestamp and derives its key.
    pub fn from_created_at(created_at: &str) -> Result<Self, ServerError> {
        let timestamp = DateTime::parse_from_rfc3339(created_at)
            .map_err(|e| InvalidTimestamp::with_debug(created_at, &e))?;
        Ok(Self::from_timestamp(&timestamp))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
