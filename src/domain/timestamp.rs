//! Entry timestamps: one canonical representation, parsed leniently at the edges

use crate::error::{RememberError, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SubsecRound};

/// Canonical serialization, e.g. `2024-01-01T00:00:00.000`
pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Accepted input layouts, tried in order
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Current local wall-clock time, truncated to milliseconds
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(3)
}

/// Format a timestamp in the canonical form
pub fn format(ts: &NaiveDateTime) -> String {
    ts.format(CANONICAL_FORMAT).to_string()
}

/// Parse a user-supplied timestamp.
///
/// Accepts everything [`parse_stored`] does, plus `now` and a bare date
/// (midnight).
pub fn parse(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    if trimmed.eq_ignore_ascii_case("now") {
        return Ok(now());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(ts) = date.and_hms_opt(0, 0, 0) {
            return Ok(ts);
        }
    }

    parse_stored(input)
}

/// Parse a timestamp read from the slot or an import.
///
/// Only explicit date-times are accepted, so decoding the same text always
/// yields the same value. Offsets (RFC 3339) are converted to local time.
/// Sub-millisecond digits are dropped so that a parsed value always survives
/// a format/parse cycle.
pub fn parse_stored(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    for fmt in INPUT_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(ts.trunc_subsecs(3));
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Local).naive_local().trunc_subsecs(3))
        .map_err(|_| RememberError::InvalidTimestamp(input.to_string()))
}

/// Serde adapter storing `created` as a canonical string
pub mod serde_format {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(ts))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_stored(&raw).map_err(de::Error::custom)
    }
}
