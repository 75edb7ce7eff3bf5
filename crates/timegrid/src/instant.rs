//! Printing, parsing, and extraction of second-precision UTC instants.
//!
//! Two bit-exact text forms are supported:
//!
//! - basic: `yyyyMMdd'T'HHmmss'Z'`, e.g. `19700101T000003Z` — compact,
//!   sorts lexicographically, good for storage keys and file names
//! - extended: `yyyy-MM-dd'T'HH:mm:ss'Z'`, e.g. `1970-01-01T00:00:03Z` —
//!   good for anything a human reads
//!
//! Both print in UTC and carry no sub-second component; [`no_millis`]
//! floors an instant onto that grid. [`extract_all`] and [`extract_last`]
//! scan free text for embedded basic-form tokens.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::{Result, TimeGridError};

/// Basic format: `19700101T000003Z`.
pub const BASIC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Extended format: `1970-01-01T00:00:03Z`.
pub const EXTENDED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Pattern matching an embedded basic-form token in free text.
pub const BASIC_TOKEN_PATTERN: &str = r"\d{8}T\d{6}Z";

static BASIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BASIC_TOKEN_PATTERN).expect("token pattern compiles"));

/// Floor an instant to whole seconds, dropping any sub-second component.
pub fn no_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant - Duration::nanoseconds(i64::from(instant.timestamp_subsec_nanos()))
}

/// Print an instant in basic form.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use timegrid::instant;
///
/// let dt = DateTime::from_timestamp_millis(3000).unwrap();
/// assert_eq!(instant::print_basic(dt), "19700101T000003Z");
/// ```
pub fn print_basic(instant: DateTime<Utc>) -> String {
    instant.format(BASIC_FORMAT).to_string()
}

/// Print an instant in extended form.
pub fn print_extended(instant: DateTime<Utc>) -> String {
    instant.format(EXTENDED_FORMAT).to_string()
}

/// Parse an instant from basic form.
///
/// # Errors
///
/// Returns [`TimeGridError::InvalidDatetime`] if the text is not exactly
/// `yyyyMMdd'T'HHmmss'Z'` for a valid UTC datetime.
pub fn parse_basic(s: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, BASIC_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|e| TimeGridError::InvalidDatetime(format!("'{s}': {e}")))
}

/// Parse an instant from extended form.
///
/// # Errors
///
/// Returns [`TimeGridError::InvalidDatetime`] if the text is not exactly
/// `yyyy-MM-dd'T'HH:mm:ss'Z'` for a valid UTC datetime.
pub fn parse_extended(s: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, EXTENDED_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|e| TimeGridError::InvalidDatetime(format!("'{s}': {e}")))
}

/// The instant at the given whole seconds since the Unix epoch.
///
/// # Errors
///
/// Returns [`TimeGridError::InvalidDatetime`] if the seconds value is
/// outside the representable datetime range.
pub fn from_secs(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| TimeGridError::InvalidDatetime(format!("{secs}s is out of range")))
}

/// Whole seconds since the Unix epoch, flooring any sub-second component.
pub fn secs_of(instant: DateTime<Utc>) -> i64 {
    instant.timestamp()
}

/// The earlier of two instants, or `left` when equal.
pub fn lesser(left: DateTime<Utc>, right: DateTime<Utc>) -> DateTime<Utc> {
    if left <= right {
        left
    } else {
        right
    }
}

/// The later of two instants, or `left` when equal.
pub fn greater(left: DateTime<Utc>, right: DateTime<Utc>) -> DateTime<Utc> {
    if left >= right {
        left
    } else {
        right
    }
}

/// Extract every basic-form instant embedded in free text, in order of
/// appearance.
///
/// # Errors
///
/// Returns [`TimeGridError::InvalidDatetime`] if a token matches the
/// digit pattern but is not a valid datetime (e.g. month 13).
pub fn extract_all(text: &str) -> Result<Vec<DateTime<Utc>>> {
    BASIC_TOKEN
        .find_iter(text)
        .map(|m| parse_basic(m.as_str()))
        .collect()
}

/// Extract the last basic-form instant embedded in free text, or `None`
/// if the text contains no token.
///
/// # Errors
///
/// Same conditions as [`extract_all`].
pub fn extract_last(text: &str) -> Result<Option<DateTime<Utc>>> {
    Ok(extract_all(text)?.pop())
}

/// Serde adapter serializing an instant in basic form.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Stamp {
///     #[serde(with = "timegrid::instant::serde_basic")]
///     at: DateTime<Utc>,
/// }
/// ```
pub mod serde_basic {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::print_basic(*instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_basic(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter serializing an instant in extended form.
pub mod serde_extended {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::print_extended(*instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_extended(&s).map_err(serde::de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    // ── printing and parsing ────────────────────────────────────────────

    #[test]
    fn test_print_basic() {
        assert_eq!(print_basic(at(3000)), "19700101T000003Z");
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse_basic("19700101T000003Z").unwrap(), at(3000));
    }

    #[test]
    fn test_print_extended() {
        assert_eq!(print_extended(at(3000)), "1970-01-01T00:00:03Z");
    }

    #[test]
    fn test_parse_extended() {
        assert_eq!(parse_extended("1970-01-01T00:00:03Z").unwrap(), at(3000));
    }

    #[test]
    fn test_print_parse_round_trip_after_no_millis() {
        let dt = no_millis(at(3999));
        assert_eq!(parse_basic(&print_basic(dt)).unwrap(), dt);
        assert_eq!(parse_extended(&print_extended(dt)).unwrap(), dt);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert!(parse_basic("1970-01-01T00:00:03Z").is_err());
        assert!(parse_basic("19700101T000003").is_err());
        assert!(parse_extended("19700101T000003Z").is_err());
        assert!(parse_extended("not-a-datetime").is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_fields() {
        assert!(parse_basic("19701301T000000Z").is_err()); // month 13
        assert!(parse_extended("1970-01-01T25:00:00Z").is_err()); // hour 25
    }

    // ── flooring ────────────────────────────────────────────────────────

    #[test]
    fn test_no_millis_floors_to_second() {
        assert_eq!(no_millis(at(0)), at(0));
        assert_eq!(no_millis(at(1)), at(0));
        assert_eq!(no_millis(at(999)), at(0));
        assert_eq!(no_millis(at(3999)), at(3000));
    }

    #[test]
    fn test_no_millis_floors_before_epoch() {
        // -1ms is inside the second that starts at -1000ms.
        assert_eq!(no_millis(at(-1)), at(-1000));
    }

    // ── epoch seconds ───────────────────────────────────────────────────

    #[test]
    fn test_from_secs_and_secs_of() {
        let dt = from_secs(3).unwrap();
        assert_eq!(dt, at(3000));
        assert_eq!(secs_of(dt), 3);
        assert_eq!(secs_of(at(3999)), 3);
    }

    // ── lesser / greater ────────────────────────────────────────────────

    #[test]
    fn test_lesser_greater() {
        let (a, b) = (at(0), at(1000));
        assert_eq!(lesser(a, b), a);
        assert_eq!(lesser(b, a), a);
        assert_eq!(greater(a, b), b);
        assert_eq!(greater(b, a), b);
        assert_eq!(lesser(a, a), a);
        assert_eq!(greater(a, a), a);
    }

    // ── extraction ──────────────────────────────────────────────────────

    #[test]
    fn test_extract_all_in_order() {
        let s = "My dob is 19691102T033333Z and today is 20130427T000345Z which makes me over 40!";
        let dts = extract_all(s).unwrap();
        assert_eq!(dts.len(), 2);
        assert_eq!(dts[0], parse_extended("1969-11-02T03:33:33Z").unwrap());
        assert_eq!(dts[1], parse_extended("2013-04-27T00:03:45Z").unwrap());
    }

    #[test]
    fn test_extract_last() {
        let s = "My dob is 19691102T033333Z and today is 20130427T000345Z which makes me over 40!";
        assert_eq!(
            extract_last(s).unwrap(),
            Some(parse_extended("2013-04-27T00:03:45Z").unwrap())
        );
        assert_eq!(extract_last("nothing embedded here").unwrap(), None);
    }

    #[test]
    fn test_extract_invalid_token_is_error() {
        // Matches the digit pattern but is not a real date.
        assert!(extract_all("bad: 19701399T000000Z").is_err());
    }

    // ── serde adapters ──────────────────────────────────────────────────

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "serde_basic")]
        basic: DateTime<Utc>,
        #[serde(with = "serde_extended")]
        extended: DateTime<Utc>,
    }

    #[test]
    fn test_serde_round_trip() {
        let stamp = Stamp {
            basic: at(3000),
            extended: at(3000),
        };
        let json = serde_json::to_string(&stamp).unwrap();
        assert_eq!(
            json,
            r#"{"basic":"19700101T000003Z","extended":"1970-01-01T00:00:03Z"}"#
        );
        assert_eq!(serde_json::from_str::<Stamp>(&json).unwrap(), stamp);
    }

    #[test]
    fn test_serde_rejects_malformed_text() {
        let json = r#"{"basic":"junk","extended":"1970-01-01T00:00:03Z"}"#;
        assert!(serde_json::from_str::<Stamp>(json).is_err());
    }
}
