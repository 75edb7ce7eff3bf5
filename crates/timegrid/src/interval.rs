//! A span between two UTC instants.
//!
//! `Interval` is inclusive of its start and exclusive of its end, with the
//! degenerate equal-endpoints form representing a single point. The end may
//! never precede the start.

use chrono::{DateTime, Utc};

use crate::error::{Result, TimeGridError};
use crate::instant;

/// An immutable `[start, end)` span on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Create an interval from its endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::InvalidArgument`] if `end` precedes
    /// `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Interval> {
        if end < start {
            return Err(TimeGridError::InvalidArgument(format!(
                "interval end {} precedes start {}",
                instant::print_extended(end),
                instant::print_extended(start),
            )));
        }
        Ok(Interval { start, end })
    }

    /// Create a zero-length interval at a single instant.
    pub fn point(at: DateTime<Utc>) -> Interval {
        Interval { start: at, end: at }
    }

    /// Create an interval from whole epoch seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::InvalidDatetime`] if either seconds value
    /// is out of range, or [`TimeGridError::InvalidArgument`] if the end
    /// precedes the start.
    pub fn from_secs(start_secs: i64, end_secs: i64) -> Result<Interval> {
        Interval::new(instant::from_secs(start_secs)?, instant::from_secs(end_secs)?)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// The length of this interval in milliseconds. Never negative.
    pub fn duration_millis(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// A copy with both endpoints floored to whole seconds.
    pub fn no_millis(&self) -> Interval {
        Interval {
            start: instant::no_millis(self.start),
            end: instant::no_millis(self.end),
        }
    }

    /// Format as `<basic-start>/<basic-end>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timegrid::Interval;
    ///
    /// let iv = Interval::from_secs(0, 240).unwrap();
    /// assert_eq!(iv.print_basic(), "19700101T000000Z/19700101T000400Z");
    /// ```
    pub fn print_basic(&self) -> String {
        format!(
            "{}/{}",
            instant::print_basic(self.start),
            instant::print_basic(self.end)
        )
    }

    /// Format as `<extended-start>/<extended-end>`.
    pub fn print_extended(&self) -> String {
        format!(
            "{}/{}",
            instant::print_extended(self.start),
            instant::print_extended(self.end)
        )
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn test_new_accepts_ordered_endpoints() {
        let iv = Interval::new(at(0), at(240_000)).unwrap();
        assert_eq!(iv.start(), at(0));
        assert_eq!(iv.end(), at(240_000));
        assert_eq!(iv.duration_millis(), 240_000);
    }

    #[test]
    fn test_new_accepts_zero_length() {
        let iv = Interval::new(at(5000), at(5000)).unwrap();
        assert_eq!(iv.duration_millis(), 0);
        assert_eq!(iv, Interval::point(at(5000)));
    }

    #[test]
    fn test_new_rejects_end_before_start() {
        let result = Interval::new(at(1000), at(0));
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("precedes"), "got: {err}");
    }

    #[test]
    fn test_from_secs() {
        let iv = Interval::from_secs(0, 240).unwrap();
        assert_eq!(iv.duration_millis(), 240_000);
        assert!(Interval::from_secs(240, 0).is_err());
    }

    #[test]
    fn test_no_millis_floors_both_endpoints() {
        let iv = Interval::new(at(1500), at(3999)).unwrap();
        let floored = iv.no_millis();
        assert_eq!(floored.start(), at(1000));
        assert_eq!(floored.end(), at(3000));
    }

    #[test]
    fn test_print_basic() {
        let iv = Interval::from_secs(0, 240).unwrap();
        assert_eq!(iv.print_basic(), "19700101T000000Z/19700101T000400Z");
    }

    #[test]
    fn test_print_extended() {
        let iv = Interval::from_secs(0, 240).unwrap();
        assert_eq!(
            iv.print_extended(),
            "1970-01-01T00:00:00Z/1970-01-01T00:04:00Z"
        );
    }
}
