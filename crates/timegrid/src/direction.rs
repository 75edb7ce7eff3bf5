//! Traversal direction along the time axis.
//!
//! [`Direction`] reinterprets interval endpoints, instant arithmetic, and
//! instant comparison according to the direction of travel. Under
//! [`Forward`] everything means what it says; under [`Reverse`] the
//! traversal starts at the interval's end, `plus` subtracts, and every
//! ordering predicate is mirrored (`Lt` ↔ `Gt`, `LtEq` ↔ `GtEq`), while
//! `Eq`/`Neq` pass through untouched.
//!
//! [`Forward`]: Direction::Forward
//! [`Reverse`]: Direction::Reverse

use chrono::{DateTime, Duration, Utc};

use crate::comparison::Comparison;
use crate::error::{Result, TimeGridError};
use crate::interval::Interval;
use crate::period::Period;

/// Direction of travel along the time axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Earlier to later.
    #[default]
    Forward,
    /// Later to earlier.
    Reverse,
}

impl Direction {
    /// The endpoint a traversal in this direction begins from.
    pub fn start(self, interval: &Interval) -> DateTime<Utc> {
        match self {
            Direction::Forward => interval.start(),
            Direction::Reverse => interval.end(),
        }
    }

    /// The endpoint a traversal in this direction runs toward.
    pub fn end(self, interval: &Interval) -> DateTime<Utc> {
        match self {
            Direction::Forward => interval.end(),
            Direction::Reverse => interval.start(),
        }
    }

    /// Advance an instant by `millis` in this direction.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::Overflow`] if the result leaves the
    /// representable datetime range.
    pub fn plus_millis(self, instant: DateTime<Utc>, millis: i64) -> Result<DateTime<Utc>> {
        let offset = Duration::milliseconds(millis);
        let shifted = match self {
            Direction::Forward => instant.checked_add_signed(offset),
            Direction::Reverse => instant.checked_sub_signed(offset),
        };
        shifted.ok_or_else(|| {
            TimeGridError::Overflow(format!("instant out of range after {millis}ms step"))
        })
    }

    /// Move an instant back by `millis` in this direction.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::Overflow`] if the result leaves the
    /// representable datetime range.
    pub fn minus_millis(self, instant: DateTime<Utc>, millis: i64) -> Result<DateTime<Utc>> {
        match self {
            Direction::Forward => Direction::Reverse.plus_millis(instant, millis),
            Direction::Reverse => Direction::Forward.plus_millis(instant, millis),
        }
    }

    /// [`plus_millis`](Direction::plus_millis) with a [`Duration`] offset.
    pub fn plus_duration(self, instant: DateTime<Utc>, duration: Duration) -> Result<DateTime<Utc>> {
        self.plus_millis(instant, duration.num_milliseconds())
    }

    /// [`minus_millis`](Direction::minus_millis) with a [`Duration`] offset.
    pub fn minus_duration(self, instant: DateTime<Utc>, duration: Duration) -> Result<DateTime<Utc>> {
        self.minus_millis(instant, duration.num_milliseconds())
    }

    /// [`plus_millis`](Direction::plus_millis) with a [`Period`] offset,
    /// resolved through [`Period::to_standard_duration`].
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::InvalidPeriod`] if the period carries year
    /// or month fields, or [`TimeGridError::Overflow`] on range overflow.
    pub fn plus_period(self, instant: DateTime<Utc>, period: &Period) -> Result<DateTime<Utc>> {
        self.plus_millis(instant, period.to_standard_millis()?)
    }

    /// [`minus_millis`](Direction::minus_millis) with a [`Period`] offset.
    ///
    /// # Errors
    ///
    /// Same conditions as [`plus_period`](Direction::plus_period).
    pub fn minus_period(self, instant: DateTime<Utc>, period: &Period) -> Result<DateTime<Utc>> {
        self.minus_millis(instant, period.to_standard_millis()?)
    }

    /// Apply a comparison under this direction's ordering sense.
    ///
    /// `Forward` applies the predicate as given; `Reverse` applies its
    /// mirror. Absent operands fail every predicate either way.
    pub fn compare(
        self,
        comparison: Comparison,
        left: Option<DateTime<Utc>>,
        right: Option<DateTime<Utc>>,
    ) -> bool {
        match self {
            Direction::Forward => comparison.apply(left, right),
            Direction::Reverse => comparison.mirrored().apply(left, right),
        }
    }

    pub fn lt(self, left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> bool {
        self.compare(Comparison::Lt, left, right)
    }

    pub fn lteq(self, left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> bool {
        self.compare(Comparison::LtEq, left, right)
    }

    pub fn eq(self, left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> bool {
        self.compare(Comparison::Eq, left, right)
    }

    pub fn neq(self, left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> bool {
        self.compare(Comparison::Neq, left, right)
    }

    pub fn gteq(self, left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> bool {
        self.compare(Comparison::GtEq, left, right)
    }

    pub fn gt(self, left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> bool {
        self.compare(Comparison::Gt, left, right)
    }

    /// The opposite direction.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_COMPARISONS: [Comparison; 6] = [
        Comparison::Lt,
        Comparison::LtEq,
        Comparison::Eq,
        Comparison::Neq,
        Comparison::GtEq,
        Comparison::Gt,
    ];

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    fn interval() -> Interval {
        Interval::new(at(0), at(240_000)).unwrap()
    }

    // ── endpoint selection ──────────────────────────────────────────────

    #[test]
    fn test_forward_endpoints() {
        let iv = interval();
        assert_eq!(Direction::Forward.start(&iv), at(0));
        assert_eq!(Direction::Forward.end(&iv), at(240_000));
    }

    #[test]
    fn test_reverse_endpoints() {
        let iv = interval();
        assert_eq!(Direction::Reverse.start(&iv), at(240_000));
        assert_eq!(Direction::Reverse.end(&iv), at(0));
    }

    // ── arithmetic ──────────────────────────────────────────────────────

    #[test]
    fn test_forward_plus_adds() {
        assert_eq!(
            Direction::Forward.plus_millis(at(0), 60_000).unwrap(),
            at(60_000)
        );
        assert_eq!(
            Direction::Forward.minus_millis(at(60_000), 60_000).unwrap(),
            at(0)
        );
    }

    #[test]
    fn test_reverse_plus_subtracts() {
        assert_eq!(
            Direction::Reverse.plus_millis(at(60_000), 60_000).unwrap(),
            at(0)
        );
        assert_eq!(
            Direction::Reverse.minus_millis(at(0), 60_000).unwrap(),
            at(60_000)
        );
    }

    #[test]
    fn test_plus_duration() {
        assert_eq!(
            Direction::Forward
                .plus_duration(at(0), Duration::minutes(1))
                .unwrap(),
            at(60_000)
        );
        assert_eq!(
            Direction::Reverse
                .plus_duration(at(60_000), Duration::minutes(1))
                .unwrap(),
            at(0)
        );
    }

    #[test]
    fn test_plus_period() {
        let minute = Period::parse("PT1M").unwrap();
        assert_eq!(
            Direction::Forward.plus_period(at(0), &minute).unwrap(),
            at(60_000)
        );
        assert_eq!(
            Direction::Reverse.minus_period(at(0), &minute).unwrap(),
            at(60_000)
        );
    }

    #[test]
    fn test_plus_period_rejects_imprecise_period() {
        let months = Period::of_months(1);
        assert!(Direction::Forward.plus_period(at(0), &months).is_err());
    }

    #[test]
    fn test_plus_overflow_is_error() {
        let far = DateTime::<Utc>::MAX_UTC;
        assert!(Direction::Forward.plus_millis(far, i64::MAX / 2).is_err());
    }

    // ── comparison dispatch ─────────────────────────────────────────────

    #[test]
    fn test_forward_comparisons() {
        let (a, b) = (Some(at(0)), Some(at(1000)));
        assert!(Direction::Forward.lt(a, b));
        assert!(Direction::Forward.lteq(a, b));
        assert!(!Direction::Forward.eq(a, b));
        assert!(Direction::Forward.neq(a, b));
        assert!(!Direction::Forward.gteq(a, b));
        assert!(!Direction::Forward.gt(a, b));
    }

    #[test]
    fn test_reverse_swaps_ordering_comparisons() {
        // Under Reverse, "less than" means "later than".
        let (a, b) = (Some(at(0)), Some(at(1000)));
        assert!(!Direction::Reverse.lt(a, b));
        assert!(!Direction::Reverse.lteq(a, b));
        assert!(Direction::Reverse.gt(a, b));
        assert!(Direction::Reverse.gteq(a, b));
    }

    #[test]
    fn test_reverse_preserves_equality_comparisons() {
        let (a, b) = (Some(at(0)), Some(at(1000)));
        assert!(!Direction::Reverse.eq(a, b));
        assert!(Direction::Reverse.neq(a, b));
        assert!(Direction::Reverse.eq(a, a));
        assert!(!Direction::Reverse.neq(a, a));
    }

    #[test]
    fn test_mirror_law() {
        // d.compare(c, a, b) == d.opposite().compare(c.mirrored(), a, b)
        let operands = [None, Some(at(0)), Some(at(1000))];
        for direction in [Direction::Forward, Direction::Reverse] {
            for comparison in ALL_COMPARISONS {
                for left in operands {
                    for right in operands {
                        assert_eq!(
                            direction.compare(comparison, left, right),
                            direction.opposite().compare(comparison.mirrored(), left, right),
                            "{direction:?} {comparison:?} {left:?} {right:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_absent_operands_fail_in_both_directions() {
        for direction in [Direction::Forward, Direction::Reverse] {
            for comparison in ALL_COMPARISONS {
                assert!(!direction.compare(comparison, None, Some(at(0))));
                assert!(!direction.compare(comparison, Some(at(0)), None));
                assert!(!direction.compare(comparison, None, None));
            }
        }
    }
}
