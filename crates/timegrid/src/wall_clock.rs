//! Wall-clock time of day.
//!
//! A [`WallClock`] is the time an observer reads off the clock on their
//! wall: seconds since the start of the day, no timezone, no date, second
//! precision. The full closed range `[0, 86400]` is representable — 86400
//! (`24:00:00`) is a legitimate end-of-day value, not wrapped to zero.
//!
//! Field-based construction is algebraic: components may be negative or
//! overflow their conventional ranges as long as the checked sum lands in
//! range, so `(0, 1, -60)`, `(0, 0, 0)`, and `(0, -1, 60)` all denote
//! midnight.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TimeGridError};
use crate::period::Period;

const SECONDS_PER_MINUTE: i32 = 60;
const SECONDS_PER_HOUR: i32 = SECONDS_PER_MINUTE * 60;
const SECONDS_PER_DAY: i32 = SECONDS_PER_HOUR * 24;

/// How to turn fractional seconds into whole seconds when converting a
/// millisecond [`Duration`] offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward negative infinity (the default).
    #[default]
    Floor,
    /// Toward positive infinity.
    Ceiling,
    /// Toward zero.
    Down,
    /// Away from zero.
    Up,
}

fn millis_to_seconds(millis: i64, rounding: Rounding) -> i64 {
    match rounding {
        Rounding::Floor => millis.div_euclid(1000),
        Rounding::Ceiling => -(-millis).div_euclid(1000),
        Rounding::Down => millis / 1000,
        Rounding::Up => {
            let quotient = millis / 1000;
            if millis % 1000 == 0 {
                quotient
            } else if millis > 0 {
                quotient + 1
            } else {
                quotient - 1
            }
        }
    }
}

/// An immutable second-precision time of day in `[0, 86400]`.
///
/// Equality, ordering, and hashing all follow the seconds-of-day value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClock {
    secs: i32,
}

impl WallClock {
    /// The clock at the given seconds since the start of the day.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::InvalidWallClock`] if `secs` is outside
    /// `[0, 86400]`.
    pub fn from_seconds_of_day(secs: i32) -> Result<WallClock> {
        if !(0..=SECONDS_PER_DAY).contains(&secs) {
            return Err(TimeGridError::InvalidWallClock(format!(
                "seconds of day {secs} must be in [0, 86400]"
            )));
        }
        Ok(WallClock { secs })
    }

    /// The clock at `hours * 3600 + minutes * 60 + seconds`, computed with
    /// checked arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::Overflow`] if the summation overflows, or
    /// [`TimeGridError::InvalidWallClock`] if the sum is outside
    /// `[0, 86400]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timegrid::WallClock;
    ///
    /// let midnight = WallClock::from_fields(0, 0, 0).unwrap();
    /// assert_eq!(WallClock::from_fields(0, 1, -60).unwrap(), midnight);
    /// assert_eq!(WallClock::from_fields(25, -60, 0).unwrap().seconds_of_day(), 86400);
    /// ```
    pub fn from_fields(hours: i32, minutes: i32, seconds: i32) -> Result<WallClock> {
        WallClock::from_seconds_of_day(sum_fields(hours, minutes, seconds)?)
    }

    /// Parse either text form, dispatching on length: 6 characters is
    /// basic `HHmmss`, 8 characters is extended `HH:mm:ss`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::InvalidWallClock`] for any other length,
    /// for non-numeric digit groups, and for out-of-range results.
    pub fn parse(s: &str) -> Result<WallClock> {
        match s.len() {
            6 => WallClock::parse_basic(s),
            8 => WallClock::parse_extended(s),
            _ => Err(TimeGridError::InvalidWallClock(format!(
                "'{s}': expected 6 (HHmmss) or 8 (HH:mm:ss) characters"
            ))),
        }
    }

    /// Parse the basic form `HHmmss`.
    ///
    /// Digit groups pass through the checked field summation, so
    /// `"240000"` parses to end of day.
    pub fn parse_basic(s: &str) -> Result<WallClock> {
        if s.len() != 6 {
            return Err(TimeGridError::InvalidWallClock(format!(
                "'{s}': expected 6 characters (HHmmss)"
            )));
        }
        let (h, m, sec) = (group(s, 0..2)?, group(s, 2..4)?, group(s, 4..6)?);
        WallClock::from_fields(h, m, sec)
    }

    /// Parse the extended form `HH:mm:ss`.
    pub fn parse_extended(s: &str) -> Result<WallClock> {
        if s.len() != 8 {
            return Err(TimeGridError::InvalidWallClock(format!(
                "'{s}': expected 8 characters (HH:mm:ss)"
            )));
        }
        let (h, m, sec) = (group(s, 0..2)?, group(s, 3..5)?, group(s, 6..8)?);
        WallClock::from_fields(h, m, sec)
    }

    /// Hour of the day, `0..=24`.
    pub fn hour(&self) -> i32 {
        self.secs / SECONDS_PER_HOUR
    }

    /// Minute of the hour, `0..=59`.
    pub fn minute(&self) -> i32 {
        (self.secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE
    }

    /// Second of the minute, `0..=59`.
    pub fn second(&self) -> i32 {
        self.secs % SECONDS_PER_MINUTE
    }

    /// Seconds since the start of the day, `0..=86400`.
    pub fn seconds_of_day(&self) -> i32 {
        self.secs
    }

    /// A copy advanced by the given number of seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::Overflow`] on arithmetic overflow or
    /// [`TimeGridError::InvalidWallClock`] if the result leaves
    /// `[0, 86400]`.
    pub fn plus_seconds(&self, seconds: i32) -> Result<WallClock> {
        let shifted = self.secs.checked_add(seconds).ok_or_else(|| {
            TimeGridError::Overflow(format!("{} + {seconds}s overflows", self.print_basic()))
        })?;
        WallClock::from_seconds_of_day(shifted)
    }

    /// A copy moved back by the given number of seconds.
    ///
    /// # Errors
    ///
    /// Same conditions as [`plus_seconds`](WallClock::plus_seconds).
    pub fn minus_seconds(&self, seconds: i32) -> Result<WallClock> {
        let shifted = self.secs.checked_sub(seconds).ok_or_else(|| {
            TimeGridError::Overflow(format!("{} - {seconds}s overflows", self.print_basic()))
        })?;
        WallClock::from_seconds_of_day(shifted)
    }

    /// A copy advanced by an hours/minutes/seconds triple, summed with
    /// checked arithmetic.
    pub fn plus_fields(&self, hours: i32, minutes: i32, seconds: i32) -> Result<WallClock> {
        self.plus_seconds(sum_fields(hours, minutes, seconds)?)
    }

    /// A copy moved back by an hours/minutes/seconds triple.
    pub fn minus_fields(&self, hours: i32, minutes: i32, seconds: i32) -> Result<WallClock> {
        self.minus_seconds(sum_fields(hours, minutes, seconds)?)
    }

    /// A copy advanced by a [`Duration`], its milliseconds floored to
    /// whole seconds.
    pub fn plus_duration(&self, duration: Duration) -> Result<WallClock> {
        self.plus_duration_with(duration, Rounding::Floor)
    }

    /// A copy advanced by a [`Duration`] with an explicit [`Rounding`].
    pub fn plus_duration_with(&self, duration: Duration, rounding: Rounding) -> Result<WallClock> {
        self.plus_seconds(whole_seconds(duration, rounding)?)
    }

    /// A copy moved back by a [`Duration`], its milliseconds floored to
    /// whole seconds.
    pub fn minus_duration(&self, duration: Duration) -> Result<WallClock> {
        self.minus_duration_with(duration, Rounding::Floor)
    }

    /// A copy moved back by a [`Duration`] with an explicit [`Rounding`].
    pub fn minus_duration_with(&self, duration: Duration, rounding: Rounding) -> Result<WallClock> {
        self.minus_seconds(whole_seconds(duration, rounding)?)
    }

    /// A copy advanced by a [`Period`], resolved through
    /// [`Period::to_standard_duration`].
    pub fn plus_period(&self, period: &Period) -> Result<WallClock> {
        self.plus_duration(period.to_standard_duration()?)
    }

    /// A copy moved back by a [`Period`].
    pub fn minus_period(&self, period: &Period) -> Result<WallClock> {
        self.minus_duration(period.to_standard_duration()?)
    }

    /// Zero-padded `HHmmss`.
    pub fn print_basic(&self) -> String {
        format!("{:02}{:02}{:02}", self.hour(), self.minute(), self.second())
    }

    /// Zero-padded `HH:mm:ss`.
    pub fn print_extended(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

fn sum_fields(hours: i32, minutes: i32, seconds: i32) -> Result<i32> {
    let overflow = || {
        TimeGridError::Overflow(format!(
            "field sum ({hours}h, {minutes}m, {seconds}s) overflows"
        ))
    };
    hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|h| minutes.checked_mul(SECONDS_PER_MINUTE).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(overflow)
}

fn group(s: &str, range: std::ops::Range<usize>) -> Result<i32> {
    let text = s.get(range).ok_or_else(|| {
        TimeGridError::InvalidWallClock(format!("'{s}': not a clock time"))
    })?;
    text.parse().map_err(|_| {
        TimeGridError::InvalidWallClock(format!("'{s}': '{text}' is not a valid integer"))
    })
}

fn whole_seconds(duration: Duration, rounding: Rounding) -> Result<i32> {
    let secs = millis_to_seconds(duration.num_milliseconds(), rounding);
    i32::try_from(secs)
        .map_err(|_| TimeGridError::Overflow(format!("{secs}s does not fit a wall clock offset")))
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print_basic())
    }
}

impl FromStr for WallClock {
    type Err = TimeGridError;

    fn from_str(s: &str) -> Result<WallClock> {
        WallClock::parse(s)
    }
}

impl Serialize for WallClock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.print_basic())
    }
}

impl<'de> Deserialize<'de> for WallClock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<WallClock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        WallClock::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
