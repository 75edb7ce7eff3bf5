//! Intervals between wall-clock times.
//!
//! A [`WallClockInterval`] is inclusive of its start and exclusive of its
//! end, like the instant [`Interval`](crate::Interval). The equal-endpoints
//! form is a zero-length point used for comparisons — note that under the
//! half-open definitions a point interval does not contain itself and does
//! not overlap itself.

use serde::Serialize;

use crate::error::{Result, TimeGridError};
use crate::wall_clock::WallClock;

/// An immutable `[start, end)` span of wall-clock time.
///
/// Ordering is lexicographic: by start, then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WallClockInterval {
    start: WallClock,
    end: WallClock,
}

impl WallClockInterval {
    /// Create an interval from its endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::InvalidArgument`] if `end` precedes
    /// `start`.
    pub fn new(start: WallClock, end: WallClock) -> Result<WallClockInterval> {
        if end < start {
            return Err(TimeGridError::InvalidArgument(format!(
                "interval end {} precedes start {}",
                end.print_extended(),
                start.print_extended(),
            )));
        }
        Ok(WallClockInterval { start, end })
    }

    /// A zero-length interval at a single wall-clock time.
    pub fn point(at: WallClock) -> WallClockInterval {
        WallClockInterval { start: at, end: at }
    }

    pub fn start(&self) -> WallClock {
        self.start
    }

    pub fn end(&self) -> WallClock {
        self.end
    }

    pub fn start_seconds(&self) -> i32 {
        self.start.seconds_of_day()
    }

    pub fn end_seconds(&self) -> i32 {
        self.end.seconds_of_day()
    }

    /// Whether this interval shares any span of time with another.
    ///
    /// Strict: intervals that merely touch do not overlap, and a
    /// zero-length interval overlaps nothing — not even itself.
    pub fn overlaps(&self, other: &WallClockInterval) -> bool {
        self.start_seconds() < other.end_seconds() && other.start_seconds() < self.end_seconds()
    }

    /// The span shared with another interval, or `None` when
    /// [`overlaps`](WallClockInterval::overlaps) is false.
    pub fn overlap(&self, other: &WallClockInterval) -> Option<WallClockInterval> {
        if !self.overlaps(other) {
            return None;
        }
        // Strict overlap guarantees max(starts) < min(ends).
        Some(WallClockInterval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Whether this interval touches another end-to-start, in either
    /// order.
    pub fn abuts(&self, other: &WallClockInterval) -> bool {
        self.start_seconds() == other.end_seconds() || self.end_seconds() == other.start_seconds()
    }

    /// The span strictly between this interval and another, or `None`
    /// when they overlap or abut.
    pub fn gap(&self, other: &WallClockInterval) -> Option<WallClockInterval> {
        if self.start_seconds() > other.end_seconds() {
            return Some(WallClockInterval {
                start: other.end,
                end: self.start,
            });
        }
        if other.start_seconds() > self.end_seconds() {
            return Some(WallClockInterval {
                start: self.end,
                end: other.start,
            });
        }
        None
    }

    /// Whether a seconds-of-day value falls inside this half-open
    /// interval.
    pub fn contains_seconds(&self, seconds_of_day: i32) -> bool {
        seconds_of_day >= self.start_seconds() && seconds_of_day < self.end_seconds()
    }

    /// Whether a wall-clock time falls inside this interval.
    pub fn contains(&self, clock: WallClock) -> bool {
        self.contains_seconds(clock.seconds_of_day())
    }

    /// Whether another interval lies entirely inside this one.
    ///
    /// The other interval's start must fall strictly before this end, so
    /// a zero-length interval is not contained in itself.
    pub fn contains_interval(&self, other: &WallClockInterval) -> bool {
        self.start_seconds() <= other.start_seconds()
            && other.start_seconds() < self.end_seconds()
            && other.end_seconds() <= self.end_seconds()
    }

    /// Format as `HHmmss/HHmmss`.
    pub fn print_basic(&self) -> String {
        format!("{}/{}", self.start.print_basic(), self.end.print_basic())
    }

    /// Format as `HH:mm:ss/HH:mm:ss`.
    pub fn print_extended(&self) -> String {
        format!("{}/{}", self.start.print_extended(), self.end.print_extended())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
