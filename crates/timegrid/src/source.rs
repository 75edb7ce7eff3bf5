//! Pluggable sources of "now".
//!
//! Everything else in this crate takes instants as explicit inputs; the
//! one place the system clock is allowed in is behind the
//! [`InstantSource`] seam. Production code injects
//! [`SystemInstantSource`]; tests inject [`StaticInstantSource`] or
//! [`OffsetInstantSource`] to pin or shift time.

use chrono::{DateTime, Duration, Utc};

use crate::error::Result;
use crate::period::Period;

/// A strategy producing instants.
pub trait InstantSource {
    /// The current instant according to this source.
    fn instant(&self) -> DateTime<Utc>;

    /// The instant this source derives from the supplied anchor.
    fn instant_from(&self, anchor: DateTime<Utc>) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInstantSource;

impl InstantSource for SystemInstantSource {
    fn instant(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Ignores the anchor; the system clock is the only authority here.
    fn instant_from(&self, _anchor: DateTime<Utc>) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A source pinned to one fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct StaticInstantSource {
    instant: DateTime<Utc>,
}

impl StaticInstantSource {
    pub fn new(instant: DateTime<Utc>) -> StaticInstantSource {
        StaticInstantSource { instant }
    }
}

impl InstantSource for StaticInstantSource {
    fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    fn instant_from(&self, _anchor: DateTime<Utc>) -> DateTime<Utc> {
        self.instant
    }
}

/// A source that shifts time by a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct OffsetInstantSource {
    offset: Duration,
}

impl OffsetInstantSource {
    pub fn new(offset: Duration) -> OffsetInstantSource {
        OffsetInstantSource { offset }
    }

    /// Build from a [`Period`], resolved through
    /// [`Period::to_standard_duration`] at construction so a bad period
    /// fails here rather than on every read.
    ///
    /// # Errors
    ///
    /// Returns [`TimeGridError::InvalidPeriod`] if the period carries
    /// year or month fields.
    ///
    /// [`TimeGridError::InvalidPeriod`]: crate::TimeGridError::InvalidPeriod
    pub fn from_period(period: &Period) -> Result<OffsetInstantSource> {
        Ok(OffsetInstantSource {
            offset: period.to_standard_duration()?,
        })
    }

    pub fn offset(&self) -> Duration {
        self.offset
    }
}

impl InstantSource for OffsetInstantSource {
    fn instant(&self) -> DateTime<Utc> {
        self.instant_from(Utc::now())
    }

    fn instant_from(&self, anchor: DateTime<Utc>) -> DateTime<Utc> {
        anchor + self.offset
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
