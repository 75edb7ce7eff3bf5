//! # timegrid
//!
//! Calendar arithmetic as pure values: direction-aware interval splitting,
//! wall-clock times with modular second arithmetic, and bit-exact
//! second-precision instant text.
//!
//! Every type is an immutable value and every operation is a pure function
//! over its inputs — no system clock access outside the explicit
//! [`source`] seam, no shared state, nothing to synchronize. Operations
//! either return a valid value or fail with a [`TimeGridError`] at the
//! point of violation; nothing is retried or swallowed.
//!
//! ## Modules
//!
//! - [`comparison`] — six-valued predicates over optional instants
//! - [`direction`] — forward/reverse traversal semantics
//! - [`instant`] — basic/extended instant text, flooring, extraction
//! - [`interval`] — `[start, end)` spans between instants
//! - [`period`] — ISO-8601 periods (`P1D`, `PT-33M`)
//! - [`split`] — interval/count segmentation and sub-interval pairing
//! - [`wall_clock`] — seconds-of-day times in `[0, 86400]`
//! - [`wall_clock_interval`] — overlap/abut/gap algebra over wall clocks
//! - [`source`] — pluggable "now" providers
//! - [`error`] — error types

pub mod comparison;
pub mod direction;
pub mod error;
pub mod instant;
pub mod interval;
pub mod period;
pub mod source;
pub mod split;
pub mod wall_clock;
pub mod wall_clock_interval;

pub use comparison::Comparison;
pub use direction::Direction;
pub use error::{Result, TimeGridError};
pub use interval::Interval;
pub use period::Period;
pub use source::{InstantSource, OffsetInstantSource, StaticInstantSource, SystemInstantSource};
pub use split::{intervalize, intervals, intervals_by_count, splits, splits_by_count};
pub use wall_clock::{Rounding, WallClock};
pub use wall_clock_interval::WallClockInterval;
