//! Segmentation of time spans into instants and sub-intervals.
//!
//! Two families of split, one derived pairing:
//!
//! - [`splits`] walks an [`Interval`] from the direction's start endpoint
//!   in fixed steps. When the step does not divide the interval evenly the
//!   stepping falls short of the traversal end, and the sequence is closed
//!   with the absolute `interval.end()` so the final segment is never
//!   silently truncated.
//! - [`splits_by_count`] produces exactly `count` instants from a start
//!   point. The caller dictates the shape, so there is no correction.
//! - [`intervalize`] pairs adjacent instants into sub-intervals, each
//!   normalized into chronological order regardless of traversal
//!   direction.
//!
//! Walking `[0ms, 240010ms]` forward with a one-minute step:
//!
//! ```
//! use timegrid::{instant, Direction, Interval};
//! use timegrid::split::splits;
//!
//! let interval = Interval::new(
//!     instant::from_secs(0)?,
//!     instant::parse_basic("19700101T000400Z")? + chrono::Duration::milliseconds(10),
//! )?;
//! let points = splits(Direction::Forward, &interval, 60_000)?;
//!
//! // Five whole steps, then the interval end closes the sequence.
//! assert_eq!(points.len(), 6);
//! assert_eq!(points[4], instant::parse_basic("19700101T000400Z")?);
//! assert_eq!(points[5], interval.end());
//! # Ok::<(), timegrid::TimeGridError>(())
//! ```

use chrono::{DateTime, Duration, Utc};

use crate::direction::Direction;
use crate::error::{Result, TimeGridError};
use crate::instant;
use crate::interval::Interval;
use crate::period::Period;

/// Split an interval into the instants reached by stepping `step_millis`
/// at a time from the direction's start endpoint.
///
/// Stepping continues while the current instant is at or before the
/// direction's end endpoint. If the last stepped instant does not land on
/// that endpoint exactly, the absolute `interval.end()` is appended.
///
/// # Errors
///
/// Returns [`TimeGridError::InvalidArgument`] if `step_millis` is not
/// positive or the interval is not strictly longer than one step, and
/// [`TimeGridError::Overflow`] if stepping leaves the representable
/// datetime range.
pub fn splits(
    direction: Direction,
    interval: &Interval,
    step_millis: i64,
) -> Result<Vec<DateTime<Utc>>> {
    if step_millis <= 0 {
        return Err(TimeGridError::InvalidArgument(format!(
            "step must be positive, got {step_millis}ms"
        )));
    }
    if interval.duration_millis() <= step_millis {
        return Err(TimeGridError::InvalidArgument(format!(
            "interval ({}ms) must be longer than the step ({step_millis}ms)",
            interval.duration_millis()
        )));
    }

    let end = direction.end(interval);
    let mut instants = Vec::new();
    let mut current = direction.start(interval);
    while direction.lteq(Some(current), Some(end)) {
        instants.push(current);
        current = direction.plus_millis(current, step_millis)?;
    }

    if instants.last() != Some(&end) {
        instants.push(interval.end());
    }

    Ok(instants)
}

/// [`splits`] with the step given as a [`Duration`].
pub fn splits_duration(
    direction: Direction,
    interval: &Interval,
    step: Duration,
) -> Result<Vec<DateTime<Utc>>> {
    splits(direction, interval, step.num_milliseconds())
}

/// [`splits`] with the step given as a [`Period`], resolved through
/// [`Period::to_standard_duration`].
pub fn splits_period(
    direction: Direction,
    interval: &Interval,
    step: &Period,
) -> Result<Vec<DateTime<Utc>>> {
    splits(direction, interval, step.to_standard_millis()?)
}

/// Produce exactly `count` instants from `start`, each one step further
/// along the direction of travel: `start`, `start ± step`,
/// `start ± 2·step`, and so on.
///
/// # Errors
///
/// Returns [`TimeGridError::InvalidArgument`] if `count` is not greater
/// than one or `step_millis` is zero, and [`TimeGridError::Overflow`] if
/// an offset or instant leaves the representable range.
pub fn splits_by_count(
    direction: Direction,
    start: DateTime<Utc>,
    count: i64,
    step_millis: i64,
) -> Result<Vec<DateTime<Utc>>> {
    if count <= 1 {
        return Err(TimeGridError::InvalidArgument(format!(
            "count must be greater than one, got {count}"
        )));
    }
    if step_millis == 0 {
        return Err(TimeGridError::InvalidArgument(
            "step must not be zero".to_string(),
        ));
    }

    let mut instants = Vec::with_capacity(count as usize);
    for i in 0..count {
        let offset = i.checked_mul(step_millis).ok_or_else(|| {
            TimeGridError::Overflow(format!("step offset {i} * {step_millis}ms overflows"))
        })?;
        instants.push(direction.plus_millis(start, offset)?);
    }
    Ok(instants)
}

/// [`splits_by_count`] with the step given as a [`Duration`].
pub fn splits_by_count_duration(
    direction: Direction,
    start: DateTime<Utc>,
    count: i64,
    step: Duration,
) -> Result<Vec<DateTime<Utc>>> {
    splits_by_count(direction, start, count, step.num_milliseconds())
}

/// [`splits_by_count`] with the step given as a [`Period`].
pub fn splits_by_count_period(
    direction: Direction,
    start: DateTime<Utc>,
    count: i64,
    step: &Period,
) -> Result<Vec<DateTime<Utc>>> {
    splits_by_count(direction, start, count, step.to_standard_millis()?)
}

/// Pair each adjacent couple of instants into a sub-interval.
///
/// Every produced interval is stored in chronological order — for a pair
/// `(a, b)` the interval is `[lesser, greater]` — so a reverse traversal
/// yields well-formed intervals in descending start order.
///
/// # Errors
///
/// Returns [`TimeGridError::InvalidArgument`] if fewer than two instants
/// are supplied.
pub fn intervalize(instants: &[DateTime<Utc>]) -> Result<Vec<Interval>> {
    if instants.len() <= 1 {
        return Err(TimeGridError::InvalidArgument(format!(
            "need more than one instant, got {}",
            instants.len()
        )));
    }
    instants
        .windows(2)
        .map(|pair| {
            Interval::new(
                instant::lesser(pair[0], pair[1]),
                instant::greater(pair[0], pair[1]),
            )
        })
        .collect()
}

/// Split an interval into sub-intervals: [`splits`] piped through
/// [`intervalize`].
pub fn intervals(
    direction: Direction,
    interval: &Interval,
    step_millis: i64,
) -> Result<Vec<Interval>> {
    intervalize(&splits(direction, interval, step_millis)?)
}

/// [`intervals`] with the step given as a [`Duration`].
pub fn intervals_duration(
    direction: Direction,
    interval: &Interval,
    step: Duration,
) -> Result<Vec<Interval>> {
    intervals(direction, interval, step.num_milliseconds())
}

/// [`intervals`] with the step given as a [`Period`].
pub fn intervals_period(
    direction: Direction,
    interval: &Interval,
    step: &Period,
) -> Result<Vec<Interval>> {
    intervals(direction, interval, step.to_standard_millis()?)
}

/// Produce exactly `count` sub-intervals from `start`: `count` intervals
/// need `count + 1` boundary instants, so this requests one extra split.
///
/// # Errors
///
/// Returns [`TimeGridError::InvalidArgument`] if `count` is not positive
/// or `step_millis` is zero.
pub fn intervals_by_count(
    direction: Direction,
    start: DateTime<Utc>,
    count: i64,
    step_millis: i64,
) -> Result<Vec<Interval>> {
    let boundaries = count.checked_add(1).ok_or_else(|| {
        TimeGridError::Overflow(format!("count {count} + 1 overflows"))
    })?;
    intervalize(&splits_by_count(direction, start, boundaries, step_millis)?)
}

/// [`intervals_by_count`] with the step given as a [`Duration`].
pub fn intervals_by_count_duration(
    direction: Direction,
    start: DateTime<Utc>,
    count: i64,
    step: Duration,
) -> Result<Vec<Interval>> {
    intervals_by_count(direction, start, count, step.num_milliseconds())
}

/// [`intervals_by_count`] with the step given as a [`Period`].
pub fn intervals_by_count_period(
    direction: Direction,
    start: DateTime<Utc>,
    count: i64,
    step: &Period,
) -> Result<Vec<Interval>> {
    intervals_by_count(direction, start, count, step.to_standard_millis()?)
}

// ── Tests ───────────────────────────────────────────────────────────────────
