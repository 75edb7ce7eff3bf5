//! Six-valued comparison predicates over optional instants.
//!
//! [`Comparison::apply`] is a total function: if either operand is absent
//! the predicate is `false` — no panic, no error. This includes [`Neq`]:
//! two absent instants are *not* "not equal". Callers that thread optional
//! instants through traversal code rely on this, so it is contract, not
//! accident.
//!
//! [`Neq`]: Comparison::Neq

use chrono::{DateTime, Utc};

/// A comparison predicate between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Strictly precedes.
    Lt,
    /// Precedes or equals.
    LtEq,
    /// Equals.
    Eq,
    /// Does not equal.
    Neq,
    /// Follows or equals.
    GtEq,
    /// Strictly follows.
    Gt,
}

impl Comparison {
    /// Apply this predicate to two optional instants.
    ///
    /// Returns `false` whenever either operand is `None`, for every
    /// variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::DateTime;
    /// use timegrid::Comparison;
    ///
    /// let a = DateTime::from_timestamp(0, 0);
    /// let b = DateTime::from_timestamp(60, 0);
    ///
    /// assert!(Comparison::Lt.apply(a, b));
    /// assert!(!Comparison::Neq.apply(a, None));
    /// ```
    pub fn apply(self, left: Option<DateTime<Utc>>, right: Option<DateTime<Utc>>) -> bool {
        let (Some(l), Some(r)) = (left, right) else {
            return false;
        };
        match self {
            Comparison::Lt => l < r,
            Comparison::LtEq => l <= r,
            Comparison::Eq => l == r,
            Comparison::Neq => l != r,
            Comparison::GtEq => l >= r,
            Comparison::Gt => l > r,
        }
    }

    /// The predicate with its ordering sense flipped: `Lt` ↔ `Gt`,
    /// `LtEq` ↔ `GtEq`. `Eq` and `Neq` are direction-neutral.
    pub fn mirrored(self) -> Comparison {
        match self {
            Comparison::Lt => Comparison::Gt,
            Comparison::LtEq => Comparison::GtEq,
            Comparison::Eq => Comparison::Eq,
            Comparison::Neq => Comparison::Neq,
            Comparison::GtEq => Comparison::LtEq,
            Comparison::Gt => Comparison::Lt,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
