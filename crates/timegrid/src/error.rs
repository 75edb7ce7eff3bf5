//! Error types for timegrid operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeGridError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid wall clock: {0}")]
    InvalidWallClock(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, TimeGridError>;
