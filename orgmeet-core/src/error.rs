//! Error types for orgmeet operations.

use thiserror::Error;

/// Errors that can occur while building or querying a meeting schedule.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Wrong file format: {0}")]
    WrongFileFormat(String),
}

/// Result type alias for orgmeet operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
