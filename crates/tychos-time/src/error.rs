//! Calendar parsing errors.

/// Errors produced while parsing civil dates and times.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The string is not shaped like `[-]YYYY-MM-DD`.
    #[error("malformed date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),

    /// The string is not shaped like `HH:MM:SS`.
    #[error("malformed time '{0}', expected HH:MM:SS")]
    MalformedTime(String),

    /// Month or day outside the calendar.
    #[error("date {0} does not exist")]
    DateOutOfRange(String),

    /// One of the ten days dropped by the 1582 calendar reform.
    #[error("date {0} falls in the October 1582 calendar reform gap")]
    ReformGap(String),

    /// Hour, minute or second outside the clock.
    #[error("time {0} is out of range")]
    TimeOutOfRange(String),
}
