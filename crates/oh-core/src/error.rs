//! Error type for constructing core values from untrusted input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown weekday {0:?}: expected one of Mon, Tue, Wed, Thu, Fri, Sat, Sun")]
    UnknownWeekday(String),

    #[error("unknown meridiem {0:?}: expected \"am\" or \"pm\"")]
    UnknownMeridiem(String),

    #[error("hour {0} is outside the 12-hour clock range 1..=12")]
    HourOutOfRange(u8),

    #[error("minute {0} is outside the range 0..=59")]
    MinuteOutOfRange(u8),

    #[error("{hour:02}:{minute:02} is not a valid minute of day")]
    MinuteOfDayOutOfRange { hour: u16, minute: u16 },
}

/// Shorthand result type for `oh-core` constructors.
pub type CoreResult<T> = Result<T, CoreError>;
