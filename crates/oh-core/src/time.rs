//! Time-of-day model.
//!
//! # Design
//!
//! A point within a day is a [`MinuteOfDay`]: minutes elapsed since local
//! midnight.  The domain is `0..=1440`, where `1440`
//! ([`MinuteOfDay::END_OF_DAY`]) is only ever used as an exclusive upper
//! bound meaning "midnight at the end of this day".  It is distinct from `0`
//! ([`MinuteOfDay::MIDNIGHT`]), midnight at the start of the day.
//!
//! Schedule text uses 12-hour readings ([`ClockTime`]); those are converted
//! once, at parse time, and everything downstream works in integer minutes
//! so comparisons are exact and O(1).

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

// ── MinuteOfDay ───────────────────────────────────────────────────────────────

/// Minutes since local midnight, `0..=1440`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    pub const MIDNIGHT: MinuteOfDay = MinuteOfDay(0);

    /// End-exclusive sentinel: midnight at the end of the day.
    pub const END_OF_DAY: MinuteOfDay = MinuteOfDay(24 * 60);

    /// Wrap a raw minute count, rejecting values past [`Self::END_OF_DAY`].
    pub fn new(minutes: u16) -> CoreResult<Self> {
        if minutes > Self::END_OF_DAY.0 {
            return Err(CoreError::MinuteOfDayOutOfRange {
                hour:   minutes / 60,
                minute: minutes % 60,
            });
        }
        Ok(Self(minutes))
    }

    /// Build from a 24-hour reading.  `24:00` is accepted and yields
    /// [`Self::END_OF_DAY`]; anything else must satisfy `hour < 24`,
    /// `minute < 60`.
    pub fn from_hm(hour: u16, minute: u16) -> CoreResult<Self> {
        let valid = (hour < 24 && minute < 60) || (hour == 24 && minute == 0);
        if !valid {
            return Err(CoreError::MinuteOfDayOutOfRange { hour, minute });
        }
        Ok(Self(hour * 60 + minute))
    }

    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    /// 24-hour clock hour (`24` only for the end-of-day sentinel).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// `true` for the end-of-day sentinel, which is never a valid start.
    #[inline]
    pub fn is_end_of_day(self) -> bool {
        self == Self::END_OF_DAY
    }
}

impl fmt::Display for MinuteOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// ── Meridiem ──────────────────────────────────────────────────────────────────

/// Half of a 12-hour clock day.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Meridiem {
    Am,
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        })
    }
}

impl FromStr for Meridiem {
    type Err = CoreError;

    /// Case-insensitive: `am`, `AM`, `Pm`, … are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("am") {
            Ok(Meridiem::Am)
        } else if s.eq_ignore_ascii_case("pm") {
            Ok(Meridiem::Pm)
        } else {
            Err(CoreError::UnknownMeridiem(s.to_owned()))
        }
    }
}

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A 12-hour wall-clock reading such as `4:30 pm`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime {
    hour:     u8,
    minute:   u8,
    meridiem: Meridiem,
}

impl ClockTime {
    /// Validate `hour` in `1..=12` and `minute` in `0..=59`.
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> CoreResult<Self> {
        if !(1..=12).contains(&hour) {
            return Err(CoreError::HourOutOfRange(hour));
        }
        if minute >= 60 {
            return Err(CoreError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute, meridiem })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn meridiem(self) -> Meridiem {
        self.meridiem
    }

    /// 12 → 24 hour conversion: `12 am` is hour 0, `12 pm` is hour 12, any
    /// other pm hour gains 12.  Always in `0..1440`.
    pub fn minute_of_day(self) -> MinuteOfDay {
        let hour24 = match (self.hour, self.meridiem) {
            (12, Meridiem::Am) => 0,
            (12, Meridiem::Pm) => 12,
            (h, Meridiem::Am) => h,
            (h, Meridiem::Pm) => h + 12,
        };
        MinuteOfDay(hour24 as u16 * 60 + self.minute as u16)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

// ── OpenInterval ──────────────────────────────────────────────────────────────

/// One contiguous open period `[open, close)` within a single day.
///
/// `open < close` always holds; zero-length periods are unrepresentable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenInterval {
    open:  MinuteOfDay,
    close: MinuteOfDay,
}

impl OpenInterval {
    /// `None` unless `open < close`.
    pub fn new(open: MinuteOfDay, close: MinuteOfDay) -> Option<Self> {
        (open < close).then_some(Self { open, close })
    }

    #[inline]
    pub fn open(self) -> MinuteOfDay {
        self.open
    }

    #[inline]
    pub fn close(self) -> MinuteOfDay {
        self.close
    }

    /// Inclusive at `open`, exclusive at `close`.
    #[inline]
    pub fn contains(self, time: MinuteOfDay) -> bool {
        self.open <= time && time < self.close
    }

    /// Length in minutes (always ≥ 1).
    #[inline]
    pub fn duration_minutes(self) -> u16 {
        self.close.0 - self.open.0
    }
}

impl fmt::Display for OpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.open, self.close)
    }
}
