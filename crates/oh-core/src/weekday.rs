//! Days of the week.
//!
//! The week is a fixed cycle `Mon → Tue → … → Sun → Mon`.  Every piece of
//! day arithmetic in the workspace goes through [`Weekday::index`] and
//! [`Weekday::from_index`], so the ordering lives in exactly one place
//! ([`Weekday::ALL`]).

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// One of the seven calendar days.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All days in week order, starting on Monday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Number of days in the cycle.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position in the week (`Mon` = 0, `Sun` = 6).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The day at position `i`, wrapping modulo 7.
    #[inline]
    pub fn from_index(i: usize) -> Weekday {
        Self::ALL[i % Self::COUNT]
    }

    /// The following day; `Sun.next()` is `Mon`.
    #[inline]
    pub fn next(self) -> Weekday {
        Self::from_index(self.index() + 1)
    }

    /// Number of steps forward from `self` to reach `other` (0..=6).
    #[inline]
    pub fn days_until(self, other: Weekday) -> usize {
        (other.index() + Self::COUNT - self.index()) % Self::COUNT
    }

    /// Standard 3-letter abbreviation, as used in schedule text.
    pub fn abbr(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

impl FromStr for Weekday {
    type Err = CoreError;

    /// Accepts exactly the 3-letter abbreviations (`"Mon"` … `"Sun"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.abbr() == s)
            .ok_or_else(|| CoreError::UnknownWeekday(s.to_owned()))
    }
}
