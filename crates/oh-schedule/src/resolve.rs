//! Interval arithmetic: day ranges → day lists, clock ranges → intervals.
//!
//! # Two kinds of midnight
//!
//! A closing time of `12:00 am` means midnight at the *end* of the opening
//! day, so it becomes [`MinuteOfDay::END_OF_DAY`] (1440).  An opening time of
//! `12:00 am` is midnight at the *start* of the day (0).  A range whose
//! closing time is earlier than its opening time crosses midnight and is
//! split in two:
//!
//! ```text
//! 10:00 pm – 2:00 am   →   primary  [22:00, 24:00)   on the listed day
//!                          overflow [00:00, 02:00)   on the following day
//! 10:00 pm – 12:00 am  →   primary  [22:00, 24:00)   (no overflow)
//! ```

use oh_core::{ClockTime, MinuteOfDay, OpenInterval, Weekday};

/// Expand a day range into its days, walking forward and wrapping past `Sun`.
///
/// `start == None` yields no days; `end == None` means a single day.
pub fn enumerate_days(start: Option<Weekday>, end: Option<Weekday>) -> Vec<Weekday> {
    let Some(start) = start else {
        return Vec::new();
    };
    let end = end.unwrap_or(start);

    std::iter::successors(Some(start), |day| Some(day.next()))
        .take(start.days_until(end) + 1)
        .collect()
}

/// The one or two intervals a textual time range resolves to.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct ResolvedRange {
    /// Interval on the day the range is listed for.
    pub primary:  Option<OpenInterval>,
    /// Part past midnight, attributed to the next day.
    pub overflow: Option<OpenInterval>,
}

impl ResolvedRange {
    /// `true` for a zero-length range (opening == closing).
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.overflow.is_none()
    }
}

/// Resolve `start`–`end` into day-bound intervals, splitting at midnight.
pub fn resolve_time_range(start: ClockTime, end: ClockTime) -> ResolvedRange {
    let open = start.minute_of_day();
    let close = end.minute_of_day();

    if close >= open {
        // Same-day range; `OpenInterval::new` drops the zero-length case.
        return ResolvedRange {
            primary:  OpenInterval::new(open, close),
            overflow: None,
        };
    }

    // Crosses midnight.  A closing time of exactly midnight leaves an empty
    // overflow, so it only extends the primary interval to 24:00.
    ResolvedRange {
        primary:  OpenInterval::new(open, MinuteOfDay::END_OF_DAY),
        overflow: OpenInterval::new(MinuteOfDay::MIDNIGHT, close),
    }
}
