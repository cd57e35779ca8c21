//! `ScheduleTable`: per-day lists of open intervals.
//!
//! Stored as one `Vec` per weekday, indexed by [`Weekday::index`], so a day
//! that was never pushed to simply reads as an empty list.  Intervals keep
//! insertion order; duplicates and overlaps are preserved, never merged.

use std::fmt;

use oh_core::{MinuteOfDay, OpenInterval, Weekday};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleTable {
    days: [Vec<OpenInterval>; Weekday::COUNT],
}

impl ScheduleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `interval` to `day`'s list.
    #[inline]
    pub fn push(&mut self, day: Weekday, interval: OpenInterval) {
        self.days[day.index()].push(interval);
    }

    /// Intervals for `day` in insertion order (empty if never open).
    #[inline]
    pub fn intervals(&self, day: Weekday) -> &[OpenInterval] {
        &self.days[day.index()]
    }

    /// `true` if `day` has at least one interval.
    pub fn contains_day(&self, day: Weekday) -> bool {
        !self.days[day.index()].is_empty()
    }

    /// Days with at least one interval, in week order.
    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|&day| self.contains_day(day))
    }

    /// `(day, intervals)` for every day with at least one interval.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[OpenInterval])> + '_ {
        self.days().map(|day| (day, self.intervals(day)))
    }

    /// Total interval count across all days.
    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Append every interval of `other`, day by day, after this table's own.
    pub fn extend_from(&mut self, other: &ScheduleTable) {
        for (mine, theirs) in self.days.iter_mut().zip(&other.days) {
            mine.extend_from_slice(theirs);
        }
    }

    /// `true` if any interval of `day` contains `time`.
    ///
    /// Linear scan: intervals are unsorted and per-day counts are tiny.
    pub fn is_open(&self, day: Weekday, time: MinuteOfDay) -> bool {
        self.intervals(day).iter().any(|iv| iv.contains(time))
    }
}

impl Extend<(Weekday, OpenInterval)> for ScheduleTable {
    fn extend<I: IntoIterator<Item = (Weekday, OpenInterval)>>(&mut self, iter: I) {
        for (day, interval) in iter {
            self.push(day, interval);
        }
    }
}

impl FromIterator<(Weekday, OpenInterval)> for ScheduleTable {
    fn from_iter<I: IntoIterator<Item = (Weekday, OpenInterval)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl fmt::Display for ScheduleTable {
    /// One line per open day: `Sat: 00:00-00:30, 22:00-24:00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (day, intervals) in self.iter() {
            write!(f, "{day}:")?;
            for (i, iv) in intervals.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{iv}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
