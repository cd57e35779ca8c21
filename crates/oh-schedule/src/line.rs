//! Schedule line → `ScheduleTable`.

use oh_core::Weekday;

use crate::parser::{ScheduleLine, parse_schedule_line};
use crate::resolve::{enumerate_days, resolve_time_range};
use crate::{ScheduleTable, ScheduleWarning};

/// Parse one schedule line into the intervals it opens.
///
/// An empty line is not an error and yields an empty table.  A line that
/// does not match the grammar yields [`ScheduleWarning::UnexpectedFormat`].
pub fn parse_line(text: &str) -> Result<ScheduleTable, ScheduleWarning> {
    if text.is_empty() {
        return Ok(ScheduleTable::new());
    }

    let line = parse_schedule_line(text).map_err(|cause| ScheduleWarning::UnexpectedFormat {
        schedule: text.to_owned(),
        cause,
    })?;

    Ok(line.to_table())
}

impl ScheduleLine {
    /// Every listed day, range by range.  Overlapping ranges repeat days.
    pub fn days(&self) -> Vec<Weekday> {
        self.day_ranges
            .iter()
            .flat_map(|range| enumerate_days(Some(range.start), range.end))
            .collect()
    }

    /// Apply the time range to every listed day.  The overflow part of a
    /// range crossing midnight lands on the following day.
    pub fn to_table(&self) -> ScheduleTable {
        let resolved = resolve_time_range(self.start, self.end);
        let mut table = ScheduleTable::new();

        for day in self.days() {
            if let Some(primary) = resolved.primary {
                table.push(day, primary);
            }
            if let Some(overflow) = resolved.overflow {
                table.push(day.next(), overflow);
            }
        }

        table
    }
}
