//! A restaurant and the input record it is built from.

use std::fmt;

use serde::Deserialize;

use oh_core::{MinuteOfDay, Weekday};
use oh_schedule::{ScheduleTable, aggregate};

// ── Input record ──────────────────────────────────────────────────────────────

/// One entry of the restaurant data file.
///
/// ```json
/// { "name": "Bean Counter", "times": ["Mon-Fri 7 am - 3 pm", "Sat 8 am - 1 pm"] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RestaurantRecord {
    pub name:  String,
    pub times: Vec<String>,
}

// ── Restaurant ────────────────────────────────────────────────────────────────

/// A named restaurant with its parsed weekly schedule.
///
/// The table and warnings are computed once in [`Restaurant::new`] and never
/// change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Restaurant {
    name:               String,
    raw_schedule_lines: Vec<String>,
    parse_warnings:     Vec<String>,
    table:              ScheduleTable,
}

impl Restaurant {
    /// Parse `schedule_lines` into this restaurant's table.  Unparsable lines
    /// are recorded in [`parse_warnings`](Self::parse_warnings) and skipped.
    pub fn new(name: impl Into<String>, schedule_lines: Vec<String>) -> Self {
        let parsed = aggregate(&schedule_lines);
        Self {
            name:               name.into(),
            raw_schedule_lines: schedule_lines,
            parse_warnings:     parsed.warnings,
            table:              parsed.table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schedule strings exactly as given.
    pub fn raw_schedule_lines(&self) -> &[String] {
        &self.raw_schedule_lines
    }

    /// One message per schedule line that failed to parse, in line order.
    pub fn parse_warnings(&self) -> &[String] {
        &self.parse_warnings
    }

    pub fn table(&self) -> &ScheduleTable {
        &self.table
    }

    /// `true` if the restaurant is open on `day` at `time`.
    #[inline]
    pub fn is_open(&self, day: Weekday, time: MinuteOfDay) -> bool {
        self.table.is_open(day, time)
    }
}

impl From<RestaurantRecord> for Restaurant {
    fn from(record: RestaurantRecord) -> Self {
        Restaurant::new(record.name, record.times)
    }
}

impl fmt::Display for Restaurant {
    /// Multi-line dump: raw lines, warnings (if any), then the parsed table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Restaurant {:?} with schedule {:?}", self.name, self.raw_schedule_lines)?;
        if !self.parse_warnings.is_empty() {
            writeln!(f, "Warnings:")?;
            for warning in &self.parse_warnings {
                writeln!(f, "\t{warning}")?;
            }
        }
        writeln!(f, "Parsed schedule:")?;
        for line in self.table.to_string().lines() {
            writeln!(f, "\t{line}")?;
        }
        Ok(())
    }
}
