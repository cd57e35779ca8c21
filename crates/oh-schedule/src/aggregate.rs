//! Merge a restaurant's schedule lines into one table.

use std::error::Error as _;

use crate::{ScheduleTable, parse_line};

/// Combined table and warnings for a set of schedule lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Aggregate {
    pub table:    ScheduleTable,
    /// Display text of each [`ScheduleWarning`](crate::ScheduleWarning), in
    /// line order.
    pub warnings: Vec<String>,
}

/// Parse every line and append its intervals to one table.
///
/// Intervals land in line order, then in within-line order.  Lines that fail
/// to parse add a warning and nothing else.
pub fn aggregate<S: AsRef<str>>(lines: &[S]) -> Aggregate {
    let mut out = Aggregate::default();

    for line in lines {
        match parse_line(line.as_ref()) {
            Ok(table) => out.table.extend_from(&table),
            Err(warning) => {
                if let Some(cause) = warning.source() {
                    log::debug!("{warning}: {cause}");
                }
                out.warnings.push(warning.to_string());
            }
        }
    }

    out
}
