//! `oh-schedule`: free-text weekly schedules turned into day→interval tables.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`lexer`]     | `Token`, `TokenKind`, `tokenize`                           |
//! | [`parser`]    | `ScheduleLine`, `DayRange`, `parse_schedule_line`          |
//! | [`resolve`]   | `enumerate_days`, `resolve_time_range`, `ResolvedRange`    |
//! | [`table`]     | `ScheduleTable` (`Weekday → Vec<OpenInterval>`)            |
//! | [`line`]      | `parse_line`                                               |
//! | [`aggregate`] | `aggregate`, `Aggregate`                                   |
//! | [`error`]     | `SyntaxError`, `ScheduleWarning`                           |
//!
//! # Pipeline (summary)
//!
//! ```text
//! "Fri-Sat 10:00pm-12:30am"
//!   ── tokenize ──────────▶ [Fri] [-] [Sat] [10] [:] [00] [pm] [-] [12] …
//!   ── parse_schedule_line ▶ ScheduleLine { days: Fri-Sat, 10:00 pm → 12:30 am }
//!   ── resolve ───────────▶ primary [22:00, 24:00)  overflow [00:00, 00:30)
//!   ── parse_line ────────▶ Fri: [22:00-24:00]
//!                           Sat: [00:00-00:30, 22:00-24:00]
//!                           Sun: [00:00-00:30]
//! ```
//!
//! A line that does not match the grammar yields a [`ScheduleWarning`] and
//! contributes nothing; it never aborts the surrounding aggregate.

pub mod aggregate;
pub mod error;
pub mod lexer;
pub mod line;
pub mod parser;
pub mod resolve;
pub mod table;


pub use aggregate::{Aggregate, aggregate};
pub use error::{ScheduleWarning, SyntaxError};
pub use line::parse_line;
pub use parser::{DayRange, ScheduleLine, parse_schedule_line};
pub use resolve::{ResolvedRange, enumerate_days, resolve_time_range};
pub use table::ScheduleTable;
