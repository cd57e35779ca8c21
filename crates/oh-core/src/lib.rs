//! `oh-core`: foundational types for the `open_hours` workspace.
//!
//! This crate is a dependency of every other `oh-*` crate.  It has no `oh-*`
//! dependencies and a single required external one (`thiserror`, plus an
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`weekday`]   | `Weekday` with its fixed cyclic ordering                  |
//! | [`time`]      | `MinuteOfDay`, `Meridiem`, `ClockTime`, `OpenInterval`    |
//! | [`error`]     | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod time;
pub mod weekday;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use time::{ClockTime, Meridiem, MinuteOfDay, OpenInterval};
pub use weekday::Weekday;
