//! Free-form date/time text → the (weekday, minute-of-day) the catalog needs.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use oh_core::{CoreResult, MinuteOfDay, Weekday};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %I:%M %p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
    "%a %Y-%m-%d %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%I:%M %p"];

/// Format used to echo the moment back to the user.
pub const ECHO_FORMAT: &str = "%Y-%m-%d %I:%M %p (%a)";

// ── QueryPoint ────────────────────────────────────────────────────────────────

/// A moment reduced to what the open-query consumes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueryPoint {
    pub day:  Weekday,
    /// Exact `hour * 60 + minute`; not snapped to the schedule's half hours.
    pub time: MinuteOfDay,
}

impl QueryPoint {
    /// Chrono keeps `hour() < 24` and `minute() < 60`, so this only fails if
    /// that invariant is broken.
    pub fn from_datetime(moment: &NaiveDateTime) -> CoreResult<Self> {
        let time = MinuteOfDay::from_hm(moment.hour() as u16, moment.minute() as u16)?;
        Ok(Self { day: weekday_of(moment.weekday()), time })
    }

    /// 24-hour `HHMM`, as shown in results.
    pub fn hhmm(&self) -> String {
        format!("{:02}{:02}", self.time.hour(), self.time.minute())
    }
}

fn weekday_of(day: chrono::Weekday) -> Weekday {
    Weekday::from_index(day.num_days_from_monday() as usize)
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse a date and time, a date alone (midnight), or a time alone (on
/// `today`).  Meridiem markers are case-insensitive and an hour without
/// minutes (`"9pm"`) is accepted.  `None` if nothing fits.
pub fn parse_moment(text: &str, today: NaiveDate) -> Option<NaiveDateTime> {
    let text = normalize(text)?;

    if let Some(dt) = first_match(DATETIME_FORMATS, |f| NaiveDateTime::parse_from_str(&text, f)) {
        return Some(dt);
    }
    if let Some(date) = first_match(DATE_FORMATS, |f| NaiveDate::parse_from_str(&text, f)) {
        return date.and_hms_opt(0, 0, 0);
    }
    let time = first_match(TIME_FORMATS, |f| NaiveTime::parse_from_str(&text, f))?;
    Some(today.and_time(time))
}

fn first_match<T, E>(formats: &[&str], parse: impl Fn(&str) -> Result<T, E>) -> Option<T> {
    formats.iter().find_map(|f| parse(f).ok())
}

/// Collapse whitespace, uppercase, split a glued meridiem (`9:30PM` →
/// `9:30 PM`) and give a bare hour its minutes (`9 PM` → `9:00 PM`).
fn normalize(text: &str) -> Option<String> {
    let mut words: Vec<String> = text.split_whitespace().map(str::to_uppercase).collect();

    if let Some(last) = words.last().cloned() {
        for meridiem in ["AM", "PM"] {
            if let Some(head) = last.strip_suffix(meridiem).filter(|h| !h.is_empty()) {
                let head = head.to_owned();
                words.pop();
                words.push(head);
                words.push(meridiem.to_owned());
                break;
            }
        }
    }

    let n = words.len();
    if n >= 2 && matches!(words[n - 1].as_str(), "AM" | "PM") {
        let hour = &words[n - 2];
        if !hour.is_empty() && hour.len() <= 2 && hour.chars().all(|c| c.is_ascii_digit()) {
            words[n - 2] = format!("{hour}:00");
        }
    }

    (!words.is_empty()).then(|| words.join(" "))
}
