//! Tests for the find-open application layer.

use chrono::{NaiveDate, NaiveDateTime};

use oh_catalog::{Catalog, Restaurant};
use oh_core::{MinuteOfDay, Weekday};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn today() -> NaiveDate {
    // A Friday.
    NaiveDate::from_ymd_opt(2023, 2, 3).unwrap()
}

fn datetime(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M").unwrap()
}

fn abc_catalog() -> Catalog {
    let r = |name: &str, lines: &[&str]| {
        Restaurant::new(name, lines.iter().map(|s| s.to_string()).collect())
    };
    Catalog::new(vec![
        r("A", &["Mon-Thu 9:00 pm - 11:30 pm", "Fri-Sat 6:00pm - 12:30am"]),
        r("C", &["Mon-Tue 4:00 pm - 9:30 pm"]),
        r("B", &["Mon 8:00 pm - 10:00 pm"]),
    ])
}

// ── Moments ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod moment {
    use super::*;
    use crate::moment::{QueryPoint, parse_moment};

    fn point(text: &str) -> QueryPoint {
        QueryPoint::from_datetime(&parse_moment(text, today()).unwrap()).unwrap()
    }

    #[test]
    fn query_point_from_datetime() {
        let p = QueryPoint::from_datetime(&datetime("2023-02-03 01:01")).unwrap();
        assert_eq!((p.day, p.hhmm()), (Weekday::Fri, "0101".to_owned()));

        let p = QueryPoint::from_datetime(&datetime("2023-02-04 13:20")).unwrap();
        assert_eq!((p.day, p.hhmm()), (Weekday::Sat, "1320".to_owned()));

        let p = QueryPoint::from_datetime(&datetime("2023-02-05 14:35")).unwrap();
        assert_eq!((p.day, p.hhmm()), (Weekday::Sun, "1435".to_owned()));
        assert_eq!(p.time, MinuteOfDay::from_hm(14, 35).unwrap());
    }

    #[test]
    fn last_minute_of_the_day_is_not_midnight() {
        let p = QueryPoint::from_datetime(&datetime("2023-02-05 23:59")).unwrap();
        assert_eq!(p.time.get(), 23 * 60 + 59);
        assert_eq!(p.hhmm(), "2359");
    }

    #[test]
    fn full_date_and_time_forms() {
        let expected = datetime("2023-02-03 13:05");
        for text in [
            "2023-02-03 13:05",
            "2023-02-03T13:05",
            "2023-02-03 13:05:00",
            "2023-02-03 1:05 pm",
            "2023-02-03 1:05PM",
            "02/03/2023 1:05 pm",
            "02/03/2023 13:05",
            "  2023-02-03    1:05   Pm ",
        ] {
            assert_eq!(parse_moment(text, today()), Some(expected), "{text}");
        }
    }

    #[test]
    fn date_alone_is_midnight() {
        assert_eq!(parse_moment("2023-02-06", today()), Some(datetime("2023-02-06 00:00")));
    }

    #[test]
    fn time_alone_uses_today() {
        assert_eq!(parse_moment("9:30 pm", today()), Some(datetime("2023-02-03 21:30")));
        assert_eq!(parse_moment("21:30", today()), Some(datetime("2023-02-03 21:30")));
        assert_eq!(parse_moment("9pm", today()), Some(datetime("2023-02-03 21:00")));
        assert_eq!(parse_moment("12 am", today()), Some(datetime("2023-02-03 00:00")));
    }

    #[test]
    fn weekday_follows_the_date() {
        assert_eq!(point("2023-02-06 12:00").day, Weekday::Mon);
        assert_eq!(point("2023-02-05 12:00").day, Weekday::Sun);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_moment("", today()), None);
        assert_eq!(parse_moment("tomorrow-ish", today()), None);
        assert_eq!(parse_moment("25:00", today()), None);
        assert_eq!(parse_moment("2023-02-30 10:00", today()), None);
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod display {
    use super::*;
    use crate::display::{dump_catalog, render_open};
    use crate::moment::QueryPoint;

    #[test]
    fn names_are_sorted_for_display() {
        let catalog = abc_catalog();
        let point = QueryPoint::from_datetime(&datetime("2023-02-06 21:00")).unwrap();
        let open = catalog.find_open(point.day, point.time);
        assert_eq!(
            render_open(&open, point),
            "3 restaurants are open on \"Mon\" at \"2100\" (24-hr time):\n\tA\n\tB\n\tC"
        );
    }

    #[test]
    fn nothing_open() {
        let point = QueryPoint::from_datetime(&datetime("2023-02-08 12:00")).unwrap();
        assert_eq!(
            render_open(&[], point),
            "0 restaurants are open on \"Wed\" at \"1200\" (24-hr time):"
        );
    }

    #[test]
    fn dump_lists_every_restaurant() {
        let mut out = Vec::new();
        dump_catalog(&abc_catalog(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Dumping restaurant results...\n"));
        assert_eq!(text.matches("Parsed schedule:").count(), 3);
        assert!(text.contains("\tSat: 00:00-00:30, 18:00-24:00\n"));
    }
}

// ── Prompt loop ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod prompt {
    use std::io::Cursor;

    use super::*;

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        crate::prompt::run(&abc_catalog(), Cursor::new(input), &mut out, today()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn answers_until_empty_line() {
        let out = session("2023-02-06 5pm\n2023-02-04 12:00 am\n\n2023-02-06 21:00\n");
        assert!(out.contains("Using time: 2023-02-06 05:00 PM (Mon)"));
        assert!(out.contains("1 restaurants are open on \"Mon\" at \"1700\" (24-hr time):\n\tC\n"));
        assert!(out.contains("1 restaurants are open on \"Sat\" at \"0000\" (24-hr time):\n\tA\n"));
        assert!(!out.contains("\"2100\""));
    }

    #[test]
    fn reprompts_on_unparsable_input() {
        let out = session("whenever\n9:45 pm\n");
        assert!(out.contains("Could not parse date/time string \"whenever\". Please re-enter."));
        assert!(out.contains("Using time: 2023-02-03 09:45 PM (Fri)"));
        assert!(out.contains("on \"Fri\" at \"2145\""));
        assert_eq!(out.matches("Enter the desired date and time").count(), 3);
    }

    #[test]
    fn eof_ends_the_session() {
        let out = session("");
        assert_eq!(out.matches("Enter the desired date and time").count(), 1);
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use std::path::PathBuf;

    use crate::config::{CliArgs, Command, ConfigError, FinderConfig};

    fn args(list: &[&str]) -> Result<CliArgs, ConfigError> {
        CliArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let config = FinderConfig::default();
        assert_eq!(config.restaurants_path, PathBuf::from("rest_hours.json"));
        assert_eq!(config.log_level, "info");
        assert_eq!(args(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn toml_overrides_and_partial_files() {
        let config = FinderConfig::from_toml_str(
            "restaurants_path = \"data/rest_hours.json\"\nlog_level = \"warn\"\n",
        )
        .unwrap();
        assert_eq!(config.restaurants_path, PathBuf::from("data/rest_hours.json"));
        assert_eq!(config.log_level, "warn");

        let partial = FinderConfig::from_toml_str("log_level = \"debug\"").unwrap();
        assert_eq!(partial.restaurants_path, PathBuf::from("rest_hours.json"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            FinderConfig::from_toml_str("restaurant_file = \"x.json\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn cli_flags_and_command() {
        let parsed = args(&["--data", "x.json", "dump"]).unwrap();
        assert_eq!(parsed.data, Some(PathBuf::from("x.json")));
        assert_eq!(parsed.command, Command::Dump);

        let config = FinderConfig::resolve(&parsed).unwrap();
        assert_eq!(config.restaurants_path, PathBuf::from("x.json"));
    }

    #[test]
    fn cli_usage_errors() {
        assert!(matches!(args(&["--config"]), Err(ConfigError::Usage(_))));
        assert!(matches!(args(&["test"]), Err(ConfigError::Usage(_))));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let parsed = args(&["--config", "/definitely/not/here.toml"]).unwrap();
        assert!(matches!(FinderConfig::resolve(&parsed), Err(ConfigError::Io { .. })));
    }
}
