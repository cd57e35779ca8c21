//! Interactive lookup loop.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use oh_catalog::Catalog;

use crate::display::render_open;
use crate::moment::{ECHO_FORMAT, QueryPoint, parse_moment};

/// Prompt for moments and print what is open, until an empty line or EOF.
///
/// Time-only answers are taken to be on `today`.
pub fn run<R: BufRead, W: Write>(
    catalog: &Catalog,
    mut input: R,
    out:     &mut W,
    today:   NaiveDate,
) -> io::Result<()> {
    writeln!(out, "\n========== Find Open Restaurants")?;

    loop {
        let Some(moment) = prompt_for_moment(&mut input, out, today)? else {
            return Ok(());
        };

        let point = QueryPoint::from_datetime(&moment)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        log::debug!("query {} {}", point.day, point.time);

        let open = catalog.find_open(point.day, point.time);
        writeln!(out, "{}", render_open(&open, point))?;
    }
}

/// One prompt cycle; re-asks until the text parses.  `None` means "stop".
fn prompt_for_moment<R: BufRead, W: Write>(
    input: &mut R,
    out:   &mut W,
    today: NaiveDate,
) -> io::Result<Option<chrono::NaiveDateTime>> {
    loop {
        write!(out, "Enter the desired date and time (none to exit): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let text = line.trim();
        if text.is_empty() {
            return Ok(None);
        }

        match parse_moment(text, today) {
            Some(moment) => {
                writeln!(out, "\tUsing time: {}", moment.format(ECHO_FORMAT))?;
                return Ok(Some(moment));
            }
            None => {
                writeln!(out, "\tCould not parse date/time string \"{text}\". Please re-enter.")?;
            }
        }
    }
}
