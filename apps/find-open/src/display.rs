//! Console rendering of lookup results and catalog dumps.

use std::io::{self, Write};

use oh_catalog::{Catalog, Restaurant};

use crate::moment::QueryPoint;

/// `N restaurants are open on "Ddd" at "HHMM" (24-hr time):` followed by
/// the names, sorted, one per tab-indented line.
pub fn render_open(open: &[&Restaurant], point: QueryPoint) -> String {
    let mut names: Vec<&str> = open.iter().map(|r| r.name()).collect();
    names.sort_unstable();

    let mut out = format!(
        "{} restaurants are open on \"{}\" at \"{}\" (24-hr time):",
        names.len(),
        point.day,
        point.hhmm()
    );
    for name in names {
        out.push_str("\n\t");
        out.push_str(name);
    }
    out
}

/// Print every restaurant's raw lines, warnings and parsed table.
pub fn dump_catalog<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    writeln!(out, "Dumping restaurant results...")?;
    for restaurant in catalog {
        writeln!(out, "{restaurant}")?;
    }
    Ok(())
}
