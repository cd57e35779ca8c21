//! JSON catalog loader.
//!
//! # File format
//!
//! A JSON array with one object per restaurant:
//!
//! ```json
//! [
//!   { "name": "Bean Counter", "times": ["Mon-Fri 7 am - 3 pm"] },
//!   { "name": "Night Owl",    "times": ["Thu-Sat 8 pm - 2 am", "Sun 6 pm - 11 pm"] }
//! ]
//! ```
//!
//! Each element is decoded on its own.  An element missing `name` or `times`
//! (or with the wrong types) is reported as a [`RejectedRecord`] and skipped;
//! the rest of the file still loads.  Schedule lines that fail to parse are
//! not rejections: they stay on the restaurant as parse warnings.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::{Catalog, CatalogError, CatalogResult, RestaurantRecord};

// ── Result types ──────────────────────────────────────────────────────────────

/// An array element that could not be decoded as a [`RestaurantRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Zero-based position in the JSON array.
    pub index:  usize,
    pub reason: String,
}

/// A loaded catalog plus whatever had to be skipped.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub catalog:  Catalog,
    pub rejected: Vec<RejectedRecord>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a catalog from a JSON file.
pub fn load_catalog_json(path: &Path) -> CatalogResult<LoadedCatalog> {
    let file = std::fs::File::open(path)?;
    load_catalog_reader(std::io::BufReader::new(file))
}

/// Like [`load_catalog_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice).
pub fn load_catalog_reader<R: Read>(reader: R) -> CatalogResult<LoadedCatalog> {
    let elements = match serde_json::from_reader::<_, Value>(reader)? {
        Value::Array(elements) => elements,
        other => return Err(CatalogError::NotAnArray { found: kind_of(&other) }),
    };

    let mut records = Vec::with_capacity(elements.len());
    let mut rejected = Vec::new();

    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<RestaurantRecord>(element) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("skipping restaurant record #{index}: {e}");
                rejected.push(RejectedRecord { index, reason: e.to_string() });
            }
        }
    }

    let catalog = Catalog::from_records(records);
    for restaurant in &catalog {
        for warning in restaurant.parse_warnings() {
            log::warn!("{}: {warning}", restaurant.name());
        }
    }
    log::info!(
        "loaded {} restaurants ({} records rejected)",
        catalog.len(),
        rejected.len()
    );

    Ok(LoadedCatalog { catalog, rejected })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
