//! `oh-catalog`: restaurants, the catalog, and JSON loading.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`restaurant`] | `RestaurantRecord`, `Restaurant`                         |
//! | [`catalog`]    | `Catalog`                                                |
//! | [`loader`]     | `load_catalog_json`, `load_catalog_reader`, `LoadedCatalog` |
//! | [`error`]      | `CatalogError`, `CatalogResult<T>`                       |
//!
//! Every `Restaurant` parses its schedule lines once, at construction.  After
//! that the catalog is read-only, so lookups can be issued from any number
//! of threads (see the `parallel` feature).

pub mod catalog;
pub mod error;
pub mod loader;
pub mod restaurant;


pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use loader::{LoadedCatalog, RejectedRecord, load_catalog_json, load_catalog_reader};
pub use restaurant::{Restaurant, RestaurantRecord};
