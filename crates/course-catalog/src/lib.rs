//! # course-catalog
//!
//! Loads the course dataset into a typed [`Catalog`](course_types::Catalog).
//!
//! ## Features
//! - CSV parsing with header trimming and column alias normalization
//! - Schema validation: missing required columns fail the load with the
//!   lists of missing and available columns
//! - SHA-256 content hashing so callers can detect dataset changes

pub mod error;
pub mod loader;
pub mod schema;

pub use error::CatalogError;
pub use loader::{content_hash, load_catalog, parse_catalog, read_dataset, LoadedCatalog};
pub use schema::{ColumnMap, REQUIRED_COLUMNS};
