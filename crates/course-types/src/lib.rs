//! # course-types
//!
//! Shared domain types for the course finder.
//!
//! This crate defines the core data structures used throughout the system:
//! - Course records and the ordered catalog they live in
//! - Value coercion for the loosely-typed dataset columns (price, dates)
//! - Settings: layered configuration for the service and CLI
//! - Series: insertion-ordered maps for chart and response payloads
//!
//! ## Usage
//!
//! ```rust
//! use course_types::{Catalog, CourseRecord};
//!
//! let catalog = Catalog::new(vec![CourseRecord::new("Finance 101")]);
//! assert_eq!(catalog.len(), 1);
//! ```

pub mod coerce;
pub mod config;
pub mod course;
pub mod error;
pub mod series;

pub use coerce::{coerce_price, coerce_subscribers, parse_published_date};
pub use config::{RecommendConfig, Settings, Weighting};
pub use course::{Catalog, CourseRecord};
pub use error::CourseError;
pub use series::Series;
