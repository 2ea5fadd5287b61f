//! # course-dashboard
//!
//! Descriptive statistics over the course catalog, shaped for direct
//! charting: every aggregate is an ordered string-keyed series.
//!
//! Blank subject or level values are grouped under [`UNKNOWN_LABEL`] so
//! that per-group totals always reconcile with catalog totals. Records with
//! an unparseable publish date are left out of the time aggregates only.

pub mod aggregate;
pub mod summary;

pub use aggregate::{
    courses_by_level, subjects_per_level, subscribers_by_subject, time_aggregates,
    TimeAggregates, MONTH_NAMES, UNKNOWN_LABEL,
};
pub use summary::DashboardSummary;
