//! Dashboard summary bundle.

use serde::Serialize;

use course_types::{Catalog, Series};

use crate::aggregate::{
    courses_by_level, subjects_per_level, subscribers_by_subject, time_aggregates,
};

/// Every dashboard chart series, keyed by the names the dashboard page uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Subscribers by subject
    pub valuecounts: Series<u64>,
    /// Courses by level
    pub levelcounts: Series<u64>,
    /// Courses by "Subject_Level" pair
    pub subjectsperlevel: Series<u64>,
    /// Profit by year
    pub yearwiseprofitmap: Series<f64>,
    /// Subscribers by year
    pub subscriberscountmap: Series<u64>,
    /// Profit by month
    pub profitmonthwise: Series<f64>,
    /// Subscribers by month
    pub monthwisesub: Series<u64>,
}

impl DashboardSummary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let time = time_aggregates(catalog);
        Self {
            valuecounts: subscribers_by_subject(catalog),
            levelcounts: courses_by_level(catalog),
            subjectsperlevel: subjects_per_level(catalog),
            yearwiseprofitmap: time.profit_by_year,
            subscriberscountmap: time.subscribers_by_year,
            profitmonthwise: time.profit_by_month,
            monthwisesub: time.subscribers_by_month,
        }
    }
}
