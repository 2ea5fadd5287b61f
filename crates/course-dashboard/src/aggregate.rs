//! Group-by reductions over the catalog.

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::debug;

use course_types::{Catalog, Series};

/// Label used for blank subject or level values.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Calendar month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Group key for a subject or level: the raw value, or [`UNKNOWN_LABEL`] when blank.
fn label(value: &str) -> String {
    if value.trim().is_empty() {
        UNKNOWN_LABEL.to_string()
    } else {
        value.to_string()
    }
}

/// Order grouped totals by value descending; ties keep key order.
fn descending<V: Ord + Copy>(groups: BTreeMap<String, V>) -> Series<V> {
    let mut entries: Vec<(String, V)> = groups.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.into_iter().collect()
}

/// Total subscribers per subject, largest first.
pub fn subscribers_by_subject(catalog: &Catalog) -> Series<u64> {
    let mut groups: BTreeMap<String, u64> = BTreeMap::new();
    for record in catalog {
        *groups.entry(label(&record.subject)).or_insert(0) += record.num_subscribers;
    }
    descending(groups)
}

/// Number of courses per level, most common first.
pub fn courses_by_level(catalog: &Catalog) -> Series<u64> {
    let mut groups: BTreeMap<String, u64> = BTreeMap::new();
    for record in catalog {
        *groups.entry(label(&record.level)).or_insert(0) += 1;
    }
    descending(groups)
}

/// Number of courses per (subject, level) pair, keyed `"Subject_Level"`.
///
/// Ordered by subject, then level.
pub fn subjects_per_level(catalog: &Catalog) -> Series<u64> {
    let mut groups: BTreeMap<(String, String), u64> = BTreeMap::new();
    for record in catalog {
        *groups
            .entry((label(&record.subject), label(&record.level)))
            .or_insert(0) += 1;
    }
    groups
        .into_iter()
        .map(|((subject, level), count)| (format!("{subject}_{level}"), count))
        .collect()
}

/// Profit and subscriber totals by year and by calendar month.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeAggregates {
    /// Profit per year, oldest first
    pub profit_by_year: Series<f64>,
    /// Subscribers per year, oldest first
    pub subscribers_by_year: Series<u64>,
    /// Profit per month across all years, January first, empty months omitted
    pub profit_by_month: Series<f64>,
    /// Subscribers per month across all years, January first, empty months omitted
    pub subscribers_by_month: Series<u64>,
}

/// Compute year and month aggregates from the publish dates.
///
/// Profit is the coerced price times subscribers. Records whose publish
/// date does not parse are skipped here and only here.
pub fn time_aggregates(catalog: &Catalog) -> TimeAggregates {
    let mut by_year: BTreeMap<i32, (f64, u64)> = BTreeMap::new();
    let mut by_month: [Option<(f64, u64)>; 12] = [None; 12];
    let mut skipped = 0usize;

    for record in catalog {
        let Some(date) = record.published_date() else {
            skipped += 1;
            continue;
        };
        let profit = record.profit();

        let year = by_year.entry(date.year()).or_insert((0.0, 0));
        year.0 += profit;
        year.1 += record.num_subscribers;

        let month = by_month[date.month0() as usize].get_or_insert((0.0, 0));
        month.0 += profit;
        month.1 += record.num_subscribers;
    }

    if skipped > 0 {
        debug!(skipped, "Excluded records with unparseable publish dates");
    }

    let mut aggregates = TimeAggregates::default();
    for (year, (profit, subscribers)) in by_year {
        aggregates.profit_by_year.push(year.to_string(), profit);
        aggregates
            .subscribers_by_year
            .push(year.to_string(), subscribers);
    }
    for (name, totals) in MONTH_NAMES.iter().zip(by_month) {
        if let Some((profit, subscribers)) = totals {
            aggregates.profit_by_month.push(*name, profit);
            aggregates.subscribers_by_month.push(*name, subscribers);
        }
    }
    aggregates
}
