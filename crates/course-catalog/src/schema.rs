//! Column schema for the course dataset.
//!
//! Resolves the dataset's header row to canonical column positions once, so
//! row parsing works on typed indices rather than string lookups.

use crate::CatalogError;

/// Canonical columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "course_title",
    "url",
    "price",
    "num_subscribers",
    "level",
    "published_timestamp",
    "subject",
];

/// Accepted alternative header names, keyed by canonical column.
const ALIASES: &[(&str, &[&str])] = &[
    ("course_title", &["title", "course_name", "name"]),
    ("url", &["link", "course_url"]),
    ("price", &["cost"]),
    ("num_subscribers", &["subscribers", "num_subs"]),
    ("level", &["difficulty"]),
    ("published_timestamp", &["published", "published_date"]),
    ("subject", &["domain", "category"]),
];

/// Header positions of the canonical columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub title: usize,
    pub url: usize,
    pub price: usize,
    pub num_subscribers: usize,
    pub level: usize,
    pub published_timestamp: usize,
    pub subject: usize,
}

impl ColumnMap {
    /// Resolve canonical columns from a header row.
    ///
    /// Headers are trimmed and compared case-insensitively. An exact
    /// canonical header wins over an alias when both are present.
    pub fn from_headers<'a, I>(headers: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let available: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();
        let lowered: Vec<String> = available.iter().map(|h| h.to_lowercase()).collect();

        let mut positions = [None; REQUIRED_COLUMNS.len()];
        for (slot, canonical) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = resolve(&lowered, canonical);
        }

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .zip(positions.iter())
            .filter(|(_, pos)| pos.is_none())
            .map(|(name, _)| name.to_string())
            .collect();

        match positions {
            [Some(title), Some(url), Some(price), Some(num_subscribers), Some(level), Some(published_timestamp), Some(subject)] => {
                Ok(Self {
                    title,
                    url,
                    price,
                    num_subscribers,
                    level,
                    published_timestamp,
                    subject,
                })
            }
            _ => Err(CatalogError::MissingColumns { missing, available }),
        }
    }
}

fn resolve(lowered: &[String], canonical: &str) -> Option<usize> {
    if let Some(pos) = lowered.iter().position(|h| h == canonical) {
        return Some(pos);
    }
    let aliases = ALIASES
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, aliases)| *aliases)
        .unwrap_or_default();
    lowered
        .iter()
        .position(|h| aliases.contains(&h.as_str()))
}
