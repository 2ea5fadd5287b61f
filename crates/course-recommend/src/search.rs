//! Keyword search over raw course titles.
//!
//! Literal, case-insensitive substring matching. The term is never
//! interpreted as a pattern, so "C++" or "Node.js" match exactly as typed.

use serde::Serialize;

use course_types::{Catalog, CourseRecord};

/// A course whose title contains the search term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    /// Catalog row of the match
    pub index: usize,
    pub record: &'a CourseRecord,
}

/// Find every course whose title contains `term`, ignoring case.
///
/// Blank terms (empty or whitespace-only) return no results. The blank
/// check trims, but matching uses the term as given. Matches come back in
/// catalog order without truncation.
pub fn search<'a>(catalog: &'a Catalog, term: &str) -> Vec<SearchHit<'a>> {
    if term.trim().is_empty() {
        return Vec::new();
    }

    // Uppercase folding, so "strasse" finds "Straße"
    let needle = term.to_uppercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, record)| record.title.to_uppercase().contains(&needle))
        .map(|(index, record)| SearchHit { index, record })
        .collect()
}

/// Order hits by subscriber count (descending) and keep the first `n`.
///
/// The sort is stable, so equally popular courses keep catalog order.
pub fn top_by_subscribers(mut hits: Vec<SearchHit<'_>>, n: usize) -> Vec<SearchHit<'_>> {
    hits.sort_by(|a, b| b.record.num_subscribers.cmp(&a.record.num_subscribers));
    hits.truncate(n);
    hits
}
