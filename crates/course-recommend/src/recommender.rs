//! Ranking similar courses for an exact title.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use course_types::{Catalog, CourseRecord};

use crate::error::RecommendError;
use crate::similarity::SimilarityMatrix;

/// A recommended course with its similarity to the queried title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    /// Catalog row of the recommended course
    pub index: usize,
    pub record: &'a CourseRecord,
    /// Cosine similarity to the query row, in [0, 1]
    pub score: f32,
}

/// Recommend up to `top_k` courses similar to `query_title`.
///
/// The title must match a record exactly (case-sensitive); the first
/// matching row is used when titles repeat. Candidates are ordered by score
/// descending, ties by ascending row index, and the query row itself is
/// never returned. A `top_k` larger than the catalog simply returns every
/// other row.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    similarity: &SimilarityMatrix,
    query_title: &str,
    top_k: usize,
) -> Result<Vec<Recommendation<'a>>, RecommendError> {
    if catalog.len() != similarity.len() {
        return Err(RecommendError::DimensionMismatch {
            catalog: catalog.len(),
            matrix: similarity.len(),
        });
    }

    let query_index = catalog
        .position_of_title(query_title)
        .ok_or_else(|| RecommendError::TitleNotFound(query_title.to_string()))?;

    let mut ranked: Vec<(usize, f32)> = similarity
        .row(query_index)
        .iter()
        .copied()
        .enumerate()
        .filter(|(index, _)| *index != query_index)
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    ranked.truncate(top_k);

    debug!(
        query_index,
        returned = ranked.len(),
        top_k,
        "Ranked recommendations"
    );

    Ok(ranked
        .into_iter()
        .filter_map(|(index, score)| {
            catalog.get(index).map(|record| Recommendation {
                index,
                record,
                score,
            })
        })
        .collect())
}
