//! End-to-end recommendation pipeline.
//!
//! Normalizer -> Vectorizer -> Similarity, built once from a catalog and
//! read-only afterwards, so a built pipeline can be shared across requests.

use std::time::Instant;

use tracing::{debug, info};

use course_types::{Catalog, RecommendConfig};

use crate::error::RecommendError;
use crate::normalizer::clean_titles;
use crate::recommender::{recommend, Recommendation};
use crate::search::{search, SearchHit};
use crate::similarity::SimilarityMatrix;
use crate::tfidf::Vectorizer;

/// Result of a title query that falls back to keyword search.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<'a> {
    /// The query was blank
    Empty,
    /// The query matched a title exactly
    Recommendations(Vec<Recommendation<'a>>),
    /// No exact title match; keyword search results instead
    SearchFallback(Vec<SearchHit<'a>>),
}

impl QueryOutcome<'_> {
    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            QueryOutcome::Empty => true,
            QueryOutcome::Recommendations(recs) => recs.is_empty(),
            QueryOutcome::SearchFallback(hits) => hits.is_empty(),
        }
    }
}

/// A built recommendation pipeline over one catalog.
#[derive(Debug, Clone)]
pub struct Pipeline {
    catalog: Catalog,
    clean_titles: Vec<String>,
    vocabulary_size: usize,
    similarity: SimilarityMatrix,
}

impl Pipeline {
    /// Build the pipeline from a catalog.
    pub fn build(catalog: Catalog, config: &RecommendConfig) -> Self {
        let started = Instant::now();

        let clean_titles = clean_titles(&catalog, config.remove_stopwords);
        let terms = Vectorizer::new(config.weighting)
            .with_stopword_removal(config.remove_stopwords)
            .fit_transform(clean_titles.as_slice());
        let similarity = SimilarityMatrix::from_term_matrix(&terms);

        info!(
            courses = catalog.len(),
            vocabulary = terms.cols(),
            weighting = ?config.weighting,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Built recommendation pipeline"
        );

        Self {
            catalog,
            clean_titles,
            vocabulary_size: terms.cols(),
            similarity,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Clean titles in catalog row order.
    pub fn clean_titles(&self) -> &[String] {
        &self.clean_titles
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Recommend courses similar to an exact title.
    pub fn recommend(
        &self,
        title: &str,
        top_k: usize,
    ) -> Result<Vec<Recommendation<'_>>, RecommendError> {
        recommend(&self.catalog, &self.similarity, title, top_k)
    }

    /// Keyword search over raw titles.
    pub fn search(&self, term: &str) -> Vec<SearchHit<'_>> {
        search(&self.catalog, term)
    }

    /// Recommend for an exact title, falling back to keyword search.
    pub fn recommend_or_search(&self, query: Option<&str>, top_k: usize) -> QueryOutcome<'_> {
        let Some(query) = query.filter(|q| !q.trim().is_empty()) else {
            return QueryOutcome::Empty;
        };

        match self.recommend(query, top_k) {
            Ok(recs) => QueryOutcome::Recommendations(recs),
            Err(RecommendError::TitleNotFound(_)) => {
                debug!(query, "No exact title match, falling back to keyword search");
                QueryOutcome::SearchFallback(self.search(query))
            }
            // The pipeline owns both catalog and matrix, so their sizes agree
            Err(RecommendError::DimensionMismatch { .. }) => QueryOutcome::Empty,
        }
    }
}
