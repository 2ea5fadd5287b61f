//! # course-recommend
//!
//! Content-based recommendation over course titles.
//!
//! The pipeline runs leaf-first:
//! 1. [`normalizer`] strips special characters and stopwords from titles
//! 2. [`tfidf`] learns a vocabulary and builds the term matrix
//! 3. [`similarity`] computes all-pairs cosine similarity
//! 4. [`recommender`] ranks other rows for an exact title
//!
//! [`search`] is independent of the vector machinery: a literal,
//! case-insensitive substring match used as the fallback when a title has
//! no exact match.

pub mod error;
pub mod normalizer;
pub mod pipeline;
pub mod recommender;
pub mod search;
pub mod similarity;
pub mod tfidf;

pub use error::RecommendError;
pub use normalizer::{clean_title, clean_titles};
pub use pipeline::{Pipeline, QueryOutcome};
pub use recommender::{recommend, Recommendation};
pub use search::{search, top_by_subscribers, SearchHit};
pub use similarity::{cosine_similarity, SimilarityMatrix};
pub use tfidf::{TermMatrix, Vectorizer};
