//! Response payloads for the rendering layer.
//!
//! Each response carries the flags the page needs to branch on (no query,
//! no results, results present) so the presentation never inspects data.

use serde::{Deserialize, Serialize};

use course_recommend::{Recommendation, SearchHit};
use course_types::{CourseRecord, Series};

/// What a course title maps to in a result listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseEntry {
    pub url: String,
    /// Raw price text as listed in the dataset
    pub price: String,
    pub num_subscribers: u64,
    /// Similarity to the queried title (recommendations only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl CourseEntry {
    fn from_record(record: &CourseRecord, score: Option<f32>) -> Self {
        Self {
            url: record.url.clone(),
            price: record.price.clone(),
            num_subscribers: record.num_subscribers,
            score,
        }
    }
}

/// Title -> entry map. Repeated titles keep their first position and the
/// last record's entry.
pub fn course_map_from_hits(hits: &[SearchHit<'_>]) -> Series<CourseEntry> {
    let mut map = Series::new();
    for hit in hits {
        map.insert(
            hit.record.title.clone(),
            CourseEntry::from_record(hit.record, None),
        );
    }
    map
}

/// Title -> entry map in ranking order.
pub fn course_map_from_recommendations(recs: &[Recommendation<'_>]) -> Series<CourseEntry> {
    let mut map = Series::new();
    for rec in recs {
        map.insert(
            rec.record.title.clone(),
            CourseEntry::from_record(rec.record, Some(rec.score)),
        );
    }
    map
}

/// Keyword search page payload.
#[derive(Debug, Clone, Serialize)]
pub struct HomeResponse {
    pub coursemap: Series<CourseEntry>,
    /// A query was supplied and nothing matched
    pub showerror: bool,
    /// A non-blank query was supplied
    pub showtitle: bool,
    /// The trimmed query, when supplied
    pub coursename: Option<String>,
}

/// How a recommendation request was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Exact title match; similar courses listed
    Recommendations,
    /// No exact title; keyword matches listed instead
    SearchFallback,
    /// No query supplied
    NoQuery,
}

/// Recommendation page payload.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub mode: QueryMode,
    pub coursemap: Series<CourseEntry>,
    pub showerror: bool,
    pub showtitle: bool,
    pub coursename: Option<String>,
}
