//! End-to-end test infrastructure for the course finder.
//!
//! Provides a shared TestHarness that owns a dataset file on disk, plus
//! record fixtures used across the E2E tests.

use std::path::{Path, PathBuf};

use course_catalog::{load_catalog, LoadedCatalog};
use course_service::AppState;
use course_types::{CourseRecord, RecommendConfig};

/// Column order written by [`write_dataset`].
pub const HEADER: [&str; 7] = [
    "course_title",
    "url",
    "price",
    "num_subscribers",
    "level",
    "published_timestamp",
    "subject",
];

/// Shared test harness for E2E tests.
///
/// Holds a temp dir with a CSV dataset that tests can rewrite between steps.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub _temp_dir: tempfile::TempDir,
    /// Dataset file read by every load
    pub dataset_path: PathBuf,
}

impl TestHarness {
    /// Create a harness whose dataset holds `records`.
    pub fn with_records(records: &[CourseRecord]) -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let dataset_path = temp_dir.path().join("courses.csv");
        write_dataset(&dataset_path, records);
        Self {
            _temp_dir: temp_dir,
            dataset_path,
        }
    }

    /// Replace the dataset contents.
    pub fn rewrite(&self, records: &[CourseRecord]) {
        write_dataset(&self.dataset_path, records);
    }

    /// Load the dataset through the regular loader.
    pub fn load(&self) -> LoadedCatalog {
        load_catalog(&self.dataset_path).expect("Failed to load test dataset")
    }

    /// Service state over this dataset with default recommendation settings.
    pub fn state(&self, cache_pipeline: bool) -> AppState {
        AppState::new(
            &self.dataset_path,
            RecommendConfig::default(),
            cache_pipeline,
        )
    }
}

/// Write records as a CSV dataset with the canonical header.
pub fn write_dataset(path: &Path, records: &[CourseRecord]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create dataset file");
    writer.write_record(HEADER).expect("Failed to write header");
    for r in records {
        let subscribers = r.num_subscribers.to_string();
        writer
            .write_record([
                r.title.as_str(),
                r.url.as_str(),
                r.price.as_str(),
                subscribers.as_str(),
                r.level.as_str(),
                r.published_timestamp.as_str(),
                r.subject.as_str(),
            ])
            .expect("Failed to write record");
    }
    writer.flush().expect("Failed to flush dataset");
}

/// The three-course catalog used by the search and value-count scenarios.
pub fn sample_courses() -> Vec<CourseRecord> {
    vec![
        CourseRecord::new("Python for Beginners")
            .with_url("https://www.udemy.com/python-for-beginners/")
            .with_price("20")
            .with_subscribers(150)
            .with_level("Beginner Level")
            .with_subject("Development")
            .with_published("2017-01-18T20:58:58Z"),
        CourseRecord::new("Advanced Excel Analytics")
            .with_url("https://www.udemy.com/advanced-excel-analytics/")
            .with_price("45")
            .with_subscribers(300)
            .with_level("Expert Level")
            .with_subject("Business")
            .with_published("2016-05-02T15:13:30Z"),
        CourseRecord::new("Finance 101")
            .with_url("https://www.udemy.com/finance-101/")
            .with_price("Free")
            .with_subscribers(120)
            .with_level("All Levels")
            .with_subject("Finance")
            .with_published("2017-03-09T16:34:20Z"),
    ]
}

/// A larger catalog with overlapping titles, for ranking scenarios.
pub fn programming_courses() -> Vec<CourseRecord> {
    let rows = [
        ("Learn Python Programming", "Web Development", 500),
        ("Python for Data Science", "Business Finance", 900),
        ("Python Web Development with Django", "Web Development", 350),
        ("JavaScript Web Development Bootcamp", "Web Development", 1200),
        ("Guitar Basics", "Musical Instruments", 50),
        ("Watercolor Painting", "Graphic Design", 75),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (title, subject, subs))| {
            CourseRecord::new(*title)
                .with_url(format!("https://u/{i}"))
                .with_price("19.99")
                .with_subscribers(*subs)
                .with_level("All Levels")
                .with_subject(*subject)
                .with_published("2018-06-01T00:00:00Z")
        })
        .collect()
}
