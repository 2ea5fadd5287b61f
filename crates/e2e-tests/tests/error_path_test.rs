//! End-to-end error paths and tolerant parsing.
//!
//! E2E-09: schema failures name missing and available columns
//! E2E-10: aliased headers and messy values still load

use std::fs;

use pretty_assertions::assert_eq;

use course_catalog::{load_catalog, CatalogError};
use course_recommend::search;
use e2e_tests::TestHarness;

/// E2E-09: A dataset without required columns fails with both column lists.
#[test]
fn test_missing_columns_reported() {
    let harness = TestHarness::with_records(&[]);
    fs::write(&harness.dataset_path, "course_title,price\nRust,10\n").unwrap();

    match load_catalog(&harness.dataset_path) {
        Err(CatalogError::MissingColumns { missing, available }) => {
            assert_eq!(
                missing,
                vec![
                    "url".to_string(),
                    "num_subscribers".to_string(),
                    "level".to_string(),
                    "published_timestamp".to_string(),
                    "subject".to_string(),
                ]
            );
            assert_eq!(available, vec!["course_title".to_string(), "price".to_string()]);
        }
        other => panic!("Expected MissingColumns, got {other:?}"),
    }
}

/// E2E-09b: A missing file is an IO error naming the path.
#[test]
fn test_missing_file_reported() {
    let harness = TestHarness::with_records(&[]);
    let path = harness.dataset_path.with_file_name("absent.csv");
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

/// E2E-10: Alias headers, currency prices, and bad dates load without error.
#[test]
fn test_aliases_and_messy_values() {
    let harness = TestHarness::with_records(&[]);
    fs::write(
        &harness.dataset_path,
        "Title,Link,Cost,Subscribers,Difficulty,Published,Category\n\
         Intro to Rust,https://u/1,$19.99,1200.0,Beginner Level,not-a-date,Development\n\
         Free Course,https://u/2,Free,abc,All Levels,2019-04-01T00:00:00Z,Development\n",
    )
    .unwrap();

    let loaded = load_catalog(&harness.dataset_path).unwrap();
    assert_eq!(loaded.catalog.len(), 2);

    let rust = loaded.catalog.get(0).unwrap();
    assert!((rust.price_value() - 19.99).abs() < 1e-9);
    assert_eq!(rust.num_subscribers, 1200);
    assert_eq!(rust.published_date(), None);

    let free = loaded.catalog.get(1).unwrap();
    assert_eq!(free.price_value(), 0.0);
    assert_eq!(free.num_subscribers, 0);
    assert!(free.published_date().is_some());

    assert_eq!(search(&loaded.catalog, "rust").len(), 1);
}
