//! Course record and catalog types.
//!
//! A [`Catalog`] is the ordered set of records for one pipeline run. Row
//! position is the identity shared with the term and similarity matrices,
//! so the catalog never reorders its records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::coerce::{coerce_price, parse_published_date};

/// A single course as loaded from the dataset.
///
/// Raw `price` and `published_timestamp` text is kept as loaded; use
/// [`CourseRecord::price_value`] and [`CourseRecord::published_date`] for the
/// coerced values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course title (required, not necessarily unique)
    pub title: String,
    /// Course URL, empty when the dataset has none
    #[serde(default)]
    pub url: String,
    /// Raw price cell ("19.99", "$12.99", "Free", "TRUE", ...)
    #[serde(default)]
    pub price: String,
    /// Number of subscribers
    #[serde(default)]
    pub num_subscribers: u64,
    /// Difficulty level (e.g. "Beginner Level", "All Levels")
    #[serde(default)]
    pub level: String,
    /// Subject / domain (e.g. "Business Finance")
    #[serde(default)]
    pub subject: String,
    /// Raw published timestamp, e.g. "2017-01-18T20:58:58Z"
    #[serde(default)]
    pub published_timestamp: String,
}

impl CourseRecord {
    /// Create a record with only a title; other fields are empty.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: String::new(),
            price: String::new(),
            num_subscribers: 0,
            level: String::new(),
            subject: String::new(),
            published_timestamp: String::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    pub fn with_subscribers(mut self, num_subscribers: u64) -> Self {
        self.num_subscribers = num_subscribers;
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_published(mut self, published_timestamp: impl Into<String>) -> Self {
        self.published_timestamp = published_timestamp.into();
        self
    }

    /// Price coerced to a number (sentinels and garbage become 0.0).
    pub fn price_value(&self) -> f64 {
        coerce_price(&self.price)
    }

    /// Profit estimate: coerced price times subscribers.
    pub fn profit(&self) -> f64 {
        self.price_value() * self.num_subscribers as f64
    }

    /// Date portion of the published timestamp, if it parses.
    pub fn published_date(&self) -> Option<NaiveDate> {
        parse_published_date(&self.published_timestamp)
    }
}

/// Ordered collection of course records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    records: Vec<CourseRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CourseRecord> {
        self.records.iter()
    }

    /// Record at a row index.
    pub fn get(&self, index: usize) -> Option<&CourseRecord> {
        self.records.get(index)
    }

    /// Titles in row order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.title.as_str())
    }

    /// Row index of the first record whose title equals `title` exactly.
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.records.iter().position(|r| r.title == title)
    }

    /// Sum of subscribers over every record.
    pub fn total_subscribers(&self) -> u64 {
        self.records.iter().map(|r| r.num_subscribers).sum()
    }
}

impl From<Vec<CourseRecord>> for Catalog {
    fn from(records: Vec<CourseRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CourseRecord;
    type IntoIter = std::slice::Iter<'a, CourseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
