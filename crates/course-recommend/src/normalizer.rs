//! Title normalization.
//!
//! Produces the "clean title" used only for vectorization. Special
//! characters become separators, stopwords are dropped case-insensitively,
//! and whitespace is collapsed. Case is preserved; the vectorizer folds it.

use course_types::Catalog;

use crate::tfidf::is_stop_word;

/// Clean a single title.
///
/// Total and idempotent: `clean_title(clean_title(t)) == clean_title(t)`
/// for every input, and an empty title yields an empty string.
pub fn clean_title(title: &str, remove_stopwords: bool) -> String {
    let stripped: String = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    stripped
        .split_whitespace()
        .filter(|word| !remove_stopwords || !is_stop_word(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean every title in the catalog, preserving row order.
pub fn clean_titles(catalog: &Catalog, remove_stopwords: bool) -> Vec<String> {
    catalog
        .titles()
        .map(|title| clean_title(title, remove_stopwords))
        .collect()
}
