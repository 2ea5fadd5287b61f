//! Term matrix construction (bag-of-words or TF-IDF).
//!
//! The vocabulary is learned in a single pass over the whole corpus and
//! sorted, so the same input always yields the same column order.

use std::collections::{BTreeMap, HashMap};

use course_types::Weighting;

/// Sparse N x M term matrix in compressed-row form.
///
/// Each row lists its non-zero columns in ascending order alongside their
/// weights. Titles carry a handful of terms, so rows are almost all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatrix {
    cols: usize,
    row_offsets: Vec<usize>,
    columns: Vec<usize>,
    values: Vec<f32>,
    vocabulary: Vec<String>,
}

impl TermMatrix {
    /// Number of documents (rows).
    pub fn rows(&self) -> usize {
        self.row_offsets.len() - 1
    }

    /// Vocabulary size (columns).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored non-zero weights.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Non-zero entries of one document: column indices (ascending) and weights.
    pub fn row(&self, index: usize) -> (&[usize], &[f32]) {
        let range = self.row_offsets[index]..self.row_offsets[index + 1];
        (&self.columns[range.clone()], &self.values[range])
    }

    /// One document expanded to all `cols` columns.
    pub fn dense_row(&self, index: usize) -> Vec<f32> {
        let mut dense = vec![0.0; self.cols];
        let (columns, values) = self.row(index);
        for (&col, &value) in columns.iter().zip(values) {
            dense[col] = value;
        }
        dense
    }

    pub(crate) fn row_offsets(&self) -> &[usize] {
        &self.row_offsets
    }

    pub(crate) fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub(crate) fn values(&self) -> &[f32] {
        &self.values
    }

    /// Learned terms in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Column index of a term, if it is in the vocabulary.
    pub fn column_of(&self, term: &str) -> Option<usize> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
    }

    /// Value at (row, term), zero when the term is unknown or absent.
    pub fn weight(&self, row: usize, term: &str) -> f32 {
        let Some(col) = self.column_of(term) else {
            return 0.0;
        };
        let (columns, values) = self.row(row);
        columns
            .binary_search(&col)
            .map(|pos| values[pos])
            .unwrap_or(0.0)
    }
}

/// Converts clean titles into a [`TermMatrix`].
#[derive(Debug, Clone, Copy)]
pub struct Vectorizer {
    weighting: Weighting,
    remove_stopwords: bool,
}

impl Default for Vectorizer {
    fn default() -> Self {
        Self::new(Weighting::default())
    }
}

impl Vectorizer {
    /// A vectorizer that drops English stopwords while tokenizing.
    pub fn new(weighting: Weighting) -> Self {
        Self {
            weighting,
            remove_stopwords: true,
        }
    }

    /// Keep or drop stopwords during tokenization.
    pub fn with_stopword_removal(mut self, remove_stopwords: bool) -> Self {
        self.remove_stopwords = remove_stopwords;
        self
    }

    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    pub fn removes_stopwords(&self) -> bool {
        self.remove_stopwords
    }

    /// Learn the vocabulary from `documents` and vectorize them.
    ///
    /// Row i of the result corresponds to `documents[i]`. A corpus with no
    /// usable terms produces an N x 0 matrix.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> TermMatrix {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| tokenize(d.as_ref(), self.remove_stopwords))
            .collect();

        // Term -> document count (how many documents contain this term)
        let mut doc_frequencies: BTreeMap<&str, usize> = BTreeMap::new();
        for terms in &tokenized {
            let mut seen: Vec<&str> = terms.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_frequencies.entry(term).or_insert(0) += 1;
            }
        }

        let vocabulary: Vec<String> = doc_frequencies.keys().map(|t| t.to_string()).collect();
        let column_index: HashMap<&str, usize> = doc_frequencies
            .keys()
            .enumerate()
            .map(|(i, t)| (*t, i))
            .collect();

        let rows = documents.len();
        let cols = vocabulary.len();
        let idf: Vec<f32> = match self.weighting {
            Weighting::Count => vec![1.0; cols],
            Weighting::TfIdf => doc_frequencies
                .values()
                .map(|&df| inverse_document_frequency(rows, df))
                .collect(),
        };

        let mut row_offsets = Vec::with_capacity(rows + 1);
        let mut columns = Vec::new();
        let mut values = Vec::new();
        row_offsets.push(0);
        for terms in &tokenized {
            let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
            for term in terms {
                if let Some(&col) = column_index.get(term.as_str()) {
                    *counts.entry(col).or_insert(0.0) += 1.0;
                }
            }
            for (col, count) in counts {
                columns.push(col);
                values.push(count * idf[col]);
            }
            row_offsets.push(columns.len());
        }

        TermMatrix {
            cols,
            row_offsets,
            columns,
            values,
            vocabulary,
        }
    }
}

/// Smoothed IDF: ln((N + 1) / (df + 1)) + 1
fn inverse_document_frequency(doc_count: usize, df: usize) -> f32 {
    let n = doc_count as f32;
    let df = df as f32;
    ((n + 1.0) / (df + 1.0)).ln() + 1.0
}

/// Tokenize text into lowercase words.
///
/// Filters out:
/// - Stop words (common English words), when `remove_stopwords` is set
/// - Single character tokens
/// - Numbers
pub(crate) fn tokenize(text: &str, remove_stopwords: bool) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() > 1)
        .filter(|s| !(remove_stopwords && is_stop_word(s)))
        .filter(|s| !s.chars().all(|c| c.is_numeric()))
        .map(String::from)
        .collect()
}

/// Check if a lowercase word is a stop word.
pub(crate) fn is_stop_word(word: &str) -> bool {
    const STOP_WORDS: &[&str] = &[
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "or", "that", "the", "to", "was", "were", "will", "with", "this",
        "they", "but", "have", "had", "what", "when", "where", "who", "which", "why", "how", "all",
        "each", "every", "both", "few", "more", "most", "other", "some", "such", "no", "nor",
        "not", "only", "own", "same", "so", "than", "too", "very", "can", "just", "should", "now",
        "also", "been", "being", "do", "does", "did", "doing", "would", "could", "might", "must",
        "shall", "about", "above", "after", "again", "against", "am", "any", "before", "below",
        "between", "into", "through", "during", "out", "over", "under", "up", "down", "then",
        "once", "here", "there", "if", "else", "while", "because", "until", "we", "you", "your",
        "our", "their", "him", "her", "them", "me", "my", "myself", "itself", "those", "these",
        "his",
    ];

    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Hello World", true);
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_removes_stop_words() {
        let tokens = tokenize("the complete guide to excel", true);
        assert_eq!(tokens, vec!["complete", "guide", "excel"]);

        let kept = tokenize("the complete guide to excel", false);
        assert_eq!(kept, vec!["the", "complete", "guide", "to", "excel"]);
    }

    #[test]
    fn test_tokenize_removes_single_chars_and_numbers() {
        let tokens = tokenize("C programming 101 x", true);
        assert_eq!(tokens, vec!["programming"]);
    }

    #[test]
    fn test_is_stop_word() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("for"));
        assert!(!is_stop_word("python"));
    }

    #[test]
    fn test_vocabulary_sorted_and_deterministic() {
        let docs = ["Python Basics", "Advanced Python", "Excel Basics"];
        let vectorizer = Vectorizer::new(Weighting::Count);
        let matrix = vectorizer.fit_transform(&docs);

        assert_eq!(
            matrix.vocabulary(),
            &["advanced", "basics", "excel", "python"]
        );
        assert_eq!(matrix, vectorizer.fit_transform(&docs));
    }

    #[test]
    fn test_count_weighting() {
        let docs = ["python python web", "web design"];
        let matrix = Vectorizer::new(Weighting::Count).fit_transform(&docs);

        assert_eq!(matrix.rows(), 2);
        assert_eq!(matrix.cols(), 3);
        assert_eq!(matrix.weight(0, "python"), 2.0);
        assert_eq!(matrix.weight(0, "web"), 1.0);
        assert_eq!(matrix.weight(1, "python"), 0.0);
        assert_eq!(matrix.weight(1, "design"), 1.0);
    }

    #[test]
    fn test_tfidf_discounts_common_terms() {
        let docs = ["python course", "excel course", "guitar course"];
        let matrix = Vectorizer::new(Weighting::TfIdf).fit_transform(&docs);

        // "course" is in every document: idf = ln(4/4) + 1 = 1.0
        // "python" is in one: idf = ln(4/2) + 1 ~ 1.693
        assert!((matrix.weight(0, "course") - 1.0).abs() < 1e-6);
        assert!((matrix.weight(0, "python") - (2.0f32.ln() + 1.0)).abs() < 1e-6);
        assert!(matrix.weight(0, "python") > matrix.weight(0, "course"));
    }

    #[test]
    fn test_all_empty_corpus() {
        let docs = ["", "", ""];
        let matrix = Vectorizer::default().fit_transform(&docs);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 0);
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.row(1).0.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let docs: Vec<String> = Vec::new();
        let matrix = Vectorizer::default().fit_transform(&docs);
        assert_eq!(matrix.rows(), 0);
        assert_eq!(matrix.cols(), 0);
    }

    #[test]
    fn test_unknown_term_weight() {
        let matrix = Vectorizer::default().fit_transform(&["rust programming"]);
        assert_eq!(matrix.weight(0, "nonexistent"), 0.0);
        assert_eq!(matrix.column_of("rust"), Some(1));
    }

    #[test]
    fn test_rows_are_sparse_and_sorted() {
        let docs = ["web python web", "", "design"];
        let matrix = Vectorizer::new(Weighting::Count).fit_transform(&docs);

        // vocabulary: design, python, web
        assert_eq!(matrix.row(0), (&[1usize, 2][..], &[1.0f32, 2.0][..]));
        assert!(matrix.row(1).0.is_empty());
        assert_eq!(matrix.row(2), (&[0usize][..], &[1.0f32][..]));
        assert_eq!(matrix.nnz(), 3);
        assert_eq!(matrix.dense_row(0), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_keeping_stopwords_extends_vocabulary() {
        let docs = ["the python course", "the excel course"];
        let dropped = Vectorizer::new(Weighting::Count).fit_transform(&docs);
        let kept = Vectorizer::new(Weighting::Count)
            .with_stopword_removal(false)
            .fit_transform(&docs);

        assert_eq!(dropped.column_of("the"), None);
        assert_eq!(kept.weight(0, "the"), 1.0);
        assert_eq!(kept.cols(), dropped.cols() + 1);
    }
}
