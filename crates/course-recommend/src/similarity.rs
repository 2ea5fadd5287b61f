//! Cosine similarity over term matrices.

use crate::tfidf::TermMatrix;

/// Calculate cosine similarity between two vectors.
///
/// Returns 0.0 when either vector has zero norm.
///
/// # Panics
/// Panics if vectors have different dimensions.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have same dimension");

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Normalize a vector to unit length in place.
///
/// Returns false (and leaves the vector untouched) for a zero vector.
pub fn normalize(v: &mut [f32]) -> bool {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for val in v.iter_mut() {
            *val /= norm;
        }
        true
    } else {
        false
    }
}

/// Square, symmetric N x N cosine similarity matrix.
///
/// Entry (i, j) is the cosine similarity of rows i and j of the source
/// term matrix. Rows with a zero vector score 0.0 against everything,
/// themselves included; every other row has 1.0 on the diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute all-pairs similarity.
    ///
    /// Rows are L2-normalized once. Pairs are then accumulated through an
    /// inverted index (column -> rows), so only rows sharing a term are
    /// ever touched; only the upper triangle is computed and mirrored.
    pub fn from_term_matrix(matrix: &TermMatrix) -> Self {
        let size = matrix.rows();
        let offsets = matrix.row_offsets();
        let columns = matrix.columns();
        let mut unit_values = matrix.values().to_vec();
        let non_zero: Vec<bool> = (0..size)
            .map(|i| normalize(&mut unit_values[offsets[i]..offsets[i + 1]]))
            .collect();

        // column -> (row, unit weight), rows ascending
        let mut postings: Vec<Vec<(usize, f32)>> = vec![Vec::new(); matrix.cols()];
        for row in 0..size {
            for pos in offsets[row]..offsets[row + 1] {
                postings[columns[pos]].push((row, unit_values[pos]));
            }
        }

        let mut scores = vec![0.0f32; size * size];
        let mut dots = vec![0.0f32; size];
        let mut seen = vec![false; size];
        let mut touched: Vec<usize> = Vec::new();
        for i in 0..size {
            if !non_zero[i] {
                continue;
            }
            scores[i * size + i] = 1.0;

            for pos in offsets[i]..offsets[i + 1] {
                let weight = unit_values[pos];
                let posting = &postings[columns[pos]];
                let start = posting.partition_point(|&(row, _)| row <= i);
                for &(j, other) in &posting[start..] {
                    if !seen[j] {
                        seen[j] = true;
                        touched.push(j);
                    }
                    dots[j] += weight * other;
                }
            }

            for j in touched.drain(..) {
                let sim = dots[j].clamp(0.0, 1.0);
                dots[j] = 0.0;
                seen[j] = false;
                scores[i * size + j] = sim;
                scores[j * size + i] = sim;
            }
        }

        Self { size, scores }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between rows `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f32 {
        assert!(i < self.size && j < self.size, "Index out of bounds");
        self.scores[i * self.size + j]
    }

    /// All similarities of row `i`, indexed by column.
    pub fn row(&self, i: usize) -> &[f32] {
        let start = i * self.size;
        &self.scores[start..start + self.size]
    }
}
