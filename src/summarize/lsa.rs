// Latent semantic analysis summarizer.
//
// Builds a term/sentence matrix A, decomposes it, and ranks each sentence by
// its weight in the dominant latent dimensions:
//
//   rank_j = sqrt( sum_{i < dims} sigma_i^2 * v_ij^2 )
//
// Keeping every dimension collapses the sum to the squared norm of column j,
// so the default summarizer never runs the eigen solver. A reduced rank
// eigen-decomposes the smaller Gram matrix (AᵀA or AAᵀ) with cyclic Jacobi
// rotations. Each sweep is cubic in that side, so sides above
// `MAX_DECOMPOSITION_SIZE` are refused.
//
// Any decomposition failure falls back to frequency scoring. That branch
// lives in `LsaSummarizer::summarize` and nowhere else.

use ndarray::{s, Array2, Axis};
use tracing::debug;

use super::frequency::sentence_scores;
use super::traits::Summarizer;
use super::{select_top, Strategy, Summary};
use crate::error::{DecompositionError, TextError};
use crate::text::{segment_for_summary, tokenize, word_frequencies};

/// Weight given to a term that is absent from a sentence.
pub const SMOOTHING: f64 = 0.4;

/// Latent dimensions are never cut below this many.
pub const MIN_DIMENSIONS: usize = 3;

/// Largest Gram matrix side the eigen solver accepts.
pub const MAX_DECOMPOSITION_SIZE: usize = 200;

const MAX_SWEEPS: usize = 100;
const TOLERANCE: f64 = 1e-12;

/// LSA summarizer with automatic fallback to frequency scoring.
#[derive(Debug, Clone, Copy)]
pub struct LsaSummarizer {
    /// Share of the available latent dimensions to keep (1.0 keeps all)
    pub reduction_ratio: f64,
    /// Floor on the number of latent dimensions kept
    pub min_dimensions: usize,
}

impl Default for LsaSummarizer {
    fn default() -> Self {
        Self {
            reduction_ratio: 1.0,
            min_dimensions: MIN_DIMENSIONS,
        }
    }
}

impl Summarizer for LsaSummarizer {
    fn summarize(&self, text: &str, sentence_count: usize) -> Result<Summary, TextError> {
        TextError::check_count("sentence_count", sentence_count)?;

        let sentences = segment_for_summary(text);
        if sentences.len() <= sentence_count {
            return Ok(Summary::passthrough(sentences));
        }

        let (scores, strategy) = match self.sentence_ranks(&sentences) {
            Ok(ranks) => (ranks, Strategy::Lsa),
            Err(e) => {
                debug!(error = %e, "LSA ranking failed, falling back to frequency scoring");
                (sentence_scores(&sentences), Strategy::Frequency)
            }
        };

        let selected = select_top(&scores, sentence_count);
        Ok(Summary::from_selection(&sentences, selected, strategy))
    }
}

impl LsaSummarizer {
    /// Rank every sentence by its weight in the kept latent dimensions.
    pub fn sentence_ranks(&self, sentences: &[String]) -> Result<Vec<f64>, DecompositionError> {
        let matrix = term_sentence_matrix(sentences)?;
        let (terms, columns) = matrix.dim();

        // Only min(terms, sentences) singular values can be non-zero.
        let available = terms.min(columns);
        let dimensions = self
            .min_dimensions
            .max((available as f64 * self.reduction_ratio) as usize)
            .min(available);

        let ranks = if dimensions == available {
            column_norms(&matrix)
        } else if available > MAX_DECOMPOSITION_SIZE {
            return Err(DecompositionError::TooLarge {
                size: available,
                limit: MAX_DECOMPOSITION_SIZE,
            });
        } else if terms < columns {
            ranks_from_term_gram(&matrix, dimensions)?
        } else {
            ranks_from_sentence_gram(&matrix, dimensions)?
        };

        if ranks.iter().any(|r| !r.is_finite()) {
            return Err(DecompositionError::NonFinite);
        }

        debug!(terms, sentences = columns, dimensions, "LSA ranks computed");
        Ok(ranks)
    }
}

fn column_norms(matrix: &Array2<f64>) -> Vec<f64> {
    matrix
        .columns()
        .into_iter()
        .map(|column| column.dot(&column).sqrt())
        .collect()
}

// Eigenpairs of AᵀA are (sigma_i^2, v_i).
fn ranks_from_sentence_gram(
    matrix: &Array2<f64>,
    dimensions: usize,
) -> Result<Vec<f64>, DecompositionError> {
    let (eigenvalues, eigenvectors) = symmetric_eigen(matrix.t().dot(matrix))?;
    Ok((0..matrix.ncols())
        .map(|j| {
            (0..dimensions)
                .map(|i| eigenvalues[i].max(0.0) * eigenvectors[[j, i]].powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .collect())
}

// Eigenvectors of AAᵀ are the u_i, and sigma_i * v_ij = u_i · a_j.
fn ranks_from_term_gram(
    matrix: &Array2<f64>,
    dimensions: usize,
) -> Result<Vec<f64>, DecompositionError> {
    let (_, eigenvectors) = symmetric_eigen(matrix.dot(&matrix.t()))?;
    let projection = eigenvectors.slice(s![.., ..dimensions]).t().dot(matrix);
    Ok(column_norms(&projection))
}

/// Build the smoothed term/sentence matrix (rows = distinct terms in
/// first-seen order, columns = sentences).
///
/// Each cell starts as the term's count in the sentence. Within a column with
/// a non-zero maximum, every cell becomes `0.4 + 0.6 * count / max`.
pub fn term_sentence_matrix(sentences: &[String]) -> Result<Array2<f64>, DecompositionError> {
    let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s)).collect();
    let dictionary = word_frequencies(tokenized.iter().flatten());

    if dictionary.len() < 2 || sentences.len() < 2 {
        return Err(DecompositionError::DegenerateMatrix {
            terms: dictionary.len(),
            sentences: sentences.len(),
        });
    }

    let rows: std::collections::HashMap<&str, usize> = dictionary
        .iter()
        .enumerate()
        .map(|(row, (term, _))| (term, row))
        .collect();

    let mut matrix = Array2::<f64>::zeros((dictionary.len(), sentences.len()));
    for (column, tokens) in tokenized.iter().enumerate() {
        for token in tokens {
            matrix[[rows[token.as_str()], column]] += 1.0;
        }
    }

    for mut column in matrix.columns_mut() {
        let max = column.iter().copied().fold(0.0, f64::max);
        if max > 0.0 {
            column.mapv_inplace(|count| SMOOTHING + (1.0 - SMOOTHING) * count / max);
        }
    }

    Ok(matrix)
}

/// Eigen-decompose a symmetric matrix with cyclic Jacobi rotations.
///
/// Returns eigenvalues in descending order and the matching eigenvectors as
/// columns.
fn symmetric_eigen(mut a: Array2<f64>) -> Result<(Vec<f64>, Array2<f64>), DecompositionError> {
    if a.iter().any(|x| !x.is_finite()) {
        return Err(DecompositionError::NonFinite);
    }

    let n = a.nrows();
    let mut v = Array2::<f64>::eye(n);
    let threshold = TOLERANCE * frobenius_norm(&a).max(f64::MIN_POSITIVE);

    for _ in 0..MAX_SWEEPS {
        if off_diagonal_norm(&a) <= threshold {
            return Ok(sorted_eigenpairs(&a, &v));
        }
        for p in 0..n {
            for q in (p + 1)..n {
                rotate(&mut a, &mut v, p, q);
            }
        }
        if a.iter().any(|x| !x.is_finite()) {
            return Err(DecompositionError::NonFinite);
        }
    }

    if off_diagonal_norm(&a) <= threshold {
        Ok(sorted_eigenpairs(&a, &v))
    } else {
        Err(DecompositionError::NoConvergence { sweeps: MAX_SWEEPS })
    }
}

// Apply the rotation that zeroes a[p][q], accumulating it into v.
fn rotate(a: &mut Array2<f64>, v: &mut Array2<f64>, p: usize, q: usize) {
    let apq = a[[p, q]];
    if apq.abs() < f64::MIN_POSITIVE {
        return;
    }

    let theta = (a[[q, q]] - a[[p, p]]) / (2.0 * apq);
    let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
    let c = 1.0 / (t * t + 1.0).sqrt();
    let s = t * c;

    let n = a.nrows();
    for k in 0..n {
        let (akp, akq) = (a[[k, p]], a[[k, q]]);
        a[[k, p]] = c * akp - s * akq;
        a[[k, q]] = s * akp + c * akq;
    }
    for k in 0..n {
        let (apk, aqk) = (a[[p, k]], a[[q, k]]);
        a[[p, k]] = c * apk - s * aqk;
        a[[q, k]] = s * apk + c * aqk;
    }
    for k in 0..n {
        let (vkp, vkq) = (v[[k, p]], v[[k, q]]);
        v[[k, p]] = c * vkp - s * vkq;
        v[[k, q]] = s * vkp + c * vkq;
    }
}

fn sorted_eigenpairs(a: &Array2<f64>, v: &Array2<f64>) -> (Vec<f64>, Array2<f64>) {
    let diagonal = a.diag();
    let mut order: Vec<usize> = (0..diagonal.len()).collect();
    order.sort_by(|&x, &y| {
        diagonal[y]
            .partial_cmp(&diagonal[x])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let values = order.iter().map(|&i| diagonal[i]).collect();
    (values, v.select(Axis(1), &order))
}

fn frobenius_norm(a: &Array2<f64>) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

fn off_diagonal_norm(a: &Array2<f64>) -> f64 {
    a.indexed_iter()
        .filter(|((i, j), _)| i != j)
        .map(|(_, x)| x * x)
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(sentences: &[&str]) -> Vec<String> {
        sentences.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matrix_is_smoothed_per_column() {
        let m = term_sentence_matrix(&owned(&["a b b", "c"])).unwrap();
        // rows: a, b, c
        assert_eq!(m.dim(), (3, 2));
        assert!((m[[0, 0]] - 0.7).abs() < 1e-12);
        assert!((m[[1, 0]] - 1.0).abs() < 1e-12);
        assert!((m[[2, 0]] - 0.4).abs() < 1e-12);
        assert!((m[[2, 1]] - 1.0).abs() < 1e-12);
        assert!((m[[0, 1]] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn single_term_is_degenerate() {
        let err = term_sentence_matrix(&owned(&["Spam.", "spam!", "SPAM"])).unwrap_err();
        assert_eq!(
            err,
            DecompositionError::DegenerateMatrix {
                terms: 1,
                sentences: 3
            }
        );
    }

    #[test]
    fn single_sentence_is_degenerate() {
        assert!(term_sentence_matrix(&owned(&["many different words"])).is_err());
    }

    #[test]
    fn eigen_recovers_known_spectrum() {
        let g = ndarray::arr2(&[[2.16, 1.8], [1.8, 2.16]]);
        let (values, vectors) = symmetric_eigen(g).unwrap();
        assert!((values[0] - 3.96).abs() < 1e-9);
        assert!((values[1] - 0.36).abs() < 1e-9);
        let half = 0.5f64.sqrt();
        assert!((vectors[[0, 0]].abs() - half).abs() < 1e-9);
        assert!((vectors[[1, 0]].abs() - half).abs() < 1e-9);
    }

    #[test]
    fn full_rank_ranks_equal_column_norms() {
        // A = [[1, 1], [1, 0.4], [0.4, 1]] -> both columns have norm sqrt(2.16)
        let ranks = LsaSummarizer::default()
            .sentence_ranks(&owned(&["a b", "a c"]))
            .unwrap();
        assert_eq!(ranks.len(), 2);
        for rank in ranks {
            assert!((rank - 2.16f64.sqrt()).abs() < 1e-9, "rank {rank}");
        }
    }

    #[test]
    fn reduced_rank_keeps_only_dominant_dimension() {
        let lsa = LsaSummarizer {
            reduction_ratio: 0.0,
            min_dimensions: 1,
        };
        let ranks = lsa.sentence_ranks(&owned(&["a b", "a c"])).unwrap();
        for rank in ranks {
            assert!((rank - 1.98f64.sqrt()).abs() < 1e-9, "rank {rank}");
        }
    }

    #[test]
    fn both_gram_sides_agree() {
        // 2 terms x 3 sentences
        let a = ndarray::arr2(&[[1.0, 1.0, 1.0], [1.0, 1.0, 0.4]]);
        let via_terms = ranks_from_term_gram(&a, 1).unwrap();
        let via_sentences = ranks_from_sentence_gram(&a, 1).unwrap();
        for (x, y) in via_terms.iter().zip(&via_sentences) {
            assert!((x - y).abs() < 1e-9, "{x} vs {y}");
        }

        let norms = column_norms(&a);
        for (x, y) in ranks_from_term_gram(&a, 2).unwrap().iter().zip(&norms) {
            assert!((x - y).abs() < 1e-9, "{x} vs {y}");
        }
    }

    #[test]
    fn oversized_reduced_rank_is_refused() {
        let sentences: Vec<String> = (0..MAX_DECOMPOSITION_SIZE + 10)
            .map(|i| format!("Entry {i} mentions word{i} twice word{i}."))
            .collect();
        let lsa = LsaSummarizer {
            reduction_ratio: 0.5,
            min_dimensions: MIN_DIMENSIONS,
        };
        assert_eq!(
            lsa.sentence_ranks(&sentences).unwrap_err(),
            DecompositionError::TooLarge {
                size: MAX_DECOMPOSITION_SIZE + 10,
                limit: MAX_DECOMPOSITION_SIZE
            }
        );
    }

    #[test]
    fn richer_sentences_rank_higher() {
        let text = "Dogs bark. Cats purr loudly at night. Birds fly. Fish swim in the deep blue sea.";
        let summary = LsaSummarizer::default().summarize(text, 2).unwrap();
        assert_eq!(summary.strategy, Strategy::Lsa);
        assert_eq!(summary.selected, vec![1, 3]);
        assert_eq!(
            summary.text,
            "Cats purr loudly at night. Fish swim in the deep blue sea."
        );
    }

    #[test]
    fn repeated_token_falls_back_to_frequency() {
        let summary = LsaSummarizer::default()
            .summarize("Spam. Spam! Spam? Spam.", 2)
            .unwrap();
        assert_eq!(summary.strategy, Strategy::Frequency);
        assert_eq!(summary.text, "Spam. Spam!");
    }
}
