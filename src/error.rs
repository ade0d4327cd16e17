// Error types for the text pipelines.
//
// Only `TextError` ever reaches callers. `DecompositionError` stays inside
// the summarizer: the LSA strategy returns it and the orchestrator turns it
// into a fallback to frequency scoring.

use thiserror::Error;

/// Errors a caller of the text pipelines can see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// A sentence or topic count was zero.
    #[error("{name} must be at least 1, got {value}")]
    InvalidParameter { name: &'static str, value: usize },
}

impl TextError {
    /// Reject a count below 1.
    pub fn check_count(name: &'static str, value: usize) -> Result<usize, TextError> {
        if value == 0 {
            Err(TextError::InvalidParameter { name, value })
        } else {
            Ok(value)
        }
    }
}

/// Reasons the LSA decomposition can refuse or fail to rank sentences.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecompositionError {
    /// Too few terms or sentences to build a meaningful term/sentence matrix.
    #[error("degenerate term/sentence matrix ({terms} terms x {sentences} sentences)")]
    DegenerateMatrix { terms: usize, sentences: usize },

    /// NaN or infinity showed up in the matrix or the decomposition.
    #[error("non-finite value in decomposition")]
    NonFinite,

    /// The eigen solver ran out of sweeps before the off-diagonal mass vanished.
    #[error("eigen decomposition did not converge after {sweeps} sweeps")]
    NoConvergence { sweeps: usize },

    /// A reduced-rank decomposition was requested on a matrix whose smaller
    /// side exceeds the solver's size limit.
    #[error("matrix side {size} exceeds the decomposition limit of {limit}")]
    TooLarge { size: usize, limit: usize },
}
