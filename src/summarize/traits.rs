// Summarizer trait: swap-ready abstraction over summarization strategies.
//
// The CLI and the batch pipeline only talk to this trait, so the strategy is
// a configuration choice (TEXTRA_SUMMARIZER) rather than a code change.

use super::Summary;
use crate::error::TextError;

/// Trait for reducing a document to its most relevant sentences.
pub trait Summarizer {
    /// Pick at most `sentence_count` sentences from `text`, in document order.
    fn summarize(&self, text: &str, sentence_count: usize) -> Result<Summary, TextError>;
}
