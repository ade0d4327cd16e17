// Topic extractor trait: swap-ready abstraction.
//
// The default implementation ranks tokens by raw frequency. TF-IDF over the
// document's sentences is available through the same trait, selected by
// TEXTRA_TOPIC_METHOD or `--method`.

use crate::error::TextError;

/// Trait for ranking the keywords a document is about.
pub trait TopicExtractor {
    /// Return at most `topic_count` keywords, most relevant first.
    fn extract(&self, text: &str, topic_count: usize) -> Result<Vec<String>, TextError>;
}
