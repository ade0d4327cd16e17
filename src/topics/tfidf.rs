// TF-IDF keyword extraction implementation.
//
// Uses the `keyword_extraction` crate with each sentence of the document
// treated as a separate document for IDF computation. Words that appear in
// every sentence get downweighted, while words concentrated in a few
// sentences get boosted. Useful for long texts where raw frequency is
// dominated by a handful of generic words.

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::stopwords::MAX_SHORT_TOKEN_LEN;
use super::traits::TopicExtractor;
use crate::error::TextError;
use crate::text::segment_for_summary;

/// TF-IDF based topic extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfTopicExtractor;

impl TopicExtractor for TfIdfTopicExtractor {
    fn extract(&self, text: &str, topic_count: usize) -> Result<Vec<String>, TextError> {
        TextError::check_count("topic_count", topic_count)?;

        let sentences = segment_for_summary(text);
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        // Get English stop words from the stop-words crate
        let stop_words: Vec<String> = get(LANGUAGE::English);

        let params = TfIdfParams::UnprocessedDocuments(&sentences, &stop_words, None);
        let tfidf = TfIdf::new(params);

        // Over-fetch so short tokens can be dropped without coming up short.
        // A text cannot hold more distinct words than bytes.
        let fetch = topic_count.saturating_add(sentences.len()).min(text.len());
        let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(fetch);

        let topics: Vec<String> = ranked
            .into_iter()
            .map(|(word, _)| word)
            .filter(|word| word.chars().count() > MAX_SHORT_TOKEN_LEN)
            .take(topic_count)
            .collect();

        debug!(
            sentences = sentences.len(),
            topics = topics.len(),
            "TF-IDF topics extracted"
        );
        Ok(topics)
    }
}
