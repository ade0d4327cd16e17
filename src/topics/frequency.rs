// Frequency topic ranking: the most common content words of a document.

use tracing::debug;

use super::stopwords::is_topic_candidate;
use super::traits::TopicExtractor;
use crate::error::TextError;
use crate::text::{tokenize, word_frequencies};

/// Ranks normalized tokens by how often they occur, skipping stop words and
/// tokens of two characters or fewer. Ties keep first-appearance order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyTopicExtractor;

impl TopicExtractor for FrequencyTopicExtractor {
    fn extract(&self, text: &str, topic_count: usize) -> Result<Vec<String>, TextError> {
        TextError::check_count("topic_count", topic_count)?;

        let mut frequencies = word_frequencies(tokenize(text));
        let distinct = frequencies.len();
        frequencies.retain(|token, _| is_topic_candidate(token));

        let topics: Vec<String> = frequencies
            .most_common(topic_count)
            .into_iter()
            .map(|(token, _)| token.to_string())
            .collect();

        debug!(
            distinct_tokens = distinct,
            candidates = frequencies.len(),
            topics = topics.len(),
            "Frequency topics extracted"
        );
        Ok(topics)
    }
}

/// Extract the `topic_count` most frequent content words of `text`.
pub fn extract_topics(text: &str, topic_count: usize) -> Result<Vec<String>, TextError> {
    FrequencyTopicExtractor.extract(text, topic_count)
}
