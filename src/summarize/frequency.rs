// Frequency-score summarizer, the portable fallback.
//
// Needs nothing beyond the shared text primitives, so it keeps working when
// the LSA path refuses a document.

use tracing::debug;

use super::traits::Summarizer;
use super::{select_top, Strategy, Summary};
use crate::error::TextError;
use crate::text::{segment_for_summary, tokenize, word_frequencies};

/// Scores each sentence by the mean document-wide frequency of its tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencySummarizer;

impl Summarizer for FrequencySummarizer {
    fn summarize(&self, text: &str, sentence_count: usize) -> Result<Summary, TextError> {
        TextError::check_count("sentence_count", sentence_count)?;

        let sentences = segment_for_summary(text);
        if sentences.len() <= sentence_count {
            return Ok(Summary::passthrough(sentences));
        }

        let scores = sentence_scores(&sentences);
        let selected = select_top(&scores, sentence_count);
        debug!(
            sentences = sentences.len(),
            selected = selected.len(),
            "Frequency summary built"
        );

        Ok(Summary::from_selection(&sentences, selected, Strategy::Frequency))
    }
}

/// Score every sentence as the sum of its tokens' global frequencies divided
/// by its token count. A sentence without tokens scores 0.
pub fn sentence_scores(sentences: &[String]) -> Vec<f64> {
    let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s)).collect();
    let frequencies = word_frequencies(tokenized.iter().flatten());

    tokenized
        .iter()
        .map(|tokens| {
            let sum: usize = tokens.iter().map(|t| frequencies.get(t)).sum();
            if tokens.is_empty() {
                sum as f64
            } else {
                sum as f64 / tokens.len() as f64
            }
        })
        .collect()
}
