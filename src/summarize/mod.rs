// Extractive summarization: LSA ranking with a frequency-score fallback.
//
// Both strategies segment with `segment_for_summary`, pick the top-N
// sentences and emit them in document order joined by single spaces.

pub mod frequency;
pub mod lsa;
pub mod traits;

use serde::{Deserialize, Serialize};

pub use frequency::FrequencySummarizer;
pub use lsa::LsaSummarizer;
pub use traits::Summarizer;

use crate::error::TextError;

/// Which strategy produced a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// The document had no more sentences than requested; nothing was scored.
    Passthrough,
    /// Ranked by the LSA decomposition.
    Lsa,
    /// Ranked by mean word frequency.
    Frequency,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Passthrough => "passthrough",
            Strategy::Lsa => "lsa",
            Strategy::Frequency => "frequency",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of summarizing one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined by single spaces
    pub text: String,
    /// Strategy that actually ranked the sentences
    pub strategy: Strategy,
    /// Indices of the selected sentences, ascending
    pub selected: Vec<usize>,
    /// Number of sentences the document segmented into
    pub total_sentences: usize,
}

impl Summary {
    /// Every sentence, unscored.
    pub(crate) fn passthrough(sentences: Vec<String>) -> Self {
        Self {
            selected: (0..sentences.len()).collect(),
            total_sentences: sentences.len(),
            text: sentences.join(" "),
            strategy: Strategy::Passthrough,
        }
    }

    /// The sentences at `selected` (ascending indices), joined.
    pub(crate) fn from_selection(
        sentences: &[String],
        selected: Vec<usize>,
        strategy: Strategy,
    ) -> Self {
        let text = selected
            .iter()
            .map(|&i| sentences[i].as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            text,
            strategy,
            selected,
            total_sentences: sentences.len(),
        }
    }
}

/// Indices of the `n` highest scores, returned in ascending index order.
///
/// Equal scores keep their original relative order, so earlier sentences win
/// ties.
pub fn select_top(scores: &[f64], n: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    ranked.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(n);
    ranked.sort_unstable();
    ranked
}

/// Summarize `text` to at most `sentence_count` sentences.
///
/// Tries the LSA strategy first and falls back to frequency scoring when the
/// decomposition fails. The failure itself is never returned.
pub fn summarize(text: &str, sentence_count: usize) -> Result<String, TextError> {
    LsaSummarizer::default()
        .summarize(text, sentence_count)
        .map(|summary| summary.text)
}

/// Summarize `text` with frequency scoring only.
pub fn summarize_fallback(text: &str, sentence_count: usize) -> Result<String, TextError> {
    FrequencySummarizer
        .summarize(text, sentence_count)
        .map(|summary| summary.text)
}
