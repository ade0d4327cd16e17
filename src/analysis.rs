// General text statistics: counts of characters, words and sentences, plus
// how many distinct words repeat exactly two, three or four times.

use serde::{Deserialize, Serialize};

use crate::text::{segment_coarse, word_frequencies};

/// Statistics for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Whitespace-separated words
    pub total_words: usize,
    /// Characters, whitespace included
    pub total_characters: usize,
    /// Sentences per the coarse splitter
    pub total_sentences: usize,
    /// Distinct words occurring exactly twice
    pub single_repeated: usize,
    /// Distinct words occurring exactly three times
    pub double_repeated: usize,
    /// Distinct words occurring exactly four times
    pub triple_repeated: usize,
}

/// Compute text statistics for `text`.
///
/// Words are split on whitespace and lower-cased for counting. Punctuation
/// stays attached, so `world.` and `world` are different words here.
pub fn analyze(text: &str) -> TextStats {
    let frequencies = word_frequencies(text.split_whitespace().map(str::to_lowercase));

    TextStats {
        total_words: frequencies.total(),
        total_characters: text.chars().count(),
        total_sentences: segment_coarse(text).len(),
        single_repeated: frequencies.count_with_frequency(2),
        double_repeated: frequencies.count_with_frequency(3),
        triple_repeated: frequencies.count_with_frequency(4),
    }
}
