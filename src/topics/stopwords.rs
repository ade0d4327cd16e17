// Fixed stop-word set for frequency topic ranking.
//
// Kept deliberately small and constant so topic output is stable across
// releases. The TF-IDF extractor and language detection use the much larger
// lists from the `stop-words` crate instead.

/// Function words excluded from frequency topic ranking.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "is", "in", "of", "for", "a", "an", "to", "with", "on", "at", "by", "from",
    "as", "are", "be", "this", "that", "it", "they", "we", "you", "he", "she", "them", "his",
    "her", "its", "their", "our", "your", "my", "mine", "yours", "ours", "theirs", "him", "hers",
    "us", "me", "i", "have", "has", "had", "do", "does", "did", "can", "could", "may", "might",
    "must", "will", "would", "should", "am", "was", "were", "been", "being", "get", "gets", "got",
    "getting",
];

/// Tokens of this many characters or fewer never count as topics.
pub const MAX_SHORT_TOKEN_LEN: usize = 2;

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// A normalized token that can be a topic: not a stop word and longer than
/// two characters.
pub fn is_topic_candidate(token: &str) -> bool {
    token.chars().count() > MAX_SHORT_TOKEN_LEN && !is_stop_word(token)
}
