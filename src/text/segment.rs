// Sentence segmentation.
//
// Two deliberately different splitters live here. `segment_for_summary` is
// abbreviation-aware and feeds the summarizers; `segment_coarse` splits on
// every terminal mark and feeds text statistics. Callers depend on the
// different granularities, so the two must not share rules.

use std::sync::LazyLock;

use fancy_regex::Regex;
use tracing::warn;

// A single whitespace character after `.`, `?` or `!`, unless the text before
// it looks like `U.S.` or `Mr.`.
static SUMMARY_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?<!\w\.\w.)(?<![A-Z][a-z]\.)(?<=[.?!])\s").expect("valid regex")
});

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '?' | '!')
}

/// Split `text` into sentences for summarization.
///
/// A boundary is a single whitespace character directly preceded by `.`, `?`
/// or `!`, except when:
///
/// - the four preceding characters look like `U.S.` (word char, period,
///   word char, anything), or
/// - the three preceding characters look like `Mr.` (upper-case ASCII
///   letter, lower-case ASCII letter, period).
///
/// Every piece is trimmed and empty pieces are dropped. This is a heuristic:
/// initials such as `J. Smith` still split.
pub fn segment_for_summary(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SUMMARY_BOUNDARY.find_iter(text) {
        match boundary {
            Ok(m) => {
                push_trimmed(&mut sentences, &text[start..m.start()]);
                start = m.end();
            }
            Err(e) => {
                warn!(error = %e, "Sentence boundary search aborted, keeping the rest as one sentence");
                break;
            }
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

/// Split `text` on every `.`, `!` and `?`, trimming and dropping empty pieces.
///
/// Used for sentence counts in text statistics only.
pub fn segment_coarse(text: &str) -> Vec<String> {
    text.split(is_terminal)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        sentences.push(piece.to_string());
    }
}
