// Textra: text statistics, extractive summarization and topic extraction.
//
// This is the library root. `text` holds the shared primitives; the other
// modules build the pipelines and their surfaces on top of it.

pub mod analysis;
pub mod config;
pub mod error;
pub mod language;
pub mod output;
pub mod pipeline;
pub mod summarize;
pub mod text;
pub mod topics;

pub use analysis::{analyze, TextStats};
pub use error::TextError;
pub use summarize::{summarize, summarize_fallback};
pub use text::{segment_coarse, segment_for_summary, word_frequencies};
pub use topics::extract_topics;
