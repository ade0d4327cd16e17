// Topic extraction: frequency ranking of content words, with a TF-IDF
// alternative behind the same trait.

pub mod frequency;
pub mod stopwords;
pub mod tfidf;
pub mod traits;

pub use frequency::{extract_topics, FrequencyTopicExtractor};
pub use tfidf::TfIdfTopicExtractor;
pub use traits::TopicExtractor;
