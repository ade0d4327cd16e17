// Document pipeline: statistics, summary, topics and language for one text.
//
// `process_document` is synchronous and CPU-bound. `batch::run` fans many
// documents out over blocking workers.

pub mod batch;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::{analyze, TextStats};
use crate::error::TextError;
use crate::language::{detect_language, Detection};
use crate::summarize::{FrequencySummarizer, LsaSummarizer, Summarizer, Summary};
use crate::topics::{FrequencyTopicExtractor, TfIdfTopicExtractor, TopicExtractor};

/// Default number of summary sentences.
pub const DEFAULT_SENTENCE_COUNT: usize = 5;

/// Default number of topics.
pub const DEFAULT_TOPIC_COUNT: usize = 5;

/// Which summarization strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerBackend {
    /// LSA ranking, falling back to frequency scoring on failure (default)
    #[default]
    Lsa,
    /// Frequency scoring only
    Frequency,
}

impl SummarizerBackend {
    pub fn build(&self) -> Box<dyn Summarizer + Send + Sync> {
        match self {
            SummarizerBackend::Lsa => Box::new(LsaSummarizer::default()),
            SummarizerBackend::Frequency => Box::new(FrequencySummarizer),
        }
    }
}

impl FromStr for SummarizerBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lsa" => Ok(SummarizerBackend::Lsa),
            "frequency" => Ok(SummarizerBackend::Frequency),
            other => Err(format!("unknown summarizer '{other}' (expected lsa or frequency)")),
        }
    }
}

/// Which topic ranking to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TopicMethod {
    /// Raw frequency of content words (default)
    #[default]
    Frequency,
    /// TF-IDF with sentences as documents
    #[value(name = "tfidf")]
    TfIdf,
}

impl TopicMethod {
    pub fn build(&self) -> Box<dyn TopicExtractor + Send + Sync> {
        match self {
            TopicMethod::Frequency => Box::new(FrequencyTopicExtractor),
            TopicMethod::TfIdf => Box::new(TfIdfTopicExtractor),
        }
    }
}

impl FromStr for TopicMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frequency" => Ok(TopicMethod::Frequency),
            "tfidf" | "tf-idf" => Ok(TopicMethod::TfIdf),
            other => Err(format!("unknown topic method '{other}' (expected frequency or tfidf)")),
        }
    }
}

/// Knobs for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub sentence_count: usize,
    pub topic_count: usize,
    pub summarizer: SummarizerBackend,
    pub topic_method: TopicMethod,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            sentence_count: DEFAULT_SENTENCE_COUNT,
            topic_count: DEFAULT_TOPIC_COUNT,
            summarizer: SummarizerBackend::default(),
            topic_method: TopicMethod::default(),
        }
    }
}

/// A named piece of already-extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Everything the pipeline produces for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub name: String,
    pub stats: TextStats,
    pub summary: Summary,
    pub topics: Vec<String>,
    pub language: Option<Detection>,
}

/// Run statistics, summary, topics and language detection on `document`.
///
/// The summary and topics are computed independently of each other.
pub fn process_document(
    document: &Document,
    options: &PipelineOptions,
) -> Result<DocumentReport, TextError> {
    let summary = options
        .summarizer
        .build()
        .summarize(&document.text, options.sentence_count)?;
    let topics = options
        .topic_method
        .build()
        .extract(&document.text, options.topic_count)?;
    let stats = analyze(&document.text);
    let language = detect_language(&document.text);

    info!(
        document = %document.name,
        words = stats.total_words,
        strategy = %summary.strategy,
        topics = topics.len(),
        "Document processed"
    );

    Ok(DocumentReport {
        name: document.name.clone(),
        stats,
        summary,
        topics,
        language,
    })
}
