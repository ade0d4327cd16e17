use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::pipeline::{
    PipelineOptions, SummarizerBackend, TopicMethod, DEFAULT_SENTENCE_COUNT, DEFAULT_TOPIC_COUNT,
};

/// Default number of documents processed at once by `batch`.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Central configuration loaded from environment variables.
///
/// Every value has a default. The .env file is loaded automatically at
/// startup via dotenvy; command-line flags override what is loaded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Summary length in sentences (TEXTRA_SUMMARY_SENTENCES)
    pub sentence_count: usize,
    /// Number of topics to extract (TEXTRA_TOPIC_COUNT)
    pub topic_count: usize,
    /// Summarization strategy (TEXTRA_SUMMARIZER: lsa | frequency)
    pub summarizer: SummarizerBackend,
    /// Topic ranking (TEXTRA_TOPIC_METHOD: frequency | tfidf)
    pub topic_method: TopicMethod,
    /// Documents processed concurrently in batch mode (TEXTRA_CONCURRENCY)
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sentence_count: DEFAULT_SENTENCE_COUNT,
            topic_count: DEFAULT_TOPIC_COUNT,
            summarizer: SummarizerBackend::default(),
            topic_method: TopicMethod::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables take their defaults. Set-but-invalid values are
    /// errors rather than silently replaced.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            sentence_count: positive(&lookup, "TEXTRA_SUMMARY_SENTENCES", defaults.sentence_count)?,
            topic_count: positive(&lookup, "TEXTRA_TOPIC_COUNT", defaults.topic_count)?,
            summarizer: parsed(&lookup, "TEXTRA_SUMMARIZER", defaults.summarizer)?,
            topic_method: parsed(&lookup, "TEXTRA_TOPIC_METHOD", defaults.topic_method)?,
            concurrency: positive(&lookup, "TEXTRA_CONCURRENCY", defaults.concurrency)?,
        })
    }

    /// The pipeline options this configuration describes.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            sentence_count: self.sentence_count,
            topic_count: self.topic_count,
            summarizer: self.summarizer,
            topic_method: self.topic_method,
        }
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> Result<usize> {
    let value: usize = parsed(lookup, key, default)?;
    if value == 0 {
        anyhow::bail!("{key} must be at least 1. Fix it in your .env file or environment.");
    }
    Ok(value)
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Invalid value for {key}: '{raw}'")),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.sentence_count, 5);
        assert_eq!(config.topic_count, 5);
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("TEXTRA_SUMMARY_SENTENCES", "3"),
            ("TEXTRA_TOPIC_COUNT", " 8 "),
            ("TEXTRA_SUMMARIZER", "frequency"),
            ("TEXTRA_TOPIC_METHOD", "tfidf"),
            ("TEXTRA_CONCURRENCY", "2"),
        ]))
        .unwrap();
        assert_eq!(config.sentence_count, 3);
        assert_eq!(config.topic_count, 8);
        assert_eq!(config.summarizer, SummarizerBackend::Frequency);
        assert_eq!(config.topic_method, TopicMethod::TfIdf);
        assert_eq!(config.concurrency, 2);
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = Config::from_lookup(lookup(&[("TEXTRA_TOPIC_COUNT", "0")])).unwrap_err();
        assert!(err.to_string().contains("TEXTRA_TOPIC_COUNT"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Config::from_lookup(lookup(&[("TEXTRA_SUMMARY_SENTENCES", "five")])).is_err());
        assert!(Config::from_lookup(lookup(&[("TEXTRA_SUMMARIZER", "magic")])).is_err());
    }
}
