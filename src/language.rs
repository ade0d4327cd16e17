// Offline language detection.
//
// `whatlang` first picks the writing system, then separates the languages
// that share it by trigram profile. Scripts used by a single language
// (Hangul, Tamil, Telugu, kana) decide on their own.

use serde::{Deserialize, Serialize};
use tracing::debug;
use whatlang::Lang;

/// Languages the pipeline names. Anything else is reported as `Other` with
/// the detector's own code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Tamil,
    Hindi,
    Telugu,
    French,
    Spanish,
    German,
    Italian,
    Japanese,
    Korean,
    Chinese,
    Russian,
    Arabic,
    Portuguese,
    Other,
}

impl Language {
    /// ISO 639-1 code (`zh-cn` for Chinese). Empty for `Other`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Tamil => "ta",
            Language::Hindi => "hi",
            Language::Telugu => "te",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::German => "de",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Chinese => "zh-cn",
            Language::Russian => "ru",
            Language::Arabic => "ar",
            Language::Portuguese => "pt",
            Language::Other => "",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Tamil => "Tamil",
            Language::Hindi => "Hindi",
            Language::Telugu => "Telugu",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Chinese => "Chinese",
            Language::Russian => "Russian",
            Language::Arabic => "Arabic",
            Language::Portuguese => "Portuguese",
            Language::Other => "Other",
        }
    }
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::Eng => Language::English,
            Lang::Tam => Language::Tamil,
            Lang::Hin => Language::Hindi,
            Lang::Tel => Language::Telugu,
            Lang::Fra => Language::French,
            Lang::Spa => Language::Spanish,
            Lang::Deu => Language::German,
            Lang::Ita => Language::Italian,
            Lang::Jpn => Language::Japanese,
            Lang::Kor => Language::Korean,
            Lang::Cmn => Language::Chinese,
            Lang::Rus => Language::Russian,
            Lang::Ara => Language::Arabic,
            Lang::Por => Language::Portuguese,
            _ => Language::Other,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A detected language with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub language: Language,
    /// ISO 639-3 code reported by the detector (`hin`, `cmn`, ...)
    pub code: String,
    /// Detector confidence in [0, 1]
    pub confidence: f64,
    /// Whether the margin over the runner-up language was clear
    pub reliable: bool,
}

impl Detection {
    /// "Hindi", or "Other (nld)" for languages outside [`Language`].
    pub fn label(&self) -> String {
        match self.language {
            Language::Other => format!("Other ({})", self.code),
            language => language.name().to_string(),
        }
    }

    /// The ISO 639-1 code for named languages, the detector's code otherwise.
    pub fn short_code(&self) -> &str {
        match self.language {
            Language::Other => &self.code,
            language => language.code(),
        }
    }
}

/// Guess the language of `text`, or `None` when it has no letters to go on.
pub fn detect_language(text: &str) -> Option<Detection> {
    let info = whatlang::detect(text)?;
    let detection = Detection {
        language: Language::from(info.lang()),
        code: info.lang().code().to_string(),
        confidence: info.confidence(),
        reliable: info.is_reliable(),
    };
    debug!(
        language = %detection.label(),
        code = %detection.code,
        confidence = detection.confidence,
        reliable = detection.reliable,
        "Language detected"
    );
    Some(detection)
}
