// Composition tests verifying that the pipelines chain together correctly.
//
// These tests exercise the data flow between modules:
//   Segmenter -> Summarizer, Normalizer -> Frequency table -> Topics,
//   and everything -> DocumentReport -> batch report / JSON
// without touching the filesystem or the network.

use textra::language::Language;
use textra::pipeline::batch;
use textra::pipeline::{
    process_document, Document, PipelineOptions, SummarizerBackend, TopicMethod,
};
use textra::summarize::Strategy;
use textra::{extract_topics, segment_for_summary, summarize};

const ENERGY: &str = "Solar power is growing quickly across Europe. \
    Solar panels now cost far less than they did a decade ago. \
    Many households install solar panels on their roofs. \
    Wind power also contributes to the energy mix. \
    Grid operators must balance solar and wind output carefully. \
    Battery storage helps smooth out solar production peaks.";

// ============================================================
// Chain: text -> summary + topics (independent)
// ============================================================

#[test]
fn summary_sentences_come_from_the_document() {
    let sentences = segment_for_summary(ENERGY);
    assert_eq!(sentences.len(), 6);

    let summary = summarize(ENERGY, 3).unwrap();
    let mut cursor = 0;
    for picked in segment_for_summary(&summary) {
        let position = sentences[cursor..]
            .iter()
            .position(|s| *s == picked)
            .expect("summary sentence not found in order");
        cursor += position + 1;
    }
}

#[test]
fn topics_lead_with_the_dominant_word() {
    let topics = extract_topics(ENERGY, 4).unwrap();
    assert_eq!(topics, vec!["solar", "power", "panels", "wind"]);
}

#[test]
fn summary_and_topics_do_not_depend_on_each_other() {
    let topics_before = extract_topics(ENERGY, 5).unwrap();
    let _ = summarize(ENERGY, 2).unwrap();
    assert_eq!(extract_topics(ENERGY, 5).unwrap(), topics_before);
}

// ============================================================
// Chain: Document -> DocumentReport
// ============================================================

#[test]
fn document_report_carries_every_result() {
    let options = PipelineOptions {
        sentence_count: 3,
        topic_count: 4,
        ..PipelineOptions::default()
    };
    let report = process_document(&Document::new("energy.txt", ENERGY), &options).unwrap();

    assert_eq!(report.name, "energy.txt");
    assert_eq!(report.stats.total_sentences, 6);
    assert_eq!(report.summary.selected.len(), 3);
    assert_eq!(report.summary.total_sentences, 6);
    assert_eq!(report.summary.text, summarize(ENERGY, 3).unwrap());
    assert_eq!(report.topics, extract_topics(ENERGY, 4).unwrap());
    assert_eq!(report.language.map(|d| d.language), Some(Language::English));
}

#[test]
fn frequency_backend_matches_fallback_function() {
    let options = PipelineOptions {
        sentence_count: 2,
        summarizer: SummarizerBackend::Frequency,
        topic_method: TopicMethod::TfIdf,
        ..PipelineOptions::default()
    };
    let report = process_document(&Document::new("energy", ENERGY), &options).unwrap();
    assert_eq!(report.summary.strategy, Strategy::Frequency);
    assert_eq!(
        report.summary.text,
        textra::summarize_fallback(ENERGY, 2).unwrap()
    );
    assert!(report.topics.len() <= options.topic_count);
}

#[test]
fn document_report_serializes_to_json() {
    let report =
        process_document(&Document::new("energy", ENERGY), &PipelineOptions::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["name"], "energy");
    assert_eq!(json["stats"]["total_sentences"], 6);
    assert!(json["summary"]["strategy"].is_string());
    assert_eq!(json["topics"][0], "solar");
    assert_eq!(json["language"]["language"], "english");
}

// ============================================================
// Chain: many documents -> BatchReport
// ============================================================

#[tokio::test]
async fn batch_processes_documents_independently() {
    let documents = vec![
        Document::new("energy", ENERGY),
        Document::new("empty", ""),
        Document::new("spam", "Spam. Spam! Spam? Spam."),
    ];
    let options = PipelineOptions {
        sentence_count: 2,
        ..PipelineOptions::default()
    };

    let report = batch::run(documents, options, 2).await.unwrap();
    assert!(report.failed.is_empty());
    assert_eq!(report.documents.len(), 3);

    let energy = &report.documents[0];
    assert_eq!(energy.summary.text, summarize(ENERGY, 2).unwrap());

    let empty = &report.documents[1];
    assert_eq!(empty.summary.text, "");
    assert!(empty.topics.is_empty());

    let spam = &report.documents[2];
    assert_eq!(spam.summary.strategy, Strategy::Frequency);
    assert_eq!(spam.summary.text, "Spam. Spam!");
    assert_eq!(spam.topics, vec!["spam"]);
}
