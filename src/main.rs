use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use textra::config::Config;
use textra::output::terminal;
use textra::pipeline::{self, Document, SummarizerBackend, TopicMethod};
use textra::summarize::Summarizer;
use textra::topics::TopicExtractor;

/// Textra: text statistics, extractive summaries and topics.
///
/// Reads plain UTF-8 text from a file or stdin. PDF extraction and
/// translation happen elsewhere; hand Textra the extracted text.
#[derive(Parser)]
#[command(name = "textra", version, about)]
struct Cli {
    /// Print JSON instead of formatted terminal output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count words, characters, sentences and repeated words
    Analyze {
        /// Input file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Reduce the text to its most relevant sentences
    Summarize {
        /// Input file (stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Number of sentences to keep (default: TEXTRA_SUMMARY_SENTENCES or 5)
        #[arg(long, short)]
        sentences: Option<usize>,

        /// Summarization strategy (default: TEXTRA_SUMMARIZER or lsa)
        #[arg(long, value_enum)]
        strategy: Option<SummarizerBackend>,
    },

    /// List the keywords the text is about
    Topics {
        /// Input file (stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Number of topics (default: TEXTRA_TOPIC_COUNT or 5)
        #[arg(long, short)]
        count: Option<usize>,

        /// Topic ranking (default: TEXTRA_TOPIC_METHOD or frequency)
        #[arg(long, value_enum)]
        method: Option<TopicMethod>,
    },

    /// Guess the language of the text
    Language {
        /// Input file (stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Run the whole pipeline over many files
    Batch {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of documents to process in parallel (default: TEXTRA_CONCURRENCY or 4)
        #[arg(long)]
        concurrency: Option<usize>,

        /// Number of summary sentences per document
        #[arg(long, short)]
        sentences: Option<usize>,

        /// Number of topics per document
        #[arg(long, short)]
        count: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging (stderr, so stdout stays clean for --json)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textra=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { file } => {
            let text = read_input(file.as_deref())?;
            let stats = textra::analyze(&text);
            if cli.json {
                print_json(&stats)?;
            } else {
                terminal::display_stats(&stats);
            }
        }

        Commands::Summarize {
            file,
            sentences,
            strategy,
        } => {
            let text = read_input(file.as_deref())?;
            let sentence_count = sentences.unwrap_or(config.sentence_count);
            let summarizer = strategy.unwrap_or(config.summarizer).build();
            let summary = summarizer.summarize(&text, sentence_count)?;
            info!(
                strategy = %summary.strategy,
                selected = summary.selected.len(),
                total = summary.total_sentences,
                "Summary built"
            );
            if cli.json {
                print_json(&summary)?;
            } else {
                terminal::display_summary(&summary);
            }
        }

        Commands::Topics {
            file,
            count,
            method,
        } => {
            let text = read_input(file.as_deref())?;
            let topic_count = count.unwrap_or(config.topic_count);
            let extractor = method.unwrap_or(config.topic_method).build();
            let topics = extractor.extract(&text, topic_count)?;
            if cli.json {
                print_json(&topics)?;
            } else {
                terminal::display_topics(&topics);
            }
        }

        Commands::Language { file } => {
            let text = read_input(file.as_deref())?;
            let detection = textra::language::detect_language(&text);
            if cli.json {
                print_json(&detection)?;
            } else {
                terminal::display_language(detection.as_ref());
            }
        }

        Commands::Batch {
            files,
            concurrency,
            sentences,
            count,
        } => {
            let mut options = config.pipeline_options();
            if let Some(n) = sentences {
                options.sentence_count = n;
            }
            if let Some(k) = count {
                options.topic_count = k;
            }

            let documents = files
                .iter()
                .map(|path| {
                    let text = read_input(Some(path.as_path()))?;
                    Ok(Document::new(path.display().to_string(), text))
                })
                .collect::<Result<Vec<_>>>()?;

            let concurrency = concurrency.unwrap_or(config.concurrency);
            let report = pipeline::batch::run(documents, options, concurrency).await?;

            if cli.json {
                print_json(&report)?;
            } else {
                terminal::display_batch(&report);
            }

            if !report.failed.is_empty() && report.documents.is_empty() {
                anyhow::bail!("Every document failed. Run with RUST_LOG=textra=debug for details.");
            }
        }
    }

    Ok(())
}

/// Read the whole input as UTF-8. `None` or "-" means stdin.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
