// Batch pipeline: process many documents concurrently.
//
// Each document runs on a blocking worker (the LSA decomposition is the one
// CPU-heavy step and must not stall the async runtime). Documents are
// independent, so no state is shared between workers. Failures are logged
// and skipped; the report keeps input order.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{process_document, Document, DocumentReport, PipelineOptions};

/// Reports for every document that processed successfully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub options: PipelineOptions,
    pub documents: Vec<DocumentReport>,
    /// Names of documents that failed
    pub failed: Vec<String>,
}

/// Process `documents` with at most `concurrency` running at once.
pub async fn run(
    documents: Vec<Document>,
    options: PipelineOptions,
    concurrency: usize,
) -> Result<BatchReport> {
    let concurrency = concurrency.max(1);
    info!(
        documents = documents.len(),
        concurrency, "Starting batch run"
    );

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar().template("  Documents [{bar:30}] {pos}/{len} ({eta})")?,
    );

    let results: Vec<(usize, String, Result<DocumentReport>)> =
        stream::iter(documents.into_iter().enumerate().map(|(index, document)| {
            let pb = pb.clone();
            async move {
                let name = document.name.clone();
                let result = tokio::task::spawn_blocking(move || {
                    process_document(&document, &options).map_err(anyhow::Error::from)
                })
                .await
                .context("spawn_blocking panicked")
                .and_then(|r| r);
                pb.inc(1);
                (index, name, result)
            }
        }))
        .buffer_unordered(concurrency)
        .collect()
        .await;
    pb.finish_and_clear();

    let mut ordered = results;
    ordered.sort_by_key(|(index, _, _)| *index);

    let mut reports = Vec::new();
    let mut failed = Vec::new();
    for (_, name, result) in ordered {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                warn!(document = %name, error = %e, "Failed to process document, skipping");
                failed.push(name);
            }
        }
    }

    info!(
        processed = reports.len(),
        failed = failed.len(),
        "Batch run complete"
    );

    Ok(BatchReport {
        generated_at: Utc::now(),
        options,
        documents: reports,
        failed,
    })
}
