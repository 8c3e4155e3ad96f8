pub mod sink;

use std::fs;
use std::path::Path;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::CompressionConfig;
use crate::document::Corpus;
use crate::index::{IndexError, TfIdfIndex};
use crate::selection::{render, Compressor, TerminalTfIdfScorer};
use crate::types::{CompressionError, RunReport};
pub use sink::{original_path, CompressionSink, FilePairSink, WriterSink};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Index error: {0}")]
    Index(#[from] IndexError),
    #[error("Compression error: {0}")]
    Compression(#[from] CompressionError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Drives annotation and compression over a loaded corpus.
///
/// The index must cover the same corpus; it is only read.
pub struct Pipeline<'a> {
    corpus: &'a Corpus,
    index: &'a TfIdfIndex,
    compressor: Compressor<TerminalTfIdfScorer>,
    rate: f64,
}

impl<'a> Pipeline<'a> {
    pub fn new(corpus: &'a Corpus, index: &'a TfIdfIndex, config: &CompressionConfig) -> Self {
        Self {
            corpus,
            index,
            compressor: Compressor::from_config(config),
            rate: config.rate,
        }
    }

    /// Emit one `(compressed, original)` pair per sentence, in corpus order.
    pub fn compress_sentences(
        &self,
        sink: &mut dyn CompressionSink,
    ) -> Result<RunReport, PipelineError> {
        info!(rate = self.rate, documents = self.corpus.len(), "Compressing sentences");
        let mut report = self.empty_report("sentence");

        for (doc_index, document) in self.corpus.documents.iter().enumerate() {
            for sentence in &document.sentences {
                let annotated = self.index.annotate(sentence, doc_index)?;
                let selection = self.compressor.select(&annotated, self.rate)?;
                if selection.failed {
                    debug!(document = document.id.as_str(), "Failed compression");
                    report.failed_compressions += 1;
                }

                report.sentences += 1;
                report.tokens_total += selection.tokens_total;
                report.tokens_selected += selection.selected.len();

                sink.emit(&render(&annotated, &selection.selected), &sentence.surface())?;
            }
            report.documents += 1;
            sink.end_document()?;
        }
        sink.finish()?;

        log_report(&report);
        Ok(report)
    }

    /// Emit one block per document, compressed under a document-wide budget.
    pub fn compress_documents(
        &self,
        sink: &mut dyn CompressionSink,
    ) -> Result<RunReport, PipelineError> {
        info!(rate = self.rate, documents = self.corpus.len(), "Compressing documents");
        let mut report = self.empty_report("document");

        for (doc_index, document) in self.corpus.documents.iter().enumerate() {
            let annotated = self.index.annotate_all(&document.sentences, doc_index)?;
            let result = self.compressor.compress_document(&annotated, self.rate)?;
            if result.tokens_selected == 0 {
                report.failed_compressions += 1;
            }

            report.documents += 1;
            report.sentences += document.sentences.len();
            report.tokens_total += result.tokens_total;
            report.tokens_selected += result.tokens_selected;

            // Both blocks open with the same header.
            let original = std::iter::once(result.header())
                .chain(document.sentences.iter().map(|s| s.surface()))
                .collect::<Vec<_>>()
                .join("\n");
            sink.emit(&result.to_string(), &original)?;
            sink.end_document()?;
        }
        sink.finish()?;

        log_report(&report);
        Ok(report)
    }

    fn empty_report(&self, mode: &str) -> RunReport {
        RunReport {
            corpus_version: self.index.corpus_version().to_string(),
            rate: self.rate,
            mode: mode.to_string(),
            documents: 0,
            sentences: 0,
            failed_compressions: 0,
            tokens_total: 0,
            tokens_selected: 0,
            created_at: Utc::now(),
        }
    }
}

fn log_report(report: &RunReport) {
    info!(
        documents = report.documents,
        sentences = report.sentences,
        failed = report.failed_compressions,
        tokens_total = report.tokens_total,
        tokens_selected = report.tokens_selected,
        "Compression finished"
    );
}

/// Write `report` as pretty-printed JSON.
pub fn write_report(path: &Path, report: &RunReport) -> Result<(), PipelineError> {
    fs::write(path, serde_json::to_string_pretty(report)?)?;
    info!(path = %path.display(), "Run report written");
    Ok(())
}
