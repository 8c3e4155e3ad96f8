use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::ROOT;

/// Internal: a root path scored but not yet selected.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath {
    /// Position of the owning sentence within the unit being compressed.
    pub sentence: usize,
    pub path: Vec<usize>,
    pub score: f64,
}

impl RankedPath {
    pub fn terminal(&self) -> usize {
        self.path.last().copied().unwrap_or(ROOT)
    }

    /// Identity of the terminal token across a whole document.
    pub fn terminal_key(&self) -> (usize, usize) {
        (self.sentence, self.terminal())
    }
}

/// Tokens kept for one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Token indices, never including the root.
    pub selected: BTreeSet<usize>,
    /// Tokens left after punctuation removal.
    pub tokens_total: usize,
    pub paths_considered: usize,
    /// No root path could be scored; `selected` is empty.
    pub failed: bool,
}

impl Selection {
    pub fn failed(tokens_total: usize) -> Self {
        Self {
            selected: BTreeSet::new(),
            tokens_total,
            paths_considered: 0,
            failed: true,
        }
    }
}

/// Result of compressing all sentences of a document under one budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentCompression {
    /// Realized share of tokens kept, rounded to a whole percent.
    pub retention_percent: u32,
    pub tokens_selected: usize,
    pub tokens_total: usize,
    /// One line per sentence that kept at least one token.
    pub text: String,
}

impl DocumentCompression {
    /// `NN%:` line that opens a document block.
    pub fn header(&self) -> String {
        format!("{}%:", self.retention_percent)
    }
}

impl fmt::Display for DocumentCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())?;
        if !self.text.is_empty() {
            write!(f, "\n{}", self.text)?;
        }
        Ok(())
    }
}

/// Summary of one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub corpus_version: String,
    pub rate: f64,
    pub mode: String,

    pub documents: usize,
    pub sentences: usize,
    pub failed_compressions: usize,

    pub tokens_total: usize,
    pub tokens_selected: usize,

    pub created_at: DateTime<Utc>, // informational only
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("Token {idx} of sentence {sentence} has no tf-idf score; annotate it first")]
    Unannotated { sentence: usize, idx: usize },
}
