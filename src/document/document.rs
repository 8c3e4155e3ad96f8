use serde::{Deserialize, Serialize};

use super::conll::render_sentences;
use super::token::Sentence;
use crate::types::identifiers::{sha256_tagged, DocumentId, DocumentVersion};

/// The unit TF-IDF statistics are counted over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Build a Document from parsed sentences.
    ///
    /// The version is computed over the canonical tabular rendering, so two
    /// documents with the same parse always share a version.
    pub fn from_sentences(id: DocumentId, sentences: Vec<Sentence>) -> Self {
        let version = DocumentVersion::from_content(render_sentences(&sentences).as_bytes());

        Document {
            id,
            version,
            sentences,
        }
    }

    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Sentence::len).sum()
    }
}

/// Ordered documents. Order only decides emission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    pub documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn sentence_count(&self) -> usize {
        self.documents.iter().map(|d| d.sentences.len()).sum()
    }

    /// `sha256:<hex>` over `id:version` lines in corpus order.
    pub fn version(&self) -> String {
        let lines: String = self
            .documents
            .iter()
            .map(|d| format!("{}:{}\n", d.id.as_str(), d.version.as_str()))
            .collect();
        sha256_tagged(lines.as_bytes())
    }
}
