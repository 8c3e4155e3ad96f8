use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::info;

use crate::document::{Corpus, Sentence};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("Term {0:?} was not seen while building the index")]
    UnknownTerm(String),
    #[error("Document {index} is out of range for a corpus of {count} documents")]
    UnknownDocument { index: usize, count: usize },
}

/// Lemma statistics over a whole corpus.
///
/// Built once; every query afterwards is a pure read, so one index can be
/// shared by any number of compression calls.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    document_count: usize,
    /// lemma -> number of documents containing it
    document_frequency: HashMap<String, usize>,
    /// document -> lemma -> occurrences
    term_frequency: Vec<HashMap<String, usize>>,
    corpus_version: String,
}

impl TfIdfIndex {
    pub fn build(corpus: &Corpus) -> Self {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        let mut term_frequency = Vec::with_capacity(corpus.len());

        for document in &corpus.documents {
            let mut counts: HashMap<String, usize> = HashMap::new();
            let mut seen: HashSet<&str> = HashSet::new();

            for token in document.sentences.iter().flat_map(|s| s.iter()) {
                *counts.entry(token.lemma.clone()).or_insert(0) += 1;
                if seen.insert(token.lemma.as_str()) {
                    *document_frequency.entry(token.lemma.clone()).or_insert(0) += 1;
                }
            }
            term_frequency.push(counts);
        }

        let index = Self {
            document_count: corpus.len(),
            document_frequency,
            term_frequency,
            corpus_version: corpus.version(),
        };
        info!(
            documents = index.document_count,
            vocabulary = index.vocabulary_size(),
            corpus_version = %index.corpus_version,
            "TF-IDF index built"
        );
        index
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }

    pub fn corpus_version(&self) -> &str {
        &self.corpus_version
    }

    pub fn document_frequency(&self, term: &str) -> Option<usize> {
        self.document_frequency.get(term).copied()
    }

    /// Occurrences of `term` in document `doc`; zero when the document lacks it.
    pub fn term_frequency(&self, term: &str, doc: usize) -> Result<usize, IndexError> {
        let counts = self
            .term_frequency
            .get(doc)
            .ok_or(IndexError::UnknownDocument {
                index: doc,
                count: self.document_count,
            })?;
        Ok(counts.get(term).copied().unwrap_or(0))
    }

    /// `ln(N / df(term))`.
    pub fn idf(&self, term: &str) -> Result<f64, IndexError> {
        let df = self
            .document_frequency(term)
            .ok_or_else(|| IndexError::UnknownTerm(term.to_string()))?;
        Ok((self.document_count as f64 / df as f64).ln())
    }

    /// `(1 + ln(tf)) * idf(term)`, or `0.0` when the term never occurs in `doc`.
    pub fn tfidf(&self, term: &str, doc: usize) -> Result<f64, IndexError> {
        let tf = self.term_frequency(term, doc)?;
        let idf = self.idf(term)?;
        if tf == 0 {
            return Ok(0.0);
        }
        Ok((1.0 + (tf as f64).ln()) * idf)
    }

    /// Copy of `sentence` with every token scored against document `doc`.
    pub fn annotate(&self, sentence: &Sentence, doc: usize) -> Result<Sentence, IndexError> {
        let tokens = sentence
            .iter()
            .map(|token| {
                let mut token = token.clone();
                token.tfidf = Some(self.tfidf(&token.lemma, doc)?);
                Ok(token)
            })
            .collect::<Result<Vec<_>, IndexError>>()?;
        Ok(Sentence::new(tokens))
    }

    pub fn annotate_all(
        &self,
        sentences: &[Sentence],
        doc: usize,
    ) -> Result<Vec<Sentence>, IndexError> {
        sentences.iter().map(|s| self.annotate(s, doc)).collect()
    }
}
