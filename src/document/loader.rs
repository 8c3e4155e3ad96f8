use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::conll::{parse_sentences, ConllError};
use super::document::{Corpus, Document};
use super::token::Sentence;
use crate::types::identifiers::{DocumentId, DocumentIdError};

/// Form of the synthetic token that marks a document boundary in raw text.
pub const DOCUMENT_SEPARATOR: &str = "DOCUMENT-SEPARATOR";
pub const PARSED_EXTENSION: &str = "conll";
pub const TEXT_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path}: {source}")]
    Conll {
        path: PathBuf,
        #[source]
        source: ConllError,
    },
    #[error("Invalid document path: {0}")]
    InvalidPath(#[from] DocumentIdError),
    #[error("Dependency parser failed: {0}")]
    Parser(String),
    #[error("Parser output holds {found} documents, expected {expected}")]
    DocumentCountMismatch { expected: usize, found: usize },
}

/// Turns running text into the tabular parse format.
pub trait DependencyParser {
    fn parse(&self, text: &str) -> Result<String, LoadError>;
}

/// Runs an external program that reads text on stdin and writes parses to stdout.
#[derive(Debug, Clone)]
pub struct CommandParser {
    program: PathBuf,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl CommandParser {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            current_dir: None,
        }
    }

    /// Run the program from `dir`; parser wrappers often resolve their
    /// models relative to it.
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl DependencyParser for CommandParser {
    fn parse(&self, text: &str) -> Result<String, LoadError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.current_dir {
            debug!(dir = %dir.display(), "Parser working directory");
            command.current_dir(dir);
        }
        let mut child = command.spawn()?;

        // Feed stdin from a separate thread; the child may fill its stdout
        // pipe before it has read all input.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| LoadError::Parser("stdin was not captured".to_string()))?;
        let input = text.to_owned();
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| LoadError::Parser("stdin writer panicked".to_string()))?;

        // A failing parser may close stdin early; report its exit first.
        if !output.status.success() {
            return Err(LoadError::Parser(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        written?;

        String::from_utf8(output.stdout)
            .map_err(|e| LoadError::Parser(format!("output is not valid UTF-8: {e}")))
    }
}

/// Load one document per `.conll` file under `root`, in file name order.
pub fn load_parsed_dir(root: &Path) -> Result<Corpus, LoadError> {
    let files = list_files(root, PARSED_EXTENSION)?;
    let mut documents = Vec::with_capacity(files.len());

    for path in files {
        let raw = fs::read_to_string(&path)?;
        let sentences = parse_sentences(&raw).map_err(|source| LoadError::Conll {
            path: path.clone(),
            source,
        })?;
        if sentences.is_empty() {
            warn!(path = %path.display(), "Parsed file holds no sentences");
        }
        let id = DocumentId::from_path(root, &path)?;
        debug!(document = id.as_str(), sentences = sentences.len(), "Document loaded");
        documents.push(Document::from_sentences(id, sentences));
    }

    let corpus = Corpus::new(documents);
    info!(
        documents = corpus.len(),
        sentences = corpus.sentence_count(),
        "Parsed corpus loaded"
    );
    Ok(corpus)
}

/// Load one document per `.txt` file under `root`, parsing all of them in a
/// single parser call with separator sentences between documents.
pub fn load_text_dir(root: &Path, parser: &dyn DependencyParser) -> Result<Corpus, LoadError> {
    let files = list_files(root, TEXT_EXTENSION)?;

    let mut buffer = String::new();
    for path in &files {
        buffer.push_str(&fs::read_to_string(path)?);
        buffer.push('\n');
        buffer.push_str(DOCUMENT_SEPARATOR);
        buffer.push_str(".\n");
    }

    info!(files = files.len(), bytes = buffer.len(), "Parsing raw text");
    let parsed = parser.parse(&buffer)?;
    let sentences = parse_sentences(&parsed).map_err(|source| LoadError::Conll {
        path: root.to_path_buf(),
        source,
    })?;

    let grouped = split_documents(sentences);
    if grouped.len() != files.len() {
        return Err(LoadError::DocumentCountMismatch {
            expected: files.len(),
            found: grouped.len(),
        });
    }

    let mut documents = Vec::with_capacity(files.len());
    for (path, sentences) in files.iter().zip(grouped) {
        let id = DocumentId::from_path(root, path)?;
        documents.push(Document::from_sentences(id, sentences));
    }

    let corpus = Corpus::new(documents);
    info!(
        documents = corpus.len(),
        sentences = corpus.sentence_count(),
        "Raw corpus parsed"
    );
    Ok(corpus)
}

/// Group sentences into documents at separator sentences, dropping the
/// separators. Sentences after the last separator form a final document.
pub fn split_documents(sentences: Vec<Sentence>) -> Vec<Vec<Sentence>> {
    let mut documents = Vec::new();
    let mut current = Vec::new();

    for sentence in sentences {
        if sentence.first_form() == Some(DOCUMENT_SEPARATOR) {
            documents.push(std::mem::take(&mut current));
        } else {
            current.push(sentence);
        }
    }
    if !current.is_empty() {
        documents.push(current);
    }

    documents
}

fn list_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
