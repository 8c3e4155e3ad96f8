pub mod conll;
pub mod document;
pub mod loader;
pub mod token;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use conll::{parse_sentences, render_sentences, ConllError};
pub use document::{Corpus, Document};
pub use loader::{
    load_parsed_dir, load_text_dir, split_documents, CommandParser, DependencyParser, LoadError,
    DOCUMENT_SEPARATOR,
};
pub use token::{Sentence, Token, ROOT};
