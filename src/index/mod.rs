pub mod tfidf;

pub use tfidf::{IndexError, TfIdfIndex};
