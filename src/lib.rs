//! Sentence and document compression over dependency parses.
//!
//! `dep-compress` loads a parsed corpus, weighs lemmas with TF-IDF, rebuilds
//! each sentence's dependency tree and keeps the highest-salience root paths
//! until a retention budget is spent. Ranking is deterministic: identical
//! corpora and rates always produce identical output.

pub mod config;
pub mod document;
pub mod index;
pub mod pipeline;
pub mod selection;
pub mod tree;
pub mod types;
