//! Tabular dependency-parse format.
//!
//! One token per line with ten tab-separated fields:
//! `id form lemma pos _ feats head rel _ _`. A blank line ends a sentence.
//! Lines starting with `#` carry no tokens and are skipped.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use thiserror::Error;

use super::token::{Sentence, Token, ROOT};

pub const FIELD_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConllError {
    #[error("line {line}: expected ten tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: {field} is not a non-negative integer: {value:?}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: token id 0 is reserved for the root")]
    ReservedId { line: usize },
    #[error("line {line}: token id {idx} is already used in this sentence")]
    DuplicateId { line: usize, idx: usize },
    #[error("line {line}: head {head} does not name a token of the same sentence")]
    DanglingHead { line: usize, head: usize },
}

/// Parse every sentence in `input`.
pub fn parse_sentences(input: &str) -> Result<Vec<Sentence>, ConllError> {
    let mut sentences = Vec::new();
    let mut pending: Vec<(usize, Token)> = Vec::new();

    for (n, line) in input.lines().enumerate() {
        let line_no = n + 1;
        if line.trim().is_empty() {
            flush(&mut pending, &mut sentences)?;
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        pending.push((line_no, parse_line(line, line_no)?));
    }
    flush(&mut pending, &mut sentences)?;

    Ok(sentences)
}

fn parse_line(line: &str, line_no: usize) -> Result<Token, ConllError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != FIELD_COUNT {
        return Err(ConllError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let idx = parse_index(fields[0], "id", line_no)?;
    if idx == ROOT {
        return Err(ConllError::ReservedId { line: line_no });
    }
    let head = parse_index(fields[6], "head", line_no)?;

    Ok(Token {
        idx,
        form: fields[1].to_string(),
        lemma: fields[2].to_string(),
        pos: fields[3].to_string(),
        feats: fields[5].to_string(),
        head,
        rel: fields[7].to_string(),
        tfidf: None,
    })
}

fn parse_index(value: &str, field: &'static str, line_no: usize) -> Result<usize, ConllError> {
    value.trim().parse().map_err(|_| ConllError::InvalidInteger {
        line: line_no,
        field,
        value: value.to_string(),
    })
}

// Heads may point forward, so they are checked once the sentence is complete.
fn flush(
    pending: &mut Vec<(usize, Token)>,
    sentences: &mut Vec<Sentence>,
) -> Result<(), ConllError> {
    if pending.is_empty() {
        return Ok(());
    }

    let mut ids = BTreeSet::new();
    for (line, token) in pending.iter() {
        if !ids.insert(token.idx) {
            return Err(ConllError::DuplicateId {
                line: *line,
                idx: token.idx,
            });
        }
    }
    for (line, token) in pending.iter() {
        if token.head != ROOT && !ids.contains(&token.head) {
            return Err(ConllError::DanglingHead {
                line: *line,
                head: token.head,
            });
        }
    }

    let tokens = pending.drain(..).map(|(_, t)| t).collect();
    sentences.push(Sentence::new(tokens));
    Ok(())
}

/// Render sentences back to the tabular format, each followed by a blank line.
pub fn render_sentences<'a>(sentences: impl IntoIterator<Item = &'a Sentence>) -> String {
    let mut out = String::new();
    for sentence in sentences {
        for t in sentence {
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}\t_\t{}\t{}\t{}\t_\t_",
                t.idx, t.form, t.lemma, t.pos, t.feats, t.head, t.rel
            );
        }
        out.push('\n');
    }
    out
}
