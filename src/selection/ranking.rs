use std::cmp::Ordering;

use crate::document::Token;
use crate::types::RankedPath;

pub trait PathScorer {
    /// Salience of a path ending at `terminal`, or `None` when the token
    /// carries nothing to score by.
    fn score(&self, terminal: &Token) -> Option<f64>;
}

/// v0: a path is worth the tf-idf of the token it ends at.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalTfIdfScorer;

impl PathScorer for TerminalTfIdfScorer {
    fn score(&self, terminal: &Token) -> Option<f64> {
        terminal.tfidf
    }
}

/// Sort globally by (score desc, sentence asc, terminal asc, path asc).
///
/// Paths sharing a terminal token always end up adjacent, which the budget
/// loop relies on to close ties.
pub fn rank_paths(paths: &mut [RankedPath]) {
    paths.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.terminal_key().cmp(&b.terminal_key()))
            .then_with(|| a.path.cmp(&b.path))
    });

    debug_assert!(paths.windows(2).all(|w| w[0].score >= w[1].score));
}
