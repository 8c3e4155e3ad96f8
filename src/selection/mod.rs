pub mod budgeting;
pub mod ranking;

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::{CompressionConfig, RelationLabels};
use crate::document::Sentence;
use crate::tree::DependencyTree;
use crate::types::{CompressionError, DocumentCompression, RankedPath, Selection};
pub use budgeting::{apply_budget, BudgetResult};
pub use ranking::{rank_paths, PathScorer, TerminalTfIdfScorer};

/// Prunes dependency subtrees of annotated sentences down to a retention rate.
///
/// Every entry point takes `rate` in the open interval (0, 1); anything else
/// is a caller bug and panics.
pub struct Compressor<S> {
    scorer: S,
    relations: RelationLabels,
}

impl Default for Compressor<TerminalTfIdfScorer> {
    fn default() -> Self {
        Self {
            scorer: TerminalTfIdfScorer,
            relations: RelationLabels::default(),
        }
    }
}

impl Compressor<TerminalTfIdfScorer> {
    pub fn from_config(config: &CompressionConfig) -> Self {
        Self::new(TerminalTfIdfScorer, config.relations.clone())
    }
}

impl<S> Compressor<S>
where
    S: PathScorer,
{
    pub fn new(scorer: S, relations: RelationLabels) -> Self {
        Self { scorer, relations }
    }

    pub fn relations(&self) -> &RelationLabels {
        &self.relations
    }

    /// Choose which tokens of `sentence` survive.
    pub fn select(&self, sentence: &Sentence, rate: f64) -> Result<Selection, CompressionError> {
        assert_rate(rate);

        let tree = DependencyTree::build(sentence, &self.relations);
        let tokens_total = tree.len();

        let Some(mut ranked) = self.rank_sentence(0, &tree)? else {
            debug!(tokens = tokens_total, "Sentence has no scorable root path");
            return Ok(Selection::failed(tokens_total));
        };
        let paths_considered = ranked.len();
        rank_paths(&mut ranked);

        let BudgetResult { selected, .. } = apply_budget(ranked, 1, rate * tokens_total as f64);

        Ok(Selection {
            selected: selected.into_iter().next().unwrap_or_default(),
            tokens_total,
            paths_considered,
            failed: false,
        })
    }

    /// Compressed surface string of `sentence`; empty when compression fails.
    pub fn compress(&self, sentence: &Sentence, rate: f64) -> Result<String, CompressionError> {
        let selection = self.select(sentence, rate)?;
        Ok(render(sentence, &selection.selected))
    }

    /// Compress all sentences of one document under a single shared budget.
    pub fn compress_document(
        &self,
        sentences: &[Sentence],
        rate: f64,
    ) -> Result<DocumentCompression, CompressionError> {
        assert_rate(rate);

        let trees: Vec<DependencyTree<'_>> = sentences
            .iter()
            .map(|s| DependencyTree::build(s, &self.relations))
            .collect();
        let tokens_total: usize = trees.iter().map(DependencyTree::len).sum();

        // 1. Pool every sentence's paths
        let mut ranked = Vec::new();
        for (i, tree) in trees.iter().enumerate() {
            match self.rank_sentence(i, tree)? {
                Some(paths) => ranked.extend(paths),
                None => debug!(sentence = i, "Sentence contributes no root path"),
            }
        }

        // 2. Ranking
        rank_paths(&mut ranked);

        // 3. One budget over the whole document
        let BudgetResult {
            selected,
            tokens_selected,
            ..
        } = apply_budget(ranked, sentences.len(), rate * tokens_total as f64);

        let text = sentences
            .iter()
            .zip(&selected)
            .filter(|(_, kept)| !kept.is_empty())
            .map(|(sentence, kept)| render(sentence, kept))
            .collect::<Vec<_>>()
            .join("\n");

        let retention_percent = if tokens_total == 0 {
            0
        } else {
            (tokens_selected as f64 / tokens_total as f64 * 100.0).round() as u32
        };

        Ok(DocumentCompression {
            retention_percent,
            tokens_selected,
            tokens_total,
            text,
        })
    }

    /// Score every root path of `tree`. `None` marks a failed compression.
    fn rank_sentence(
        &self,
        sentence: usize,
        tree: &DependencyTree<'_>,
    ) -> Result<Option<Vec<RankedPath>>, CompressionError> {
        let paths = tree.paths();
        if paths.is_empty() {
            return Ok(None);
        }

        let mut ranked = Vec::with_capacity(paths.len());
        for path in paths {
            let terminal = path.last().copied().unwrap_or_default();
            let Some(token) = tree.token(terminal) else {
                return Ok(None);
            };
            let score = self
                .scorer
                .score(token)
                .ok_or(CompressionError::Unannotated {
                    sentence,
                    idx: terminal,
                })?;
            ranked.push(RankedPath {
                sentence,
                path,
                score,
            });
        }
        Ok(Some(ranked))
    }
}

fn assert_rate(rate: f64) {
    assert!(
        rate > 0.0 && rate < 1.0,
        "retention rate must lie strictly between 0 and 1, got {rate}"
    );
}

/// Forms of the kept tokens in ascending index order.
pub fn render(sentence: &Sentence, kept: &BTreeSet<usize>) -> String {
    let mut tokens: Vec<_> = sentence.iter().filter(|t| kept.contains(&t.idx)).collect();
    tokens.sort_by_key(|t| t.idx);
    tokens
        .iter()
        .map(|t| t.form.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
