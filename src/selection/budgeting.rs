use std::collections::BTreeSet;

use crate::document::ROOT;
use crate::types::RankedPath;

pub struct BudgetResult {
    /// Selected token indices, one set per sentence.
    pub selected: Vec<BTreeSet<usize>>,
    pub tokens_selected: usize,
    pub paths_consumed: usize,
    pub paths_excluded_by_budget: usize,
}

/// Greedily union ranked paths until more than `limit` tokens are selected.
///
/// Once over the limit, paths ending at the same token as the previous one
/// are still consumed, so a terminal reached through several parents is never
/// split at the boundary.
pub fn apply_budget(ranked: Vec<RankedPath>, sentence_count: usize, limit: f64) -> BudgetResult {
    let mut selected = vec![BTreeSet::new(); sentence_count];
    let mut tokens_selected = 0;
    let mut paths_consumed = 0;
    let total_paths = ranked.len();
    let mut last_terminal = None;

    for path in ranked {
        let terminal = path.terminal_key();
        if tokens_selected as f64 > limit && last_terminal != Some(terminal) {
            break;
        }
        last_terminal = Some(terminal);

        let Some(kept) = selected.get_mut(path.sentence) else {
            continue;
        };
        for &idx in path.path.iter().filter(|&&idx| idx != ROOT) {
            if kept.insert(idx) {
                tokens_selected += 1;
            }
        }
        paths_consumed += 1;
    }

    BudgetResult {
        selected,
        tokens_selected,
        paths_consumed,
        paths_excluded_by_budget: total_paths - paths_consumed,
    }
}
