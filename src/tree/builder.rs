use std::collections::{BTreeMap, HashMap};

use crate::config::RelationLabels;
use crate::document::{Sentence, Token, ROOT};

use super::paths::enumerate_paths;

/// Head-to-children adjacency reconstructed from a sentence's head pointers.
///
/// After coordination rewiring a conjunct can hang from two parents, so this
/// is a DAG keyed by token index rather than a tree of owned nodes.
#[derive(Debug, Clone)]
pub struct DependencyTree<'s> {
    tokens: BTreeMap<usize, &'s Token>,
    children: HashMap<usize, Vec<usize>>,
}

impl<'s> DependencyTree<'s> {
    pub fn build(sentence: &'s Sentence, labels: &RelationLabels) -> Self {
        let mut tokens = BTreeMap::new();
        let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut conjuncts = Vec::new();

        for token in sentence {
            if token.rel == labels.punct {
                continue;
            }
            if token.rel == labels.conj {
                conjuncts.push(token);
            }
            children.entry(token.head).or_default().push(token.idx);
            tokens.insert(token.idx, token);
        }

        // Link each conjunct under every coordinator sharing its head.
        for conj in conjuncts {
            let coordinators: Vec<usize> = children
                .get(&conj.head)
                .map(|siblings| {
                    siblings
                        .iter()
                        .copied()
                        .filter(|idx| tokens.get(idx).is_some_and(|t| t.rel == labels.cc))
                        .collect()
                })
                .unwrap_or_default();

            for cc in coordinators {
                children.entry(cc).or_default().push(conj.idx);
            }
        }

        Self { tokens, children }
    }

    pub fn token(&self, idx: usize) -> Option<&'s Token> {
        self.tokens.get(&idx).copied()
    }

    pub fn children(&self, idx: usize) -> &[usize] {
        self.children.get(&idx).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn root_children(&self) -> &[usize] {
        self.children(ROOT)
    }

    /// Number of tokens kept after punctuation removal.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn paths(&self) -> Vec<Vec<usize>> {
        enumerate_paths(self)
    }
}
