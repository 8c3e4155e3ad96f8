use dep_compress::config::RelationLabels;
use dep_compress::document::{Sentence, Token};
use dep_compress::tree::DependencyTree;

fn tok(idx: usize, form: &str, head: usize, rel: &str) -> Token {
    Token::new(idx, form, form.to_lowercase(), head, rel)
}

/// "John eats apples and pears ."
fn coordinated() -> Sentence {
    Sentence::new(vec![
        tok(1, "John", 2, "nsubj"),
        tok(2, "eats", 0, "root"),
        tok(3, "apples", 2, "dobj"),
        tok(4, "and", 3, "cc"),
        tok(5, "pears", 3, "conj"),
        tok(6, ".", 2, "punct"),
    ])
}

#[test]
fn children_follow_head_pointers_in_sentence_order() {
    let sentence = coordinated();
    let tree = DependencyTree::build(&sentence, &RelationLabels::default());

    assert_eq!(tree.root_children(), &[2]);
    assert_eq!(tree.children(2), &[1, 3]);
    assert_eq!(tree.children(1), &[] as &[usize]);
    assert_eq!(tree.token(3).map(|t| t.form.as_str()), Some("apples"));
}

#[test]
fn punctuation_is_dropped() {
    let sentence = coordinated();
    let tree = DependencyTree::build(&sentence, &RelationLabels::default());

    assert_eq!(tree.len(), 5);
    assert!(tree.token(6).is_none());
    assert!(!tree.children(2).contains(&6));
}

#[test]
fn conjunct_also_hangs_from_sibling_coordinator() {
    let sentence = coordinated();
    let tree = DependencyTree::build(&sentence, &RelationLabels::default());

    assert_eq!(tree.children(3), &[4, 5]);
    assert_eq!(tree.children(4), &[5]);
}

#[test]
fn paths_run_from_root_to_every_leaf() {
    let sentence = coordinated();
    let tree = DependencyTree::build(&sentence, &RelationLabels::default());

    assert_eq!(
        tree.paths(),
        vec![vec![0, 2, 1], vec![0, 2, 3, 4, 5], vec![0, 2, 3, 5]]
    );
}

#[test]
fn custom_relation_labels_are_honoured() {
    let sentence = Sentence::new(vec![
        tok(1, "Kissat", 0, "ROOT"),
        tok(2, "ja", 3, "CC"),
        tok(3, "koirat", 1, "CONJ"),
        tok(4, "!", 1, "PUNCT"),
    ]);
    let labels = RelationLabels {
        punct: "PUNCT".into(),
        cc: "CC".into(),
        conj: "CONJ".into(),
    };
    let tree = DependencyTree::build(&sentence, &labels);

    // "ja" hangs from "koirat", not a sibling of it, so nothing is rewired.
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.paths(), vec![vec![0, 1, 3, 2]]);
}

#[test]
fn root_without_children_yields_no_paths() {
    let sentence = Sentence::new(vec![tok(1, ".", 0, "punct"), tok(2, "x", 1, "dep")]);
    let tree = DependencyTree::build(&sentence, &RelationLabels::default());

    assert_eq!(tree.len(), 1);
    assert!(tree.paths().is_empty());
}

#[test]
fn tokens_below_dropped_punctuation_are_unreachable() {
    let sentence = Sentence::new(vec![
        tok(1, "yes", 0, "root"),
        tok(2, "--", 1, "punct"),
        tok(3, "really", 2, "advmod"),
    ]);
    let tree = DependencyTree::build(&sentence, &RelationLabels::default());

    assert_eq!(tree.paths(), vec![vec![0, 1]]);
}

#[test]
fn head_cycles_never_hang_traversal() {
    // 2 and 3 point at each other and are unreachable from the root.
    let sentence = Sentence::new(vec![
        tok(1, "a", 0, "root"),
        tok(2, "b", 3, "dep"),
        tok(3, "c", 2, "dep"),
    ]);
    let tree = DependencyTree::build(&sentence, &RelationLabels::default());

    assert_eq!(tree.paths(), vec![vec![0, 1]]);
}

#[test]
fn every_path_step_is_a_child_edge() {
    let sentence = coordinated();
    let tree = DependencyTree::build(&sentence, &RelationLabels::default());

    for path in tree.paths() {
        assert_eq!(path[0], 0);
        for pair in path.windows(2) {
            assert!(tree.children(pair[0]).contains(&pair[1]), "{path:?}");
        }
        assert!(tree.children(*path.last().unwrap()).is_empty());
    }
}
