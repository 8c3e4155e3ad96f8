use crate::document::ROOT;

use super::builder::DependencyTree;

/// Every path from the virtual root down to a token without children.
///
/// Paths start with [`ROOT`] and follow child order, so the result order is
/// the depth-first traversal order. A root without children yields nothing.
pub fn enumerate_paths(tree: &DependencyTree<'_>) -> Vec<Vec<usize>> {
    let mut paths = Vec::new();
    if tree.root_children().is_empty() {
        return paths;
    }

    let mut chain = vec![ROOT];
    walk(tree, ROOT, &mut chain, &mut paths);
    paths
}

fn walk(
    tree: &DependencyTree<'_>,
    node: usize,
    chain: &mut Vec<usize>,
    paths: &mut Vec<Vec<usize>>,
) {
    let children = tree.children(node);
    if children.is_empty() {
        paths.push(chain.clone());
        return;
    }

    for &child in children {
        // A node never appears twice on one path.
        if chain.contains(&child) {
            continue;
        }
        chain.push(child);
        walk(tree, child, chain, paths);
        chain.pop();
    }
}
