//! Flat rows → nested forest
//!
//! Items are kept in a flat arena and linked through a separate children
//! index, so building never needs shared mutable node handles. Nodes are
//! materialized from the roots downward:
//!
//! - an item whose parent is absent from the input is an orphan and is
//!   omitted from every level (together with its descendants)
//! - items on a parent cycle are never reachable from a root and are
//!   dropped the same way
//! - siblings are ordered by `sort_order`, ties keep input order
//! - materialization stops at [`MAX_TREE_DEPTH`]; a node whose children were
//!   cut there is flagged `truncated`

use serde::Serialize;
use std::collections::HashMap;

use shared::models::{Module, RoleModuleNode};

/// Deepest level that will be materialized (roots are level 1)
pub const MAX_TREE_DEPTH: usize = 32;

/// Anything that can be arranged in a parent/child forest
pub trait TreeItem {
    fn id(&self) -> i64;
    fn parent_id(&self) -> Option<i64>;
    fn sort_order(&self) -> i32;
}

/// One node of the built forest. Serializes as the item's own fields plus `children`
/// (and `truncated: true` on nodes cut at the depth cap).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode<T> {
    #[serde(flatten)]
    pub item: T,
    pub children: Vec<TreeNode<T>>,
    /// Children exist but lie below the depth cap and were not materialized
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl<T> TreeNode<T> {
    /// Number of nodes in this subtree, including itself
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }

    /// Depth-first, pre-order walk over this subtree
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a T)) {
        visit(&self.item);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Build a forest with the default depth cap
pub fn build_tree<T: TreeItem>(items: Vec<T>) -> Vec<TreeNode<T>> {
    build_tree_with_depth(items, MAX_TREE_DEPTH)
}

/// Build a forest, cutting every subtree below `max_depth`
pub fn build_tree_with_depth<T: TreeItem>(items: Vec<T>, max_depth: usize) -> Vec<TreeNode<T>> {
    let mut index: HashMap<i64, usize> = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        index.entry(item.id()).or_insert(i);
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); items.len()];
    let mut roots = Vec::new();
    let mut orphans = 0usize;

    for (i, item) in items.iter().enumerate() {
        match item.parent_id() {
            None => roots.push(i),
            Some(parent_id) => match index.get(&parent_id) {
                Some(&parent) => children[parent].push(i),
                None => orphans += 1,
            },
        }
    }

    // sort_by_key is stable
    roots.sort_by_key(|&i| items[i].sort_order());
    for list in &mut children {
        list.sort_by_key(|&i| items[i].sort_order());
    }

    if orphans > 0 {
        tracing::debug!(orphans, "Omitted items whose parent is missing");
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    roots
        .into_iter()
        .filter_map(|root| materialize(root, &children, &mut slots, 1, max_depth))
        .collect()
}

fn materialize<T>(
    idx: usize,
    children: &[Vec<usize>],
    slots: &mut [Option<T>],
    depth: usize,
    max_depth: usize,
) -> Option<TreeNode<T>> {
    let item = slots[idx].take()?;

    let truncated = depth >= max_depth && !children[idx].is_empty();
    let nodes = if depth >= max_depth {
        if truncated {
            tracing::warn!(
                depth,
                cut = children[idx].len(),
                "Tree depth limit reached, dropping deeper nodes"
            );
        }
        Vec::new()
    } else {
        children[idx]
            .iter()
            .filter_map(|&child| materialize(child, children, slots, depth + 1, max_depth))
            .collect()
    };

    Some(TreeNode {
        item,
        children: nodes,
        truncated,
    })
}

impl TreeItem for Module {
    fn id(&self) -> i64 {
        self.id
    }

    fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}

impl TreeItem for RoleModuleNode {
    fn id(&self) -> i64 {
        self.id
    }

    fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }
}
