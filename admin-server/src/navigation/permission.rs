//! Role permission annotation
//!
//! Turns the active module set plus a role's granted module ids into the
//! annotated tree shown by the permission editor.

use std::collections::HashSet;

use shared::models::{Module, RoleModuleNode};

use super::tree::{TreeNode, build_tree};

/// Annotate every active module with `is_selected` / `is_leaf`.
///
/// Inactive modules are skipped and do not count as children, so a module
/// whose only children are inactive is a leaf.
pub fn annotate_modules(modules: Vec<Module>, granted: &HashSet<i64>) -> Vec<RoleModuleNode> {
    let active: Vec<Module> = modules
        .into_iter()
        .filter(|m| m.status.is_active())
        .collect();

    let parents: HashSet<i64> = active.iter().filter_map(|m| m.parent_id).collect();

    active
        .into_iter()
        .map(|m| RoleModuleNode {
            is_selected: granted.contains(&m.id),
            is_leaf: !parents.contains(&m.id),
            id: m.id,
            module_name: m.module_name,
            code_no: m.code_no,
            parent_id: m.parent_id,
            sort_order: m.sort_order,
        })
        .collect()
}

/// Annotated permission forest for one role
pub fn role_module_tree(
    modules: Vec<Module>,
    granted: &HashSet<i64>,
) -> Vec<TreeNode<RoleModuleNode>> {
    build_tree(annotate_modules(modules, granted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Status;

    fn module(id: i64, parent_id: Option<i64>, status: Status) -> Module {
        Module {
            id,
            module_name: format!("Module {id}"),
            code_no: format!("M{id}"),
            parent_id,
            sort_order: id as i32,
            status,
            component_name: None,
            component_path: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_selected_and_leaf_flags() {
        let modules = vec![
            module(1, None, Status::Active),
            module(2, Some(1), Status::Active),
            module(3, Some(1), Status::Active),
        ];
        let granted = HashSet::from([2]);
        let nodes = annotate_modules(modules, &granted);

        let by_id = |id| nodes.iter().find(|n| n.id == id).unwrap();
        assert!(!by_id(1).is_leaf);
        assert!(!by_id(1).is_selected);
        assert!(by_id(2).is_leaf);
        assert!(by_id(2).is_selected);
        assert!(by_id(3).is_leaf);
        assert!(!by_id(3).is_selected);
    }

    #[test]
    fn test_inactive_children_do_not_count() {
        let modules = vec![
            module(1, None, Status::Active),
            module(2, Some(1), Status::Inactive),
        ];
        let nodes = annotate_modules(modules, &HashSet::new());

        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].is_leaf);
    }

    #[test]
    fn test_leaf_is_computed_before_tree_pruning() {
        // 3 hangs under an inactive parent, so it is dropped from the tree,
        // yet 1 still counts as a parent of the active 2.
        let modules = vec![
            module(1, None, Status::Active),
            module(2, Some(1), Status::Active),
            module(4, None, Status::Inactive),
            module(3, Some(4), Status::Active),
        ];
        let forest = role_module_tree(modules, &HashSet::from([3]));

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].item.id, 1);
        assert!(!forest[0].item.is_leaf);
        assert!(forest[0].children[0].item.is_leaf);
        assert_eq!(forest.iter().map(TreeNode::count).sum::<usize>(), 2);
    }

    #[test]
    fn test_non_leaf_at_depth_cap_is_flagged_truncated() {
        use crate::navigation::tree::MAX_TREE_DEPTH;

        let depth = MAX_TREE_DEPTH as i64 + 1;
        let modules: Vec<Module> = (1..=depth)
            .map(|id| module(id, (id > 1).then(|| id - 1), Status::Active))
            .collect();
        let forest = role_module_tree(modules, &HashSet::new());

        let mut node = &forest[0];
        while let Some(child) = node.children.first() {
            node = child;
        }
        assert_eq!(node.item.id, MAX_TREE_DEPTH as i64);
        assert!(!node.item.is_leaf);
        assert!(node.truncated);
    }

    #[test]
    fn test_grant_for_unknown_module_is_ignored() {
        let forest = role_module_tree(vec![module(1, None, Status::Active)], &HashSet::from([77]));
        assert_eq!(forest.len(), 1);
        assert!(!forest[0].item.is_selected);
    }
}
