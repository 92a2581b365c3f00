//! Navigation menu

use shared::models::Module;

use super::tree::{TreeNode, build_tree};

/// Navigation forest of active modules, with codes lower-cased for the client router
pub fn navigation_tree(modules: Vec<Module>) -> Vec<TreeNode<Module>> {
    let active = modules
        .into_iter()
        .filter(|m| m.status.is_active())
        .map(|mut m| {
            m.code_no = m.code_no.to_lowercase();
            m
        })
        .collect();
    build_tree(active)
}
