//! Navigation core
//!
//! Pure functions over module rows, shared by the menu, the permission
//! editor and the client routing table:
//! - [`build_tree`] - flat rows → sorted forest
//! - [`role_module_tree`] - forest annotated with a role's grants
//! - [`generate_routes`] - route descriptors for routable modules

pub mod menu;
pub mod permission;
pub mod routes;
pub mod tree;

pub use menu::navigation_tree;
pub use permission::{annotate_modules, role_module_tree};
pub use routes::{ComponentSource, generate_routes, resolve_component, route_path};
pub use tree::{MAX_TREE_DEPTH, TreeItem, TreeNode, build_tree, build_tree_with_depth};
