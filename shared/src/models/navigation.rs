//! Navigation and routing DTOs consumed by the web client

use serde::{Deserialize, Serialize};

/// Client route derived from one routable module
///
/// `path` follows `<parentCode>/<ownCode>` in lower case, with `sys`
/// standing in for a missing parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    pub path: String,
    pub name: String,
    pub component_name: String,
    pub component_path: String,
    pub module_id: i64,
    pub parent_id: Option<i64>,
}
