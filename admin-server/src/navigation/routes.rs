//! Route table generation
//!
//! Every active module bound to a component becomes one client route. The
//! path is `<parentCode>/<ownCode>` in lower case; `sys` stands in when the
//! module has no parent or the parent row is gone.

use std::collections::{HashMap, HashSet};

use shared::models::{Module, RouteDescriptor};

/// Path segment used for modules without a resolvable parent
pub const DEFAULT_PARENT_SEGMENT: &str = "sys";

/// Directory prefix for modules that bind a component without an explicit path
pub const DEFAULT_COMPONENT_DIR: &str = "pages/system";

/// Build `<parent>/<code>` in lower case
pub fn route_path(parent_code: Option<&str>, code: &str) -> String {
    let parent = parent_code.unwrap_or(DEFAULT_PARENT_SEGMENT);
    format!("{}/{}", parent.to_lowercase(), code.to_lowercase())
}

/// Flatten routable modules into route descriptors.
///
/// `modules` should be the full module set: parents are looked up in it
/// regardless of their own status. Output is ordered by sort order, then id.
pub fn generate_routes(modules: &[Module]) -> Vec<RouteDescriptor> {
    let codes: HashMap<i64, &str> = modules.iter().map(|m| (m.id, m.code_no.as_str())).collect();

    let mut routable: Vec<&Module> = modules
        .iter()
        .filter(|m| m.status.is_active())
        .filter(|m| {
            m.component_name
                .as_deref()
                .is_some_and(|c| !c.trim().is_empty())
        })
        .collect();
    routable.sort_by_key(|m| (m.sort_order, m.id));

    routable
        .into_iter()
        .filter_map(|m| {
            let component_name = m.component_name.as_deref()?.trim().to_string();
            let parent_code = m.parent_id.and_then(|pid| codes.get(&pid).copied());
            let component_path = m
                .component_path
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("{DEFAULT_COMPONENT_DIR}/{component_name}"));

            Some(RouteDescriptor {
                path: route_path(parent_code, &m.code_no),
                name: m.module_name.clone(),
                component_name,
                component_path,
                module_id: m.id,
                parent_id: m.parent_id,
            })
        })
        .collect()
}

/// Where the client gets a route's component from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentSource<'a> {
    /// Pre-registered component, referenced by name
    Registered(&'a str),
    /// Loaded on demand from this path
    Lazy(&'a str),
}

/// Pick the component source for a route: registered name first, lazy path otherwise
pub fn resolve_component<'a>(
    registered: &HashSet<String>,
    route: &'a RouteDescriptor,
) -> ComponentSource<'a> {
    if registered.contains(&route.component_name) {
        ComponentSource::Registered(&route.component_name)
    } else {
        ComponentSource::Lazy(&route.component_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Status;

    fn module(id: i64, code: &str, parent_id: Option<i64>, component: Option<&str>) -> Module {
        Module {
            id,
            module_name: format!("{code} name"),
            code_no: code.to_string(),
            parent_id,
            sort_order: 0,
            status: Status::Active,
            component_name: component.map(str::to_string),
            component_path: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_root_module_uses_sys_prefix() {
        let routes = generate_routes(&[module(1, "VENDOR", None, Some("VendorList"))]);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "sys/vendor");
        assert_eq!(routes[0].component_path, "pages/system/VendorList");
        assert_eq!(routes[0].name, "VENDOR name");
        assert_eq!(routes[0].module_id, 1);
    }

    #[test]
    fn test_child_module_uses_parent_code() {
        let routes = generate_routes(&[
            module(1, "PURCHASE", None, None),
            module(2, "VENDOR", Some(1), Some("VendorList")),
        ]);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "purchase/vendor");
        assert_eq!(routes[0].parent_id, Some(1));
    }

    #[test]
    fn test_missing_parent_falls_back_to_sys() {
        let routes = generate_routes(&[module(2, "Vendor", Some(404), Some("VendorList"))]);
        assert_eq!(routes[0].path, "sys/vendor");
    }

    #[test]
    fn test_inactive_parent_still_names_the_path() {
        let mut parent = module(1, "PURCHASE", None, None);
        parent.status = Status::Inactive;
        let routes = generate_routes(&[parent, module(2, "VENDOR", Some(1), Some("VendorList"))]);
        assert_eq!(routes[0].path, "purchase/vendor");
    }

    #[test]
    fn test_skips_inactive_and_componentless_modules() {
        let mut inactive = module(3, "OLD", None, Some("OldPage"));
        inactive.status = Status::Inactive;
        let routes = generate_routes(&[
            module(1, "SYS", None, None),
            module(2, "BLANK", None, Some("  ")),
            inactive,
        ]);
        assert!(routes.is_empty());
    }

    #[test]
    fn test_explicit_component_path_wins() {
        let mut m = module(1, "USER", None, Some("UserList"));
        m.component_path = Some("pages/admin/UserList".into());
        let routes = generate_routes(&[m]);
        assert_eq!(routes[0].component_path, "pages/admin/UserList");
    }

    #[test]
    fn test_output_is_ordered_by_sort_then_id() {
        let mut a = module(5, "A", None, Some("A"));
        a.sort_order = 2;
        let mut b = module(9, "B", None, Some("B"));
        b.sort_order = 1;
        let mut c = module(3, "C", None, Some("C"));
        c.sort_order = 2;

        let ids: Vec<i64> = generate_routes(&[a, b, c]).iter().map(|r| r.module_id).collect();
        assert_eq!(ids, vec![9, 3, 5]);
    }

    #[test]
    fn test_resolve_component() {
        let routes = generate_routes(&[
            module(1, "USER", None, Some("UserList")),
            module(2, "ROLE", None, Some("RoleList")),
        ]);
        let registered = HashSet::from(["UserList".to_string()]);

        assert_eq!(
            resolve_component(&registered, &routes[0]),
            ComponentSource::Registered("UserList")
        );
        assert_eq!(
            resolve_component(&registered, &routes[1]),
            ComponentSource::Lazy("pages/system/RoleList")
        );
    }
}
