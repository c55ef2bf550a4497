//! Static route table for the console views. The navigation system supplies
//! each destination's metadata and asks the access guard before committing a
//! view transition.

use crate::identity::{Permission, RouteMeta, DEFAULT_ROUTE};

#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: RouteMeta,
}

const AUTH_ONLY: RouteMeta =
    RouteMeta { requires_auth: true, requires_guest: false, requires_permission: None };
const GUEST_ONLY: RouteMeta =
    RouteMeta { requires_auth: false, requires_guest: true, requires_permission: None };
const OPEN: RouteMeta =
    RouteMeta { requires_auth: false, requires_guest: false, requires_permission: None };

const fn protected(permission: Permission) -> RouteMeta {
    RouteMeta { requires_auth: true, requires_guest: false, requires_permission: Some(permission) }
}

pub static ROUTES: &[RouteDef] = &[
    // "/" redirects to the dashboard; the guard then decides on the target.
    RouteDef { path: "/", name: "home", meta: OPEN },
    RouteDef { path: "/login", name: "login", meta: GUEST_ONLY },
    RouteDef { path: "/dashboard", name: "dashboard", meta: AUTH_ONLY },
    RouteDef { path: "/profile", name: "profile", meta: AUTH_ONLY },
    RouteDef { path: "/users", name: "users", meta: protected(Permission::CanManageUsers) },
    RouteDef { path: "/vehicles", name: "vehicles", meta: protected(Permission::CanManageVehicles) },
    RouteDef { path: "/assignments", name: "assignments", meta: protected(Permission::CanCreateAssignments) },
    RouteDef { path: "/incidents", name: "incidents", meta: protected(Permission::CanRecordIncidents) },
    RouteDef { path: "/parking", name: "parking", meta: protected(Permission::CanManageParking) },
    RouteDef { path: "/fuel", name: "fuel", meta: protected(Permission::CanManageFuel) },
    RouteDef { path: "/reports", name: "reports", meta: protected(Permission::CanViewReports) },
    RouteDef { path: "/settings", name: "settings", meta: protected(Permission::CanManageSystem) },
];

pub static NOT_FOUND: RouteDef = RouteDef { path: "*", name: "not-found", meta: OPEN };

/// Exact path lookup; unknown paths fall through to the open not-found route.
pub fn find_route(path: &str) -> &'static RouteDef {
    ROUTES.iter().find(|r| r.path == path).unwrap_or(&NOT_FOUND)
}

/// Target of the "/" redirect before the guard runs.
pub fn home_redirect() -> &'static str {
    DEFAULT_ROUTE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::permissions_for;
    use crate::identity::RoleName;

    #[test]
    fn lookup_known_and_unknown_paths() {
        assert_eq!(find_route("/fuel").name, "fuel");
        assert_eq!(find_route("/nope").name, "not-found");
        assert!(!find_route("/nope").meta.requires_auth);
    }

    #[test]
    fn protected_routes_also_require_auth() {
        for r in ROUTES {
            if r.meta.requires_permission.is_some() {
                assert!(r.meta.requires_auth, "{} must require auth", r.path);
            }
            assert!(
                !(r.meta.requires_auth && r.meta.requires_guest),
                "{} declares contradictory meta",
                r.path
            );
        }
    }

    #[test]
    fn every_route_permission_is_granted_to_some_role() {
        // Sanity on the table: each permission referenced in navigation
        // metadata is reachable by at least one non-sentinel role or the
        // sentinel itself.
        for r in ROUTES {
            if let Some(p) = r.meta.requires_permission {
                let granted = permissions_for(RoleName::SuperAdmin).contains(&p);
                assert!(granted, "{} requires unmapped permission", r.path);
            }
        }
    }
}
