//! Access guard integration tests: point permission queries and the ordered
//! navigation rules over the real route table.

use std::sync::Arc;

use anyhow::Result;

use khtrm_dispatch::identity::{
    AccessGuard, Credentials, DirectoryAuthority, MemoryTokenStorage, NavigationDecision,
    Permission, SessionStore, DEFAULT_ROUTE, LOGIN_ROUTE,
};
use khtrm_dispatch::navigation::find_route;

fn session() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(
        Arc::new(DirectoryAuthority::new()),
        Arc::new(MemoryTokenStorage::default()),
    ))
}

fn login(store: &SessionStore, username: &str) {
    store
        .login(&Credentials { username: username.into(), password: username.into() })
        .expect("seed login");
}

#[test]
fn anonymous_visitor_is_sent_to_login_from_protected_views() {
    let guard = AccessGuard::new(session());
    for path in ["/dashboard", "/profile", "/users", "/fuel", "/settings"] {
        let decision = guard.authorize_navigation(&find_route(path).meta);
        assert_eq!(
            decision,
            NavigationDecision::Redirect(LOGIN_ROUTE),
            "{} should bounce an anonymous visitor to login",
            path
        );
    }
    // the login page itself and the not-found view stay reachable
    assert_eq!(
        guard.authorize_navigation(&find_route("/login").meta),
        NavigationDecision::Allow
    );
    assert_eq!(
        guard.authorize_navigation(&find_route("/missing").meta),
        NavigationDecision::Allow
    );
}

#[test]
fn authenticated_session_cannot_revisit_the_login_page() {
    let store = session();
    login(&store, "nar");
    let guard = AccessGuard::new(store);
    assert_eq!(
        guard.authorize_navigation(&find_route("/login").meta),
        NavigationDecision::Redirect(DEFAULT_ROUTE)
    );
}

#[test]
fn dispatcher_reaches_own_views_but_not_fuel_management() -> Result<()> {
    let store = session();
    login(&store, "nar");
    let guard = AccessGuard::new(store);

    // scenario from the permission table: nar is a dispatcher
    assert!(guard.has_permission(Permission::CanCreateAssignments));
    assert!(!guard.has_permission(Permission::CanManageUsers));

    assert_eq!(
        guard.authorize_navigation(&find_route("/assignments").meta),
        NavigationDecision::Allow
    );
    assert_eq!(
        guard.authorize_navigation(&find_route("/reports").meta),
        NavigationDecision::Allow
    );
    assert_eq!(
        guard.authorize_navigation(&find_route("/fuel").meta),
        NavigationDecision::Redirect(DEFAULT_ROUTE),
        "dispatcher lacks can_manage_fuel"
    );
    assert_eq!(
        guard.authorize_navigation(&find_route("/users").meta),
        NavigationDecision::Redirect(DEFAULT_ROUTE)
    );
    Ok(())
}

#[test]
fn super_admin_reaches_every_destination() {
    let store = session();
    login(&store, "admin");
    let guard = AccessGuard::new(store);
    for path in
        ["/dashboard", "/profile", "/users", "/vehicles", "/assignments", "/incidents",
         "/parking", "/fuel", "/reports", "/settings"]
    {
        assert_eq!(
            guard.authorize_navigation(&find_route(path).meta),
            NavigationDecision::Allow,
            "super_admin blocked from {}",
            path
        );
    }
}

#[test]
fn decisions_follow_session_changes() {
    let store = session();
    let guard = AccessGuard::new(store.clone());
    let fuel = find_route("/fuel").meta;

    assert_eq!(guard.authorize_navigation(&fuel), NavigationDecision::Redirect(LOGIN_ROUTE));

    login(&store, "buc");
    assert_eq!(guard.authorize_navigation(&fuel), NavigationDecision::Allow);

    store.logout();
    assert_eq!(guard.authorize_navigation(&fuel), NavigationDecision::Redirect(LOGIN_ROUTE));
}

#[test]
fn timekeepers_share_the_time_profile() {
    for username in ["taba", "tabb"] {
        let store = session();
        login(&store, username);
        let guard = AccessGuard::new(store);
        assert!(guard.has_permission(Permission::CanManageTime), "{} manages time", username);
        assert!(guard.has_permission(Permission::CanViewReports));
        assert!(!guard.has_permission(Permission::CanCreateAssignments));
    }
}
