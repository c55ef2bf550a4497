//! Central identity and session management for the dispatch console.
//! Keep the public surface thin and split implementation across sub-modules.

mod principal;
mod directory;
mod session;
mod authorizer;

pub use principal::{Identity, Role, RoleName};
pub use directory::{AuthAuthority, Credentials, DirectoryAuthority, SessionToken};
pub use session::{FileTokenStorage, MemoryTokenStorage, SessionStore, TokenStorage};
pub use authorizer::{
    permissions_for, AccessGuard, NavigationDecision, Permission, RouteMeta, DEFAULT_ROUTE,
    LOGIN_ROUTE,
};
