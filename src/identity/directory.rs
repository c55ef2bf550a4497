use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

use super::principal::{Identity, Role, RoleName};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Opaque durable marker of an active session. The token embeds the identity
/// id so a restart can resolve it against the directory without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(String);

const TOKEN_PREFIX: &str = "token-";

impl SessionToken {
    pub fn for_identity(id: u32) -> Self {
        SessionToken(format!("{}{}", TOKEN_PREFIX, id))
    }

    pub fn from_raw<S: Into<String>>(raw: S) -> Self {
        SessionToken(raw.into())
    }

    /// Identity id embedded in the token, or `None` when the token is not
    /// structurally valid.
    pub fn identity_id(&self) -> Option<u32> {
        self.0.strip_prefix(TOKEN_PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contract the session store expects from the authentication authority.
/// The production implementation delegates to a remote service; the session
/// store itself is only the client-side cache of this authority's verdict.
pub trait AuthAuthority: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> AppResult<(Identity, Role)>;
    fn resolve_token(&self, token: &SessionToken) -> Option<(Identity, Role)>;
}

struct DirectoryEntry {
    id: u32,
    username: &'static str,
    password: &'static str,
    role_name: RoleName,
    role_title: &'static str,
}

const SEED_ACCOUNTS: &[DirectoryEntry] = &[
    DirectoryEntry { id: 0, username: "admin", password: "admin", role_name: RoleName::SuperAdmin, role_title: "Адміністратор" },
    DirectoryEntry { id: 1, username: "nar", password: "nar", role_name: RoleName::Dispatcher, role_title: "Нарядчик" },
    DirectoryEntry { id: 2, username: "taba", password: "taba", role_name: RoleName::TimekeeperA, role_title: "Табельник A" },
    DirectoryEntry { id: 3, username: "tabb", password: "tabb", role_name: RoleName::TimekeeperB, role_title: "Табельник B" },
    DirectoryEntry { id: 4, username: "dys", password: "dys", role_name: RoleName::DispatcherMain, role_title: "Диспетчер" },
    DirectoryEntry { id: 5, username: "buc", password: "buc", role_name: RoleName::FuelAccountant, role_title: "Бухгалтер з палива" },
];

const EMAIL_DOMAIN: &str = "khtrm.kharkiv.ua";

/// Fixed in-memory directory of known accounts, standing in for the real
/// authority until one exists. Passwords are stored in the clear here; the
/// trait boundary is where a real verifier plugs in.
#[derive(Default)]
pub struct DirectoryAuthority;

impl DirectoryAuthority {
    pub fn new() -> Self {
        DirectoryAuthority
    }

    fn materialize(entry: &DirectoryEntry) -> (Identity, Role) {
        let identity = Identity {
            id: entry.id,
            username: entry.username.to_string(),
            email: format!("{}@{}", entry.username, EMAIL_DOMAIN),
        };
        let role = Role { name: entry.role_name, display_name: entry.role_title.to_string() };
        (identity, role)
    }
}

impl AuthAuthority for DirectoryAuthority {
    fn verify(&self, username: &str, password: &str) -> AppResult<(Identity, Role)> {
        let entry = SEED_ACCOUNTS
            .iter()
            .find(|e| e.username == username)
            .ok_or_else(AppError::invalid_credentials)?;
        if entry.password != password {
            return Err(AppError::invalid_credentials());
        }
        Ok(Self::materialize(entry))
    }

    fn resolve_token(&self, token: &SessionToken) -> Option<(Identity, Role)> {
        let id = token.identity_id()?;
        let entry = SEED_ACCOUNTS.iter().find(|e| e.id == id);
        if entry.is_none() {
            debug!(target: "identity", "token does not resolve to a known account: {}", token);
        }
        entry.map(Self::materialize)
    }
}
