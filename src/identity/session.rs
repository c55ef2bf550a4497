use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};

use crate::error::AppResult;
use crate::tprintln;

use super::directory::{AuthAuthority, Credentials, SessionToken};
use super::principal::{Identity, Role};

/// Durable storage for the session token: a single key whose absence means
/// "logged out".
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// File-backed token storage. The file holds the raw token string and is
/// removed on logout.
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
    }

    fn store(&self, token: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).ok();
            }
        }
        std::fs::write(&self.path, token)
            .with_context(|| format!("writing session token to {}", self.path.display()))
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path.display())),
        }
    }
}

/// In-memory token storage for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryTokenStorage {
    slot: Mutex<Option<String>>,
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().clone()
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.slot.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock() = None;
        Ok(())
    }
}

#[derive(Default)]
struct SessionState {
    identity: Option<Identity>,
    role: Option<Role>,
    token: Option<SessionToken>,
}

/// Single source of truth for "who is currently authenticated".
///
/// Identity, role and token share one lifecycle: set together on login,
/// cleared together on logout. Token is present iff identity is present.
pub struct SessionStore {
    authority: Arc<dyn AuthAuthority>,
    storage: Arc<dyn TokenStorage>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    pub fn new(authority: Arc<dyn AuthAuthority>, storage: Arc<dyn TokenStorage>) -> Self {
        Self { authority, storage, state: RwLock::new(SessionState::default()) }
    }

    /// Verify credentials against the authority and open a session. On a
    /// rejected login the prior session state is left untouched.
    pub fn login(&self, credentials: &Credentials) -> AppResult<()> {
        let (identity, role) =
            self.authority.verify(&credentials.username, &credentials.password)?;
        let token = SessionToken::for_identity(identity.id);
        if let Err(e) = self.storage.store(token.as_str()) {
            warn!(target: "identity", "session token not persisted: {:#}", e);
        }
        tprintln!("session.login user={} role={}", identity.username, role.name);
        let mut state = self.state.write();
        state.identity = Some(identity);
        state.role = Some(role);
        state.token = Some(token);
        Ok(())
    }

    /// Clear the session from memory and durable storage. Idempotent.
    pub fn logout(&self) {
        {
            let mut state = self.state.write();
            if state.token.is_some() {
                info!(target: "identity", "session closed");
            }
            *state = SessionState::default();
        }
        if let Err(e) = self.storage.clear() {
            warn!(target: "identity", "session token not cleared from storage: {:#}", e);
        }
    }

    /// Reconstruct the session from a persisted token on process start.
    /// A token that does not resolve to a known identity leaves the session
    /// unauthenticated without surfacing an error; the stale key is dropped
    /// so storage and memory agree.
    pub fn restore_session(&self) {
        let Some(raw) = self.storage.load() else { return };
        let token = SessionToken::from_raw(raw);
        match self.authority.resolve_token(&token) {
            Some((identity, role)) => {
                tprintln!("session.restore user={} role={}", identity.username, role.name);
                let mut state = self.state.write();
                state.identity = Some(identity);
                state.role = Some(role);
                state.token = Some(token);
            }
            None => {
                warn!(target: "identity", "persisted session token is unresolvable, staying logged out");
                if let Err(e) = self.storage.clear() {
                    warn!(target: "identity", "stale session token not cleared: {:#}", e);
                }
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.read().identity.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.read().role.clone()
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.state.read().token.clone()
    }
}
