//! Environment-driven configuration for the console shell.

use std::path::PathBuf;

use crate::identity::DEFAULT_ROUTE;

pub const SESSION_FILE_ENV: &str = "KHTRM_SESSION_FILE";
pub const DEFAULT_ROUTE_ENV: &str = "KHTRM_DEFAULT_ROUTE";

const DEFAULT_SESSION_FILE: &str = "khtrm_session";

#[derive(Debug, Clone)]
pub struct Config {
    /// Durable storage for the session token; the single key whose absence
    /// means "logged out".
    pub session_file: PathBuf,
    /// Landing page shown after login.
    pub default_route: String,
}

impl Config {
    pub fn from_env() -> Self {
        let session_file = std::env::var(SESSION_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));
        let default_route =
            std::env::var(DEFAULT_ROUTE_ENV).unwrap_or_else(|_| DEFAULT_ROUTE.to_string());
        Self { session_file, default_route }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            default_route: DEFAULT_ROUTE.to_string(),
        }
    }
}
