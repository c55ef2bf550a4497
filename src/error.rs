//! Unified application error model.
//! This module provides the common error enum used across the session store,
//! the access guard and the console shell, along with helper constructors.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppError {
    Auth { code: String, message: String },
    Io { code: String, message: String },
    Internal { code: String, message: String },
}

impl AppError {
    pub fn code_str(&self) -> &str {
        match self {
            AppError::Auth { code, .. }
            | AppError::Io { code, .. }
            | AppError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Auth { message, .. }
            | AppError::Io { message, .. }
            | AppError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn auth<S: Into<String>>(code: S, msg: S) -> Self { AppError::Auth { code: code.into(), message: msg.into() } }
    pub fn io<S: Into<String>>(code: S, msg: S) -> Self { AppError::Io { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { AppError::Internal { code: code.into(), message: msg.into() } }

    /// Canonical login rejection: unknown username or wrong password.
    pub fn invalid_credentials() -> Self {
        AppError::auth("invalid_credentials", "unknown username or wrong password")
    }

    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, AppError::Auth { code, .. } if code == "invalid_credentials")
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal { code: "internal_error".into(), message: err.to_string() }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io { code: "io_error".into(), message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_and_message_accessors() {
        let e = AppError::auth("invalid_credentials", "no");
        assert_eq!(e.code_str(), "invalid_credentials");
        assert_eq!(e.message(), "no");
        assert!(e.is_invalid_credentials());
        assert!(!AppError::io("io_error", "disk").is_invalid_credentials());
    }

    #[test]
    fn display_includes_code_and_message() {
        let e = AppError::internal("internal_error", "boom");
        assert_eq!(e.to_string(), "internal_error: boom");
    }

    #[test]
    fn serde_tagging_is_snake_case() {
        let e = AppError::invalid_credentials();
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["type"], "auth");
        assert_eq!(v["code"], "invalid_credentials");
    }
}
