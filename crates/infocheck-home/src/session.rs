//! Injected login state and its persisted record.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The logged-in user as persisted after login.
///
/// Only the name is needed by the landing page; every other field of the
/// record is preserved untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Full name
    #[serde(rename = "nome")]
    pub name: String,
    /// Remaining fields of the record
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionUser {
    /// Create a user record with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// First word of the name, as greeted in the header.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

/// Login state handed to the landing page at construction.
///
/// Read once; the page never goes back to storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    user: Option<SessionUser>,
}

impl SessionContext {
    /// Anonymous visitor.
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Visitor with a persisted login.
    #[must_use]
    pub fn logged_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    /// Whether a user record is present.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }
}

/// File-backed store of the `usuarioLogado` record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store over a record path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the record.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record into a session context.
    ///
    /// A missing, empty or `null` record means nobody is logged in.
    pub fn load(&self) -> Result<SessionContext, SessionError> {
        if !self.path.exists() {
            tracing::debug!("No session record at {}", self.path.display());
            return Ok(SessionContext::logged_out());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(SessionContext::logged_out());
        }

        let user: Option<SessionUser> = serde_json::from_str(&contents)?;
        match user {
            Some(user) => {
                tracing::info!("Session restored for {}", user.first_name());
                Ok(SessionContext::logged_in(user))
            }
            None => Ok(SessionContext::logged_out()),
        }
    }
}
