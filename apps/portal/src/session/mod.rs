//! Session Store: the logged-in identity, persisted through a `Storage`
//! backend and injected into every page via `AppState`.
//!
//! Two keys are used, mirroring the browser client: `user` holds the JSON
//! user object and `token` holds the opaque bearer token. Both are removed
//! together on logout.

pub mod storage;

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::user::User;
pub use storage::{FileStorage, Storage, StorageError};

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Session encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(storage::MemoryStorage::new()))
    }

    /// Reads the stored user. Absent, unreadable, or malformed data all read
    /// as "no user"; this never fails.
    pub fn load(&self) -> Option<User> {
        let raw = match self.storage.get_item(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Session storage unreadable, treating as logged out: {e}");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Malformed session data, treating as logged out: {e}");
                None
            }
        }
    }

    /// Overwrites any previously stored user.
    pub fn save(&self, user: &User) -> Result<(), SessionError> {
        let json = serde_json::to_string(user)?;
        self.storage.set_item(USER_KEY, &json)?;
        info!("Session saved for '{}'", user.name);
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        match self.storage.get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                warn!("Auth token unreadable: {e}");
                None
            }
        }
    }

    pub fn save_token(&self, token: &str) -> Result<(), SessionError> {
        self.storage.set_item(TOKEN_KEY, token)?;
        Ok(())
    }

    /// Removes the user and the auth token.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.storage.remove_item(TOKEN_KEY)?;
        self.storage.remove_item(USER_KEY)?;
        info!("Session cleared");
        Ok(())
    }
}
