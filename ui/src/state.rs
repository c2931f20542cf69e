//! Global application state

use crate::api::{self, Api};
use easyrecipe::identity::{current_identity, IdentityStore, IDENTITY_KEY};
use easyrecipe::types::{AppError, Result, UserId};
use gloo_storage::{LocalStorage, Storage};
use std::time::Duration;

/// Identity token kept in `localStorage` under `userId`, as a plain string.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageIdentity;

impl IdentityStore for LocalStorageIdentity {
    fn load_raw(&self) -> Option<String> {
        LocalStorage::raw().get_item(IDENTITY_KEY).ok().flatten()
    }

    fn save_raw(&self, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(IDENTITY_KEY, value)
            .map_err(|e| AppError::Storage(format!("localStorage write failed: {:?}", e)))
    }
}

/// Shared by every page. Page state itself is private to each page.
#[derive(Debug, Clone)]
pub struct AppState {
    pub api: Api,
    pub identity: LocalStorageIdentity,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api: api::client(),
            identity: LocalStorageIdentity,
        }
    }

    /// Token read on mount; never provisions.
    pub fn current_identity(&self) -> Option<UserId> {
        current_identity(&self.identity)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}
