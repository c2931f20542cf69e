//! Identity token persistence and lazy provisioning
//!
//! The client identifies itself with the numeric id of a server-side user
//! record. The id is persisted under a single key as a string-encoded
//! integer and is created on first need by [`get_or_create_identity`], which
//! is the only code path that provisions a user.

use crate::api::{ApiClient, HttpTransport};
#[cfg(feature = "native")]
use crate::types::AppError;
use crate::types::{NewUser, Result, UserId};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{error, info, warn};

/// Storage key holding the identity token.
pub const IDENTITY_KEY: &str = "userId";

const PLACEHOLDER_NAME: &str = "User";
const PLACEHOLDER_EMAIL_DOMAIN: &str = "receitafacil.local";

impl NewUser {
    /// Synthetic user record with a timestamp-derived unique email.
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            email: format!(
                "user_{}@{}",
                now.timestamp_millis(),
                PLACEHOLDER_EMAIL_DOMAIN
            ),
        }
    }
}

/// Durable home of the identity token.
pub trait IdentityStore {
    /// Raw persisted value, if any.
    fn load_raw(&self) -> Option<String>;

    fn save_raw(&self, value: &str) -> Result<()>;

    /// Parsed token. A value that is not an integer counts as absent.
    fn load(&self) -> Option<UserId> {
        let raw = self.load_raw()?;
        match raw.parse() {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(value = %raw, error = %e, "Ignoring malformed identity token");
                None
            }
        }
    }

    fn save(&self, id: UserId) -> Result<()> {
        self.save_raw(&id.to_string())
    }
}

/// Token read on page mount; no provisioning.
pub fn current_identity<S: IdentityStore + ?Sized>(store: &S) -> Option<UserId> {
    store.load()
}

/// Return the stored identity, provisioning a placeholder user when the
/// store is empty.
pub async fn get_or_create_identity<T, S>(api: &ApiClient<T>, store: &S) -> Result<UserId>
where
    T: HttpTransport,
    S: IdentityStore + ?Sized,
{
    if let Some(id) = store.load() {
        return Ok(id);
    }

    let user = api
        .create_user(&NewUser::placeholder(Utc::now()))
        .await
        .inspect_err(|e| error!(error = %e, "Error creating user"))?;

    store.save(user.id)?;
    info!(user_id = %user.id, "Provisioned new identity");
    Ok(user.id)
}

// ============= Stores =============

/// Process-local store, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    value: Mutex<Option<String>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }

    pub fn with_id(id: UserId) -> Self {
        Self::with_raw(id.to_string())
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load_raw(&self) -> Option<String> {
        self.value.lock().clone()
    }

    fn save_raw(&self, value: &str) -> Result<()> {
        *self.value.lock() = Some(value.to_string());
        Ok(())
    }
}

/// JSON key/value file standing in for browser local storage.
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "native")]
impl FileIdentityStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_entries(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                AppError::Storage(format!("{} is not valid JSON: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(serde_json::Map::new()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(feature = "native")]
impl IdentityStore for FileIdentityStore {
    fn load_raw(&self) -> Option<String> {
        let entries = self
            .read_entries()
            .inspect_err(|e| warn!(error = %e, "Identity store unreadable"))
            .ok()?;
        match entries.get(IDENTITY_KEY)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn save_raw(&self, value: &str) -> Result<()> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(
            IDENTITY_KEY.to_string(),
            serde_json::Value::String(value.to_string()),
        );

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Storage(format!("Failed to create {}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(&entries)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        std::fs::write(&self.path, content)
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
