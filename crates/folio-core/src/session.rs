//! Session persistence.
//!
//! A session is the bearer token plus the cached identity it was issued for.
//! The store is a dumb key-value delegate: it never validates what it holds
//! (that is the auth controller's job) and it fails soft, treating corrupt
//! or partial data as an absent session rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

use crate::auth::Identity;
use crate::error::Result;

/// File holding the raw bearer token.
const TOKEN_FILE: &str = "auth_token";
/// File holding the cached identity blob.
const IDENTITY_FILE: &str = "user.json";

/// A persisted login session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer credential issued by the gateway.
    pub token: String,
    pub identity: Identity,
}

/// Persistence contract for the login session.
///
/// Implementations must never escalate storage corruption into an error:
/// anything unreadable is reported as `None` from `load`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, session: &Session) -> Result<()>;

    async fn load(&self) -> Option<Session>;

    async fn clear(&self) -> Result<()>;
}

/// Stores the session as two fixed files under a base directory.
///
/// ```text
/// base_dir/
/// ├── auth_token   # raw token string
/// └── user.json    # cached identity
/// ```
pub struct FileSessionStore {
    base_dir: PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn token_path(&self) -> PathBuf {
        self.base_dir.join(TOKEN_FILE)
    }

    fn identity_path(&self) -> PathBuf {
        self.base_dir.join(IDENTITY_FILE)
    }

    fn remove_if_present(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, session: &Session) -> Result<()> {
        fs::write(self.token_path(), &session.token)?;
        let blob = serde_json::to_string_pretty(&session.identity)?;
        fs::write(self.identity_path(), blob)?;
        Ok(())
    }

    async fn load(&self) -> Option<Session> {
        let token = match fs::read_to_string(self.token_path()) {
            Ok(token) if !token.trim().is_empty() => token.trim().to_string(),
            Ok(_) => return None,
            Err(_) => return None,
        };
        let identity = match fs::read_to_string(self.identity_path()) {
            Ok(blob) => match serde_json::from_str::<Identity>(&blob) {
                Ok(identity) => identity,
                Err(err) => {
                    warn!("stored identity blob is corrupt, treating session as absent: {err}");
                    return None;
                }
            },
            Err(_) => {
                warn!("stored token has no identity blob, treating session as absent");
                return None;
            }
        };
        Some(Session { token, identity })
    }

    async fn clear(&self) -> Result<()> {
        Self::remove_if_present(&self.token_path())?;
        Self::remove_if_present(&self.identity_path())?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a stored session, as if a previous run had logged in.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, session: &Session) -> Result<()> {
        *self.session.lock().await = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> Option<Session> {
        self.session.lock().await.clone()
    }

    async fn clear(&self) -> Result<()> {
        *self.session.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            username: "admin".to_string(),
            role: Some("admin".to_string()),
        }
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();
        let session = Session {
            token: "tok-123".to_string(),
            identity: identity(),
        };

        store.save(&session).await.unwrap();
        assert_eq!(store.load().await, Some(session));
    }

    #[tokio::test]
    async fn load_on_empty_dir_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn corrupt_identity_blob_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();
        fs::write(dir.path().join(TOKEN_FILE), "tok-123").unwrap();
        fs::write(dir.path().join(IDENTITY_FILE), "{not json").unwrap();

        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn token_without_identity_is_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();
        fs::write(dir.path().join(TOKEN_FILE), "tok-123").unwrap();

        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn clear_removes_both_files_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).unwrap();
        let session = Session {
            token: "tok-123".to_string(),
            identity: identity(),
        };
        store.save(&session).await.unwrap();

        store.clear().await.unwrap();
        assert_eq!(store.load().await, None);
        // Clearing again must not fail
        store.clear().await.unwrap();
    }
}
