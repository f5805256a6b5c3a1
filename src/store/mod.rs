//! Local store module
//!
//! Durable key-value state for the client: the authenticated session plus the
//! offline collections served by the fallback responder. The whole store is a
//! single JSON document on disk, loaded into memory at startup and rewritten
//! atomically after every mutation (write to a temp file, then rename).
//!
//! One process owns the file at a time. Concurrent processes race
//! last-write-wins, the same single-writer assumption the original made for
//! browser storage shared across tabs.

pub mod data;

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::models::User;
use crate::utils::errors::Result;

pub use data::{Session, StoreData};

/// File-backed store with an in-memory working copy
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
    data: Arc<RwLock<StoreData>>,
}

impl LocalStore {
    /// Open the store at `path`, creating an empty document if the file does
    /// not exist yet. A corrupt file is renamed aside and replaced, never
    /// silently truncated.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoreData>(&raw) {
                Ok(data) => data,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Store file is corrupt, starting fresh");
                    let backup = path.with_extension("corrupt");
                    std::fs::rename(&path, &backup)?;
                    StoreData::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No store file yet, starting empty");
                StoreData::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            data: Arc::new(RwLock::new(data)),
        })
    }

    /// Read access to the document
    pub fn read<R>(&self, f: impl FnOnce(&StoreData) -> R) -> R {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Mutate the document and persist it
    pub fn update<R>(&self, f: impl FnOnce(&mut StoreData) -> R) -> Result<R> {
        let result = {
            let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut guard)
        };
        self.persist()?;
        Ok(result)
    }

    /// Current bearer token, if a session exists
    pub fn token(&self) -> Option<String> {
        self.read(|data| data.session.as_ref().map(|s| s.token.clone()))
    }

    /// Currently authenticated user, if a session exists
    pub fn session_user(&self) -> Option<User> {
        self.read(|data| data.session.as_ref().map(|s| s.user.clone()))
    }

    /// Store a fresh session after successful authentication
    pub fn set_session(&self, token: String, user: User) -> Result<()> {
        self.update(|data| {
            data.session = Some(Session { token, user });
        })
    }

    /// Drop token and user together, used on 401
    pub fn clear_session(&self) -> Result<()> {
        self.update(|data| {
            data.session = None;
        })
    }

    /// Write the document to disk atomically
    fn persist(&self) -> Result<()> {
        let serialized = {
            let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
            serde_json::to_string_pretty(&*guard)?
        };
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serialized)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "Store persisted");
        Ok(())
    }
}
