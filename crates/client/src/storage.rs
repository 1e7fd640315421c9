//! Durable local key-value storage.
//!
//! The cart and session persist their state between runs through the
//! [`PersistentStore`] trait. Production code uses [`JsonFileStore`], a
//! single JSON document on disk written atomically; tests inject
//! [`MemoryStore`]. Each key has last-write-wins semantics.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::warn;

/// Names of the persisted keys.
pub mod keys {
    /// Opaque bearer credential.
    pub const AUTH_TOKEN: &str = "auth_token";
    /// Serialized principal of the logged-in user.
    pub const CURRENT_USER: &str = "current_user";
    /// Serialized ordered cart lines.
    pub const CART: &str = "cart";
}

/// Errors raised by a [`PersistentStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The store document could not be serialized.
    #[error("storage document malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A stored value is not valid UTF-8 and cannot live in the JSON document.
    #[error("value for key {key:?} is not valid UTF-8")]
    NonUtf8 {
        /// The offending key.
        key: String,
    },
}

/// Key-value storage for JSON-serializable client state.
///
/// Implementations must be durable across process restarts (except test
/// fakes) and must apply each `set`/`delete` before returning, so that
/// callers can publish state only after it is safely written.
pub trait PersistentStore {
    /// Read the raw bytes stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Durably write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write cannot be completed.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove `key` and its value. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the removal cannot be persisted.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Shared handle to the one durable store of the process.
///
/// The client is single-threaded and cooperative, so plain `Rc<RefCell<_>>`
/// is the right sharing primitive; there is nothing to lock.
pub type SharedStore = Rc<RefCell<dyn PersistentStore>>;

/// Wrap a concrete store into a [`SharedStore`].
pub fn shared(store: impl PersistentStore + 'static) -> SharedStore {
    Rc::new(RefCell::new(store))
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// JsonFileStore
// =============================================================================

/// File-backed store: one JSON object mapping keys to string values.
///
/// Every write rewrites the whole document through a temp file and rename,
/// so a crash mid-write leaves the previous document intact. A document
/// that fails to parse at startup is discarded with a warning rather than
/// aborting the client.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open (or create) the store document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if an existing document cannot be read.
    /// A document that exists but does not parse is treated as corrupt:
    /// it is dropped and the store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<HashMap<String, String>>(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "store document corrupt, starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, entries })
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let document = serde_json::to_vec_pretty(&self.entries)?;
        let tmp = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&document)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PersistentStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).map(|v| v.clone().into_bytes()))
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let text = String::from_utf8(value.to_vec()).map_err(|_| StoreError::NonUtf8 {
            key: key.to_owned(),
        })?;
        self.entries.insert(key.to_owned(), text);
        self.flush()
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn temp_path(tag: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "digital-cafe-store-{}-{tag}-{n}.json",
            std::process::id()
        ))
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(keys::CART).unwrap(), None);

        store.set(keys::CART, b"[1,2]").unwrap();
        assert_eq!(store.get(keys::CART).unwrap().as_deref(), Some(&b"[1,2]"[..]));

        store.delete(keys::CART).unwrap();
        assert_eq!(store.get(keys::CART).unwrap(), None);
        // deleting again is a no-op
        store.delete(keys::CART).unwrap();
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let path = temp_path("reopen");
        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set(keys::AUTH_TOKEN, b"tok").unwrap();
        }
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            store.get(keys::AUTH_TOKEN).unwrap().as_deref(),
            Some(&b"tok"[..])
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_file_store_corrupt_document_starts_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get(keys::CART).unwrap(), None);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_file_store_rejects_non_utf8_values() {
        let path = temp_path("utf8");
        let mut store = JsonFileStore::open(&path).unwrap();
        let result = store.set(keys::CART, &[0xff, 0xfe]);
        assert!(matches!(result, Err(StoreError::NonUtf8 { .. })));
        fs::remove_file(&path).ok();
    }
}
