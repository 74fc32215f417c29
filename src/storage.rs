//! Key-value storage boundary for persisted presets.
//!
//! The preset store only needs `get` and `set` of whole string values under
//! a fixed key. [`MemoryStore`] keeps values in a map; [`FileStore`] keeps
//! one file per key under an application directory and replaces files
//! atomically.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;

/// Durable string storage scoped to one application.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing was stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// After a successful return, a subsequent [`get`](Self::get) observes
    /// `value`. After a failed return, it observes the previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Storage read or write failure.
#[derive(Debug)]
#[non_exhaustive]
pub enum StorageError {
    /// Key is empty, starts with `.`, or has characters outside
    /// `[A-Za-z0-9_.-]`.
    InvalidKey(String),
    /// The backend refused the operation.
    Unavailable(&'static str),
    /// Filesystem error from [`FileStore`].
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid storage key {key:?}"),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
            #[cfg(feature = "std")]
            Self::Io(e) => write!(f, "storage i/o error: {e}"),
        }
    }
}

impl core::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "std")]
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Check that `key` is safe to use as a file stem.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let ok = !key.is_empty()
        && !key.starts_with('.')
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'));
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Map-backed store.
///
/// Cloning copies the contents, which lets tests reopen a preset store over
/// the same data to simulate a restart.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Make every subsequent [`get`](KeyValueStore::get) fail with
    /// [`StorageError::Unavailable`] (or succeed again with `false`).
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every subsequent [`set`](KeyValueStore::set) fail with
    /// [`StorageError::Unavailable`] (or succeed again with `false`).
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored value, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("reads disabled"));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled"));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// File backend
// ============================================================================

#[cfg(feature = "std")]
pub use file::FileStore;

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};

    use super::{KeyValueStore, StorageError, validate_key};

    /// Directory-backed store: the value for `key` lives in `<dir>/<key>.json`.
    ///
    /// Writes go to a synced temporary file in the same directory which is
    /// then renamed over the target. Readers see either the old or the new
    /// value in full. On Unix the directory is synced after the rename so a
    /// completed write survives power loss.
    #[derive(Clone, Debug)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        /// Open (creating if needed) the application directory `dir`.
        pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
            let dir = dir.as_ref().to_path_buf();
            fs::create_dir_all(&dir)?;
            log::debug!("opened preset storage at {}", dir.display());
            Ok(Self { dir })
        }

        /// Path of the file holding `key`.
        pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
            validate_key(key)?;
            Ok(self.dir.join(format!("{key}.json")))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            let path = self.path_for(key)?;
            match fs::read_to_string(&path) {
                Ok(s) => Ok(Some(s)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let path = self.path_for(key)?;
            let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
            tmp.write_all(value.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| StorageError::Io(e.error))?;
            #[cfg(unix)]
            fs::File::open(&self.dir)?.sync_all()?;
            log::debug!("wrote {} bytes to {}", value.len(), path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("custom_presets").unwrap(), None);
    }

    #[test]
    fn memory_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn memory_failed_write_keeps_old_value() {
        let mut store = MemoryStore::with_entry("k", "old");
        store.fail_writes(true);
        assert!(matches!(
            store.set("k", "new"),
            Err(StorageError::Unavailable(_))
        ));
        assert_eq!(store.raw("k"), Some("old"));
    }

    #[test]
    fn memory_failed_read() {
        let mut store = MemoryStore::with_entry("k", "v");
        store.fail_reads(true);
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));
        store.fail_reads(false);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn memory_through_mut_ref() {
        fn write_via<S: KeyValueStore>(mut s: S) {
            s.set("k", "v").unwrap();
        }
        let mut store = MemoryStore::new();
        write_via(&mut store);
        assert_eq!(store.raw("k"), Some("v"));
    }

    #[test]
    fn key_validation() {
        assert!(validate_key("custom_presets").is_ok());
        assert!(validate_key("presets-v1.backup").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("sp ace").is_err());
    }

    #[cfg(feature = "std")]
    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("presets")).unwrap();
        assert_eq!(store.get("custom_presets").unwrap(), None);
        store.set("custom_presets", "{}").unwrap();
        assert_eq!(store.get("custom_presets").unwrap().as_deref(), Some("{}"));

        let reopened = FileStore::open(dir.path().join("presets")).unwrap();
        assert_eq!(
            reopened.get("custom_presets").unwrap().as_deref(),
            Some("{}")
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn file_overwrite_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["k.json".to_string()]);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn file_rejects_bad_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.set("../x", "v"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StorageError::InvalidKey(_))));
    }
}
