//! Named ratio presets: a fixed built-in set plus persisted custom presets.
//!
//! # Example
//!
//! ```
//! use aspectcalc::{MemoryStore, PresetStore};
//!
//! let mut store = PresetStore::with_defaults(MemoryStore::new());
//! store.save("Phone", 9.0, 19.5).unwrap();
//!
//! let all = store.list_all().unwrap();
//! assert_eq!(all[0].name, "16:9");
//! assert_eq!(all.last().unwrap().name, "Phone");
//!
//! store.delete("Phone").unwrap();
//! assert_eq!(store.list_all().unwrap().len(), 10);
//! ```

pub mod builtin;
pub mod codec;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::ratio::Dimensions;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key the custom set is persisted under unless overridden.
pub const DEFAULT_STORAGE_KEY: &str = "custom_presets";

/// Where a preset comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresetKind {
    /// Supplied by configuration. Never stored, never deletable.
    BuiltIn,
    /// Saved by the user.
    Custom,
}

/// A named width × height pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: String,
    pub dimensions: Dimensions,
    pub kind: PresetKind,
}

impl Preset {
    /// A built-in preset.
    pub fn builtin(name: &str, width: f32, height: f32) -> Self {
        Self {
            name: name.to_string(),
            dimensions: Dimensions::new(width, height),
            kind: PresetKind::BuiltIn,
        }
    }

    /// A custom preset.
    pub fn custom(name: &str, width: f32, height: f32) -> Self {
        Self {
            name: name.to_string(),
            dimensions: Dimensions::new(width, height),
            kind: PresetKind::Custom,
        }
    }

    pub fn width(&self) -> f32 {
        self.dimensions.width
    }

    pub fn height(&self) -> f32 {
        self.dimensions.height
    }

    pub fn is_builtin(&self) -> bool {
        self.kind == PresetKind::BuiltIn
    }
}

/// Preset store error.
#[derive(Debug)]
#[non_exhaustive]
pub enum PresetError {
    /// Preset name is empty.
    InvalidName,
    /// Width or height is zero, negative, NaN, or infinite.
    InvalidDimension,
    /// The storage backend failed to read or write.
    StorageUnavailable(StorageError),
    /// The custom set could not be serialized.
    Encode(serde_json::Error),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => f.write_str("preset name must not be empty"),
            Self::InvalidDimension => f.write_str("preset dimensions must be greater than 0"),
            Self::StorageUnavailable(e) => write!(f, "preset storage unavailable: {e}"),
            Self::Encode(e) => write!(f, "failed to serialize presets: {e}"),
        }
    }
}

impl core::error::Error for PresetError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::StorageUnavailable(e) => Some(e),
            #[cfg(feature = "std")]
            Self::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StorageError> for PresetError {
    fn from(e: StorageError) -> Self {
        Self::StorageUnavailable(e)
    }
}

/// Built-in presets merged with a custom set persisted in a [`KeyValueStore`].
///
/// Every mutation reads the whole custom set, applies the change, and writes
/// the whole set back under one key. A failed write leaves the stored set
/// as it was.
///
/// A custom preset may reuse a built-in's name. It then takes the built-in's
/// place in [`list_all`](Self::list_all) until deleted; the built-in itself
/// is never modified.
#[derive(Debug)]
pub struct PresetStore<S> {
    storage: S,
    builtins: Vec<Preset>,
    key: String,
}

impl<S: KeyValueStore> PresetStore<S> {
    /// Create a store over `storage` with the given built-in presets.
    ///
    /// Built-ins keep their order. Later entries repeating an earlier name
    /// are dropped.
    pub fn new(storage: S, builtins: Vec<Preset>) -> Self {
        let mut unique: Vec<Preset> = Vec::with_capacity(builtins.len());
        for mut preset in builtins {
            if unique.iter().any(|p| p.name == preset.name) {
                log::warn!("ignoring duplicate built-in preset {:?}", preset.name);
                continue;
            }
            preset.kind = PresetKind::BuiltIn;
            unique.push(preset);
        }
        Self {
            storage,
            builtins: unique,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Create a store with [`builtin::DEFAULT_PRESETS`].
    pub fn with_defaults(storage: S) -> Self {
        Self::new(storage, builtin::default_presets())
    }

    /// Persist the custom set under `key` instead of [`DEFAULT_STORAGE_KEY`].
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// The built-in presets, in configuration order.
    pub fn builtins(&self) -> &[Preset] {
        &self.builtins
    }

    /// Whether `name` is a built-in preset name.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.iter().any(|p| p.name == name)
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Every preset: built-ins first in configuration order, then custom
    /// presets by name.
    pub fn list_all(&self) -> Result<Vec<Preset>, PresetError> {
        let mut custom = self.custom_presets()?;
        let mut all = Vec::with_capacity(self.builtins.len() + custom.len());
        for b in &self.builtins {
            match custom.remove(&b.name) {
                Some(dimensions) => all.push(Preset {
                    name: b.name.clone(),
                    dimensions,
                    kind: PresetKind::Custom,
                }),
                None => all.push(b.clone()),
            }
        }
        all.extend(custom.into_iter().map(|(name, dimensions)| Preset {
            name,
            dimensions,
            kind: PresetKind::Custom,
        }));
        Ok(all)
    }

    /// Look up a preset by name. Custom presets shadow built-ins.
    pub fn get(&self, name: &str) -> Result<Option<Preset>, PresetError> {
        if let Some(&dimensions) = self.custom_presets()?.get(name) {
            return Ok(Some(Preset {
                name: name.to_string(),
                dimensions,
                kind: PresetKind::Custom,
            }));
        }
        Ok(self.builtins.iter().find(|p| p.name == name).cloned())
    }

    /// Insert or overwrite the custom preset `name`.
    pub fn save(&mut self, name: &str, width: f32, height: f32) -> Result<(), PresetError> {
        if name.is_empty() {
            return Err(PresetError::InvalidName);
        }
        let dimensions = Dimensions::new(width, height);
        if !dimensions.is_valid() {
            return Err(PresetError::InvalidDimension);
        }

        let mut custom = self.custom_presets()?;
        let replaced = custom.insert(name.to_string(), dimensions).is_some();
        self.persist(&custom)?;
        log::debug!(
            "{} custom preset {name:?} = {width}×{height}",
            if replaced { "updated" } else { "saved" }
        );
        Ok(())
    }

    /// Remove the custom preset `name`. Unknown and built-in names are a
    /// no-op.
    pub fn delete(&mut self, name: &str) -> Result<(), PresetError> {
        let mut custom = self.custom_presets()?;
        if custom.remove(name).is_none() {
            log::debug!("no custom preset {name:?} to delete");
            return Ok(());
        }
        self.persist(&custom)?;
        log::debug!("deleted custom preset {name:?}");
        Ok(())
    }

    /// The persisted custom set. Missing or unreadable data yields an empty
    /// set; only a storage failure is an error.
    pub fn custom_presets(&self) -> Result<BTreeMap<String, Dimensions>, PresetError> {
        Ok(match self.storage.get(&self.key)? {
            Some(blob) => codec::decode(&blob),
            None => BTreeMap::new(),
        })
    }

    fn persist(&mut self, custom: &BTreeMap<String, Dimensions>) -> Result<(), PresetError> {
        let blob = codec::encode(custom).map_err(PresetError::Encode)?;
        self.storage.set(&self.key, &blob)?;
        Ok(())
    }
}
