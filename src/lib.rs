//! Aspect ratio reduction, preview fitting, and persisted ratio presets.
//!
//! Toolkit-independent core of an aspect ratio calculator. A UI layer parses
//! its text fields, reduces the pair to a ratio, fits a preview box, and
//! manages named presets through the types here.
//!
//! # Modules
//!
//! - [`ratio`]: GCD-based ratio reduction and decimal equivalent
//! - [`fit`]: Preview scale-to-fit and deferred layout handoff
//! - [`input`]: Width/height text field parsing
//! - [`preset`]: Built-in and custom presets over a key-value store (`alloc`)
//! - [`storage`]: Key-value storage trait, in-memory and file backends (`alloc`)
//! - `svg`: SVG rendering of the preview (`svg` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod fit;
pub mod input;
#[cfg(feature = "alloc")]
pub mod preset;
pub mod ratio;
#[cfg(feature = "alloc")]
pub mod storage;
#[cfg(feature = "svg")]
pub mod svg;

pub use fit::{DEFAULT_PADDING, PreviewSlot, Size, center_offset, fit_scale, fit_scale_padded};
pub use input::{InputError, parse_dimensions};
#[cfg(feature = "alloc")]
pub use preset::{Preset, PresetError, PresetKind, PresetStore};
pub use ratio::{Dimensions, Ratio, RatioError, gcd, reduce};
#[cfg(feature = "std")]
pub use storage::FileStore;
#[cfg(feature = "alloc")]
pub use storage::{KeyValueStore, MemoryStore, StorageError};
