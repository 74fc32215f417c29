//! Built-in ratio presets.

use alloc::vec::Vec;

use super::Preset;

/// The reference built-in set, in display order: `(name, width, height)`.
pub const DEFAULT_PRESETS: &[(&str, f32, f32)] = &[
    ("16:9", 16.0, 9.0),
    ("4:3", 4.0, 3.0),
    ("21:9", 21.0, 9.0),
    ("1:1", 1.0, 1.0),
    ("3:2", 3.0, 2.0),
    // Anamorphic widescreen
    ("2.39:1", 2.39, 1.0),
    // Photography
    ("5:4", 5.0, 4.0),
    // Portrait
    ("9:16", 9.0, 16.0),
    // Standard widescreen
    ("1.85:1", 1.85, 1.0),
    // Photography
    ("8:5", 8.0, 5.0),
];

/// [`DEFAULT_PRESETS`] as [`Preset`] values.
pub fn default_presets() -> Vec<Preset> {
    from_table(DEFAULT_PRESETS)
}

/// Build built-in presets from a `(name, width, height)` table.
pub fn from_table(table: &[(&str, f32, f32)]) -> Vec<Preset> {
    table
        .iter()
        .map(|&(name, w, h)| Preset::builtin(name, w, h))
        .collect()
}
