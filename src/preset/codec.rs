//! Serialized form of the custom preset set.
//!
//! One JSON object, preset name → `{"first": width, "second": height}`:
//!
//! ```text
//! {"Cinema":{"first":2.39,"second":1.0},"Phone":{"first":9.0,"second":19.5}}
//! ```
//!
//! Decoding never fails. A missing, corrupt, or non-object blob decodes to
//! an empty set; individual entries that are malformed or not a positive
//! dimension pair are skipped.

use alloc::collections::BTreeMap;
use alloc::string::String;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ratio::Dimensions;

#[derive(Serialize, Deserialize)]
struct Entry {
    first: f32,
    second: f32,
}

/// Serialize the custom set.
pub fn encode(presets: &BTreeMap<String, Dimensions>) -> Result<String, serde_json::Error> {
    let wire: BTreeMap<&str, Entry> = presets
        .iter()
        .map(|(name, d)| {
            (
                name.as_str(),
                Entry {
                    first: d.width,
                    second: d.height,
                },
            )
        })
        .collect();
    serde_json::to_string(&wire)
}

/// Deserialize the custom set, discarding anything unusable.
pub fn decode(blob: &str) -> BTreeMap<String, Dimensions> {
    let mut out = BTreeMap::new();

    let root: Value = match serde_json::from_str(blob) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("discarding unreadable custom presets: {e}");
            return out;
        }
    };
    let map = match root {
        Value::Object(map) => map,
        Value::Null => return out,
        other => {
            log::warn!("discarding custom presets: expected object, found {other}");
            return out;
        }
    };

    for (name, value) in map {
        if name.is_empty() {
            log::warn!("skipping custom preset with empty name");
            continue;
        }
        match serde_json::from_value::<Entry>(value) {
            Ok(e) => {
                let d = Dimensions::new(e.first, e.second);
                if d.is_valid() {
                    out.insert(name, d);
                } else {
                    log::warn!("skipping custom preset {name:?}: non-positive dimensions");
                }
            }
            Err(e) => log::warn!("skipping custom preset {name:?}: {e}"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[(&str, f32, f32)]) -> BTreeMap<String, Dimensions> {
        entries
            .iter()
            .map(|&(n, w, h)| (n.to_string(), Dimensions::new(w, h)))
            .collect()
    }

    #[test]
    fn encode_shape() {
        let blob = encode(&set(&[("Custom1", 7.0, 3.0)])).unwrap();
        assert_eq!(blob, r#"{"Custom1":{"first":7.0,"second":3.0}}"#);
    }

    #[test]
    fn encode_empty() {
        assert_eq!(encode(&BTreeMap::new()).unwrap(), "{}");
    }

    #[test]
    fn preserves_f32_values_exactly() {
        let original = set(&[
            ("Cinema", 2.39, 1.0),
            ("Odd", 0.1 + 0.2, 1.0 / 3.0),
            ("Big", 16_777_217.0, 3.4e38),
        ]);
        let decoded = decode(&encode(&original).unwrap());
        assert_eq!(decoded.len(), 3);
        for (name, d) in &original {
            let got = decoded[name];
            assert_eq!(got.width.to_bits(), d.width.to_bits(), "{name} width");
            assert_eq!(got.height.to_bits(), d.height.to_bits(), "{name} height");
        }
    }

    #[test]
    fn reads_integer_and_float_literals() {
        let decoded = decode(r#"{"A":{"first":4,"second":3.0}}"#);
        assert_eq!(decoded["A"], Dimensions::new(4.0, 3.0));
    }

    #[test]
    fn ignores_unknown_fields() {
        let decoded = decode(r#"{"A":{"first":4.0,"second":3.0,"third":1}}"#);
        assert_eq!(decoded["A"], Dimensions::new(4.0, 3.0));
    }

    #[test]
    fn corrupt_blob_is_empty() {
        assert!(decode("").is_empty());
        assert!(decode("{not json").is_empty());
        assert!(decode("null").is_empty());
        assert!(decode("[1,2,3]").is_empty());
        assert!(decode("\"text\"").is_empty());
    }

    #[test]
    fn bad_entries_are_skipped() {
        let decoded = decode(
            r#"{
                "good": {"first": 16.0, "second": 9.0},
                "missing": {"first": 16.0},
                "wrong_type": {"first": "16", "second": 9.0},
                "null": null,
                "zero": {"first": 0.0, "second": 9.0},
                "negative": {"first": 16.0, "second": -9.0},
                "": {"first": 1.0, "second": 1.0}
            }"#,
        );
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded["good"], Dimensions::new(16.0, 9.0));
    }
}
