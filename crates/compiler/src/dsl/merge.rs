//! Deep merge of a base theme document with a résumé's customizations.
//!
//! Merge rules:
//! - both sides are objects → recurse key by key;
//! - anything else → the override replaces the base value outright
//!   (arrays are replaced wholesale, never element-wise merged);
//! - keys present only in the base are preserved;
//! - a `null` override does not override (the JSON rendition of an absent
//!   customization).

use serde_json::Value;

/// Merges `overrides` into `base`, overrides winning leaf by leaf.
///
/// Total and side-effect free; neither input is mutated.
pub fn merge_dsl(base: &Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            let mut out = base_map.clone();
            for (key, value) in override_map {
                if value.is_null() {
                    continue;
                }
                let merged = match out.get(key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        merge_dsl(existing, value)
                    }
                    _ => value.clone(),
                };
                out.insert(key.clone(), merged);
            }
            Value::Object(out)
        }
        _ if overrides.is_null() => base.clone(),
        _ => overrides.clone(),
    }
}
