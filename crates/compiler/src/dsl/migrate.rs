//! Backward-compatible version migration.
//!
//! Documents authored against older DSL versions are rewritten into the
//! current shape before validation runs: a pre-migration document may not
//! satisfy the current schema, so the migrator works on raw JSON values.
//! Each step is a pure function responsible for exactly one version
//! increment; the chain is walked in order until the target is reached.

use semver::Version;
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::ThemeError;

/// The DSL schema version this compiler targets.
pub const CURRENT_DSL_VERSION: &str = "1.2.0";

struct MigrationStep {
    from: &'static str,
    to: &'static str,
    apply: fn(Value) -> Value,
}

/// Ordered, contiguous chain: each step's `to` is the next step's `from`.
const CHAIN: &[MigrationStep] = &[
    MigrationStep {
        from: "1.0.0",
        to: "1.1.0",
        apply: migrate_1_0_to_1_1,
    },
    MigrationStep {
        from: "1.1.0",
        to: "1.2.0",
        apply: migrate_1_1_to_1_2,
    },
];

/// Rewrites `doc` from its own version up to `target`.
///
/// Identity fast path when the versions already match. A document without a
/// parseable string `version` is returned unchanged; the validator owns
/// that diagnosis. Fails with [`ThemeError::UnsupportedMigration`] when the
/// source version is not on the chain or the target is behind the source.
pub fn migrate(doc: Value, target: &str) -> Result<Value, ThemeError> {
    let Some(from) = doc.get("version").and_then(Value::as_str).map(String::from) else {
        return Ok(doc);
    };
    if from == target {
        return Ok(doc);
    }
    let (Ok(from_v), Ok(target_v)) = (Version::parse(&from), Version::parse(target)) else {
        return Ok(doc);
    };
    if from_v > target_v {
        return Err(ThemeError::UnsupportedMigration {
            from,
            to: target.to_string(),
        });
    }

    let Some(start) = CHAIN.iter().position(|s| s.from == from) else {
        return Err(ThemeError::UnsupportedMigration {
            from,
            to: target.to_string(),
        });
    };

    let mut doc = doc;
    for step in &CHAIN[start..] {
        debug!(from = step.from, to = step.to, "applying DSL migration step");
        doc = (step.apply)(doc);
        doc["version"] = json!(step.to);
        if step.to == target {
            return Ok(doc);
        }
    }

    Err(ThemeError::UnsupportedMigration {
        from,
        to: target.to_string(),
    })
}

/// 1.0.0 → 1.1.0: `tokens.typography.size` was renamed to `fontSize`, and
/// the spacing block gained a `density` knob (default "comfortable").
fn migrate_1_0_to_1_1(mut doc: Value) -> Value {
    if let Some(typography) = doc
        .get_mut("tokens")
        .and_then(|t| t.get_mut("typography"))
        .and_then(Value::as_object_mut)
    {
        if let Some(size) = typography.remove("size") {
            typography.entry("fontSize").or_insert(size);
        }
    }
    if let Some(spacing) = doc
        .get_mut("tokens")
        .and_then(|t| t.get_mut("spacing"))
        .and_then(Value::as_object_mut)
    {
        spacing
            .entry("density")
            .or_insert_with(|| json!("comfortable"));
    }
    doc
}

/// 1.1.0 → 1.2.0: sections gained a `column` placement (default
/// "full-width") and the document gained the `itemOverrides` map.
fn migrate_1_1_to_1_2(mut doc: Value) -> Value {
    if let Some(sections) = doc.get_mut("sections").and_then(Value::as_array_mut) {
        for section in sections.iter_mut().filter_map(Value::as_object_mut) {
            section
                .entry("column")
                .or_insert_with(|| json!("full-width"));
        }
    }
    if let Some(root) = doc.as_object_mut() {
        root.entry("itemOverrides").or_insert_with(|| json!({}));
    }
    doc
}
