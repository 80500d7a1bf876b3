//! Schema validation for raw (untrusted) DSL documents.
//!
//! The check pass walks the raw JSON value and collects every violation
//! instead of stopping at the first, so callers can surface the full list of
//! field errors in one round trip. Only when the list is empty does the
//! document deserialize into the typed [`ResumeDsl`].

use std::collections::HashSet;

use semver::Version;
use serde_json::Value;
use tracing::debug;

use crate::dsl::document::ResumeDsl;
use crate::errors::{FieldError, ThemeError};

/// Logical column names accepted at the validation boundary.
const COLUMN_NAMES: &[&str] = &["full-width", "main", "sidebar"];

/// Validates a raw value and returns the typed document.
///
/// Fails with [`ThemeError::InvalidDsl`] carrying the structured error list.
/// No side effects; the input is never mutated.
pub fn validate(raw: &Value) -> Result<ResumeDsl, ThemeError> {
    let errors = collect_errors(raw);
    if !errors.is_empty() {
        debug!(error_count = errors.len(), "DSL validation failed");
        return Err(ThemeError::InvalidDsl { errors });
    }

    // The check pass guarantees the structural invariants the typed model
    // requires; anything serde still rejects surfaces as a single
    // `deserialize` field error rather than a panic.
    serde_json::from_value::<ResumeDsl>(raw.clone()).map_err(|e| ThemeError::InvalidDsl {
        errors: vec![FieldError::new("", e.to_string(), "deserialize")],
    })
}

/// The non-failing check pass: every schema violation in the document.
///
/// An empty result means `validate` will succeed.
pub fn collect_errors(raw: &Value) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let Some(doc) = raw.as_object() else {
        errors.push(FieldError::new(
            "",
            "DSL document must be a JSON object",
            "invalid_type",
        ));
        return errors;
    };

    check_version(doc.get("version"), &mut errors);
    check_layout(doc.get("layout"), &mut errors);

    match doc.get("tokens") {
        None => errors.push(FieldError::new("tokens", "Missing required field", "required")),
        Some(v) if !v.is_object() => {
            errors.push(FieldError::new("tokens", "Expected an object", "invalid_type"))
        }
        Some(_) => {}
    }

    check_sections(doc.get("sections"), &mut errors);
    check_item_overrides(doc.get("itemOverrides"), &mut errors);

    errors
}

fn check_version(version: Option<&Value>, errors: &mut Vec<FieldError>) {
    match version {
        None => errors.push(FieldError::new("version", "Missing required field", "required")),
        Some(Value::String(s)) => {
            if Version::parse(s).is_err() {
                errors.push(FieldError::new(
                    "version",
                    format!("'{s}' is not a valid semantic version"),
                    "invalid_version",
                ));
            }
        }
        Some(_) => errors.push(FieldError::new("version", "Expected a string", "invalid_type")),
    }
}

fn check_layout(layout: Option<&Value>, errors: &mut Vec<FieldError>) {
    match layout {
        None => errors.push(FieldError::new("layout", "Missing required field", "required")),
        Some(Value::Object(l)) => match l.get("type") {
            None => errors.push(FieldError::new(
                "layout.type",
                "Missing required field",
                "required",
            )),
            Some(v) if !v.is_string() => errors.push(FieldError::new(
                "layout.type",
                "Expected a string",
                "invalid_type",
            )),
            Some(_) => {}
        },
        Some(_) => errors.push(FieldError::new("layout", "Expected an object", "invalid_type")),
    }
}

fn check_sections(sections: Option<&Value>, errors: &mut Vec<FieldError>) {
    let list = match sections {
        None => {
            errors.push(FieldError::new("sections", "Missing required field", "required"));
            return;
        }
        Some(Value::Array(list)) => list,
        Some(_) => {
            errors.push(FieldError::new("sections", "Expected an array", "invalid_type"));
            return;
        }
    };

    let mut seen_ids: HashSet<&str> = HashSet::new();
    for (i, entry) in list.iter().enumerate() {
        let path = format!("sections[{i}]");
        let Some(section) = entry.as_object() else {
            errors.push(FieldError::new(path, "Expected an object", "invalid_type"));
            continue;
        };

        match section.get("id").and_then(Value::as_str) {
            None => errors.push(FieldError::new(
                format!("{path}.id"),
                "Missing required string field",
                "required",
            )),
            Some(id) => {
                if !seen_ids.insert(id) {
                    errors.push(FieldError::new(
                        format!("{path}.id"),
                        format!("Duplicate section id '{id}'"),
                        "duplicate_id",
                    ));
                }
            }
        }

        if !matches!(section.get("visible"), Some(Value::Bool(_))) {
            errors.push(FieldError::new(
                format!("{path}.visible"),
                "Missing or non-boolean field",
                "invalid_type",
            ));
        }

        match section.get("order") {
            Some(v) if v.is_number() => {}
            _ => errors.push(FieldError::new(
                format!("{path}.order"),
                "Missing or non-numeric field",
                "invalid_type",
            )),
        }

        // Optional pre-1.2 documents omit it; when present it must come from
        // the closed enum.
        if let Some(column) = section.get("column") {
            match column.as_str() {
                Some(name) if COLUMN_NAMES.contains(&name) => {}
                _ => errors.push(FieldError::new(
                    format!("{path}.column"),
                    format!(
                        "Expected one of {}",
                        COLUMN_NAMES
                            .iter()
                            .map(|c| format!("'{c}'"))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                    "invalid_enum",
                )),
            }
        }
    }
}

fn check_item_overrides(overrides: Option<&Value>, errors: &mut Vec<FieldError>) {
    let Some(overrides) = overrides else {
        return;
    };
    let Some(map) = overrides.as_object() else {
        errors.push(FieldError::new(
            "itemOverrides",
            "Expected an object keyed by section id",
            "invalid_type",
        ));
        return;
    };
    for (section_id, list) in map {
        let Some(list) = list.as_array() else {
            errors.push(FieldError::new(
                format!("itemOverrides.{section_id}"),
                "Expected an array of overrides",
                "invalid_type",
            ));
            continue;
        };
        for (i, entry) in list.iter().enumerate() {
            if !entry.is_object() {
                errors.push(FieldError::new(
                    format!("itemOverrides.{section_id}[{i}]"),
                    "Expected an object",
                    "invalid_type",
                ));
            }
        }
    }
}
