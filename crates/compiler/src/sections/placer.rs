//! Section placement: visibility filtering, deterministic ordering, and
//! logical→physical column mapping, feeding each surviving section through
//! its content compiler.

use tracing::debug;

use crate::ast::AstSection;
use crate::dsl::document::{LayoutType, LogicalColumn, ResumeDsl};
use crate::layout::page::{COLUMN_MAIN, COLUMN_SIDEBAR};
use crate::models::resume::ResumeRecord;
use crate::sections::content::compile_section_data;
use crate::sections::styles::section_styles;
use crate::style::ResolvedTokens;

/// Places and compiles every visible section.
///
/// The result is sorted ascending by `order` (stable, so sections sharing an
/// `order` value keep their declaration order) and contains only sections
/// with `visible == true`. Inputs are never mutated.
pub fn place_sections(
    dsl: &ResumeDsl,
    tokens: &ResolvedTokens,
    resume: Option<&ResumeRecord>,
) -> Vec<AstSection> {
    let styles = section_styles(tokens);

    let mut visible: Vec<_> = dsl.sections.iter().filter(|s| s.visible).collect();
    visible.sort_by(|a, b| a.order.total_cmp(&b.order));
    debug!(
        placed = visible.len(),
        hidden = dsl.sections.len() - visible.len(),
        "placing sections"
    );

    visible
        .into_iter()
        .map(|section| {
            let overrides = dsl
                .item_overrides
                .get(&section.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            AstSection {
                section_id: section.id.clone(),
                column_id: physical_column(section.column, dsl.layout.layout_type).to_string(),
                order: section.order,
                data: compile_section_data(&section.id, resume, overrides),
                styles: styles.clone(),
            }
        })
        .collect()
}

/// Maps a section's logical column request to a physical column id.
///
/// `sidebar` degrades to `main` when the layout builds no sidebar column,
/// so the AST never references a column the page does not define.
fn physical_column(column: LogicalColumn, layout: LayoutType) -> &'static str {
    match column {
        LogicalColumn::FullWidth | LogicalColumn::Main => COLUMN_MAIN,
        LogicalColumn::Sidebar if layout.has_sidebar() => COLUMN_SIDEBAR,
        LogicalColumn::Sidebar | LogicalColumn::Other => COLUMN_MAIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::tokens::DesignTokens;
    use crate::style::resolve_tokens;
    use serde_json::json;

    fn dsl_from(value: serde_json::Value) -> ResumeDsl {
        serde_json::from_value(value).unwrap()
    }

    fn resolved() -> ResolvedTokens {
        resolve_tokens(&DesignTokens::default())
    }

    #[test]
    fn test_hidden_sections_are_dropped() {
        let dsl = dsl_from(json!({
            "version": "1.2.0",
            "layout": {"type": "two-column"},
            "tokens": {},
            "sections": [
                {"id": "summary", "visible": true, "order": 0, "column": "full-width"},
                {"id": "skills", "visible": false, "order": 4, "column": "sidebar"},
                {"id": "experience", "visible": true, "order": 1, "column": "main"}
            ],
            "itemOverrides": {"skills": [{"index": 0, "set": {"name": "Ignored"}}]}
        }));
        let placed = place_sections(&dsl, &resolved(), None);
        let ids: Vec<&str> = placed.iter().map(|s| s.section_id.as_str()).collect();
        // invisible "skills" never appears, even with overrides targeting it
        assert_eq!(ids, vec!["summary", "experience"]);
    }

    #[test]
    fn test_sorted_by_order_non_contiguous() {
        let dsl = dsl_from(json!({
            "version": "1.2.0",
            "layout": {"type": "single-column"},
            "tokens": {},
            "sections": [
                {"id": "c", "visible": true, "order": 30},
                {"id": "a", "visible": true, "order": -1.5},
                {"id": "b", "visible": true, "order": 7}
            ]
        }));
        let placed = place_sections(&dsl, &resolved(), None);
        let ids: Vec<&str> = placed.iter().map(|s| s.section_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_equal_orders_keep_declaration_order() {
        let dsl = dsl_from(json!({
            "version": "1.2.0",
            "layout": {"type": "single-column"},
            "tokens": {},
            "sections": [
                {"id": "first", "visible": true, "order": 2},
                {"id": "second", "visible": true, "order": 2},
                {"id": "third", "visible": true, "order": 2}
            ]
        }));
        let placed = place_sections(&dsl, &resolved(), None);
        let ids: Vec<&str> = placed.iter().map(|s| s.section_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_column_mapping_on_two_column_layout() {
        let dsl = dsl_from(json!({
            "version": "1.2.0",
            "layout": {"type": "two-column"},
            "tokens": {},
            "sections": [
                {"id": "summary", "visible": true, "order": 0, "column": "full-width"},
                {"id": "experience", "visible": true, "order": 1, "column": "main"},
                {"id": "skills", "visible": true, "order": 2, "column": "sidebar"}
            ]
        }));
        let placed = place_sections(&dsl, &resolved(), None);
        assert_eq!(placed[0].column_id, "main");
        assert_eq!(placed[1].column_id, "main");
        assert_eq!(placed[2].column_id, "sidebar");
    }

    #[test]
    fn test_sidebar_degrades_to_main_without_sidebar_column() {
        for layout in ["single-column", "compact", "unheard-of"] {
            let dsl = dsl_from(json!({
                "version": "1.2.0",
                "layout": {"type": layout},
                "tokens": {},
                "sections": [{"id": "skills", "visible": true, "order": 0, "column": "sidebar"}]
            }));
            let placed = place_sections(&dsl, &resolved(), None);
            assert_eq!(placed[0].column_id, "main", "{layout}");
        }
    }

    #[test]
    fn test_overrides_are_scoped_to_their_section() {
        let dsl = dsl_from(json!({
            "version": "1.2.0",
            "layout": {"type": "single-column"},
            "tokens": {},
            "sections": [
                {"id": "experience", "visible": true, "order": 0},
                {"id": "projects", "visible": true, "order": 1}
            ],
            "itemOverrides": {
                "experience": [{"itemId": "placeholder-experience-1", "set": {"company": "Patched"}}]
            }
        }));
        let placed = place_sections(&dsl, &resolved(), None);
        assert_eq!(placed[0].data["items"][0]["company"], "Patched");
        assert_eq!(placed[1].data["items"][0]["name"], "Open Source Scheduler");
    }

    #[test]
    fn test_styles_identical_across_sections() {
        let dsl = dsl_from(json!({
            "version": "1.2.0",
            "layout": {"type": "two-column"},
            "tokens": {},
            "sections": [
                {"id": "summary", "visible": true, "order": 0},
                {"id": "skills", "visible": true, "order": 1, "column": "sidebar"}
            ]
        }));
        let placed = place_sections(&dsl, &resolved(), None);
        assert_eq!(placed[0].styles, placed[1].styles);
    }

    #[test]
    fn test_no_duplicate_section_ids_in_output() {
        let dsl = dsl_from(json!({
            "version": "1.2.0",
            "layout": {"type": "single-column"},
            "tokens": {},
            "sections": [
                {"id": "summary", "visible": true, "order": 0},
                {"id": "experience", "visible": true, "order": 1},
                {"id": "education", "visible": false, "order": 2}
            ]
        }));
        let placed = place_sections(&dsl, &resolved(), None);
        let mut ids: Vec<&str> = placed.iter().map(|s| s.section_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), placed.len());
    }
}
