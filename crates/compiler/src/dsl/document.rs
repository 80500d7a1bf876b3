//! The typed DSL document — the declarative style description a theme stores
//! and a résumé customizes.
//!
//! Every enumerated wire value deserializes into a field-less enum with a
//! `#[serde(other)]` fallback variant, so an unrecognized string coming from
//! an older or hand-edited document never fails deserialization; the
//! resolver/layout stages map the fallback variant to a documented default.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dsl::tokens::DesignTokens;

/// A versioned style description: layout, design tokens, section placement,
/// and optional per-item overrides.
///
/// Unknown extra fields are tolerated and ignored (forward compatibility).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDsl {
    /// Semantic version of the DSL schema this document was authored against.
    /// This is the migration key.
    pub version: String,
    pub layout: LayoutConfig,
    pub tokens: DesignTokens,
    /// Declared section placements. Ids are unique; `order` values need not
    /// be contiguous but define a total order via numeric comparison.
    pub sections: Vec<SectionPlacement>,
    /// Section id → item-level override list. Applied during section
    /// compilation; never restructures a section's shape.
    #[serde(default)]
    pub item_overrides: HashMap<String, Vec<ItemOverride>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Layout configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(rename = "type")]
    pub layout_type: LayoutType,
    #[serde(default)]
    pub paper_size: PaperSize,
    #[serde(default)]
    pub margins: MarginSize,
    #[serde(default)]
    pub column_distribution: ColumnDistribution,
    /// Hint for the renderer's pagination engine; not interpreted here.
    #[serde(default = "default_page_break_behavior")]
    pub page_break_behavior: String,
    #[serde(default)]
    pub show_page_numbers: bool,
    #[serde(default = "default_page_number_position")]
    pub page_number_position: String,
}

fn default_page_break_behavior() -> String {
    "auto".to_string()
}

fn default_page_number_position() -> String {
    "bottom-center".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    SingleColumn,
    TwoColumn,
    SidebarLeft,
    SidebarRight,
    Magazine,
    Compact,
    /// Unrecognized layout type; degrades to a single full-width column.
    #[serde(other)]
    Other,
}

impl LayoutType {
    /// Whether this layout builds a physical sidebar column.
    pub fn has_sidebar(self) -> bool {
        matches!(
            self,
            LayoutType::TwoColumn
                | LayoutType::SidebarLeft
                | LayoutType::SidebarRight
                | LayoutType::Magazine
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    Legal,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarginSize {
    Compact,
    #[default]
    Normal,
    Relaxed,
    Wide,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnDistribution {
    #[serde(rename = "50-50")]
    Even,
    #[serde(rename = "60-40")]
    SixtyForty,
    #[serde(rename = "65-35")]
    SixtyFiveThirtyFive,
    #[default]
    #[serde(rename = "70-30")]
    SeventyThirty,
    #[serde(other)]
    Other,
}

// ────────────────────────────────────────────────────────────────────────────
// Section placement
// ────────────────────────────────────────────────────────────────────────────

/// One entry of the ordered section list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionPlacement {
    pub id: String,
    pub visible: bool,
    pub order: f64,
    /// Logical column request. Pre-1.2 documents omit it (migration fills
    /// it in); the serde default keeps the typed model tolerant anyway.
    #[serde(default)]
    pub column: LogicalColumn,
}

/// The logical column a section asks for, mapped to a physical column id by
/// the placer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogicalColumn {
    #[default]
    FullWidth,
    Main,
    Sidebar,
    #[serde(other)]
    Other,
}

/// A section-scoped patch applied to one compiled item.
///
/// Matching rule: `item_id` against the item's `id` field when present,
/// else positional `index`. `set` entries replace matching fields one by
/// one; non-overridden fields pass through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOverride {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub index: Option<usize>,
    #[serde(default)]
    pub set: Map<String, Value>,
}
