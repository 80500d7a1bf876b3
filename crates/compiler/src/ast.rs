//! The compiled output: a fully resolved, renderer-agnostic AST. Downstream
//! HTML and PDF renderers paint this without making further design
//! decisions. Wire shape is camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::layout::page::Page;
use crate::sections::styles::SectionStyles;
use crate::style::ResolvedTokens;

/// The rendering mode a compilation targets. The two differ only in which
/// metadata is attached to the AST (`meta.print` for PDF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    Html,
    Pdf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAst {
    pub meta: AstMeta,
    pub page: Page,
    /// Visible sections only, sorted ascending by `order`.
    pub sections: Vec<AstSection>,
    pub global_styles: GlobalStyles,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstMeta {
    /// The DSL version the document was compiled at (always the current one
    /// after migration).
    pub dsl_version: String,
    /// The only non-deterministic field in the AST.
    pub generated_at: DateTime<Utc>,
    pub target: RenderTarget,
    /// Print pagination metadata; attached for the PDF target only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print: Option<PrintMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintMeta {
    pub page_break_behavior: String,
    pub show_page_numbers: bool,
    pub page_number_position: String,
}

/// One placed, compiled section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstSection {
    pub section_id: String,
    /// Physical column id; always one the page's column list defines.
    pub column_id: String,
    pub order: f64,
    /// Renderer-shaped content payload (real or placeholder).
    pub data: Value,
    pub styles: SectionStyles,
}

/// Document-wide styles copied from the resolved tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStyles {
    pub background: String,
    pub surface: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub accent: String,
    pub divider: String,
}

impl GlobalStyles {
    pub fn from_tokens(tokens: &ResolvedTokens) -> Self {
        Self {
            background: tokens.colors.background.clone(),
            surface: tokens.colors.surface.clone(),
            text_primary: tokens.colors.text_primary.clone(),
            text_secondary: tokens.colors.text_secondary.clone(),
            accent: tokens.colors.accent.clone(),
            divider: tokens.colors.divider.clone(),
        }
    }
}
