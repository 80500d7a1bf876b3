//! The compiler facade — one terminating, side-effect-free pass:
//! migrate → validate → resolve tokens → build layout → place sections →
//! assemble AST. Validation and migration errors propagate unchanged; no
//! stage below this one catches or reinterprets them, and there is no
//! partial AST on error.

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use crate::ast::{AstMeta, PrintMeta, RenderTarget, ResumeAst};
use crate::dsl::migrate::{migrate, CURRENT_DSL_VERSION};
use crate::dsl::validate::validate;
use crate::errors::ThemeError;
use crate::layout::page::build_page_layout;
use crate::models::resume::ResumeRecord;
use crate::sections::placer::place_sections;
use crate::style::resolve_tokens;

/// Compiles a DSL document (possibly authored against an older version)
/// into a fully resolved AST.
///
/// With `resume` supplied, sections carry real content with item overrides
/// applied; without it, every section gets its deterministic placeholder
/// payload (preview mode).
pub fn compile(
    doc: &Value,
    target: RenderTarget,
    resume: Option<&ResumeRecord>,
) -> Result<ResumeAst, ThemeError> {
    let migrated = migrate(doc.clone(), CURRENT_DSL_VERSION)?;
    let dsl = validate(&migrated)?;
    debug!(version = %dsl.version, sections = dsl.sections.len(), "DSL document validated");

    let tokens = resolve_tokens(&dsl.tokens);
    let page = build_page_layout(&dsl, &tokens);
    let sections = place_sections(&dsl, &tokens, resume);

    let print = match target {
        RenderTarget::Pdf => Some(PrintMeta {
            page_break_behavior: dsl.layout.page_break_behavior.clone(),
            show_page_numbers: dsl.layout.show_page_numbers,
            page_number_position: dsl.layout.page_number_position.clone(),
        }),
        RenderTarget::Html => None,
    };

    let ast = ResumeAst {
        meta: AstMeta {
            dsl_version: dsl.version.clone(),
            generated_at: Utc::now(),
            target,
            print,
        },
        global_styles: crate::ast::GlobalStyles::from_tokens(&tokens),
        page,
        sections,
    };
    info!(
        render_target = ?target,
        columns = ast.page.columns.len(),
        sections = ast.sections.len(),
        "compiled resume AST"
    );
    Ok(ast)
}

/// Compiles raw untrusted input in placeholder/preview mode.
///
/// The raw value gets the full schema check up front, so malformed input
/// fails with [`ThemeError::InvalidDsl`] before any transformation runs.
pub fn compile_from_raw(raw: &Value, target: RenderTarget) -> Result<ResumeAst, ThemeError> {
    validate(raw)?;
    compile(raw, target, None)
}

/// `compile` with the HTML target fixed.
pub fn compile_for_html(
    doc: &Value,
    resume: Option<&ResumeRecord>,
) -> Result<ResumeAst, ThemeError> {
    compile(doc, RenderTarget::Html, resume)
}

/// `compile` with the PDF target fixed.
pub fn compile_for_pdf(
    doc: &Value,
    resume: Option<&ResumeRecord>,
) -> Result<ResumeAst, ThemeError> {
    compile(doc, RenderTarget::Pdf, resume)
}
