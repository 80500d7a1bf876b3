//! Résumé-theming DSL compiler.
//!
//! Turns a declarative, versioned style description (layout type, design
//! tokens, section ordering/visibility, per-item overrides) into a fully
//! resolved, renderer-agnostic AST that HTML and PDF renderers can paint
//! without making further design decisions.
//!
//! Fixed pipeline: migrate → validate → resolve tokens → build layout →
//! place/compile sections → assemble AST. Every stage is a pure,
//! synchronous, CPU-bound transformation; the compiler holds no state
//! between calls and is safe to invoke concurrently. The only async
//! boundary is fetching records/themes, behind the [`render`] traits.

pub mod ast;
pub mod compiler;
pub mod dsl;
pub mod errors;
pub mod layout;
pub mod models;
pub mod render;
pub mod sections;
pub mod style;

// The public compile surface consumed by the HTTP layer.
pub use ast::{RenderTarget, ResumeAst};
pub use compiler::{compile, compile_for_html, compile_for_pdf, compile_from_raw};
pub use dsl::merge::merge_dsl;
pub use dsl::migrate::CURRENT_DSL_VERSION;
pub use dsl::validate::validate;
pub use errors::{FieldError, ThemeError};
pub use models::resume::ResumeRecord;
pub use render::{RenderService, ResumeProvider, ThemeStore};
