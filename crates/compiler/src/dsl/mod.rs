// The DSL document layer: typed model, schema validation, version
// migration, and theme/customization merging. Everything downstream of this
// module works with an already-current, already-validated document.

pub mod document;
pub mod merge;
pub mod migrate;
pub mod tokens;
pub mod validate;

pub use document::{
    ColumnDistribution, ItemOverride, LayoutConfig, LayoutType, LogicalColumn, MarginSize,
    PaperSize, ResumeDsl, SectionPlacement,
};
pub use merge::merge_dsl;
pub use migrate::{migrate, CURRENT_DSL_VERSION};
pub use tokens::DesignTokens;
pub use validate::{collect_errors, validate};
