// Page geometry: paper size, margins, and column construction per layout
// type. All tables are fixed data with explicit fallback arms.

pub mod page;

pub use page::{build_page_layout, Page, PageColumn, COLUMN_MAIN, COLUMN_SIDEBAR};
