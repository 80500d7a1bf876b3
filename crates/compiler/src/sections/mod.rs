// Section placement and compilation: visibility/order/column resolution,
// per-section content compilers with item-override application, and the
// computed style block every placed section carries.

pub mod content;
pub mod placer;
pub mod styles;

pub use content::{compile_section_data, placeholder_data, KNOWN_SECTION_IDS};
pub use placer::place_sections;
pub use styles::{section_styles, SectionStyles};
