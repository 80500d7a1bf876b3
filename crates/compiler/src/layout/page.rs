//! Physical page construction: paper dimensions, margins, and the ordered
//! column list for each layout type.
//!
//! This stage has no failure mode: unknown enum values degrade to the
//! documented fallbacks (a4 paper, normal margins, 70-30 distribution,
//! single full-width column).

use serde::{Deserialize, Serialize};

use crate::dsl::document::{ColumnDistribution, LayoutType, MarginSize, PaperSize, ResumeDsl};
use crate::style::ResolvedTokens;

/// Calibrated divisor for deriving the column gap in millimeters from the
/// resolved section-gap pixel value. A visual calibration heuristic, not a
/// principled px→mm conversion; recalibrate here if print assumptions change.
pub const COLUMN_GAP_PX_PER_MM: f64 = 4.0;

/// Physical column id for the wide content column.
pub const COLUMN_MAIN: &str = "main";
/// Physical column id for the narrow side column.
pub const COLUMN_SIDEBAR: &str = "sidebar";

/// The resolved physical page: dimensions and margins in millimeters plus
/// the ordered column list. Part of the AST wire surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub width_mm: f64,
    pub height_mm: f64,
    /// Uniform margin applied to all four sides.
    pub margin_mm: f64,
    pub columns: Vec<PageColumn>,
    pub column_gap_mm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageColumn {
    pub id: String,
    pub width_percentage: u32,
    pub order: u32,
}

impl PageColumn {
    fn new(id: &str, width_percentage: u32, order: u32) -> Self {
        Self {
            id: id.to_string(),
            width_percentage,
            order,
        }
    }
}

/// Computes the physical page for a validated document.
pub fn build_page_layout(dsl: &ResumeDsl, tokens: &ResolvedTokens) -> Page {
    let (width_mm, height_mm) = paper_dimensions_mm(dsl.layout.paper_size);
    Page {
        width_mm,
        height_mm,
        margin_mm: margin_mm(dsl.layout.margins),
        columns: build_columns(dsl.layout.layout_type, dsl.layout.column_distribution),
        column_gap_mm: tokens.spacing.section_gap_px as f64 / COLUMN_GAP_PX_PER_MM,
    }
}

/// Paper size → (width, height) in millimeters. Fallback: a4.
fn paper_dimensions_mm(paper: PaperSize) -> (f64, f64) {
    match paper {
        PaperSize::A4 => (210.0, 297.0),
        PaperSize::Letter => (216.0, 279.0),
        PaperSize::Legal => (216.0, 356.0),
        PaperSize::Other => (210.0, 297.0),
    }
}

/// Margin size → uniform millimeter value. Fallback: normal.
fn margin_mm(margins: MarginSize) -> f64 {
    match margins {
        MarginSize::Compact => 10.0,
        MarginSize::Normal => 15.0,
        MarginSize::Relaxed => 20.0,
        MarginSize::Wide => 25.0,
        MarginSize::Other => 15.0,
    }
}

/// Distribution name → (main %, sidebar %). Fallback: 70-30.
fn distribution_split(distribution: ColumnDistribution) -> (u32, u32) {
    match distribution {
        ColumnDistribution::Even => (50, 50),
        ColumnDistribution::SixtyForty => (60, 40),
        ColumnDistribution::SixtyFiveThirtyFive => (65, 35),
        ColumnDistribution::SeventyThirty => (70, 30),
        ColumnDistribution::Other => (70, 30),
    }
}

fn build_columns(layout: LayoutType, distribution: ColumnDistribution) -> Vec<PageColumn> {
    match layout {
        LayoutType::SingleColumn | LayoutType::Compact => {
            vec![PageColumn::new(COLUMN_MAIN, 100, 0)]
        }
        LayoutType::TwoColumn | LayoutType::SidebarRight => {
            let (main, sidebar) = distribution_split(distribution);
            vec![
                PageColumn::new(COLUMN_MAIN, main, 0),
                PageColumn::new(COLUMN_SIDEBAR, sidebar, 1),
            ]
        }
        LayoutType::SidebarLeft => {
            let (main, sidebar) = distribution_split(distribution);
            vec![
                PageColumn::new(COLUMN_SIDEBAR, sidebar, 0),
                PageColumn::new(COLUMN_MAIN, main, 1),
            ]
        }
        // Magazine pins its own split; the distribution table is ignored.
        LayoutType::Magazine => vec![
            PageColumn::new(COLUMN_MAIN, 60, 0),
            PageColumn::new(COLUMN_SIDEBAR, 40, 1),
        ],
        LayoutType::Other => vec![PageColumn::new(COLUMN_MAIN, 100, 0)],
    }
}
