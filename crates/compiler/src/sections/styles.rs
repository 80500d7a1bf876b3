//! Per-section computed styles. Derived purely from the resolved tokens and
//! identical in shape for every placed section, so renderers paint them
//! without further decisions.

use serde::{Deserialize, Serialize};

use crate::style::ResolvedTokens;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyles {
    pub container: ContainerStyles,
    pub title: TitleStyles,
    pub body: BodyStyles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyles {
    pub margin_bottom_px: u32,
    pub padding_px: u32,
    pub border_radius_px: u32,
    pub shadow: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleStyles {
    pub font_family: String,
    pub font_size_px: u32,
    pub font_weight: u32,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_left: Option<String>,
    pub padding_left_px: u32,
    pub margin_bottom_px: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyStyles {
    pub font_family: String,
    pub font_size_px: u32,
    pub line_height: f32,
    pub color: String,
    pub item_gap_px: u32,
}

/// Computes the section style block shared by every placed section.
pub fn section_styles(tokens: &ResolvedTokens) -> SectionStyles {
    let heading = &tokens.typography.heading;
    SectionStyles {
        container: ContainerStyles {
            margin_bottom_px: tokens.spacing.section_gap_px,
            padding_px: tokens.spacing.content_padding_px,
            border_radius_px: tokens.effects.border_radius_px,
            shadow: tokens.effects.shadow.clone(),
            background: tokens.colors.surface.clone(),
        },
        title: TitleStyles {
            font_family: tokens.typography.heading_family.clone(),
            font_size_px: tokens.typography.heading_size_px,
            font_weight: heading.font_weight,
            color: tokens.colors.text_primary.clone(),
            text_transform: heading.text_transform.clone(),
            border_bottom: heading.border_bottom.clone(),
            border_left: heading.border_left.clone(),
            padding_left_px: heading.padding_left_px,
            margin_bottom_px: tokens.spacing.item_gap_px,
        },
        body: BodyStyles {
            font_family: tokens.typography.body_family.clone(),
            font_size_px: tokens.typography.base_size_px,
            line_height: tokens.typography.line_height,
            color: tokens.colors.text_primary.clone(),
            item_gap_px: tokens.spacing.item_gap_px,
        },
    }
}
