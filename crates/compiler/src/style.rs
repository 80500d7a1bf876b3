//! Token resolution — enumerated design-token names to concrete values.
//!
//! Every lookup in this module is a total function: an unrecognized or
//! absent name resolves to the documented fallback, never an error. The
//! tables are fixed data; nothing here reads the layout or the sections.

use serde::Serialize;

use crate::dsl::tokens::{
    BorderRadiusName, DensityName, DesignTokens, FontFamilyName, FontSizeName, HeadingStyleName,
    ShadowName, SpacingSizeName,
};

/// Body line height shared by every template.
const LINE_HEIGHT: f32 = 1.5;

/// Fallback CSS family when the token names no known font.
const DEFAULT_SANS: &str = "'Inter', 'Segoe UI', Helvetica, Arial, sans-serif";

// ────────────────────────────────────────────────────────────────────────────
// Resolved output
// ────────────────────────────────────────────────────────────────────────────

/// Fully concrete style values: pixels, CSS family strings, hex colors.
/// Compiler-internal; the AST copies what it needs out of this.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedTokens {
    pub typography: ResolvedTypography,
    pub colors: ResolvedColors,
    pub spacing: ResolvedSpacing,
    pub effects: ResolvedEffects,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedTypography {
    pub heading_family: String,
    pub body_family: String,
    pub base_size_px: u32,
    pub heading_size_px: u32,
    pub line_height: f32,
    pub heading: HeadingDecoration,
}

/// Decoration derived from the heading style name plus the primary color.
#[derive(Debug, Clone, Serialize)]
pub struct HeadingDecoration {
    pub font_weight: u32,
    /// CSS `text-transform` value; `None` means no transform.
    pub text_transform: Option<String>,
    /// Full CSS border declaration, primary color substituted in.
    pub border_bottom: Option<String>,
    pub border_left: Option<String>,
    pub padding_left_px: u32,
}

/// The palette flattened to one level; hex values pass through unmodified.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub accent: String,
    pub border: String,
    pub divider: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSpacing {
    pub section_gap_px: u32,
    pub item_gap_px: u32,
    pub content_padding_px: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedEffects {
    pub border_radius_px: u32,
    /// CSS `box-shadow` value, `"none"` when shadows are off.
    pub shadow: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Resolves every enumerated token to its concrete value. Never fails.
pub fn resolve_tokens(tokens: &DesignTokens) -> ResolvedTokens {
    let (base_size_px, heading_size_px) = font_size_px(tokens.typography.font_size);
    let palette = &tokens.colors.colors;

    let colors = ResolvedColors {
        primary: palette.primary.clone(),
        secondary: palette.secondary.clone(),
        background: palette.background.clone(),
        surface: palette.surface.clone(),
        text_primary: palette.text.primary.clone(),
        text_secondary: palette.text.secondary.clone(),
        accent: palette.text.accent.clone(),
        border: palette.border.clone(),
        divider: palette.divider.clone(),
    };

    let factor = density_factor(tokens.spacing.density);
    let spacing = ResolvedSpacing {
        section_gap_px: scale(section_gap_px(tokens.spacing.section_gap), factor),
        item_gap_px: scale(item_gap_px(tokens.spacing.item_gap), factor),
        content_padding_px: scale(content_padding_px(tokens.spacing.content_padding), factor),
    };

    ResolvedTokens {
        typography: ResolvedTypography {
            heading_family: family_stack(tokens.typography.font_family.heading).to_string(),
            body_family: family_stack(tokens.typography.font_family.body).to_string(),
            base_size_px,
            heading_size_px,
            line_height: LINE_HEIGHT,
            heading: heading_decoration(tokens.typography.heading_style, &colors.primary),
        },
        colors,
        spacing,
        effects: ResolvedEffects {
            border_radius_px: border_radius_px(tokens.colors.border_radius),
            shadow: shadow_css(tokens.colors.shadows).to_string(),
        },
    }
}

fn scale(base_px: u32, factor: f32) -> u32 {
    (base_px as f32 * factor).round() as u32
}

/// Font size name → (body px, heading px). Fallback: the `base` entry.
fn font_size_px(name: FontSizeName) -> (u32, u32) {
    match name {
        FontSizeName::Sm => (12, 18),
        FontSizeName::Base => (14, 20),
        FontSizeName::Lg => (16, 24),
        FontSizeName::Xl => (18, 28),
        FontSizeName::Other => (14, 20),
    }
}

/// Density name → spacing multiplier. Fallback: 1.0.
fn density_factor(name: DensityName) -> f32 {
    match name {
        DensityName::Compact => 0.75,
        DensityName::Comfortable => 1.0,
        DensityName::Spacious => 1.25,
        DensityName::Relaxed => 1.5,
        DensityName::Other => 1.0,
    }
}

fn section_gap_px(name: SpacingSizeName) -> u32 {
    match name {
        SpacingSizeName::Sm => 16,
        SpacingSizeName::Md => 24,
        SpacingSizeName::Lg => 32,
        SpacingSizeName::Xl => 40,
        SpacingSizeName::Other => 24,
    }
}

fn item_gap_px(name: SpacingSizeName) -> u32 {
    match name {
        SpacingSizeName::Sm => 8,
        SpacingSizeName::Md => 16,
        SpacingSizeName::Lg => 24,
        SpacingSizeName::Xl => 32,
        SpacingSizeName::Other => 16,
    }
}

fn content_padding_px(name: SpacingSizeName) -> u32 {
    match name {
        SpacingSizeName::Sm => 8,
        SpacingSizeName::Md => 16,
        SpacingSizeName::Lg => 24,
        SpacingSizeName::Xl => 32,
        SpacingSizeName::Other => 16,
    }
}

/// Family name → canonical CSS-safe family stack.
fn family_stack(name: FontFamilyName) -> &'static str {
    match name {
        FontFamilyName::Inter => DEFAULT_SANS,
        FontFamilyName::EbGaramond => "'EB Garamond', Georgia, 'Times New Roman', serif",
        FontFamilyName::Lato => "'Lato', 'Helvetica Neue', Arial, sans-serif",
        FontFamilyName::Oswald => "'Oswald', 'Arial Narrow', Arial, sans-serif",
        FontFamilyName::Merriweather => "'Merriweather', Georgia, serif",
        FontFamilyName::Other => DEFAULT_SANS,
    }
}

fn border_radius_px(name: BorderRadiusName) -> u32 {
    match name {
        BorderRadiusName::None => 0,
        BorderRadiusName::Sm => 4,
        BorderRadiusName::Md => 8,
        BorderRadiusName::Lg => 12,
        BorderRadiusName::Xl => 16,
        BorderRadiusName::Full => 9999,
        BorderRadiusName::Other => 8,
    }
}

fn shadow_css(name: ShadowName) -> &'static str {
    match name {
        ShadowName::None => "none",
        ShadowName::Sm => "0 1px 2px rgba(0, 0, 0, 0.05)",
        ShadowName::Md => "0 4px 6px rgba(0, 0, 0, 0.10)",
        ShadowName::Lg => "0 10px 15px rgba(0, 0, 0, 0.10)",
        ShadowName::Other => "none",
    }
}

/// Heading style name → weight/transform/border decoration.
///
/// `underline` and `accent-border` substitute the resolved primary color
/// into the border declaration. Fallback: weight 700, no transform, no
/// borders.
fn heading_decoration(style: HeadingStyleName, primary: &str) -> HeadingDecoration {
    match style {
        HeadingStyleName::Bold => HeadingDecoration {
            font_weight: 700,
            text_transform: None,
            border_bottom: None,
            border_left: None,
            padding_left_px: 0,
        },
        HeadingStyleName::Underline => HeadingDecoration {
            font_weight: 700,
            text_transform: None,
            border_bottom: Some(format!("2px solid {primary}")),
            border_left: None,
            padding_left_px: 0,
        },
        HeadingStyleName::Uppercase => HeadingDecoration {
            font_weight: 600,
            text_transform: Some("uppercase".to_string()),
            border_bottom: None,
            border_left: None,
            padding_left_px: 0,
        },
        HeadingStyleName::AccentBorder => HeadingDecoration {
            font_weight: 700,
            text_transform: None,
            border_bottom: None,
            border_left: Some(format!("3px solid {primary}")),
            padding_left_px: 8,
        },
        HeadingStyleName::Minimal => HeadingDecoration {
            font_weight: 500,
            text_transform: None,
            border_bottom: None,
            border_left: None,
            padding_left_px: 0,
        },
        HeadingStyleName::Other => HeadingDecoration {
            font_weight: 700,
            text_transform: None,
            border_bottom: None,
            border_left: None,
            padding_left_px: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tokens_from(value: serde_json::Value) -> DesignTokens {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_default_tokens_resolve_to_base_values() {
        let resolved = resolve_tokens(&DesignTokens::default());
        assert_eq!(resolved.typography.base_size_px, 14);
        assert_eq!(resolved.typography.heading_size_px, 20);
        assert_eq!(resolved.spacing.section_gap_px, 24);
        assert_eq!(resolved.spacing.item_gap_px, 16);
        assert_eq!(resolved.spacing.content_padding_px, 16);
        assert_eq!(resolved.effects.border_radius_px, 8);
        assert_eq!(resolved.effects.shadow, "none");
    }

    #[test]
    fn test_unrecognized_names_hit_documented_fallbacks() {
        let tokens = tokens_from(json!({
            "typography": {
                "fontFamily": {"heading": "papyrus", "body": "wingdings"},
                "fontSize": "enormous",
                "headingStyle": "sparkle"
            },
            "colors": {"borderRadius": "round-ish", "shadows": "dramatic"},
            "spacing": {"sectionGap": "vast", "itemGap": "vast", "contentPadding": "vast",
                        "density": "extreme"}
        }));
        let resolved = resolve_tokens(&tokens);
        assert_eq!(resolved.typography.heading_family, DEFAULT_SANS);
        assert_eq!(resolved.typography.body_family, DEFAULT_SANS);
        assert_eq!(resolved.typography.base_size_px, 14);
        assert_eq!(resolved.typography.heading.font_weight, 700);
        assert!(resolved.typography.heading.border_left.is_none());
        assert_eq!(resolved.spacing.section_gap_px, 24);
        assert_eq!(resolved.spacing.item_gap_px, 16);
        assert_eq!(resolved.spacing.content_padding_px, 16);
        assert_eq!(resolved.effects.border_radius_px, 8);
        assert_eq!(resolved.effects.shadow, "none");
    }

    #[test]
    fn test_density_scales_and_rounds_spacing() {
        let tokens = tokens_from(json!({
            "spacing": {"sectionGap": "lg", "itemGap": "sm", "contentPadding": "md",
                        "density": "compact"}
        }));
        let resolved = resolve_tokens(&tokens);
        assert_eq!(resolved.spacing.section_gap_px, 24); // 32 × 0.75
        assert_eq!(resolved.spacing.item_gap_px, 6); // 8 × 0.75
        assert_eq!(resolved.spacing.content_padding_px, 12); // 16 × 0.75

        let tokens = tokens_from(json!({"spacing": {"density": "relaxed"}}));
        let resolved = resolve_tokens(&tokens);
        assert_eq!(resolved.spacing.section_gap_px, 36); // 24 × 1.5
    }

    #[test]
    fn test_accent_border_substitutes_primary_color() {
        let tokens = tokens_from(json!({
            "typography": {"headingStyle": "accent-border"},
            "colors": {"colors": {"primary": "#3B82F6"}}
        }));
        let heading = resolve_tokens(&tokens).typography.heading;
        assert_eq!(heading.font_weight, 700);
        assert_eq!(heading.border_left.as_deref(), Some("3px solid #3B82F6"));
        assert_eq!(heading.padding_left_px, 8);
        assert!(heading.border_bottom.is_none());
    }

    #[test]
    fn test_underline_substitutes_primary_color() {
        let tokens = tokens_from(json!({
            "typography": {"headingStyle": "underline"},
            "colors": {"colors": {"primary": "#DC2626"}}
        }));
        let heading = resolve_tokens(&tokens).typography.heading;
        assert_eq!(heading.border_bottom.as_deref(), Some("2px solid #DC2626"));
        assert!(heading.border_left.is_none());
    }

    #[test]
    fn test_uppercase_and_minimal_styles() {
        let tokens = tokens_from(json!({"typography": {"headingStyle": "uppercase"}}));
        let heading = resolve_tokens(&tokens).typography.heading;
        assert_eq!(heading.font_weight, 600);
        assert_eq!(heading.text_transform.as_deref(), Some("uppercase"));

        let tokens = tokens_from(json!({"typography": {"headingStyle": "minimal"}}));
        assert_eq!(resolve_tokens(&tokens).typography.heading.font_weight, 500);
    }

    #[test]
    fn test_font_size_table() {
        for (name, base, heading) in [("sm", 12, 18), ("base", 14, 20), ("lg", 16, 24), ("xl", 18, 28)]
        {
            let tokens = tokens_from(json!({"typography": {"fontSize": name}}));
            let resolved = resolve_tokens(&tokens);
            assert_eq!(resolved.typography.base_size_px, base, "{name}");
            assert_eq!(resolved.typography.heading_size_px, heading, "{name}");
        }
    }

    #[test]
    fn test_family_stacks() {
        let tokens = tokens_from(json!({
            "typography": {"fontFamily": {"heading": "eb-garamond", "body": "lato"}}
        }));
        let resolved = resolve_tokens(&tokens);
        assert!(resolved.typography.heading_family.contains("EB Garamond"));
        assert!(resolved.typography.body_family.starts_with("'Lato'"));
    }

    #[test]
    fn test_colors_flatten_and_pass_through() {
        let tokens = tokens_from(json!({
            "colors": {"colors": {
                "primary": "#0F172A",
                "text": {"primary": "#111111", "secondary": "#222222", "accent": "#333333"}
            }}
        }));
        let colors = resolve_tokens(&tokens).colors;
        assert_eq!(colors.primary, "#0F172A");
        assert_eq!(colors.text_primary, "#111111");
        assert_eq!(colors.text_secondary, "#222222");
        assert_eq!(colors.accent, "#333333");
    }

    #[test]
    fn test_shadow_and_radius_tables() {
        let tokens = tokens_from(json!({"colors": {"borderRadius": "full", "shadows": "md"}}));
        let effects = resolve_tokens(&tokens).effects;
        assert_eq!(effects.border_radius_px, 9999);
        assert_eq!(effects.shadow, "0 4px 6px rgba(0, 0, 0, 0.10)");
    }
}
