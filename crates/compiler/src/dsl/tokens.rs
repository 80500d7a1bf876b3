//! Design tokens — the enumerated, renderer-agnostic style knobs a theme
//! exposes. Hex color strings pass through unmodified; everything else is a
//! named value the resolver turns into concrete pixels/strings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    #[serde(default)]
    pub typography: TypographyTokens,
    #[serde(default)]
    pub colors: ColorTokens,
    #[serde(default)]
    pub spacing: SpacingTokens,
}

// ────────────────────────────────────────────────────────────────────────────
// Typography
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    #[serde(default)]
    pub font_family: FontFamilyTokens,
    #[serde(default)]
    pub font_size: FontSizeName,
    #[serde(default)]
    pub heading_style: HeadingStyleName,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontFamilyTokens {
    #[serde(default)]
    pub heading: FontFamilyName,
    #[serde(default)]
    pub body: FontFamilyName,
}

/// The supported résumé font families, matching the template set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamilyName {
    #[default]
    Inter,
    EbGaramond,
    Lato,
    Oswald,
    Merriweather,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSizeName {
    Sm,
    #[default]
    Base,
    Lg,
    Xl,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeadingStyleName {
    #[default]
    Bold,
    Underline,
    Uppercase,
    AccentBorder,
    Minimal,
    #[serde(other)]
    Other,
}

// ────────────────────────────────────────────────────────────────────────────
// Colors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    #[serde(default)]
    pub colors: ColorPalette,
    #[serde(default)]
    pub border_radius: BorderRadiusName,
    #[serde(default)]
    pub shadows: ShadowName,
}

/// Raw hex palette. Values are not parsed or normalized here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default = "default_secondary")]
    pub secondary: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_surface")]
    pub surface: String,
    #[serde(default)]
    pub text: TextColors,
    #[serde(default = "default_border")]
    pub border: String,
    #[serde(default = "default_divider")]
    pub divider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextColors {
    #[serde(default = "default_text_primary")]
    pub primary: String,
    #[serde(default = "default_text_secondary")]
    pub secondary: String,
    #[serde(default = "default_primary")]
    pub accent: String,
}

fn default_primary() -> String {
    "#2563EB".to_string()
}
fn default_secondary() -> String {
    "#6B7280".to_string()
}
fn default_background() -> String {
    "#FFFFFF".to_string()
}
fn default_surface() -> String {
    "#F9FAFB".to_string()
}
fn default_border() -> String {
    "#E5E7EB".to_string()
}
fn default_divider() -> String {
    "#E5E7EB".to_string()
}
fn default_text_primary() -> String {
    "#111827".to_string()
}
fn default_text_secondary() -> String {
    "#4B5563".to_string()
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            background: default_background(),
            surface: default_surface(),
            text: TextColors::default(),
            border: default_border(),
            divider: default_divider(),
        }
    }
}

impl Default for TextColors {
    fn default() -> Self {
        Self {
            primary: default_text_primary(),
            secondary: default_text_secondary(),
            accent: default_primary(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BorderRadiusName {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadowName {
    #[default]
    None,
    Sm,
    Md,
    Lg,
    #[serde(other)]
    Other,
}

// ────────────────────────────────────────────────────────────────────────────
// Spacing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingTokens {
    #[serde(default)]
    pub section_gap: SpacingSizeName,
    #[serde(default)]
    pub item_gap: SpacingSizeName,
    #[serde(default)]
    pub content_padding: SpacingSizeName,
    #[serde(default)]
    pub density: DensityName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpacingSizeName {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DensityName {
    Compact,
    #[default]
    Comfortable,
    Spacious,
    Relaxed,
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_tokens_deserialize_with_defaults() {
        let t: DesignTokens = serde_json::from_value(json!({})).unwrap();
        assert_eq!(t.typography.font_size, FontSizeName::Base);
        assert_eq!(t.typography.heading_style, HeadingStyleName::Bold);
        assert_eq!(t.colors.colors.background, "#FFFFFF");
        assert_eq!(t.spacing.density, DensityName::Comfortable);
    }

    #[test]
    fn test_unknown_token_names_never_fail() {
        let t: DesignTokens = serde_json::from_value(json!({
            "typography": {
                "fontFamily": {"heading": "comic-sans", "body": "lato"},
                "fontSize": "xxl",
                "headingStyle": "neon"
            },
            "colors": {"borderRadius": "pill", "shadows": "glow"},
            "spacing": {"sectionGap": "huge", "density": "dense"}
        }))
        .unwrap();
        assert_eq!(t.typography.font_family.heading, FontFamilyName::Other);
        assert_eq!(t.typography.font_family.body, FontFamilyName::Lato);
        assert_eq!(t.typography.font_size, FontSizeName::Other);
        assert_eq!(t.typography.heading_style, HeadingStyleName::Other);
        assert_eq!(t.colors.border_radius, BorderRadiusName::Other);
        assert_eq!(t.colors.shadows, ShadowName::Other);
        assert_eq!(t.spacing.section_gap, SpacingSizeName::Other);
        assert_eq!(t.spacing.density, DensityName::Other);
    }

    #[test]
    fn test_hex_colors_pass_through_unmodified() {
        let t: DesignTokens = serde_json::from_value(json!({
            "colors": {"colors": {"primary": "#3B82F6", "text": {"accent": "#0EA5E9"}}}
        }))
        .unwrap();
        assert_eq!(t.colors.colors.primary, "#3B82F6");
        assert_eq!(t.colors.colors.text.accent, "#0EA5E9");
        // untouched siblings keep their defaults
        assert_eq!(t.colors.colors.text.secondary, "#4B5563");
    }
}
