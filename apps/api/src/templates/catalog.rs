//! Static built-in template catalog.
//!
//! Thirty templates: six layout families, each in five colorways. Admin-added
//! templates live in the `templates` table; a persisted row whose id collides
//! with a built-in shadows it when the catalog is listed or resolved.

use sqlx::PgPool;

use crate::models::template::{ColorScheme, LayoutKind, Template, TemplateRow, TemplateStyle};

pub const DEFAULT_TEMPLATE_ID: &str = "classic-navy";

struct BuiltinDef {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    layout: LayoutKind,
    font_family: &'static str,
    /// primary, secondary, accent, background, text
    colors: [&'static str; 5],
}

const SERIF: &str = "Georgia, 'Times New Roman', serif";
const SANS: &str = "Inter, Helvetica, Arial, sans-serif";
const HUMANIST: &str = "Lato, 'Segoe UI', sans-serif";
const SYSTEM: &str = "Helvetica, Arial, sans-serif";
const OLDSTYLE: &str = "'EB Garamond', Georgia, serif";
const CONDENSED: &str = "Oswald, 'Arial Narrow', sans-serif";

const NAVY: [&str; 5] = ["#1f3a5f", "#486581", "#d9822b", "#ffffff", "#1f2933"];
const CHARCOAL: [&str; 5] = ["#2d3748", "#4a5568", "#3182ce", "#ffffff", "#1a202c"];
const FOREST: [&str; 5] = ["#22543d", "#38a169", "#d69e2e", "#ffffff", "#1c2a24"];
const BURGUNDY: [&str; 5] = ["#63171b", "#9b2c2c", "#b7791f", "#fffaf7", "#271313"];
const SLATE: [&str; 5] = ["#334e68", "#627d98", "#2a9d8f", "#f8fafc", "#243b53"];

const BUILTIN_TEMPLATES: &[BuiltinDef] = &[
    // Classic — centered serif header, ruled sections
    BuiltinDef { id: "classic-navy", name: "Classic Navy", category: "professional", layout: LayoutKind::Classic, font_family: SERIF, colors: NAVY },
    BuiltinDef { id: "classic-charcoal", name: "Classic Charcoal", category: "professional", layout: LayoutKind::Classic, font_family: SERIF, colors: CHARCOAL },
    BuiltinDef { id: "classic-forest", name: "Classic Forest", category: "professional", layout: LayoutKind::Classic, font_family: SERIF, colors: FOREST },
    BuiltinDef { id: "classic-burgundy", name: "Classic Burgundy", category: "professional", layout: LayoutKind::Classic, font_family: SERIF, colors: BURGUNDY },
    BuiltinDef { id: "classic-slate", name: "Classic Slate", category: "professional", layout: LayoutKind::Classic, font_family: SERIF, colors: SLATE },
    // Modern — left-aligned sans with accent underline and skill chips
    BuiltinDef { id: "modern-navy", name: "Modern Navy", category: "modern", layout: LayoutKind::Modern, font_family: SANS, colors: NAVY },
    BuiltinDef { id: "modern-charcoal", name: "Modern Charcoal", category: "modern", layout: LayoutKind::Modern, font_family: SANS, colors: CHARCOAL },
    BuiltinDef { id: "modern-forest", name: "Modern Forest", category: "modern", layout: LayoutKind::Modern, font_family: SANS, colors: FOREST },
    BuiltinDef { id: "modern-burgundy", name: "Modern Burgundy", category: "modern", layout: LayoutKind::Modern, font_family: SANS, colors: BURGUNDY },
    BuiltinDef { id: "modern-slate", name: "Modern Slate", category: "modern", layout: LayoutKind::Modern, font_family: SANS, colors: SLATE },
    // Sidebar — colored left rail for contact and skills
    BuiltinDef { id: "sidebar-navy", name: "Sidebar Navy", category: "creative", layout: LayoutKind::Sidebar, font_family: HUMANIST, colors: NAVY },
    BuiltinDef { id: "sidebar-charcoal", name: "Sidebar Charcoal", category: "creative", layout: LayoutKind::Sidebar, font_family: HUMANIST, colors: CHARCOAL },
    BuiltinDef { id: "sidebar-forest", name: "Sidebar Forest", category: "creative", layout: LayoutKind::Sidebar, font_family: HUMANIST, colors: FOREST },
    BuiltinDef { id: "sidebar-burgundy", name: "Sidebar Burgundy", category: "creative", layout: LayoutKind::Sidebar, font_family: HUMANIST, colors: BURGUNDY },
    BuiltinDef { id: "sidebar-slate", name: "Sidebar Slate", category: "creative", layout: LayoutKind::Sidebar, font_family: HUMANIST, colors: SLATE },
    // Compact — dense single column, inline dates
    BuiltinDef { id: "compact-navy", name: "Compact Navy", category: "minimal", layout: LayoutKind::Compact, font_family: SYSTEM, colors: NAVY },
    BuiltinDef { id: "compact-charcoal", name: "Compact Charcoal", category: "minimal", layout: LayoutKind::Compact, font_family: SYSTEM, colors: CHARCOAL },
    BuiltinDef { id: "compact-forest", name: "Compact Forest", category: "minimal", layout: LayoutKind::Compact, font_family: SYSTEM, colors: FOREST },
    BuiltinDef { id: "compact-burgundy", name: "Compact Burgundy", category: "minimal", layout: LayoutKind::Compact, font_family: SYSTEM, colors: BURGUNDY },
    BuiltinDef { id: "compact-slate", name: "Compact Slate", category: "minimal", layout: LayoutKind::Compact, font_family: SYSTEM, colors: SLATE },
    // Elegant — centered old-style serif with thin rules
    BuiltinDef { id: "elegant-navy", name: "Elegant Navy", category: "academic", layout: LayoutKind::Elegant, font_family: OLDSTYLE, colors: NAVY },
    BuiltinDef { id: "elegant-charcoal", name: "Elegant Charcoal", category: "academic", layout: LayoutKind::Elegant, font_family: OLDSTYLE, colors: CHARCOAL },
    BuiltinDef { id: "elegant-forest", name: "Elegant Forest", category: "academic", layout: LayoutKind::Elegant, font_family: OLDSTYLE, colors: FOREST },
    BuiltinDef { id: "elegant-burgundy", name: "Elegant Burgundy", category: "academic", layout: LayoutKind::Elegant, font_family: OLDSTYLE, colors: BURGUNDY },
    BuiltinDef { id: "elegant-slate", name: "Elegant Slate", category: "academic", layout: LayoutKind::Elegant, font_family: OLDSTYLE, colors: SLATE },
    // Banner — full-width colored header block
    BuiltinDef { id: "banner-navy", name: "Banner Navy", category: "bold", layout: LayoutKind::Banner, font_family: CONDENSED, colors: NAVY },
    BuiltinDef { id: "banner-charcoal", name: "Banner Charcoal", category: "bold", layout: LayoutKind::Banner, font_family: CONDENSED, colors: CHARCOAL },
    BuiltinDef { id: "banner-forest", name: "Banner Forest", category: "bold", layout: LayoutKind::Banner, font_family: CONDENSED, colors: FOREST },
    BuiltinDef { id: "banner-burgundy", name: "Banner Burgundy", category: "bold", layout: LayoutKind::Banner, font_family: CONDENSED, colors: BURGUNDY },
    BuiltinDef { id: "banner-slate", name: "Banner Slate", category: "bold", layout: LayoutKind::Banner, font_family: CONDENSED, colors: SLATE },
];

impl BuiltinDef {
    fn to_template(&self) -> Template {
        let [primary, secondary, accent, background, text] = self.colors;
        Template {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category.to_string(),
            style: Some(TemplateStyle {
                layout: self.layout,
                font_family: self.font_family.to_string(),
                colors: ColorScheme {
                    primary: primary.to_string(),
                    secondary: secondary.to_string(),
                    accent: accent.to_string(),
                    background: background.to_string(),
                    text: text.to_string(),
                },
            }),
            builtin: true,
        }
    }
}

/// All built-in templates, in catalog order.
pub fn builtin_templates() -> Vec<Template> {
    BUILTIN_TEMPLATES.iter().map(BuiltinDef::to_template).collect()
}

/// Looks up a built-in template by id.
pub fn builtin(id: &str) -> Option<Template> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|d| d.id == id)
        .map(BuiltinDef::to_template)
}

pub fn is_builtin(id: &str) -> bool {
    BUILTIN_TEMPLATES.iter().any(|d| d.id == id)
}

/// The style applied when a template carries none (undecodable custom style).
pub fn default_style() -> TemplateStyle {
    default_template()
        .style
        .expect("default template defines a style")
}

/// The baseline template every unknown id falls back to.
pub fn default_template() -> Template {
    builtin(DEFAULT_TEMPLATE_ID).expect("default template is in the built-in catalog")
}

/// Merges admin-added templates into the built-in catalog. Custom rows shadow
/// built-ins on id collision; the remainder are appended after the built-ins.
pub fn merge_catalog(custom: Vec<Template>) -> Vec<Template> {
    let mut merged = builtin_templates();
    for template in custom {
        match merged.iter_mut().find(|t| t.id == template.id) {
            Some(slot) => *slot = template,
            None => merged.push(template),
        }
    }
    merged
}

/// Resolves a template id against the database and the built-in catalog.
/// Unknown ids fall back to the baseline template instead of erroring, so a
/// resume whose template was deleted still previews and exports.
pub async fn resolve(db: &PgPool, id: &str) -> Result<Template, sqlx::Error> {
    let row: Option<TemplateRow> = sqlx::query_as("SELECT * FROM templates WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await?;

    if let Some(row) = row {
        return Ok(Template::from_row(row));
    }

    Ok(builtin(id).unwrap_or_else(default_template))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_thirty_templates() {
        assert_eq!(builtin_templates().len(), 30);
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let mut ids: Vec<&str> = BUILTIN_TEMPLATES.iter().map(|d| d.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), BUILTIN_TEMPLATES.len());
    }

    #[test]
    fn test_every_builtin_has_a_style() {
        for template in builtin_templates() {
            assert!(template.style.is_some(), "{} has no style", template.id);
            assert!(template.builtin);
        }
    }

    #[test]
    fn test_default_template_exists() {
        assert!(is_builtin(DEFAULT_TEMPLATE_ID));
        assert_eq!(default_template().id, DEFAULT_TEMPLATE_ID);
    }

    #[test]
    fn test_lookup_by_id() {
        let template = builtin("sidebar-forest").unwrap();
        assert_eq!(template.name, "Sidebar Forest");
        assert_eq!(template.style.unwrap().layout, LayoutKind::Sidebar);
        assert!(builtin("no-such-template").is_none());
    }

    #[test]
    fn test_merge_shadows_builtin_on_collision() {
        let custom = Template {
            id: "classic-navy".to_string(),
            name: "Overridden".to_string(),
            category: "custom".to_string(),
            style: None,
            builtin: false,
        };
        let merged = merge_catalog(vec![custom]);
        assert_eq!(merged.len(), 30);
        let entry = merged.iter().find(|t| t.id == "classic-navy").unwrap();
        assert_eq!(entry.name, "Overridden");
        assert!(!entry.builtin);
    }

    #[test]
    fn test_merge_appends_new_customs() {
        let custom = Template {
            id: "aurora".to_string(),
            name: "Aurora".to_string(),
            category: "custom".to_string(),
            style: None,
            builtin: false,
        };
        let merged = merge_catalog(vec![custom]);
        assert_eq!(merged.len(), 31);
        assert_eq!(merged.last().unwrap().id, "aurora");
    }
}
