use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// An admin-added template as persisted in the `templates` table.
/// `style` is stored as JSONB so AI-generated styles round-trip verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TemplateRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub style: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// A template as served by the catalog API — built-in or admin-added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: String,
    pub style: Option<TemplateStyle>,
    pub builtin: bool,
}

/// Visual style definition: which layout family renders the resume, plus
/// font and color choices plugged into that layout's markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateStyle {
    pub layout: LayoutKind,
    pub font_family: String,
    pub colors: ColorScheme,
}

/// The layout families implemented by the renderer. AI-generated styles must
/// pick one of these; anything else fails deserialization and surfaces as a
/// structured LLM error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Classic,
    Modern,
    Sidebar,
    Compact,
    Elegant,
    Banner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Template {
    /// Converts a persisted row into a catalog entry. A style that fails to
    /// decode (schema drift) degrades to `None` so the baseline style applies.
    pub fn from_row(row: TemplateRow) -> Self {
        let style = row.style.and_then(|v| {
            serde_json::from_value::<TemplateStyle>(v)
                .map_err(|e| {
                    tracing::warn!("Template '{}' has an undecodable style: {e}", row.id);
                    e
                })
                .ok()
        });
        Template {
            id: row.id,
            name: row.name,
            category: row.category,
            style,
            builtin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_kind_serde_lowercase() {
        let kind: LayoutKind = serde_json::from_str(r#""sidebar""#).unwrap();
        assert_eq!(kind, LayoutKind::Sidebar);
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""sidebar""#);
    }

    #[test]
    fn test_style_deserializes_from_model_output() {
        let json = r##"{
            "layout": "banner",
            "font_family": "Lato, sans-serif",
            "colors": {
                "primary": "#1a365d",
                "secondary": "#2c5282",
                "accent": "#ed8936",
                "background": "#ffffff",
                "text": "#1a202c"
            }
        }"##;
        let style: TemplateStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.layout, LayoutKind::Banner);
        assert_eq!(style.colors.accent, "#ed8936");
    }

    #[test]
    fn test_unknown_layout_is_rejected() {
        let json = r##"{
            "layout": "holographic",
            "font_family": "serif",
            "colors": {
                "primary": "#000", "secondary": "#000", "accent": "#000",
                "background": "#fff", "text": "#000"
            }
        }"##;
        assert!(serde_json::from_str::<TemplateStyle>(json).is_err());
    }

    #[test]
    fn test_from_row_degrades_bad_style_to_none() {
        let row = TemplateRow {
            id: "custom-1".to_string(),
            name: "Custom".to_string(),
            category: "modern".to_string(),
            style: Some(serde_json::json!({"layout": 42})),
            created_at: chrono::Utc::now(),
        };
        let template = Template::from_row(row);
        assert!(template.style.is_none());
        assert!(!template.builtin);
    }
}
