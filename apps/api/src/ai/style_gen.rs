//! The two single-shot AI flows, both going through `llm_client::call_json`.

use serde::Deserialize;

use crate::ai::prompts::{
    IMPROVE_PROMPT_TEMPLATE, IMPROVE_SYSTEM, STYLE_PROMPT_TEMPLATE, STYLE_SYSTEM,
};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::template::TemplateStyle;

#[derive(Debug, Deserialize)]
pub struct ImprovedText {
    pub improved_text: String,
}

/// Generates a template style (layout family, font stack, color palette) for
/// a named template. The model must return one of the renderer's layout
/// values; anything else fails deserialization and surfaces as an LLM error.
pub async fn generate_template_style(
    name: &str,
    category: &str,
    llm: &LlmClient,
) -> Result<TemplateStyle, AppError> {
    let prompt = STYLE_PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{category}", category);

    llm.call_json::<TemplateStyle>(&prompt, STYLE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("template style generation failed: {e}")))
}

/// Rewrites a piece of resume text (summary, experience description) without
/// inventing facts.
pub async fn improve_text(
    text: &str,
    section: Option<&str>,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = IMPROVE_PROMPT_TEMPLATE
        .replace("{section}", section.unwrap_or("summary"))
        .replace("{text}", text);

    let improved = llm
        .call_json::<ImprovedText>(&prompt, IMPROVE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("text improvement failed: {e}")))?;

    Ok(improved.improved_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::LayoutKind;

    #[test]
    fn test_style_prompt_substitution() {
        let prompt = STYLE_PROMPT_TEMPLATE
            .replace("{name}", "Midnight")
            .replace("{category}", "modern");
        assert!(prompt.contains("TEMPLATE NAME: Midnight"));
        assert!(prompt.contains("CATEGORY: modern"));
        assert!(!prompt.contains("{name}"));
    }

    #[test]
    fn test_style_schema_example_deserializes() {
        // The schema shown to the model must itself be a valid style.
        let json = r##"{
            "layout": "classic",
            "font_family": "Georgia, 'Times New Roman', serif",
            "colors": {
                "primary": "#1f3a5f",
                "secondary": "#486581",
                "accent": "#d9822b",
                "background": "#ffffff",
                "text": "#1f2933"
            }
        }"##;
        let style: TemplateStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.layout, LayoutKind::Classic);
    }

    #[test]
    fn test_improved_text_deserializes() {
        let parsed: ImprovedText =
            serde_json::from_str(r#"{"improved_text": "Led migration of 12 services."}"#).unwrap();
        assert_eq!(parsed.improved_text, "Led migration of 12 services.");
    }
}
