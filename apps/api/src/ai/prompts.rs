// LLM prompt constants for the two AI flows.

/// System prompt for template style generation — enforces JSON-only output.
pub const STYLE_SYSTEM: &str = "You are a visual designer creating resume template styles. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Style generation prompt template. Replace `{name}` and `{category}` before sending.
pub const STYLE_PROMPT_TEMPLATE: &str = r##"Design a visual style for a new resume template.

TEMPLATE NAME: {name}
CATEGORY: {category}

Return a JSON object with this EXACT schema (no extra fields):
{
  "layout": "classic",
  "font_family": "Georgia, 'Times New Roman', serif",
  "colors": {
    "primary": "#1f3a5f",
    "secondary": "#486581",
    "accent": "#d9822b",
    "background": "#ffffff",
    "text": "#1f2933"
  }
}

Rules:
- "layout" MUST be exactly one of: "classic", "modern", "sidebar", "compact", "elegant", "banner".
  Pick the one that best matches the template name and category.
- "font_family" is a CSS font stack ending in a generic family (serif or sans-serif).
- All five colors are 6-digit lowercase hex values with a leading '#'.
- "background" must be white or near-white; "text" must be dark enough to read on it.
- "primary" carries the template's identity; "accent" is a contrasting highlight color.
- The palette should feel cohesive and appropriate for a professional resume."##;

/// System prompt for resume text improvement — enforces JSON-only output.
pub const IMPROVE_SYSTEM: &str = "You are a professional resume editor. \
    Rewrite resume text to be clear, active, and concise without inventing facts. \
    You MUST respond with valid JSON only: {\"improved_text\": \"...\"}. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Text improvement prompt template. Replace `{section}` and `{text}` before sending.
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"Improve the following resume {section} text.

Rules:
1. Keep every fact — do NOT invent achievements, metrics, employers, or dates
2. Prefer active voice and strong verbs
3. Remove filler phrases and soft qualifiers ("various", "responsible for", "helped with")
4. Keep roughly the same length — this is a rewrite, not an expansion
5. Return JSON only: {"improved_text": "rewritten text here"}

TEXT:
{text}"#;
