//! Server-side PDF export with printpdf and built-in Helvetica fonts.
//!
//! Line breaking is a greedy word-wrap over an approximate average glyph
//! width. That is coarse, but PDF export only needs readable paragraphs, not
//! typographic fidelity; the wrap errs on the short side so text never
//! overruns the right margin.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};

use crate::models::resume::ResumeDocument;
use crate::models::template::Template;
use crate::render::sections::resume_sections;
use crate::templates::catalog;

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 18.0;
const MM_PER_PT: f32 = 0.352_778;
/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;

const NAME_SIZE: f32 = 22.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 10.5;
const META_SIZE: f32 = 9.5;

/// Renders a resume document to PDF bytes.
pub fn render_pdf(template: &Template, doc: &ResumeDocument) -> Result<Vec<u8>, printpdf::Error> {
    let style = template
        .style
        .clone()
        .unwrap_or_else(catalog::default_style);

    let (pdf, page, layer) = PdfDocument::new(
        "Resume",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = pdf.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = pdf.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut cursor = Cursor {
        pdf: &pdf,
        layer: pdf.get_page(page).get_layer(layer),
        y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    let primary = hex_to_rgb(&style.colors.primary);
    let secondary = hex_to_rgb(&style.colors.secondary);
    let text = hex_to_rgb(&style.colors.text);

    let sections = resume_sections(doc);

    cursor.write_line(&sections.name, NAME_SIZE, &bold, primary);
    if let Some(contact) = &sections.contact {
        cursor.write_wrapped(contact, META_SIZE, &regular, secondary);
    }
    cursor.gap(4.0);

    if let Some(summary) = &sections.summary {
        cursor.heading("Summary", &bold, primary);
        cursor.write_wrapped(summary, BODY_SIZE, &regular, text);
        cursor.gap(2.0);
    }

    if !sections.experience.is_empty() {
        cursor.heading("Work Experience", &bold, primary);
        for item in &sections.experience {
            if !item.headline.is_empty() {
                cursor.write_wrapped(&item.headline, BODY_SIZE, &bold, text);
            }
            if let Some(meta) = &item.meta {
                cursor.write_wrapped(meta, META_SIZE, &regular, secondary);
            }
            if let Some(body) = &item.body {
                cursor.write_wrapped(body, BODY_SIZE, &regular, text);
            }
            cursor.gap(2.0);
        }
    }

    if !sections.education.is_empty() {
        cursor.heading("Education", &bold, primary);
        for item in &sections.education {
            if !item.headline.is_empty() {
                cursor.write_wrapped(&item.headline, BODY_SIZE, &bold, text);
            }
            if let Some(meta) = &item.meta {
                cursor.write_wrapped(meta, META_SIZE, &regular, secondary);
            }
            cursor.gap(2.0);
        }
    }

    if let Some(skills) = &sections.skills {
        cursor.heading("Skills", &bold, primary);
        cursor.write_wrapped(skills, BODY_SIZE, &regular, text);
    }

    pdf.save_to_bytes()
}

struct Cursor<'a> {
    pdf: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f32,
}

impl Cursor<'_> {
    fn line_height_mm(size_pt: f32) -> f32 {
        size_pt * 1.4 * MM_PER_PT
    }

    /// Starts a new page when the next line would cross the bottom margin.
    fn ensure_space(&mut self, size_pt: f32) {
        if self.y_mm - Self::line_height_mm(size_pt) < MARGIN_MM {
            let (page, layer) = self
                .pdf
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.pdf.get_page(page).get_layer(layer);
            self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    fn write_line(&mut self, text: &str, size_pt: f32, font: &IndirectFontRef, color: (f32, f32, f32)) {
        self.ensure_space(size_pt);
        self.y_mm -= Self::line_height_mm(size_pt);
        let (r, g, b) = color;
        self.layer
            .set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
        self.layer
            .use_text(text, size_pt, Mm(MARGIN_MM), Mm(self.y_mm), font);
    }

    fn write_wrapped(
        &mut self,
        text: &str,
        size_pt: f32,
        font: &IndirectFontRef,
        color: (f32, f32, f32),
    ) {
        let usable_pt = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / MM_PER_PT;
        for line in wrap_text(text, size_pt, usable_pt) {
            self.write_line(&line, size_pt, font, color);
        }
    }

    fn heading(&mut self, title: &str, font: &IndirectFontRef, color: (f32, f32, f32)) {
        self.gap(3.0);
        self.write_line(title, HEADING_SIZE, font, color);
    }

    fn gap(&mut self, mm: f32) {
        self.y_mm -= mm;
    }
}

/// Greedy word wrap against an approximate glyph width. Words longer than the
/// line go on their own (overlong) line rather than being split.
fn wrap_text(text: &str, size_pt: f32, max_width_pt: f32) -> Vec<String> {
    let char_width = size_pt * AVG_GLYPH_EM;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_width = word.chars().count() as f32 * char_width;
        let space_width = if current.is_empty() { 0.0 } else { char_width };

        if !current.is_empty() && current_width + space_width + word_width > max_width_pt {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += char_width;
        }
        current.push_str(word);
        current_width += word_width;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Parses a "#rrggbb" color into 0.0–1.0 RGB components. Anything else,
/// including non-ASCII input that would not slice on char boundaries,
/// falls back to black.
fn hex_to_rgb(hex: &str) -> (f32, f32, f32) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return (0.0, 0.0, 0.0);
    }
    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map(|v| v as f32 / 255.0)
            .unwrap_or(0.0)
    };
    (parse(0..2), parse(2..4), parse(4..6))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;

    #[test]
    fn test_pdf_bytes_have_magic_prefix() {
        let template = catalog::default_template();
        let bytes = render_pdf(&template, &ResumeDocument::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_pdf_renders_for_every_builtin() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = Some("Ada Lovelace".to_string());
        doc.summary = Some("Engineer.".to_string());
        doc.skills = vec!["Rust".to_string()];
        doc.work_experience.insert(
            "w1".to_string(),
            ExperienceEntry {
                title: Some("Engineer".to_string()),
                company: Some("Acme".to_string()),
                description: Some("Built things. ".repeat(40)),
                ..Default::default()
            },
        );
        for template in catalog::builtin_templates() {
            let bytes = render_pdf(&template, &doc).unwrap();
            assert!(!bytes.is_empty(), "{} produced empty PDF", template.id);
        }
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text(&"word ".repeat(50), 10.0, 100.0);
        assert!(lines.len() > 1);
        // 100pt at 5pt/char fits 20 chars: "word word word word" exactly
        for line in &lines {
            assert!(line.chars().count() <= 20, "line too long: {line}");
        }
    }

    #[test]
    fn test_wrap_keeps_overlong_word_whole() {
        let lines = wrap_text("supercalifragilistic", 10.0, 50.0);
        assert_eq!(lines, vec!["supercalifragilistic".to_string()]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_text("   ", 10.0, 100.0).is_empty());
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#ffffff"), (1.0, 1.0, 1.0));
        assert_eq!(hex_to_rgb("#000000"), (0.0, 0.0, 0.0));
        let (r, g, b) = hex_to_rgb("#ff0080");
        assert!((r - 1.0).abs() < 1e-6);
        assert_eq!(g, 0.0);
        assert!((b - 128.0 / 255.0).abs() < 1e-3);
        assert_eq!(hex_to_rgb("garbage"), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hex_to_rgb_nonascii_falls_back_to_black() {
        // 6 bytes but not 6 ASCII chars — must not panic on a char boundary
        assert_eq!(hex_to_rgb("aééb"), (0.0, 0.0, 0.0));
        assert_eq!(hex_to_rgb("#аааааа"), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_pdf_renders_with_invalid_style_colors() {
        use crate::models::template::{ColorScheme, LayoutKind, TemplateStyle};

        // Admin-supplied styles carry unvalidated color strings; export must
        // degrade to black rather than fail.
        let template = Template {
            id: "custom-bad-colors".to_string(),
            name: "Bad Colors".to_string(),
            category: "custom".to_string(),
            style: Some(TemplateStyle {
                layout: LayoutKind::Classic,
                font_family: "serif".to_string(),
                colors: ColorScheme {
                    primary: "aééb".to_string(),
                    secondary: "not-a-color".to_string(),
                    accent: "#12345".to_string(),
                    background: "#ffffff".to_string(),
                    text: "#1f2933".to_string(),
                },
            }),
            builtin: false,
        };
        let bytes = render_pdf(&template, &ResumeDocument::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
