//! The template rendering engine: `(template, document) -> HTML markup`.
//!
//! One hand-coded layout per family, selected by the template's layout value;
//! templates without a decodable style fall back to the baseline style. Every
//! field access is null-safe so partially filled resumes always render.

use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};
use crate::models::template::{LayoutKind, Template, TemplateStyle};
use crate::templates::catalog;

/// Renders a resume document with the given template.
pub fn render_resume(template: &Template, doc: &ResumeDocument) -> String {
    let style = template
        .style
        .clone()
        .unwrap_or_else(catalog::default_style);

    match style.layout {
        LayoutKind::Classic => classic(doc, &style),
        LayoutKind::Modern => modern(doc, &style),
        LayoutKind::Sidebar => sidebar(doc, &style),
        LayoutKind::Compact => compact(doc, &style),
        LayoutKind::Elegant => elegant(doc, &style),
        LayoutKind::Banner => banner(doc, &style),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared field helpers
// ────────────────────────────────────────────────────────────────────────────

/// Escapes text for inclusion in HTML element content and attributes.
fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped field value, empty when unset.
fn field(value: &Option<String>) -> String {
    value.as_deref().map(esc).unwrap_or_default()
}

/// "2019 – 2022", "2019 – Present", a bare year, or empty.
fn date_range(start: &Option<String>, end: &Option<String>) -> String {
    match (start.as_deref(), end.as_deref()) {
        (Some(s), Some(e)) => format!("{} – {}", esc(s), esc(e)),
        (Some(s), None) => format!("{} – Present", esc(s)),
        (None, Some(e)) => esc(e),
        (None, None) => String::new(),
    }
}

fn display_name(p: &PersonalInfo) -> String {
    p.full_name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .map(esc)
        .unwrap_or_else(|| "Unnamed".to_string())
}

/// Contact fields that are present, escaped, in a fixed order.
fn contact_parts(p: &PersonalInfo) -> Vec<String> {
    [&p.email, &p.phone, &p.location, &p.website]
        .into_iter()
        .filter_map(|f| f.as_deref())
        .filter(|v| !v.trim().is_empty())
        .map(esc)
        .collect()
}

/// "Title — Company" with either side optional.
fn role_line(entry: &ExperienceEntry) -> String {
    match (entry.title.as_deref(), entry.company.as_deref()) {
        (Some(t), Some(c)) => format!("{} — {}", esc(t), esc(c)),
        (Some(t), None) => esc(t),
        (None, Some(c)) => esc(c),
        (None, None) => String::new(),
    }
}

/// "Degree in Field" with either side optional.
fn degree_line(entry: &EducationEntry) -> String {
    match (entry.degree.as_deref(), entry.field.as_deref()) {
        (Some(d), Some(f)) => format!("{} in {}", esc(d), esc(f)),
        (Some(d), None) => esc(d),
        (None, Some(f)) => esc(f),
        (None, None) => String::new(),
    }
}

fn page(style: &TemplateStyle, css: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n\
         body{{margin:0;padding:0;background:{bg};color:{text};font-family:{font};}}\n\
         {css}\n</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        bg = style.colors.background,
        text = style.colors.text,
        font = style.font_family,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Classic — centered serif header, ruled sections
// ────────────────────────────────────────────────────────────────────────────

fn classic(doc: &ResumeDocument, style: &TemplateStyle) -> String {
    let c = &style.colors;
    let css = format!(
        ".page{{max-width:760px;margin:0 auto;padding:48px 56px;}}\n\
         h1{{text-align:center;margin:0;font-size:30px;color:{primary};}}\n\
         .contact{{text-align:center;margin:8px 0 24px;color:{secondary};font-size:13px;}}\n\
         h2{{font-size:14px;text-transform:uppercase;letter-spacing:2px;color:{primary};\
            border-bottom:1px solid {secondary};padding-bottom:4px;margin:24px 0 10px;}}\n\
         .entry{{margin-bottom:12px;}}\n\
         .role{{font-weight:bold;}}\n\
         .dates{{float:right;color:{accent};font-size:13px;}}\n\
         .desc{{margin:4px 0 0;font-size:14px;line-height:1.45;}}\n\
         .skills{{font-size:14px;}}",
        primary = c.primary,
        secondary = c.secondary,
        accent = c.accent,
    );

    let mut body = String::new();
    body.push_str("<div class=\"page\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", display_name(&doc.personal_info)));
    let contact = contact_parts(&doc.personal_info);
    if !contact.is_empty() {
        body.push_str(&format!(
            "<div class=\"contact\">{}</div>\n",
            contact.join(" &bull; ")
        ));
    }
    if let Some(summary) = doc.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        body.push_str("<h2>Summary</h2>\n");
        body.push_str(&format!("<p class=\"desc\">{}</p>\n", esc(summary)));
    }
    if !doc.work_experience.is_empty() {
        body.push_str("<h2>Work Experience</h2>\n");
        for entry in doc.work_experience.values() {
            body.push_str("<div class=\"entry\">");
            let dates = date_range(&entry.start_date, &entry.end_date);
            if !dates.is_empty() {
                body.push_str(&format!("<span class=\"dates\">{dates}</span>"));
            }
            body.push_str(&format!("<div class=\"role\">{}</div>", role_line(entry)));
            if entry.description.is_some() {
                body.push_str(&format!(
                    "<p class=\"desc\">{}</p>",
                    field(&entry.description)
                ));
            }
            body.push_str("</div>\n");
        }
    }
    if !doc.education.is_empty() {
        body.push_str("<h2>Education</h2>\n");
        for entry in doc.education.values() {
            body.push_str("<div class=\"entry\">");
            let dates = date_range(&entry.start_date, &entry.end_date);
            if !dates.is_empty() {
                body.push_str(&format!("<span class=\"dates\">{dates}</span>"));
            }
            body.push_str(&format!("<div class=\"role\">{}</div>", field(&entry.school)));
            let degree = degree_line(entry);
            if !degree.is_empty() {
                body.push_str(&format!("<div class=\"desc\">{degree}</div>"));
            }
            body.push_str("</div>\n");
        }
    }
    if !doc.skills.is_empty() {
        body.push_str("<h2>Skills</h2>\n");
        let skills: Vec<String> = doc.skills.iter().map(|s| esc(s)).collect();
        body.push_str(&format!("<p class=\"skills\">{}</p>\n", skills.join(", ")));
    }
    body.push_str("</div>");

    page(style, &css, &body)
}

// ────────────────────────────────────────────────────────────────────────────
// Modern — left-aligned header with accent bar, skills as chips
// ────────────────────────────────────────────────────────────────────────────

fn modern(doc: &ResumeDocument, style: &TemplateStyle) -> String {
    let c = &style.colors;
    let css = format!(
        ".page{{max-width:780px;margin:0 auto;padding:40px 48px;}}\n\
         h1{{margin:0;font-size:34px;color:{primary};}}\n\
         .bar{{width:64px;height:5px;background:{accent};margin:10px 0 14px;}}\n\
         .contact{{color:{secondary};font-size:13px;margin-bottom:28px;}}\n\
         h2{{font-size:15px;color:{primary};margin:22px 0 8px;}}\n\
         .entry{{border-left:3px solid {accent};padding-left:12px;margin-bottom:14px;}}\n\
         .role{{font-weight:600;font-size:15px;}}\n\
         .meta{{color:{secondary};font-size:12px;margin:2px 0;}}\n\
         .desc{{margin:4px 0 0;font-size:14px;line-height:1.5;}}\n\
         .chip{{display:inline-block;background:{secondary};color:{bg};border-radius:3px;\
            padding:3px 10px;margin:0 6px 6px 0;font-size:12px;}}",
        primary = c.primary,
        secondary = c.secondary,
        accent = c.accent,
        bg = c.background,
    );

    let mut body = String::new();
    body.push_str("<div class=\"page\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", display_name(&doc.personal_info)));
    body.push_str("<div class=\"bar\"></div>\n");
    let contact = contact_parts(&doc.personal_info);
    if !contact.is_empty() {
        body.push_str(&format!(
            "<div class=\"contact\">{}</div>\n",
            contact.join(" &middot; ")
        ));
    }
    if let Some(summary) = doc.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        body.push_str("<h2>About</h2>\n");
        body.push_str(&format!("<p class=\"desc\">{}</p>\n", esc(summary)));
    }
    if !doc.work_experience.is_empty() {
        body.push_str("<h2>Experience</h2>\n");
        for entry in doc.work_experience.values() {
            body.push_str("<div class=\"entry\">");
            body.push_str(&format!("<div class=\"role\">{}</div>", role_line(entry)));
            let dates = date_range(&entry.start_date, &entry.end_date);
            let location = field(&entry.location);
            if !dates.is_empty() || !location.is_empty() {
                let meta: Vec<String> = [dates, location]
                    .into_iter()
                    .filter(|v| !v.is_empty())
                    .collect();
                body.push_str(&format!("<div class=\"meta\">{}</div>", meta.join(" · ")));
            }
            if entry.description.is_some() {
                body.push_str(&format!(
                    "<p class=\"desc\">{}</p>",
                    field(&entry.description)
                ));
            }
            body.push_str("</div>\n");
        }
    }
    if !doc.education.is_empty() {
        body.push_str("<h2>Education</h2>\n");
        for entry in doc.education.values() {
            body.push_str("<div class=\"entry\">");
            body.push_str(&format!("<div class=\"role\">{}</div>", field(&entry.school)));
            let degree = degree_line(entry);
            let dates = date_range(&entry.start_date, &entry.end_date);
            let meta: Vec<String> = [degree, dates]
                .into_iter()
                .filter(|v| !v.is_empty())
                .collect();
            if !meta.is_empty() {
                body.push_str(&format!("<div class=\"meta\">{}</div>", meta.join(" · ")));
            }
            body.push_str("</div>\n");
        }
    }
    if !doc.skills.is_empty() {
        body.push_str("<h2>Skills</h2>\n<div>");
        for skill in &doc.skills {
            body.push_str(&format!("<span class=\"chip\">{}</span>", esc(skill)));
        }
        body.push_str("</div>\n");
    }
    body.push_str("</div>");

    page(style, &css, &body)
}

// ────────────────────────────────────────────────────────────────────────────
// Sidebar — colored left rail with contact and skills
// ────────────────────────────────────────────────────────────────────────────

fn sidebar(doc: &ResumeDocument, style: &TemplateStyle) -> String {
    let c = &style.colors;
    let css = format!(
        ".wrap{{display:flex;max-width:820px;margin:0 auto;min-height:100vh;}}\n\
         .rail{{width:240px;background:{primary};color:{bg};padding:40px 24px;}}\n\
         .rail h1{{font-size:24px;margin:0 0 18px;}}\n\
         .rail h3{{font-size:12px;text-transform:uppercase;letter-spacing:1px;\
            border-bottom:1px solid {accent};padding-bottom:4px;margin:22px 0 8px;}}\n\
         .rail div,.rail li{{font-size:13px;margin-bottom:5px;word-break:break-word;}}\n\
         .rail ul{{margin:0;padding-left:18px;}}\n\
         .main{{flex:1;padding:40px 32px;}}\n\
         .main h2{{font-size:15px;color:{primary};border-bottom:2px solid {accent};\
            padding-bottom:4px;margin:0 0 12px;}}\n\
         .entry{{margin-bottom:14px;}}\n\
         .role{{font-weight:bold;font-size:15px;}}\n\
         .meta{{color:{secondary};font-size:12px;}}\n\
         .desc{{margin:4px 0 0;font-size:14px;line-height:1.5;}}\n\
         section{{margin-bottom:26px;}}",
        primary = c.primary,
        secondary = c.secondary,
        accent = c.accent,
        bg = c.background,
    );

    let mut rail = String::new();
    rail.push_str(&format!("<h1>{}</h1>\n", display_name(&doc.personal_info)));
    let contact = contact_parts(&doc.personal_info);
    if !contact.is_empty() {
        rail.push_str("<h3>Contact</h3>\n");
        for part in contact {
            rail.push_str(&format!("<div>{part}</div>\n"));
        }
    }
    if !doc.skills.is_empty() {
        rail.push_str("<h3>Skills</h3>\n<ul>");
        for skill in &doc.skills {
            rail.push_str(&format!("<li>{}</li>", esc(skill)));
        }
        rail.push_str("</ul>\n");
    }

    let mut main = String::new();
    if let Some(summary) = doc.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        main.push_str(&format!(
            "<section><h2>Profile</h2><p class=\"desc\">{}</p></section>\n",
            esc(summary)
        ));
    }
    if !doc.work_experience.is_empty() {
        main.push_str("<section><h2>Experience</h2>\n");
        for entry in doc.work_experience.values() {
            main.push_str("<div class=\"entry\">");
            main.push_str(&format!("<div class=\"role\">{}</div>", role_line(entry)));
            let dates = date_range(&entry.start_date, &entry.end_date);
            if !dates.is_empty() {
                main.push_str(&format!("<div class=\"meta\">{dates}</div>"));
            }
            if entry.description.is_some() {
                main.push_str(&format!(
                    "<p class=\"desc\">{}</p>",
                    field(&entry.description)
                ));
            }
            main.push_str("</div>\n");
        }
        main.push_str("</section>\n");
    }
    if !doc.education.is_empty() {
        main.push_str("<section><h2>Education</h2>\n");
        for entry in doc.education.values() {
            main.push_str("<div class=\"entry\">");
            main.push_str(&format!("<div class=\"role\">{}</div>", field(&entry.school)));
            let degree = degree_line(entry);
            let dates = date_range(&entry.start_date, &entry.end_date);
            let meta: Vec<String> = [degree, dates]
                .into_iter()
                .filter(|v| !v.is_empty())
                .collect();
            if !meta.is_empty() {
                main.push_str(&format!("<div class=\"meta\">{}</div>", meta.join(" · ")));
            }
            main.push_str("</div>\n");
        }
        main.push_str("</section>\n");
    }

    let body = format!(
        "<div class=\"wrap\">\n<aside class=\"rail\">\n{rail}</aside>\n\
         <div class=\"main\">\n{main}</div>\n</div>"
    );

    page(style, &css, &body)
}

// ────────────────────────────────────────────────────────────────────────────
// Compact — dense single column, inline dates
// ────────────────────────────────────────────────────────────────────────────

fn compact(doc: &ResumeDocument, style: &TemplateStyle) -> String {
    let c = &style.colors;
    let css = format!(
        ".page{{max-width:740px;margin:0 auto;padding:32px 40px;font-size:13px;}}\n\
         .head{{display:flex;justify-content:space-between;align-items:baseline;\
            border-bottom:2px solid {primary};padding-bottom:6px;}}\n\
         h1{{margin:0;font-size:22px;color:{primary};}}\n\
         .contact{{color:{secondary};font-size:12px;}}\n\
         h2{{font-size:12px;text-transform:uppercase;letter-spacing:1px;\
            color:{secondary};margin:16px 0 6px;}}\n\
         .entry{{margin-bottom:6px;line-height:1.4;}}\n\
         .role{{font-weight:bold;}}\n\
         .dates{{color:{accent};}}",
        primary = c.primary,
        secondary = c.secondary,
        accent = c.accent,
    );

    let mut body = String::new();
    body.push_str("<div class=\"page\">\n<div class=\"head\">");
    body.push_str(&format!("<h1>{}</h1>", display_name(&doc.personal_info)));
    let contact = contact_parts(&doc.personal_info);
    if !contact.is_empty() {
        body.push_str(&format!(
            "<span class=\"contact\">{}</span>",
            contact.join(" | ")
        ));
    }
    body.push_str("</div>\n");
    if let Some(summary) = doc.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        body.push_str(&format!("<p>{}</p>\n", esc(summary)));
    }
    if !doc.work_experience.is_empty() {
        body.push_str("<h2>Experience</h2>\n");
        for entry in doc.work_experience.values() {
            let dates = date_range(&entry.start_date, &entry.end_date);
            body.push_str("<div class=\"entry\">");
            body.push_str(&format!("<span class=\"role\">{}</span>", role_line(entry)));
            if !dates.is_empty() {
                body.push_str(&format!(" <span class=\"dates\">({dates})</span>"));
            }
            if entry.description.is_some() {
                body.push_str(&format!(" — {}", field(&entry.description)));
            }
            body.push_str("</div>\n");
        }
    }
    if !doc.education.is_empty() {
        body.push_str("<h2>Education</h2>\n");
        for entry in doc.education.values() {
            let dates = date_range(&entry.start_date, &entry.end_date);
            body.push_str("<div class=\"entry\">");
            body.push_str(&format!("<span class=\"role\">{}</span>", field(&entry.school)));
            let degree = degree_line(entry);
            if !degree.is_empty() {
                body.push_str(&format!(", {degree}"));
            }
            if !dates.is_empty() {
                body.push_str(&format!(" <span class=\"dates\">({dates})</span>"));
            }
            body.push_str("</div>\n");
        }
    }
    if !doc.skills.is_empty() {
        body.push_str("<h2>Skills</h2>\n");
        let skills: Vec<String> = doc.skills.iter().map(|s| esc(s)).collect();
        body.push_str(&format!("<div class=\"entry\">{}</div>\n", skills.join(" · ")));
    }
    body.push_str("</div>");

    page(style, &css, &body)
}

// ────────────────────────────────────────────────────────────────────────────
// Elegant — centered old-style serif, thin rules, letter-spaced name
// ────────────────────────────────────────────────────────────────────────────

fn elegant(doc: &ResumeDocument, style: &TemplateStyle) -> String {
    let c = &style.colors;
    let css = format!(
        ".page{{max-width:720px;margin:0 auto;padding:56px 48px;}}\n\
         h1{{text-align:center;margin:0;font-size:26px;font-weight:normal;\
            letter-spacing:5px;text-transform:uppercase;color:{primary};}}\n\
         .rule{{border-top:1px solid {secondary};margin:14px 25%;}}\n\
         .contact{{text-align:center;font-size:12px;color:{secondary};\
            letter-spacing:1px;margin-bottom:30px;}}\n\
         h2{{text-align:center;font-size:13px;font-weight:normal;\
            letter-spacing:3px;text-transform:uppercase;color:{accent};margin:26px 0 12px;}}\n\
         .entry{{margin-bottom:14px;text-align:center;}}\n\
         .role{{font-size:15px;}}\n\
         .meta{{font-size:12px;font-style:italic;color:{secondary};}}\n\
         .desc{{font-size:14px;line-height:1.55;margin:4px auto 0;max-width:540px;}}",
        primary = c.primary,
        secondary = c.secondary,
        accent = c.accent,
    );

    let mut body = String::new();
    body.push_str("<div class=\"page\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", display_name(&doc.personal_info)));
    body.push_str("<div class=\"rule\"></div>\n");
    let contact = contact_parts(&doc.personal_info);
    if !contact.is_empty() {
        body.push_str(&format!(
            "<div class=\"contact\">{}</div>\n",
            contact.join(" — ")
        ));
    }
    if let Some(summary) = doc.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        body.push_str(&format!(
            "<p class=\"desc\" style=\"text-align:center\">{}</p>\n",
            esc(summary)
        ));
    }
    if !doc.work_experience.is_empty() {
        body.push_str("<h2>Experience</h2>\n");
        for entry in doc.work_experience.values() {
            body.push_str("<div class=\"entry\">");
            body.push_str(&format!("<div class=\"role\">{}</div>", role_line(entry)));
            let dates = date_range(&entry.start_date, &entry.end_date);
            if !dates.is_empty() {
                body.push_str(&format!("<div class=\"meta\">{dates}</div>"));
            }
            if entry.description.is_some() {
                body.push_str(&format!(
                    "<p class=\"desc\">{}</p>",
                    field(&entry.description)
                ));
            }
            body.push_str("</div>\n");
        }
    }
    if !doc.education.is_empty() {
        body.push_str("<h2>Education</h2>\n");
        for entry in doc.education.values() {
            body.push_str("<div class=\"entry\">");
            body.push_str(&format!("<div class=\"role\">{}</div>", field(&entry.school)));
            let degree = degree_line(entry);
            let dates = date_range(&entry.start_date, &entry.end_date);
            let meta: Vec<String> = [degree, dates]
                .into_iter()
                .filter(|v| !v.is_empty())
                .collect();
            if !meta.is_empty() {
                body.push_str(&format!("<div class=\"meta\">{}</div>", meta.join(", ")));
            }
            body.push_str("</div>\n");
        }
    }
    if !doc.skills.is_empty() {
        body.push_str("<h2>Skills</h2>\n");
        let skills: Vec<String> = doc.skills.iter().map(|s| esc(s)).collect();
        body.push_str(&format!(
            "<p class=\"desc\" style=\"text-align:center\">{}</p>\n",
            skills.join(" — ")
        ));
    }
    body.push_str("</div>");

    page(style, &css, &body)
}

// ────────────────────────────────────────────────────────────────────────────
// Banner — full-width colored header block
// ────────────────────────────────────────────────────────────────────────────

fn banner(doc: &ResumeDocument, style: &TemplateStyle) -> String {
    let c = &style.colors;
    let css = format!(
        ".banner{{background:{primary};color:{bg};padding:44px 56px;}}\n\
         .banner h1{{margin:0;font-size:36px;text-transform:uppercase;letter-spacing:2px;}}\n\
         .banner .contact{{margin-top:10px;font-size:13px;opacity:0.9;}}\n\
         .stripe{{height:6px;background:{accent};}}\n\
         .page{{max-width:780px;margin:0 auto;padding:32px 56px;}}\n\
         h2{{font-size:14px;text-transform:uppercase;letter-spacing:2px;\
            color:{primary};margin:24px 0 10px;}}\n\
         .entry{{margin-bottom:13px;}}\n\
         .role{{font-weight:bold;font-size:15px;}}\n\
         .meta{{color:{secondary};font-size:12px;}}\n\
         .desc{{margin:4px 0 0;font-size:14px;line-height:1.5;}}",
        primary = c.primary,
        secondary = c.secondary,
        accent = c.accent,
        bg = c.background,
    );

    let mut body = String::new();
    body.push_str("<header class=\"banner\">\n");
    body.push_str(&format!("<h1>{}</h1>\n", display_name(&doc.personal_info)));
    let contact = contact_parts(&doc.personal_info);
    if !contact.is_empty() {
        body.push_str(&format!(
            "<div class=\"contact\">{}</div>\n",
            contact.join(" / ")
        ));
    }
    body.push_str("</header>\n<div class=\"stripe\"></div>\n<div class=\"page\">\n");
    if let Some(summary) = doc.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        body.push_str("<h2>Profile</h2>\n");
        body.push_str(&format!("<p class=\"desc\">{}</p>\n", esc(summary)));
    }
    if !doc.work_experience.is_empty() {
        body.push_str("<h2>Experience</h2>\n");
        for entry in doc.work_experience.values() {
            body.push_str("<div class=\"entry\">");
            body.push_str(&format!("<div class=\"role\">{}</div>", role_line(entry)));
            let dates = date_range(&entry.start_date, &entry.end_date);
            let location = field(&entry.location);
            let meta: Vec<String> = [dates, location]
                .into_iter()
                .filter(|v| !v.is_empty())
                .collect();
            if !meta.is_empty() {
                body.push_str(&format!("<div class=\"meta\">{}</div>", meta.join(" · ")));
            }
            if entry.description.is_some() {
                body.push_str(&format!(
                    "<p class=\"desc\">{}</p>",
                    field(&entry.description)
                ));
            }
            body.push_str("</div>\n");
        }
    }
    if !doc.education.is_empty() {
        body.push_str("<h2>Education</h2>\n");
        for entry in doc.education.values() {
            body.push_str("<div class=\"entry\">");
            body.push_str(&format!("<div class=\"role\">{}</div>", field(&entry.school)));
            let degree = degree_line(entry);
            let dates = date_range(&entry.start_date, &entry.end_date);
            let meta: Vec<String> = [degree, dates]
                .into_iter()
                .filter(|v| !v.is_empty())
                .collect();
            if !meta.is_empty() {
                body.push_str(&format!("<div class=\"meta\">{}</div>", meta.join(" · ")));
            }
            body.push_str("</div>\n");
        }
    }
    if !doc.skills.is_empty() {
        body.push_str("<h2>Skills</h2>\n");
        let skills: Vec<String> = doc.skills.iter().map(|s| esc(s)).collect();
        body.push_str(&format!("<p class=\"desc\">{}</p>\n", skills.join(", ")));
    }
    body.push_str("</div>");

    page(style, &css, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry};

    fn partial_doc() -> ResumeDocument {
        let mut doc = ResumeDocument {
            summary: Some("Engineer with a focus on <systems>".to_string()),
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            ..Default::default()
        };
        doc.personal_info.full_name = Some("Ada Lovelace".to_string());
        doc.personal_info.email = Some("ada@example.com".to_string());
        // entry with only some fields set
        doc.work_experience.insert(
            "w1".to_string(),
            ExperienceEntry {
                title: Some("Engineer".to_string()),
                start_date: Some("2019".to_string()),
                ..Default::default()
            },
        );
        doc.education.insert(
            "e1".to_string(),
            EducationEntry {
                school: Some("Somewhere".to_string()),
                ..Default::default()
            },
        );
        doc
    }

    #[test]
    fn test_every_builtin_renders_empty_document() {
        let doc = ResumeDocument::default();
        for template in catalog::builtin_templates() {
            let html = render_resume(&template, &doc);
            assert!(html.contains("<html"), "{} produced no markup", template.id);
            assert!(html.contains("Unnamed"), "{} missing placeholder", template.id);
        }
    }

    #[test]
    fn test_every_builtin_renders_partial_document() {
        let doc = partial_doc();
        for template in catalog::builtin_templates() {
            let html = render_resume(&template, &doc);
            assert!(html.contains("Ada Lovelace"), "{} missing name", template.id);
            assert!(html.contains("Rust"), "{} missing skills", template.id);
            assert!(
                html.contains("2019 – Present"),
                "{} missing open-ended date range",
                template.id
            );
        }
    }

    #[test]
    fn test_template_without_style_uses_baseline() {
        let template = Template {
            id: "styleless".to_string(),
            name: "Styleless".to_string(),
            category: "custom".to_string(),
            style: None,
            builtin: false,
        };
        let html = render_resume(&template, &ResumeDocument::default());
        assert!(html.contains("<html"));
    }

    #[test]
    fn test_user_content_is_escaped() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = Some("<script>alert(1)</script>".to_string());
        doc.skills.push("C++ & \"friends\"".to_string());
        for template in catalog::builtin_templates() {
            let html = render_resume(&template, &doc);
            assert!(!html.contains("<script>"), "{} did not escape", template.id);
            assert!(html.contains("&lt;script&gt;"));
            assert!(html.contains("C++ &amp; &quot;friends&quot;"));
        }
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let template = catalog::builtin("classic-navy").unwrap();
        let html = render_resume(&template, &ResumeDocument::default());
        assert!(!html.contains("Work Experience"));
        assert!(!html.contains("Education"));
        assert!(!html.contains("Skills"));
    }

    #[test]
    fn test_date_range_variants() {
        let some = |s: &str| Some(s.to_string());
        assert_eq!(date_range(&some("2019"), &some("2022")), "2019 – 2022");
        assert_eq!(date_range(&some("2019"), &None), "2019 – Present");
        assert_eq!(date_range(&None, &some("2022")), "2022");
        assert_eq!(date_range(&None, &None), "");
    }

    #[test]
    fn test_role_line_handles_missing_sides() {
        let entry = ExperienceEntry {
            company: Some("Acme".to_string()),
            ..Default::default()
        };
        assert_eq!(role_line(&entry), "Acme");
        assert_eq!(role_line(&ExperienceEntry::default()), "");
    }
}
