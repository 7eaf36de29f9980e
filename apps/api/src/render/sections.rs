//! Flattens a resume document into plain-text sections for PDF export.
//! Unlike the HTML layouts, nothing here is escaped — printpdf draws text
//! verbatim.

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeDocument};

#[derive(Debug, Clone)]
pub struct SectionItem {
    pub headline: String,
    pub meta: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResumeSections {
    pub name: String,
    pub contact: Option<String>,
    pub summary: Option<String>,
    pub experience: Vec<SectionItem>,
    pub education: Vec<SectionItem>,
    pub skills: Option<String>,
}

fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn date_range(start: &Option<String>, end: &Option<String>) -> Option<String> {
    match (nonempty(start), nonempty(end)) {
        (Some(s), Some(e)) => Some(format!("{s} – {e}")),
        (Some(s), None) => Some(format!("{s} – Present")),
        (None, Some(e)) => Some(e.to_string()),
        (None, None) => None,
    }
}

fn experience_item(entry: &ExperienceEntry) -> SectionItem {
    let headline = match (nonempty(&entry.title), nonempty(&entry.company)) {
        (Some(t), Some(c)) => format!("{t} — {c}"),
        (Some(t), None) => t.to_string(),
        (None, Some(c)) => c.to_string(),
        (None, None) => String::new(),
    };
    let meta = match (date_range(&entry.start_date, &entry.end_date), nonempty(&entry.location)) {
        (Some(d), Some(l)) => Some(format!("{d} · {l}")),
        (Some(d), None) => Some(d),
        (None, Some(l)) => Some(l.to_string()),
        (None, None) => None,
    };
    SectionItem {
        headline,
        meta,
        body: nonempty(&entry.description).map(str::to_string),
    }
}

fn education_item(entry: &EducationEntry) -> SectionItem {
    let degree = match (nonempty(&entry.degree), nonempty(&entry.field)) {
        (Some(d), Some(f)) => Some(format!("{d} in {f}")),
        (Some(d), None) => Some(d.to_string()),
        (None, Some(f)) => Some(f.to_string()),
        (None, None) => None,
    };
    let meta = match (degree, date_range(&entry.start_date, &entry.end_date)) {
        (Some(deg), Some(d)) => Some(format!("{deg} · {d}")),
        (Some(deg), None) => Some(deg),
        (None, Some(d)) => Some(d),
        (None, None) => None,
    };
    SectionItem {
        headline: nonempty(&entry.school).unwrap_or_default().to_string(),
        meta,
        body: None,
    }
}

pub fn resume_sections(doc: &ResumeDocument) -> ResumeSections {
    let contact_parts: Vec<&str> = [
        &doc.personal_info.email,
        &doc.personal_info.phone,
        &doc.personal_info.location,
        &doc.personal_info.website,
    ]
    .into_iter()
    .filter_map(nonempty)
    .collect();

    ResumeSections {
        name: nonempty(&doc.personal_info.full_name)
            .unwrap_or("Unnamed")
            .to_string(),
        contact: if contact_parts.is_empty() {
            None
        } else {
            Some(contact_parts.join("  |  "))
        },
        summary: nonempty(&doc.summary).map(str::to_string),
        experience: doc.work_experience.values().map(experience_item).collect(),
        education: doc.education.values().map(education_item).collect(),
        skills: if doc.skills.is_empty() {
            None
        } else {
            Some(doc.skills.join(", "))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_flattens_to_placeholders() {
        let sections = resume_sections(&ResumeDocument::default());
        assert_eq!(sections.name, "Unnamed");
        assert!(sections.contact.is_none());
        assert!(sections.summary.is_none());
        assert!(sections.experience.is_empty());
        assert!(sections.skills.is_none());
    }

    #[test]
    fn test_experience_item_with_partial_fields() {
        let item = experience_item(&ExperienceEntry {
            company: Some("Acme".to_string()),
            start_date: Some("2020".to_string()),
            ..Default::default()
        });
        assert_eq!(item.headline, "Acme");
        assert_eq!(item.meta.as_deref(), Some("2020 – Present"));
        assert!(item.body.is_none());
    }

    #[test]
    fn test_education_item_combines_degree_and_dates() {
        let item = education_item(&EducationEntry {
            school: Some("MIT".to_string()),
            degree: Some("BSc".to_string()),
            field: Some("CS".to_string()),
            start_date: Some("2015".to_string()),
            end_date: Some("2019".to_string()),
        });
        assert_eq!(item.headline, "MIT");
        assert_eq!(item.meta.as_deref(), Some("BSc in CS · 2015 – 2019"));
    }

    #[test]
    fn test_whitespace_only_fields_count_as_empty() {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = Some("   ".to_string());
        doc.summary = Some("".to_string());
        let sections = resume_sections(&doc);
        assert_eq!(sections.name, "Unnamed");
        assert!(sections.summary.is_none());
    }
}
