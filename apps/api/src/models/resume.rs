use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub template_id: String,
    /// The full resume body, stored as one JSONB document and overwritten
    /// whole on save (last-write-wins).
    pub document: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing projection — everything except the document body.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeSummary {
    pub id: Uuid,
    pub name: String,
    pub template_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The resume body as edited by the user.
///
/// Every leaf field is optional: partially filled resumes must serialize,
/// deserialize, and render without errors. `#[serde(default)]` on the
/// container makes older or partial documents decode cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub summary: Option<String>,
    pub personal_info: PersonalInfo,
    /// Keyed by client-assigned entry id; BTreeMap keeps render order stable.
    pub work_experience: BTreeMap<String, ExperienceEntry>,
    pub education: BTreeMap<String, EducationEntry>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ResumeDocument {
    /// Decodes a stored document, tolerating missing fields. A document that
    /// fails to decode entirely (e.g. hand-edited garbage) renders as empty
    /// rather than failing the request.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            tracing::warn!("Stored resume document failed to decode, rendering empty: {e}");
            ResumeDocument::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_decodes_to_default() {
        let doc: ResumeDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, ResumeDocument::default());
    }

    #[test]
    fn test_partial_document_decodes() {
        let json = r#"{
            "summary": "Systems engineer",
            "work_experience": {
                "-N1": {"title": "Engineer", "company": "Acme"}
            },
            "skills": ["Rust"]
        }"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.summary.as_deref(), Some("Systems engineer"));
        assert_eq!(doc.skills, vec!["Rust"]);
        let entry = &doc.work_experience["-N1"];
        assert_eq!(entry.title.as_deref(), Some("Engineer"));
        assert!(entry.start_date.is_none());
        assert!(doc.personal_info.full_name.is_none());
    }

    #[test]
    fn test_document_round_trips() {
        let mut doc = ResumeDocument {
            summary: Some("Summary".to_string()),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            ..Default::default()
        };
        doc.education.insert(
            "e1".to_string(),
            EducationEntry {
                school: Some("MIT".to_string()),
                degree: Some("BSc".to_string()),
                ..Default::default()
            },
        );

        let value = serde_json::to_value(&doc).unwrap();
        let back: ResumeDocument = serde_json::from_value(value).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_from_value_tolerates_garbage() {
        let doc = ResumeDocument::from_value(&serde_json::json!({"skills": "not-a-list"}));
        assert_eq!(doc, ResumeDocument::default());
    }

    #[test]
    fn test_entry_order_follows_keys() {
        let json = r#"{"work_experience": {"b": {}, "a": {}, "c": {}}}"#;
        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = doc.work_experience.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
