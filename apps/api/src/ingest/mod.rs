//! Resume ingestion — raw resume text in, structured record out.
//!
//! Pipeline: prompt → generate → strip fences → parse JSON → sanitize every
//! string → cast to `ExtractedResume` → persist. Nothing is written unless
//! every earlier step succeeded.

pub mod handlers;
pub mod prompts;
pub mod store;

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest::prompts::RESUME_EXTRACTION_PROMPT;
use crate::ingest::store::ResumeStore;
use crate::llm_client::prompts::{render, EXTRACTED_TEXT_RULES};
use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::models::resume::ExtractedResume;
use crate::sanitize::sanitize_value;

pub const DEFAULT_TITLE: &str = "Untitled Resume";

pub struct IngestParams<'a> {
    pub owner_id: Uuid,
    pub title: Option<&'a str>,
    pub resume_text: Option<&'a str>,
    pub model: &'a str,
}

pub fn build_prompt(resume_text: &str) -> String {
    render(
        RESUME_EXTRACTION_PROMPT,
        &[
            ("formatting_rules", EXTRACTED_TEXT_RULES),
            ("resume_text", resume_text),
        ],
    )
}

/// Turns raw AI output into a sanitized `ExtractedResume`.
pub fn parse_extraction(raw: &str) -> Result<ExtractedResume, AppError> {
    let body = strip_json_fences(raw);
    let mut value: Value = serde_json::from_str(body)
        .map_err(|e| AppError::Parse(format!("AI response is not valid JSON: {e}")))?;

    if !value.is_object() {
        return Err(AppError::Parse("AI response is not a JSON object".to_string()));
    }
    sanitize_value(&mut value);

    serde_json::from_value(value)
        .map_err(|e| AppError::Parse(format!("AI response does not fit the resume shape: {e}")))
}

/// Runs the full ingestion pipeline and returns the new record id.
pub async fn ingest_resume(
    llm: &dyn TextGenerator,
    store: &dyn ResumeStore,
    params: IngestParams<'_>,
) -> Result<Uuid, AppError> {
    let IngestParams {
        owner_id,
        title,
        resume_text,
        model,
    } = params;

    let resume_text = resume_text
        .filter(|s| !s.is_empty())
        .ok_or_else(AppError::missing_fields)?;
    let title = title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_TITLE);

    let raw = llm.generate(model, &build_prompt(resume_text)).await?;
    let fields = parse_extraction(&raw)?;

    info!(
        "Extracted resume for {owner_id}: {} skills, {} experience, {} projects, {} education",
        fields.skills.len(),
        fields.experience.len(),
        fields.project.len(),
        fields.education.len()
    );

    store.create_resume(owner_id, title, &fields).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTRACTION: &str = r#"{
        "professional_summary": "Full-stack   engineer 🚀",
        "skills": ["Node.js", "Front-end"],
        "personal_info": {"full_name": "Jane — Doe", "email": "jane@example.com"},
        "experience": [{"company": "Acme", "position": "Lead", "end_date": "Present"}],
        "project": [],
        "education": []
    }"#;

    #[test]
    fn test_fenced_and_bare_parse_identically() {
        let bare = parse_extraction(EXTRACTION).unwrap();
        let tagged = parse_extraction(&format!("```json\n{EXTRACTION}\n```")).unwrap();
        let untagged = parse_extraction(&format!("  ```\n{EXTRACTION}\n```  ")).unwrap();
        assert_eq!(bare, tagged);
        assert_eq!(bare, untagged);
    }

    #[test]
    fn test_parsed_fields_are_sanitized() {
        let resume = parse_extraction(EXTRACTION).unwrap();
        assert_eq!(resume.professional_summary, "Full stack engineer");
        assert_eq!(resume.skills, vec!["Node.js", "Front end"]);
        assert_eq!(resume.personal_info.full_name, "Jane Doe");
        assert!(!resume.experience[0].is_current);
    }

    #[test]
    fn test_numeric_text_fields_are_sanitized() {
        let resume = parse_extraction(
            r#"{"personal_info": {"phone": -5550100}, "education": [{"gpa": 1e-5}, {"gpa": -3.5}]}"#,
        )
        .unwrap();
        assert_eq!(resume.personal_info.phone, "5550100");
        for education in &resume.education {
            assert!(!education.gpa.contains('-'), "gpa kept a dash: {}", education.gpa);
            assert!(!education.gpa.is_empty());
        }
        assert_eq!(resume.education[1].gpa, "3.5");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_extraction("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_non_object_json_is_parse_error() {
        let err = parse_extraction("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = build_prompt("Jane Doe\nSoftware Engineer");
        assert!(prompt.contains("Resume text:\nJane Doe\nSoftware Engineer"));
        assert!(prompt.contains("\"is_current\": false"));
        assert!(prompt.contains("NO hyphens or dashes in the extracted content"));
    }
}
