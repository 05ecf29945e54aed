//! Enhancers — AI rewrites of a professional summary or a job description.
//!
//! Both share one pipeline: validate, render the prompt, call the generator,
//! clean the output. Only the prompt template differs.

pub mod handlers;
pub mod prompts;

use tracing::info;

use crate::enhance::prompts::{JOB_DESCRIPTION_PROMPT, PROFESSIONAL_SUMMARY_PROMPT};
use crate::errors::AppError;
use crate::llm_client::prompts::{render, PLAIN_TEXT_RULES};
use crate::llm_client::TextGenerator;
use crate::sanitize::clean_enhanced_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhancementKind {
    ProfessionalSummary,
    JobDescription,
}

impl EnhancementKind {
    fn template(self) -> &'static str {
        match self {
            EnhancementKind::ProfessionalSummary => PROFESSIONAL_SUMMARY_PROMPT,
            EnhancementKind::JobDescription => JOB_DESCRIPTION_PROMPT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnhancementKind::ProfessionalSummary => "professional summary",
            EnhancementKind::JobDescription => "job description",
        }
    }
}

pub fn build_prompt(kind: EnhancementKind, user_content: &str) -> String {
    // user content last so its text is never scanned for placeholders
    render(
        kind.template(),
        &[
            ("formatting_rules", PLAIN_TEXT_RULES),
            ("user_content", user_content),
        ],
    )
}

/// Rewrites `user_content` with the AI service and returns the cleaned text.
pub async fn enhance(
    kind: EnhancementKind,
    user_content: Option<&str>,
    llm: &dyn TextGenerator,
    model: &str,
) -> Result<String, AppError> {
    let user_content = user_content
        .filter(|s| !s.is_empty())
        .ok_or_else(AppError::missing_fields)?;

    let prompt = build_prompt(kind, user_content);
    let raw = llm.generate(model, &prompt).await?;
    let enhanced = clean_enhanced_text(&raw);

    info!(
        "Enhanced {}: {} chars in, {} chars out",
        kind.label(),
        user_content.len(),
        enhanced.len()
    );
    Ok(enhanced)
}
