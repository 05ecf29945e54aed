use async_trait::async_trait;
use chrono::Utc;
use sqlx::{types::Json, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ExtractedResume;

/// Persistence seam for ingested resumes. Carried in `AppState` as `Arc<dyn ResumeStore>`.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Writes a new record and returns its generated id.
    async fn create_resume(
        &self,
        owner_id: Uuid,
        title: &str,
        fields: &ExtractedResume,
    ) -> Result<Uuid, AppError>;
}

/// PostgreSQL-backed store. Nested sections live in JSONB columns.
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn create_resume(
        &self,
        owner_id: Uuid,
        title: &str,
        fields: &ExtractedResume,
    ) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO resumes
                (id, user_id, title, professional_summary, skills, personal_info,
                 experience, project, education, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(title)
        .bind(&fields.professional_summary)
        .bind(&fields.skills)
        .bind(Json(&fields.personal_info))
        .bind(Json(&fields.experience))
        .bind(Json(&fields.project))
        .bind(Json(&fields.education))
        .bind(now)
        .execute(&self.pool)
        .await?;

        info!("Created resume {id} for user {owner_id}");
        Ok(id)
    }
}
