pub mod handlers;

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;

/// Fetches a resume and enforces ownership: unknown id → 404, another user's
/// resume → 403.
pub async fn fetch_owned(db: &PgPool, resume_id: Uuid, user_id: Uuid) -> Result<ResumeRow, AppError> {
    let resume: Option<ResumeRow> = sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(db)
        .await?;

    let resume = resume.ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    if resume.user_id != user_id {
        return Err(AppError::Forbidden);
    }

    Ok(resume)
}
