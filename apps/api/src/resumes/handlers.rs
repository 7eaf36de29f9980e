//! Axum route handlers for the resume CRUD API. All routes are
//! session-scoped and owner-only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extract::Session;
use crate::errors::AppError;
use crate::models::resume::{ResumeDocument, ResumeRow, ResumeSummary};
use crate::resumes::fetch_owned;
use crate::state::AppState;
use crate::templates::catalog;

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub name: String,
    pub template_id: Option<String>,
}

/// Full-document save payload: the stored row is overwritten whole,
/// last-write-wins.
#[derive(Debug, Deserialize)]
pub struct UpdateResumeRequest {
    pub name: String,
    pub template_id: String,
    pub document: ResumeDocument,
}

/// GET /api/v1/resumes
///
/// Lists the caller's resumes, most recently edited first.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<ResumeSummary>>, AppError> {
    let resumes: Vec<ResumeSummary> = sqlx::query_as(
        "SELECT id, name, template_id, created_at, updated_at
         FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC",
    )
    .bind(session.user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(resumes))
}

/// POST /api/v1/resumes
///
/// Creates a resume with an empty document.
pub async fn handle_create_resume(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let template_id = request
        .template_id
        .unwrap_or_else(|| catalog::DEFAULT_TEMPLATE_ID.to_string());

    let document = serde_json::to_value(ResumeDocument::default())
        .map_err(|e| AppError::Internal(e.into()))?;

    let resume: ResumeRow = sqlx::query_as(
        r#"
        INSERT INTO resumes (user_id, name, template_id, document)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(session.user.id)
    .bind(name)
    .bind(&template_id)
    .bind(document)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    session: Session,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = fetch_owned(&state.db, resume_id, session.user.id).await?;
    Ok(Json(resume))
}

/// PUT /api/v1/resumes/:id
///
/// Overwrites the whole resume record with the submitted document.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    session: Session,
    Path(resume_id): Path<Uuid>,
    Json(request): Json<UpdateResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    fetch_owned(&state.db, resume_id, session.user.id).await?;

    let document =
        serde_json::to_value(&request.document).map_err(|e| AppError::Internal(e.into()))?;

    let resume: ResumeRow = sqlx::query_as(
        r#"
        UPDATE resumes
        SET name = $1, template_id = $2, document = $3, updated_at = now()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(&request.template_id)
    .bind(document)
    .bind(resume_id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(resume))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    session: Session,
    Path(resume_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    fetch_owned(&state.db, resume_id, session.user.id).await?;

    sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(resume_id)
        .execute(&state.db)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
