//! Axum route handlers for resume preview and export.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
};
use uuid::Uuid;

use crate::auth::extract::Session;
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::render::{pdf::render_pdf, render_resume};
use crate::resumes::fetch_owned;
use crate::state::AppState;
use crate::templates::catalog;

/// GET /api/v1/resumes/:id/preview
///
/// Renders the resume with its template and returns the HTML markup.
pub async fn handle_preview(
    State(state): State<AppState>,
    session: Session,
    Path(resume_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let resume = fetch_owned(&state.db, resume_id, session.user.id).await?;
    let template = catalog::resolve(&state.db, &resume.template_id).await?;
    let document = ResumeDocument::from_value(&resume.document);

    Ok(Html(render_resume(&template, &document)))
}

/// GET /api/v1/resumes/:id/export.pdf
///
/// Generates the PDF server-side and streams it as a download.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    session: Session,
    Path(resume_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let resume = fetch_owned(&state.db, resume_id, session.user.id).await?;
    let template = catalog::resolve(&state.db, &resume.template_id).await?;
    let document = ResumeDocument::from_value(&resume.document);

    let bytes = tokio::task::spawn_blocking(move || render_pdf(&template, &document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task panicked: {e}")))?
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    let slug = crate::templates::slugify(&resume.name);
    let filename = if slug.is_empty() {
        "resume.pdf".to_string()
    } else {
        format!("{slug}.pdf")
    };
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}
