//! Axum route handlers for the AI flows.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::ai::style_gen::{generate_template_style, improve_text};
use crate::auth::extract::{AdminSession, Session};
use crate::errors::AppError;
use crate::models::template::TemplateStyle;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateTemplateRequest {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveTextRequest {
    pub text: String,
    pub section: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImproveTextResponse {
    pub improved_text: String,
}

/// POST /api/v1/templates/generate (admin)
///
/// Generates a style for a prospective template. The admin reviews the result
/// and persists it via POST /api/v1/templates.
pub async fn handle_generate_template(
    State(state): State<AppState>,
    _admin: AdminSession,
    Json(request): Json<GenerateTemplateRequest>,
) -> Result<Json<TemplateStyle>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if request.category.trim().is_empty() {
        return Err(AppError::Validation("category cannot be empty".to_string()));
    }

    let style =
        generate_template_style(request.name.trim(), request.category.trim(), &state.llm).await?;

    Ok(Json(style))
}

/// POST /api/v1/ai/improve-text
///
/// Rewrites resume text (summary or an experience description).
pub async fn handle_improve_text(
    State(state): State<AppState>,
    _session: Session,
    Json(request): Json<ImproveTextRequest>,
) -> Result<Json<ImproveTextResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let improved = improve_text(&request.text, request.section.as_deref(), &state.llm).await?;

    Ok(Json(ImproveTextResponse {
        improved_text: improved,
    }))
}
