//! Axum route handlers for the template catalog.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::auth::extract::{AdminSession, Session};
use crate::errors::AppError;
use crate::models::template::{Template, TemplateRow, TemplateStyle};
use crate::state::AppState;
use crate::templates::catalog;
use crate::templates::slugify;

#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    /// Defaults to a slug of `name`.
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub style: TemplateStyle,
}

/// GET /api/v1/templates
///
/// Returns the merged catalog: built-ins plus persisted admin templates,
/// with persisted rows shadowing built-ins on id collision.
pub async fn handle_list_templates(
    State(state): State<AppState>,
    _session: Session,
) -> Result<Json<Vec<Template>>, AppError> {
    let rows: Vec<TemplateRow> = sqlx::query_as("SELECT * FROM templates ORDER BY created_at")
        .fetch_all(&state.db)
        .await?;

    let custom = rows.into_iter().map(Template::from_row).collect();
    Ok(Json(catalog::merge_catalog(custom)))
}

/// POST /api/v1/templates (admin)
///
/// Persists a custom template, typically with an AI-generated style.
pub async fn handle_create_template(
    State(state): State<AppState>,
    _admin: AdminSession,
    Json(request): Json<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<Template>), AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let id = match request.id {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => slugify(name),
    };
    if id.is_empty() {
        return Err(AppError::Validation(
            "template name produces an empty id".to_string(),
        ));
    }

    let style = serde_json::to_value(&request.style).map_err(|e| AppError::Internal(e.into()))?;

    let row: TemplateRow = sqlx::query_as(
        r#"
        INSERT INTO templates (id, name, category, style)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&id)
    .bind(name)
    .bind(request.category.trim())
    .bind(style)
    .fetch_one(&state.db)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(d) if d.constraint() == Some("templates_pkey") => {
            AppError::Conflict(format!("template '{id}' already exists"))
        }
        _ => AppError::Database(e),
    })?;

    tracing::info!("Template '{}' added to catalog", row.id);

    Ok((StatusCode::CREATED, Json(Template::from_row(row))))
}

/// DELETE /api/v1/templates/:id (admin)
///
/// Removes a custom template. Built-ins live in code and cannot be deleted.
pub async fn handle_delete_template(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(template_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM templates WHERE id = $1")
        .bind(&template_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        if catalog::is_builtin(&template_id) {
            return Err(AppError::Validation(
                "built-in templates cannot be deleted".to_string(),
            ));
        }
        return Err(AppError::NotFound(format!(
            "Template '{template_id}' not found"
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
