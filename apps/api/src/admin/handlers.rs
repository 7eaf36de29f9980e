//! Axum route handlers for the admin user dashboard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::auth::extract::AdminSession;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// GET /api/v1/admin/users
pub async fn handle_list_users(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> Result<Json<Vec<User>>, AppError> {
    let users: Vec<User> = sqlx::query_as("SELECT * FROM users ORDER BY created_at")
        .fetch_all(&state.db)
        .await?;

    Ok(Json(users))
}

/// DELETE /api/v1/admin/users/:id
///
/// Deletes a user; their resumes and sessions go with them (FK cascade).
pub async fn handle_delete_user(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if user_id == session.user.id {
        return Err(AppError::Validation(
            "cannot delete your own account".to_string(),
        ));
    }

    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("User {user_id} not found")));
    }

    tracing::info!("Admin {} deleted user {}", session.user.id, user_id);

    Ok(StatusCode::NO_CONTENT)
}
