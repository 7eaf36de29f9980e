//! Axum route handlers for registration, login, logout, and the current user.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extract::Session;
use crate::auth::{clear_cookie, create_cookie, hash_password};
use crate::errors::AppError;
use crate::models::user::{SessionRow, User};
use crate::state::AppState;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/auth/register
///
/// Creates the account on first sign-up and opens a session. The email
/// matching `ADMIN_EMAIL` is granted admin rights.
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = request.name.trim();
    let email = request.email.trim().to_ascii_lowercase();

    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if !email.contains('@') {
        return Err(AppError::Validation("invalid email address".to_string()));
    }
    if request.password.len() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let user_id = Uuid::new_v4();
    let hash = hash_password(&request.password, &user_id)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("argon2: {e}")))?;

    let is_admin = state
        .config
        .admin_email
        .as_deref()
        .is_some_and(|admin| admin.eq_ignore_ascii_case(&email));

    let mut tx = state.db.begin().await?;

    let user: User = sqlx::query_as(
        r#"
        INSERT INTO users (id, name, email, password_hash, photo_url, is_admin)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(&email)
    .bind(hash.as_slice())
    .bind(&request.photo_url)
    .bind(is_admin)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(d) if d.constraint() == Some("users_email_key") => {
            AppError::Conflict("email is already registered".to_string())
        }
        _ => AppError::Database(e),
    })?;

    let session: SessionRow =
        sqlx::query_as("INSERT INTO sessions (user_id) VALUES ($1) RETURNING *")
            .bind(user.id)
            .fetch_one(&mut *tx)
            .await?;

    tx.commit().await?;

    tracing::info!("Registered user {} ({})", user.id, user.email);

    let cookie = create_cookie(session.id);
    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie.to_string())],
        Json(user),
    ))
}

/// POST /api/v1/auth/login
///
/// Verifies credentials, refreshes `last_login`, and opens a session. Unknown
/// email and wrong password return the same error.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = request.email.trim().to_ascii_lowercase();

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(&state.db)
        .await?;

    let Some(user) = user else {
        return Err(AppError::InvalidCredentials);
    };

    let hash = hash_password(&request.password, &user.id)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("argon2: {e}")))?;

    if hash.as_slice() != user.password_hash.as_slice() {
        return Err(AppError::InvalidCredentials);
    }

    let user: User = sqlx::query_as("UPDATE users SET last_login = now() WHERE id = $1 RETURNING *")
        .bind(user.id)
        .fetch_one(&state.db)
        .await?;

    let session: SessionRow =
        sqlx::query_as("INSERT INTO sessions (user_id) VALUES ($1) RETURNING *")
            .bind(user.id)
            .fetch_one(&state.db)
            .await?;

    let cookie = create_cookie(session.id);
    Ok(([(header::SET_COOKIE, cookie.to_string())], Json(user)))
}

/// POST /api/v1/auth/logout
///
/// Deletes the session and clears the cookie.
pub async fn handle_logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(session.id)
        .execute(&state.db)
        .await?;

    Ok((
        [(header::SET_COOKIE, clear_cookie().to_string())],
        StatusCode::NO_CONTENT,
    ))
}

/// GET /api/v1/auth/me
///
/// Returns the authenticated user.
pub async fn handle_me(session: Session) -> Json<User> {
    Json(session.user)
}
