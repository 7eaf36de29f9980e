use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request},
};
use uuid::Uuid;

use crate::auth::COOKIE_NAME;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// Extracts the session and its user from the request's session cookie.
///
/// Missing or invalid cookies reject with `AppError::Unauthorized` (401).
///
/// ```ignore
/// async fn route(session: Session) {
///     println!("{:?}", session.user);
/// }
/// ```
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub user: User,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Session
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .headers
            .get_all(header::COOKIE)
            .into_iter()
            .filter_map(|value| value.to_str().ok());

        let session_cookie = cookies
            .flat_map(cookie::Cookie::split_parse)
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == COOKIE_NAME)
            .ok_or(AppError::Unauthorized)?;

        let session_id =
            Uuid::parse_str(session_cookie.value()).map_err(|_| AppError::Unauthorized)?;

        let state = AppState::from_ref(state);
        let user: Option<User> = sqlx::query_as(
            "SELECT u.* FROM users u JOIN sessions s ON s.user_id = u.id WHERE s.id = $1",
        )
        .bind(session_id)
        .fetch_optional(&state.db)
        .await?;

        let user = user.ok_or(AppError::Unauthorized)?;

        Ok(Session {
            id: session_id,
            user,
        })
    }
}

/// A session whose user has admin rights. Non-admin sessions reject with
/// `AppError::Forbidden` (403).
#[derive(Debug)]
pub struct AdminSession(pub Session);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        if !session.user.is_admin {
            return Err(AppError::Forbidden);
        }
        Ok(AdminSession(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use sqlx::postgres::PgPoolOptions;

    use crate::config::Config;
    use crate::llm_client::LlmClient;

    /// State with a lazy pool: the rejection branches under test return
    /// before any query, so no database is contacted.
    fn test_state() -> AppState {
        AppState {
            db: PgPoolOptions::new()
                .connect_lazy("postgres://localhost/unreachable")
                .unwrap(),
            llm: LlmClient::new("test-key".to_string()),
            config: Config {
                database_url: "postgres://localhost/unreachable".to_string(),
                anthropic_api_key: "test-key".to_string(),
                admin_email: None,
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    fn parts_with_cookie(cookie: Option<&str>) -> request::Parts {
        let mut builder = Request::builder().uri("/api/v1/resumes");
        if let Some(value) = cookie {
            builder = builder.header(header::COOKIE, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_missing_session_cookie_is_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_cookie(None);
        let err = Session::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_unrelated_cookie_is_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_cookie(Some("theme=dark"));
        let err = Session::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_malformed_session_id_is_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_cookie(Some("session=not-a-uuid"));
        let err = Session::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[tokio::test]
    async fn test_admin_extractor_without_cookie_is_unauthorized() {
        let state = test_state();
        let mut parts = parts_with_cookie(None);
        let err = AdminSession::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}
