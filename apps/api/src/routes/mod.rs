pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;
use crate::{admin, ai, auth, render, resumes, templates};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/register", post(auth::handlers::handle_register))
        .route("/api/v1/auth/login", post(auth::handlers::handle_login))
        .route("/api/v1/auth/logout", post(auth::handlers::handle_logout))
        .route("/api/v1/auth/me", get(auth::handlers::handle_me))
        // Resumes
        .route(
            "/api/v1/resumes",
            get(resumes::handlers::handle_list_resumes).post(resumes::handlers::handle_create_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handlers::handle_get_resume)
                .put(resumes::handlers::handle_update_resume)
                .delete(resumes::handlers::handle_delete_resume),
        )
        .route(
            "/api/v1/resumes/:id/preview",
            get(render::handlers::handle_preview),
        )
        .route(
            "/api/v1/resumes/:id/export.pdf",
            get(render::handlers::handle_export_pdf),
        )
        // Templates
        .route(
            "/api/v1/templates",
            get(templates::handlers::handle_list_templates)
                .post(templates::handlers::handle_create_template),
        )
        .route(
            "/api/v1/templates/generate",
            post(ai::handlers::handle_generate_template),
        )
        .route(
            "/api/v1/templates/:id",
            delete(templates::handlers::handle_delete_template),
        )
        // AI
        .route("/api/v1/ai/improve-text", post(ai::handlers::handle_improve_text))
        // Admin
        .route("/api/v1/admin/users", get(admin::handlers::handle_list_users))
        .route(
            "/api/v1/admin/users/:id",
            delete(admin::handlers::handle_delete_user),
        )
        .with_state(state)
}
