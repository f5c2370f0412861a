//! Authentication service routes

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Utc};
use common::prompts::GENERATION_PROMPT;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{AuthError, AuthResult},
    jwt::SessionClaims,
    state::AppState,
    validation::{validate_email, validate_user_id},
};

/// Request for session creation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub user_id: String,
    pub email: String,
}

/// Public view of an active session
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user_id: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl From<SessionClaims> for SessionResponse {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            expires_at: claims.expires_at,
        }
    }
}

/// Create the router for the authentication service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/auth/session",
            get(current_session)
                .post(create_session)
                .delete(delete_session),
        )
        .route("/prompts/generation", get(generation_prompt))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "auth-service"
    }))
}

/// Issue a session cookie for an already authenticated user
pub async fn create_session(
    State(state): State<AppState>,
    mut jar: CookieJar,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, CookieJar, Json<SessionResponse>)> {
    let Json(payload) = payload?;

    validate_user_id(&payload.user_id).map_err(AuthError::BadRequest)?;
    validate_email(&payload.email).map_err(AuthError::BadRequest)?;

    info!("Session request for user: {}", payload.user_id);

    let claims = state
        .session_manager
        .create_session(&mut jar, &payload.user_id, &payload.email)?;

    Ok((StatusCode::CREATED, jar, Json(claims.into())))
}

/// Return the session carried by the request cookie
pub async fn current_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AuthResult<Json<SessionResponse>> {
    let claims = state
        .session_manager
        .get_session(&jar)
        .ok_or(AuthError::Unauthorized)?;

    Ok(Json(claims.into()))
}

/// Clear the session cookie
pub async fn delete_session(
    State(state): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        state.session_manager.delete_session(jar),
    )
}

/// Serve the component generation prompt
pub async fn generation_prompt() -> &'static str {
    GENERATION_PROMPT
}
