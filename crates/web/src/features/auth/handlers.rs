use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::{AdminIdentity, bearer_token};
use crate::state::AppState;

/// Credentials for the admin login.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// A successful login, carrying the bearer token for admin writes.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub token: Uuid,
    pub email: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = SessionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    // Wrong credentials are an expected outcome with a user-facing
    // message, distinct from transport or storage failures.
    match state.sessions.login(&req.email, &req.password) {
        Some(session) => Ok(Json(SessionResponse {
            token: session.token,
            email: session.email,
        })
        .into_response()),
        None => Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid email or password" })),
        )
            .into_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Logged out; revoking an unknown token is a no-op")
    ),
    tag = "auth"
)]
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = bearer_token(&headers) {
        state.sessions.logout(token);
    }

    StatusCode::NO_CONTENT.into_response()
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current identity, or null when not logged in", body = AdminIdentity)
    ),
    tag = "auth"
)]
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Option<AdminIdentity>> {
    let identity = bearer_token(&headers).and_then(|token| state.sessions.identity(token));

    Json(identity)
}
