use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use docbrief_core::auth;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub email: String,
}

/// OAuth2 password flow field names, form-encoded.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    auth::register(state.store.as_ref(), &req.email, &req.password)?;
    tracing::info!(email = %req.email, "registered user");
    Ok(Json(UserResponse { email: req.email }))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let signer = require_signer(&state)?;
    let access_token = auth::login(state.store.as_ref(), signer, &form.username, &form.password)?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

pub async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let email = authenticate_request(&state, &headers)?;
    Ok(Json(UserResponse { email }))
}

/// Resolve the request's bearer token to a registered email.
pub fn authenticate_request(state: &AppState, headers: &HeaderMap) -> Result<String, ApiError> {
    let signer = require_signer(state)?;
    let token = bearer_token(headers)?;
    Ok(auth::authenticate(state.store.as_ref(), signer, token)?)
}

fn require_signer(state: &AppState) -> Result<&docbrief_core::TokenSigner, ApiError> {
    // Auth routes are only mounted when a signer exists; this guards the
    // invariant rather than assuming it.
    state.signer.as_ref().ok_or_else(|| {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Authentication is disabled",
        )
    })
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "Not authenticated"))
}
