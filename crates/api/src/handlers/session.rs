//! Login and logout endpoints for the two shared-secret roles.
//!
//! A successful login answers with a `Set-Cookie` header establishing an
//! HTTP-only session marker (the role secret itself, see the access gate
//! module); logout answers with a cookie that expires immediately.

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use serde::Deserialize;
use slotbook_core::errors::BookingError;
use std::sync::Arc;

use crate::{
    handlers::MessageResponse,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub token: String,
}

#[axum::debug_handler]
pub async fn admin_login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.token != state.config.admin_token {
        return Err(AppError(BookingError::Unauthorized(
            "Invalid admin token".to_string(),
        )));
    }

    let cookie = auth::session_cookie(auth::ADMIN_COOKIE, &state.config.admin_token);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(MessageResponse::new("ok")),
    ))
}

#[axum::debug_handler]
pub async fn admin_logout() -> impl IntoResponse {
    let cookie = auth::clear_session_cookie(auth::ADMIN_COOKIE);
    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(MessageResponse::new("logged out")),
    )
}

#[axum::debug_handler]
pub async fn expert_login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.token != state.config.expert_token {
        return Err(AppError(BookingError::Unauthorized(
            "Invalid expert token".to_string(),
        )));
    }

    let cookie = auth::session_cookie(auth::EXPERT_COOKIE, &state.config.expert_token);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(MessageResponse::new("ok")),
    ))
}

#[axum::debug_handler]
pub async fn expert_logout() -> impl IntoResponse {
    let cookie = auth::clear_session_cookie(auth::EXPERT_COOKIE);
    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(MessageResponse::new("logged out")),
    )
}
