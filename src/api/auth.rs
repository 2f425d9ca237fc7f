// SPDX-License-Identifier: AGPL-3.0-or-later

//! Registration and login: the issuance path for session tokens.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::{
    error::ApiError,
    models::{AuthResponse, LoginRequest, RegisterRequest},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    tag = "Auth",
    responses(
        (status = 201, body = AuthResponse),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Invalid registration data")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    request.validate()?;

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::internal(format!("Failed to hash password: {e}")))?;

    let user = state
        .store
        .write()
        .await
        .create_user(request.name.trim(), &request.email, password_hash)?;

    let token = issue_for(&state, &user.email)?;
    Ok((StatusCode::CREATED, Json(AuthResponse { token })))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    request.validate()?;

    // One generic rejection for unknown email and wrong password; anything
    // more specific would confirm which addresses have accounts.
    let user = state
        .store
        .read()
        .await
        .find_by_email(&request.email)
        .cloned()
        .ok_or_else(ApiError::unauthorized)?;

    let password_ok = bcrypt::verify(&request.password, &user.password_hash)
        .map_err(|e| ApiError::internal(format!("Failed to verify password: {e}")))?;
    if !password_ok {
        return Err(ApiError::unauthorized());
    }

    let token = issue_for(&state, &user.email)?;
    Ok(Json(AuthResponse { token }))
}

fn issue_for(state: &AppState, email: &str) -> Result<String, ApiError> {
    state
        .tokens
        .issue(email, Utc::now())
        .map_err(|e| ApiError::internal(format!("Failed to issue token: {e}")))
}
