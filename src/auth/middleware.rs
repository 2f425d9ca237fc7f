// SPDX-License-Identifier: AGPL-3.0-or-later

//! Per-request authentication layer.
//!
//! Runs exactly once per inbound request: extracts the bearer credential,
//! verifies it with the [`TokenCodec`](super::TokenCodec), resolves the
//! subject against the identity store, and attaches an
//! [`AuthenticatedUser`] to the request extensions for downstream handlers.
//!
//! No failure here rejects the request. A missing header, a bad token, or a
//! since-deleted account all mean the request proceeds unauthenticated;
//! rejecting it is an authorization decision made downstream (see
//! [`CurrentUser`](super::CurrentUser)).

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use super::claims::AuthenticatedUser;
use super::error::VerifyError;
use crate::state::AppState;

/// Authentication middleware, installed with
/// `axum::middleware::from_fn_with_state`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(user) = resolve_user(request.headers(), &state).await {
        request.extensions_mut().insert(user);
    }
    next.run(request).await
}

/// Extract the token from a `Bearer` Authorization header.
///
/// A missing header, an unreadable value, or a different scheme means "no
/// credential supplied", not an error.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

async fn resolve_user(headers: &HeaderMap, state: &AppState) -> Option<AuthenticatedUser> {
    let token = bearer_token(headers)?;

    let claims = match state.tokens.verify(token, Utc::now()) {
        Ok(claims) => claims,
        Err(VerifyError::Expired) => {
            // Routine: clients are expected to re-authenticate.
            tracing::debug!("rejected expired session token");
            return None;
        }
        Err(e) => {
            // Malformed or forged tokens are worth a louder note.
            tracing::warn!(error = %e, "rejected session token");
            return None;
        }
    };

    let store = state.store.read().await;
    let Some(user) = store.find_by_email(&claims.sub) else {
        // The account may have been removed after issuance; authorization
        // will deny access downstream.
        tracing::debug!(subject = %claims.sub, "token subject no longer exists");
        return None;
    };

    Some(AuthenticatedUser {
        user_id: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
    })
}
