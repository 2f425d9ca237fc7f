// SPDX-License-Identifier: AGPL-3.0-or-later

//! Extractor for handlers that require an authenticated caller.
//!
//! ```rust,ignore
//! async fn my_handler(CurrentUser(user): CurrentUser) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::claims::AuthenticatedUser;
use crate::error::ApiError;

/// Requires the identity attached by the authentication layer.
///
/// Verification happened once, in the middleware; this extractor only reads
/// the request context. The rejection is a generic 401: whether the token
/// was absent, expired, or forged is logged by the layer but never echoed
/// to the caller.
pub struct CurrentUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(ApiError::unauthorized)
    }
}
