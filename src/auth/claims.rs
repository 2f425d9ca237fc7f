// SPDX-License-Identifier: AGPL-3.0-or-later

//! Token claims and the per-request authenticated identity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Claims carried by a session token.
///
/// Created only at issuance and never mutated; a refreshed session is a new
/// token. Timestamps are Unix-epoch seconds, and `iat <= exp` always holds
/// for tokens this service issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the canonical login email.
    pub sub: String,
    /// Issued-at timestamp.
    pub iat: i64,
    /// Expiration timestamp (`iat + ttl`).
    pub exp: i64,
}

/// Verified identity attached to one in-flight request.
///
/// Inserted into the request extensions by the authentication layer and read
/// by the [`CurrentUser`](super::CurrentUser) extractor. Scoped to a single
/// request; never shared across requests or persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Stable account id.
    pub user_id: Uuid,
    /// Canonical login email (the token subject).
    pub email: String,
    /// Display name.
    pub name: String,
}
