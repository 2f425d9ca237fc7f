// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Authentication
//!
//! Stateless session-token authentication: a symmetric [`SigningKey`] loaded
//! once at startup, a [`TokenCodec`] that issues and verifies compact HS256
//! tokens, and a per-request layer that attaches an [`AuthenticatedUser`] to
//! the request context before business logic runs.
//!
//! Verification outcomes are data, not exceptions: [`VerifyError`]
//! distinguishes malformed, forged, and expired tokens so the layer can log
//! them apart, while the HTTP surface collapses every failure to a generic
//! 401. There is no server-side session state and no revocation store;
//! expiry is the sole termination mechanism for a token.

pub mod claims;
pub mod codec;
pub mod error;
pub mod extractor;
pub mod keys;
pub mod middleware;

pub use claims::{AuthenticatedUser, Claims};
pub use codec::TokenCodec;
pub use error::{IssueError, VerifyError};
pub use extractor::CurrentUser;
pub use keys::SigningKey;
pub use middleware::auth_middleware;
