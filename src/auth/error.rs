// SPDX-License-Identifier: AGPL-3.0-or-later

//! Token issuance and verification failure taxonomy.

use thiserror::Error;

/// Why a presented token failed verification.
///
/// Every variant collapses to "unauthenticated" at the HTTP boundary. The
/// variants exist so the authentication layer can log expired tokens
/// (routine) apart from malformed or tampered ones (potentially adversarial)
/// without exception-driven control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The token cannot be parsed into the expected claim shape, or names
    /// an unexpected algorithm.
    #[error("token is malformed")]
    Malformed,

    /// The recomputed MAC does not match the embedded signature.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Well-signed, but its expiration is not after the verification time.
    #[error("token has expired")]
    Expired,
}

/// Why token issuance was refused.
#[derive(Debug, Error)]
pub enum IssueError {
    #[error("token subject must be non-empty")]
    EmptySubject,

    #[error("failed to encode token: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
}
