// SPDX-License-Identifier: AGPL-3.0-or-later

//! Signing key material for HS256 session tokens.

use base64ct::{Base64, Encoding};
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::config::ConfigError;

/// Minimum secret size for HMAC-SHA-256: 256 bits.
pub const MIN_KEY_BYTES: usize = 32;

/// Symmetric signing key shared by token issuance and verification.
///
/// Loaded once at startup from the base64-encoded configuration secret and
/// held immutably for the process lifetime. Concurrent readers need no
/// synchronization.
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Decode the configured secret and enforce the minimum key size.
    ///
    /// An undersized key is a hard failure: HS256 with fewer than 256 bits
    /// of key material is a security defect, not a degraded mode.
    pub fn from_base64(material: &str) -> Result<Self, ConfigError> {
        let bytes =
            Base64::decode_vec(material.trim()).map_err(|_| ConfigError::SecretNotBase64)?;

        if bytes.len() < MIN_KEY_BYTES {
            return Err(ConfigError::SecretTooShort { got: bytes.len() });
        }

        Ok(Self::from_bytes(&bytes))
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    pub(crate) fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

// Key bytes must never end up in logs.
impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(..)")
    }
}
