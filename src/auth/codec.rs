// SPDX-License-Identifier: AGPL-3.0-or-later

//! Issuing and verifying compact HS256 session tokens.
//!
//! The wire format is the standard three-segment compact JWS
//! (`header.payload.signature`, base64url) so existing client libraries
//! interoperate. Verification is a pure function of the token bytes, the
//! signing key, and the supplied clock; it keeps no state and consults no
//! other collaborator.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, Header, Validation};

use super::claims::Claims;
use super::error::{IssueError, VerifyError};
use super::keys::SigningKey;

/// Issues and verifies signed session tokens with a fixed validity duration.
pub struct TokenCodec {
    keys: SigningKey,
    ttl_secs: i64,
}

impl TokenCodec {
    pub fn new(keys: SigningKey, ttl_secs: i64) -> Self {
        Self { keys, ttl_secs }
    }

    /// Issue a token for `subject`, valid from `now` for the configured ttl.
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<String, IssueError> {
        if subject.is_empty() {
            return Err(IssueError::EmptySubject);
        }

        let iat = now.timestamp();
        let claims = Claims {
            sub: subject.to_owned(),
            iat,
            exp: iat + self.ttl_secs,
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            self.keys.encoding(),
        )?)
    }

    /// Verify `token` as of `now` and return its claims.
    ///
    /// The MAC is recomputed over `header.payload` and compared in constant
    /// time (via `jsonwebtoken`/`ring`) before any claim is trusted, so a
    /// tampered payload reports [`VerifyError::InvalidSignature`] rather
    /// than a silently altered subject. Expiry is then checked against the
    /// caller-supplied clock: a token is valid only while `exp` is strictly
    /// after `now`.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, VerifyError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is decided below against the injected clock.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "exp"]);

        let data = decode::<Claims>(token, self.keys.decoding(), &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => VerifyError::InvalidSignature,
                _ => VerifyError::Malformed,
            }
        })?;

        if data.claims.exp <= now.timestamp() {
            return Err(VerifyError::Expired);
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    const TTL: i64 = 3600;

    fn codec() -> TokenCodec {
        TokenCodec::new(SigningKey::from_bytes(b"0123456789abcdef0123456789abcdef"), TTL)
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn issue_then_verify_round_trips() {
        let codec = codec();
        let token = codec.issue("alice@example.com", at(1000)).unwrap();

        let claims = codec.verify(&token, at(1000)).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.iat, 1000);
        assert_eq!(claims.exp, 4600);
    }

    #[test]
    fn token_expires_after_ttl() {
        let codec = codec();
        let token = codec.issue("alice@example.com", at(1000)).unwrap();

        // Still valid one second before expiry.
        assert!(codec.verify(&token, at(4599)).is_ok());
        // Expired at the expiry instant and beyond.
        assert_eq!(codec.verify(&token, at(4600)), Err(VerifyError::Expired));
        assert_eq!(codec.verify(&token, at(4601)), Err(VerifyError::Expired));
    }

    #[test]
    fn flipped_signature_byte_is_invalid() {
        let codec = codec();
        let token = codec.issue("alice@example.com", at(1000)).unwrap();

        let (rest, signature) = token.rsplit_once('.').unwrap();
        let mut sig: Vec<u8> = signature.bytes().collect();
        sig[0] = if sig[0] == b'A' { b'B' } else { b'A' };
        let tampered = format!("{rest}.{}", String::from_utf8(sig).unwrap());

        assert_eq!(
            codec.verify(&tampered, at(1000)),
            Err(VerifyError::InvalidSignature)
        );
    }

    #[test]
    fn tampered_payload_is_invalid_signature_not_altered_subject() {
        let codec = codec();
        let token = codec.issue("alice@example.com", at(1000)).unwrap();

        let mut segments: Vec<&str> = token.split('.').collect();
        let payload = String::from_utf8(URL_SAFE_NO_PAD.decode(segments[1]).unwrap()).unwrap();
        let forged = payload.replace("alice@example.com", "mallory@example.com");
        let forged_b64 = URL_SAFE_NO_PAD.encode(forged.as_bytes());
        segments[1] = &forged_b64;
        let tampered = segments.join(".");

        assert_eq!(
            codec.verify(&tampered, at(1000)),
            Err(VerifyError::InvalidSignature)
        );
    }

    #[test]
    fn garbage_tokens_are_malformed() {
        let codec = codec();
        for garbage in ["", "garbage", "a.b", "a.b.c", "...."] {
            assert_eq!(
                codec.verify(garbage, at(1000)),
                Err(VerifyError::Malformed),
                "token {garbage:?}"
            );
        }
    }

    #[test]
    fn unexpected_algorithm_is_malformed() {
        let codec = codec();
        // Hand-rolled token claiming the "none" algorithm.
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD
            .encode(br#"{"sub":"alice@example.com","iat":1000,"exp":4600}"#);
        let token = format!("{header}.{payload}.");

        assert_eq!(codec.verify(&token, at(1000)), Err(VerifyError::Malformed));
    }

    #[test]
    fn token_signed_with_other_key_is_invalid() {
        let codec = codec();
        let other = TokenCodec::new(
            SigningKey::from_bytes(b"ffffffffffffffffffffffffffffffff"),
            TTL,
        );
        let token = other.issue("alice@example.com", at(1000)).unwrap();

        assert_eq!(
            codec.verify(&token, at(1000)),
            Err(VerifyError::InvalidSignature)
        );
    }

    #[test]
    fn distinct_subjects_produce_distinct_payloads() {
        let codec = codec();
        let alice = codec.issue("alice@example.com", at(1000)).unwrap();
        let bob = codec.issue("bob@example.com", at(1000)).unwrap();

        let alice_payload = alice.split('.').nth(1).unwrap().to_owned();
        let bob_payload = bob.split('.').nth(1).unwrap().to_owned();
        assert_ne!(alice_payload, bob_payload);

        assert_eq!(codec.verify(&alice, at(1000)).unwrap().sub, "alice@example.com");
        assert_eq!(codec.verify(&bob, at(1000)).unwrap().sub, "bob@example.com");
    }

    #[test]
    fn empty_subject_is_refused() {
        let err = codec().issue("", at(1000)).unwrap_err();
        assert!(matches!(err, IssueError::EmptySubject));
    }

    #[test]
    fn issuance_is_deterministic() {
        let codec = codec();
        let first = codec.issue("alice@example.com", at(1000)).unwrap();
        let second = codec.issue("alice@example.com", at(1000)).unwrap();
        assert_eq!(first, second);
    }
}
