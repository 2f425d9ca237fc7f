// SPDX-License-Identifier: AGPL-3.0-or-later

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup. A missing or
//! invalid signing secret aborts the process before the listener binds; it
//! must never degrade to a server that treats everyone as unauthenticated.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JWT_SECRET` | Base64-encoded HS256 signing secret (>= 256 bits) | Required |
//! | `JWT_TTL_SECS` | Session token validity in seconds | `3600` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use thiserror::Error;

use crate::auth::SigningKey;

/// Environment variable holding the base64-encoded signing secret.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Environment variable holding the token validity duration in seconds.
pub const JWT_TTL_ENV: &str = "JWT_TTL_SECS";

/// Environment variable for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default session token validity: one hour.
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Fatal startup-time configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{JWT_SECRET_ENV} is not set")]
    MissingSecret,

    #[error("signing secret is not valid base64")]
    SecretNotBase64,

    #[error("signing secret is {got} bytes; HS256 requires at least 32 bytes (256 bits)")]
    SecretTooShort { got: usize },

    #[error("{JWT_TTL_ENV} must be a positive number of seconds, got {0:?}")]
    InvalidTtl(String),

    #[error("{PORT_ENV} is not a valid port, got {0:?}")]
    InvalidPort(String),
}

/// Validated application configuration.
#[derive(Debug)]
pub struct AppConfig {
    /// Signing key for session tokens, loaded once for the process lifetime.
    pub signing_key: SigningKey,
    /// Session token validity in seconds.
    pub token_ttl_secs: i64,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl AppConfig {
    /// Load and validate configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var(JWT_SECRET_ENV).ok(),
            env::var(JWT_TTL_ENV).ok(),
            env::var(HOST_ENV).ok(),
            env::var(PORT_ENV).ok(),
        )
    }

    fn from_values(
        secret: Option<String>,
        ttl: Option<String>,
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let secret = secret.ok_or(ConfigError::MissingSecret)?;
        let signing_key = SigningKey::from_base64(&secret)?;

        let token_ttl_secs = match ttl {
            Some(raw) => match raw.parse::<i64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTtl(raw)),
            },
            None => DEFAULT_TTL_SECS,
        };

        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        Ok(Self {
            signing_key,
            token_ttl_secs,
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        })
    }
}
