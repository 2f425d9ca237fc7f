// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::TokenCodec;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// The token codec (and the signing key inside it) is immutable after
/// startup; the identity store takes a read lock for lookups.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub tokens: Arc<TokenCodec>,
}

impl AppState {
    pub fn new(store: InMemoryStore, tokens: TokenCodec) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            tokens: Arc::new(tokens),
        }
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use crate::auth::SigningKey;

    pub(crate) const TEST_TTL_SECS: i64 = 3600;

    pub(crate) fn test_state() -> AppState {
        let keys = SigningKey::from_bytes(b"0123456789abcdef0123456789abcdef");
        AppState::new(InMemoryStore::new(), TokenCodec::new(keys, TEST_TTL_SECS))
    }
}
