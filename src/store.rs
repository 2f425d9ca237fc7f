// SPDX-License-Identifier: AGPL-3.0-or-later

//! In-memory identity store.
//!
//! Backs registration and the narrow "load identity by key" lookup the
//! authentication layer depends on. Emails are canonicalized before use as
//! keys so lookup and uniqueness agree on visually identical addresses.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

use crate::error::ApiError;

/// A registered account.
///
/// `password_hash` is a bcrypt hash; the raw password is never stored.
#[derive(Debug, Clone)]
pub struct AppUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Canonical form of a login email: trimmed, NFKC-normalized, lowercased.
pub fn canonical_email(email: &str) -> String {
    email.trim().nfkc().collect::<String>().to_lowercase()
}

#[derive(Default)]
pub struct InMemoryStore {
    // Keyed by canonical email.
    users: HashMap<String, AppUser>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_user(
        &mut self,
        name: impl Into<String>,
        email: &str,
        password_hash: impl Into<String>,
    ) -> Result<AppUser, ApiError> {
        let email = canonical_email(email);
        if self.users.contains_key(&email) {
            return Err(ApiError::conflict(
                "An account with this email already exists",
            ));
        }

        let user = AppUser {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.clone(),
            password_hash: password_hash.into(),
        };
        self.users.insert(email, user.clone());
        Ok(user)
    }

    /// Load an identity by its login email.
    ///
    /// `None` is not an error: the account may simply have been removed
    /// after a token naming it was issued.
    pub fn find_by_email(&self, email: &str) -> Option<&AppUser> {
        self.users.get(&canonical_email(email))
    }
}
