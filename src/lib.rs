// SPDX-License-Identifier: AGPL-3.0-or-later

//! Todolist Server - task-tracking backend with stateless authentication.
//!
//! Sessions are carried entirely by signed HS256 tokens; the server keeps no
//! session state and a token stays valid until its expiry.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Token issuance, verification, and the per-request layer
//! - `config` - Environment configuration, fail-fast at startup
//! - `store` - In-memory identity store

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
