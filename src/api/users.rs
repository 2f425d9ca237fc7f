// SPDX-License-Identifier: AGPL-3.0-or-later

//! Profile of the authenticated caller.

use axum::Json;

use crate::{auth::CurrentUser, models::UserResponse};

#[utoipa::path(
    get,
    path = "/api/me",
    tag = "Users",
    responses(
        (status = 200, body = UserResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.user_id,
        name: user.name,
        email: user.email,
    })
}
