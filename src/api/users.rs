//! User profile endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::user::User};

use super::AuthenticatedUser;

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user: User,
}

/// Fetch the authenticated caller's profile
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the caller", body = ProfileResponse),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get_profile(
    State(state): State<crate::AppState>,
    AuthenticatedUser(identity): AuthenticatedUser,
) -> AppResult<Json<ProfileResponse>> {
    let user = state.services.users.get_profile(&identity).await?;
    Ok(Json(ProfileResponse { user }))
}
