//! Question creation endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::question::{CreateQuestion, Question},
};

use super::{AdminUser, ValidatedJson};

/// Create a new exam question (admin only)
#[utoipa::path(
    post,
    path = "/api/admin/addQuestion",
    tag = "questions",
    security(("bearer_auth" = [])),
    request_body = CreateQuestion,
    responses(
        (status = 201, description = "Question created", body = Question),
        (status = 400, description = "Missing or malformed fields"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn add_question(
    State(state): State<crate::AppState>,
    AdminUser(_admin): AdminUser,
    ValidatedJson(payload): ValidatedJson<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Question>)> {
    let created = state.services.questions.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
