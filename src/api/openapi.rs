//! OpenAPI documentation

use axum::Router;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, questions, users};

/// Registers the bearer scheme referenced by the protected paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "QBank API",
        version = "0.1.0",
        description = "Exam Question Bank Admin REST API"
    ),
    paths(
        // Health
        health::liveness,
        health::health_check,
        // Users
        users::get_profile,
        // Questions
        questions::add_question,
    ),
    components(
        schemas(
            // Users
            crate::models::user::User,
            crate::models::user::Role,
            users::ProfileResponse,
            // Questions
            crate::models::question::Question,
            crate::models::question::CreateQuestion,
            crate::models::question::AnswerKey,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "users", description = "User profile"),
        (name = "questions", description = "Question bank administration")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("document has no components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
