//! Identity provider client
//!
//! Token verification is delegated entirely to the external provider; the
//! server never decodes tokens itself.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::user::IdentityClaims,
};

/// Verifies an opaque bearer token and extracts its claims
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClaimVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AppResult<IdentityClaims>;
}

/// User payload returned by the provider's verification endpoint
#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: String,
    email: Option<String>,
    role: Option<String>,
}

/// Claim verifier backed by a Supabase-style GoTrue HTTP API
#[derive(Clone)]
pub struct SupabaseVerifier {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseVerifier {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl ClaimVerifier for SupabaseVerifier {
    async fn verify(&self, token: &str) -> AppResult<IdentityClaims> {
        let response = self
            .http
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Provider(e.to_string()))?;

        // Any 4xx means the provider judged the token and rejected it; only
        // transport failures and 5xx count as provider faults.
        let status = response.status();
        if status.is_client_error() {
            return Err(AppError::InvalidToken("Invalid token".to_string()));
        }
        if !status.is_success() {
            return Err(AppError::Provider(format!(
                "verification endpoint returned {}",
                status
            )));
        }

        let user: ProviderUser = response
            .json()
            .await
            .map_err(|e| AppError::Provider(e.to_string()))?;

        if user.id.is_empty() {
            return Err(AppError::InvalidToken("Token carries no subject".to_string()));
        }

        Ok(IdentityClaims {
            subject_id: user.id,
            email: user.email,
            role: user.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    /// Spin up a stub provider answering the verification endpoint with a
    /// fixed status and body
    async fn spawn_stub(status: u16, body: &'static str) -> String {
        let code = StatusCode::from_u16(status).unwrap();
        let app = Router::new().route(
            "/auth/v1/user",
            get(move || async move { (code, body) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn any_client_error_from_provider_is_invalid_token() {
        for status in [400u16, 401, 403, 404, 429] {
            let base = spawn_stub(status, "{}").await;
            let verifier = SupabaseVerifier::new(&base, "test-key");

            let err = verifier.verify("some-token").await.unwrap_err();
            assert!(
                matches!(err, AppError::InvalidToken(_)),
                "provider {} should map to InvalidToken, got {:?}",
                status,
                err
            );
        }
    }

    #[tokio::test]
    async fn provider_5xx_is_a_server_fault() {
        let base = spawn_stub(503, "").await;
        let verifier = SupabaseVerifier::new(&base, "test-key");

        let err = verifier.verify("some-token").await.unwrap_err();
        assert!(matches!(err, AppError::Provider(_)));
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_server_fault() {
        // Nothing listens on this port
        let verifier = SupabaseVerifier::new("http://127.0.0.1:1", "test-key");

        let err = verifier.verify("some-token").await.unwrap_err();
        assert!(matches!(err, AppError::Provider(_)));
    }

    #[tokio::test]
    async fn empty_subject_is_invalid_token() {
        let base = spawn_stub(200, r#"{"id":"","email":null,"role":null}"#).await;
        let verifier = SupabaseVerifier::new(&base, "test-key");

        let err = verifier.verify("some-token").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn verified_token_yields_claims() {
        let base = spawn_stub(
            200,
            r#"{"id":"u2","email":"admin@x.com","role":"ADMIN"}"#,
        )
        .await;
        let verifier = SupabaseVerifier::new(&base, "test-key");

        let claims = verifier.verify("some-token").await.unwrap();
        assert_eq!(claims.subject_id, "u2");
        assert_eq!(claims.email.as_deref(), Some("admin@x.com"));
        assert_eq!(claims.role.as_deref(), Some("ADMIN"));
    }
}
