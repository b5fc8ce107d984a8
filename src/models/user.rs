//! User model and identity types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;

/// User role stored in the local users table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or(Role::User)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

// SQLx conversion for Role (stored as text)
impl sqlx::Type<Postgres> for Role {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for Role {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for Role {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Claims extracted from a verified bearer token.
///
/// Immutable per request; produced by the identity provider, never persisted
/// by the validator itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    /// Subject id assigned by the identity provider
    pub subject_id: String,
    pub email: Option<String>,
    /// Role claim embedded in the token, if any
    pub role: Option<String>,
}

/// User record mirrored from the identity provider.
///
/// `id` always equals the provider's subject id for that user; it is the join
/// key between the external identity space and local authorization state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a request identity directly from token claims, without touching
    /// storage. Used by the `token` trust policy; an unknown or absent role
    /// claim falls back to the baseline role.
    pub fn from_claims(claims: &IdentityClaims) -> Self {
        let now = Utc::now();
        Self {
            id: claims.subject_id.clone(),
            email: claims.email.clone().unwrap_or_default(),
            role: claims.role.as_deref().map(Role::from).unwrap_or(Role::User),
            created_at: now,
            updated_at: now,
        }
    }
}
