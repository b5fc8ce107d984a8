//! User synchronization and profile service

use crate::{
    config::TrustPolicy,
    error::AppResult,
    models::user::{IdentityClaims, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    trust: TrustPolicy,
}

impl UsersService {
    pub fn new(repository: Repository, trust: TrustPolicy) -> Self {
        Self { repository, trust }
    }

    /// Reconcile validated claims into the request identity.
    ///
    /// Under the `database` policy the user is upserted on every request and
    /// the stored role is authoritative; under the `token` policy the claims
    /// are authoritative and storage is not consulted.
    pub async fn sync_identity(&self, claims: &IdentityClaims) -> AppResult<User> {
        match self.trust {
            TrustPolicy::Database => self.repository.users.upsert(claims).await,
            TrustPolicy::Token => Ok(User::from_claims(claims)),
        }
    }

    /// Fetch the stored profile for an authenticated identity, mirroring the
    /// record lazily if it does not exist yet.
    pub async fn get_profile(&self, identity: &User) -> AppResult<User> {
        if let Some(user) = self.repository.users.get_by_id(&identity.id).await? {
            return Ok(user);
        }

        let claims = IdentityClaims {
            subject_id: identity.id.clone(),
            email: Some(identity.email.clone()),
            role: None,
        };
        self.repository.users.upsert(&claims).await
    }
}
