//! Business logic services

pub mod identity;
pub mod questions;
pub mod users;

use std::sync::Arc;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub identity: Arc<dyn identity::ClaimVerifier>,
    pub users: users::UsersService,
    pub questions: questions::QuestionsService,
}

impl Services {
    /// Create all services with the given repository and verifier
    pub fn new(
        repository: Repository,
        auth_config: &AuthConfig,
        verifier: Arc<dyn identity::ClaimVerifier>,
    ) -> Self {
        Self {
            identity: verifier,
            users: users::UsersService::new(repository.clone(), auth_config.trust),
            questions: questions::QuestionsService::new(repository),
        }
    }
}
