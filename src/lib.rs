//! QBank Question Bank Admin API
//!
//! A Rust REST API server for managing an exam question bank. Authentication
//! is delegated to an external identity provider; the server validates bearer
//! tokens, mirrors user records locally, and writes question records.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
