//! Data models

pub mod question;
pub mod user;
