//! Auth module: domain, validation, crypto helpers, repository and service.
//!
//! This module centralizes registration and login business logic under the service crate.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repo;
pub mod repository;
pub mod service;
pub mod token;
pub mod validation;

pub use errors::AuthError;
pub use service::{AuthConfig, AuthService};
