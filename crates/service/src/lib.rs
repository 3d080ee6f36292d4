//! Service layer: the registration / login / listing workflow, independent
//! of the web framework.
//! - `auth::service::AuthService` holds the business rules.
//! - Persistence goes through the `auth::repository::UserRepository` trait,
//!   backed by SeaORM in production and an in-memory mock in tests.

pub mod auth;
#[cfg(test)]
pub mod test_support;
