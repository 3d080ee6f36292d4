//! Shape checks run before any repository call.

use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::{LoginInput, RegisterInput};
use super::errors::AuthError;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_NAME_LEN: usize = 128;
pub const MAX_EMAIL_LEN: usize = 255;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

pub fn valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LEN && EMAIL_RE.is_match(email)
}

pub fn validate_registration(input: &RegisterInput) -> Result<(), AuthError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AuthError::Validation("name is required".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AuthError::Validation(format!("name must be at most {MAX_NAME_LEN} characters")));
    }
    if !valid_email(&input.email) {
        return Err(AuthError::Validation("email is invalid".into()));
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(format!("password must be at least {MIN_PASSWORD_LEN} characters")));
    }
    Ok(())
}

pub fn validate_login(input: &LoginInput) -> Result<(), AuthError> {
    if !valid_email(&input.email) {
        return Err(AuthError::Validation("email is invalid".into()));
    }
    if input.password.is_empty() {
        return Err(AuthError::Validation("password is required".into()));
    }
    Ok(())
}
