//! Validation of inbound item payloads
//!
//! Every field is checked and violations are collected per field, so a
//! single response can report all of them.

use crate::core::models::ItemRequest;
use crate::utils::error::{FieldErrors, Result, ServiceError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of every item text field
pub const MAX_FIELD_LENGTH: usize = 100;

/// Maximum length of the part of an email address before `@`
pub const MAX_EMAIL_LOCAL_PART_LENGTH: usize = 64;

/// Email pattern: dot-separated local segments, `@`, dot-separated domain
/// labels and an alphabetic top-level domain of at least two letters.
/// The local part length bound is checked separately.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@[^-][A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*(\.[A-Za-z]{2,})$",
    )
    .expect("Invalid email regex")
});

/// Request validation utilities
pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create/update payload
    pub fn validate_item_request(request: &ItemRequest) -> Result<()> {
        let mut errors = FieldErrors::new();

        Self::check_text("name", &request.name, &mut errors);
        Self::check_text("description", &request.description, &mut errors);
        Self::check_text("status", &request.status, &mut errors);
        if Self::check_text("email", &request.email, &mut errors)
            && !Self::is_valid_email(&request.email)
        {
            errors.insert(
                "email".to_string(),
                "The email must follow the 'local_part@domain' pattern (e.g: email@domain.com)"
                    .to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::validation(errors))
        }
    }

    /// Check presence and length; returns whether the field passed
    fn check_text(field: &str, value: &str, errors: &mut FieldErrors) -> bool {
        if value.trim().is_empty() {
            errors.insert(field.to_string(), format!("The {} is required", field));
            return false;
        }

        if value.chars().count() > MAX_FIELD_LENGTH {
            errors.insert(
                field.to_string(),
                format!(
                    "The {} must contain at most {} characters",
                    field, MAX_FIELD_LENGTH
                ),
            );
            return false;
        }

        true
    }

    /// Validate an email address
    pub fn is_valid_email(email: &str) -> bool {
        let local_len = match email.find('@') {
            Some(at) => email[..at].chars().count(),
            None => return false,
        };

        (1..=MAX_EMAIL_LOCAL_PART_LENGTH).contains(&local_len) && EMAIL_PATTERN.is_match(email)
    }
}

impl ItemRequest {
    /// Validate this payload, see [`RequestValidator::validate_item_request`]
    pub fn validate(&self) -> Result<()> {
        RequestValidator::validate_item_request(self)
    }
}
