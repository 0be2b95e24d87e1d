//! Validation trait definition

/// Validation trait for configuration structures
///
/// Returns a human-readable reason on failure; callers wrap it into
/// [`crate::utils::error::ServiceError::Config`].
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
