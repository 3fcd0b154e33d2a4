//! # Error Types
//!
//! Domain-specific error types for salon-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salon-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog lookups, booking rules                 │
//! │  └── ValidationError  - Form input checks done by the caller           │
//! │                                                                         │
//! │  App errors (apps/mobile)                                              │
//! │  └── ApiError         - What screens see (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Screen alert           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stores and the catalog filter never produce these. Every store
//! operation is total; errors only exist where a screen submits a form.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised by catalog lookups and booking rules.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No salon with this id exists in the catalog.
    #[error("Salon not found: {0}")]
    SalonNotFound(String),

    /// The selected service is not on the salon's service list.
    ///
    /// ## When This Occurs
    /// - A stale detail screen submits a service the catalog no longer lists
    /// - The screen passes free text instead of a listed service
    #[error("{salon} does not offer {service}")]
    ServiceNotOffered { salon: String, service: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The display strings are the exact alert texts shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required form fields are empty.
    #[error("Please fill in all fields")]
    IncompleteForm,

    /// Password and confirmation differ on signup.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Forgot-password form submitted without an email.
    #[error("Please enter your email")]
    EmailRequired,

    /// Booking submitted before a service was picked.
    #[error("Please select a service to book")]
    ServiceNotSelected,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ServiceNotOffered {
            salon: "Nail Bar".to_string(),
            service: "Haircut".to_string(),
        };
        assert_eq!(err.to_string(), "Nail Bar does not offer Haircut");

        let err = CoreError::SalonNotFound("42".to_string());
        assert_eq!(err.to_string(), "Salon not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::IncompleteForm.to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::EmailRequired.into();
        assert!(matches!(
            core_err,
            CoreError::Validation(ValidationError::EmailRequired)
        ));
    }
}
