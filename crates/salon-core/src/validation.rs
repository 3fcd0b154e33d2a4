//! # Validation Module
//!
//! Form checks the screens run before calling a store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Screen (form input)                                          │
//! │  └── THIS MODULE: empty fields, password confirmation, service picked  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Stores                                                       │
//! │  └── No validation. Every store operation accepts any input.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Emptiness is checked on the raw string. A field holding only spaces
//! counts as filled in, the same as the form itself treats it.
//!
//! ## Usage
//! ```rust
//! use salon_core::validation::{validate_login, validate_signup};
//!
//! assert!(validate_login("a@b.com", "secret").is_ok());
//! assert!(validate_login("a@b.com", "").is_err());
//! assert!(validate_signup("Ann", "a@b.com", "pw", "other").is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the sign-in form.
///
/// ## Rules
/// - Email and password must both be non-empty
pub fn validate_login(email: &str, password: &str) -> ValidationResult<()> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::IncompleteForm);
    }

    Ok(())
}

/// Validates the sign-up form.
///
/// ## Rules
/// - All four fields must be non-empty (checked first)
/// - Password and confirmation must be identical
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> ValidationResult<()> {
    if [name, email, password, confirm_password]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(ValidationError::IncompleteForm);
    }

    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

/// Validates the forgot-password form.
pub fn validate_reset_email(email: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    Ok(())
}

/// Validates the service picked on the salon detail screen.
///
/// ## Returns
/// The selected service name.
pub fn validate_service_selection(selected: Option<&str>) -> ValidationResult<&str> {
    match selected {
        Some(service) if !service.is_empty() => Ok(service),
        _ => Err(ValidationError::ServiceNotSelected),
    }
}
