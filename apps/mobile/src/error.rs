//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Screen                      Rust                                       │
//! │  ──────                      ────                                       │
//! │                                                                         │
//! │  signup(form)                                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Form invalid? ─── ValidationError::PasswordMismatch ──┐        │  │
//! │  │         │                                              │        │  │
//! │  │         ▼                                              ▼        │  │
//! │  │  Unknown salon? ─── CoreError::SalonNotFound ──────── ApiError ─►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store call (never fails) ─────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Screen shows an alert with error.message:                             │
//! │    { "code": "VALIDATION_ERROR", "message": "Passwords do not match" }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use salon_core::{CoreError, ValidationError};

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Salon not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Alert text shown to the user
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown salon id
    NotFound,

    /// A form was submitted incomplete or inconsistent
    ValidationError,

    /// The booking could not be made
    BookingError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SalonNotFound(_) => ApiError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::ServiceNotOffered { .. } => {
                ApiError::new(ErrorCode::BookingError, err.to_string())
            }
            // Keep the bare alert text, not the "Validation error:" wrapper
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_keeps_alert_text() {
        let err = ApiError::from(CoreError::from(ValidationError::PasswordMismatch));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Passwords do not match");
    }

    #[test]
    fn test_core_error_codes() {
        let missing = ApiError::from(CoreError::SalonNotFound("42".to_string()));
        assert_eq!(missing.code, ErrorCode::NotFound);
        assert_eq!(missing.message, "Salon not found: 42");

        let not_offered = ApiError::from(CoreError::ServiceNotOffered {
            salon: "Nail Bar Deluxe".to_string(),
            service: "Haircut".to_string(),
        });
        assert_eq!(not_offered.code, ErrorCode::BookingError);
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(ApiError::from(ValidationError::EmailRequired)).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "Please enter your email");
    }

    #[test]
    fn test_display() {
        let err = ApiError::new(ErrorCode::BookingError, "nope");
        assert_eq!(err.to_string(), "[BookingError] nope");
    }
}
