//! # Auth Commands
//!
//! Form handling for the login, signup and forgot-password screens.
//!
//! The stores accept anything; the form rules live here. A rejected form
//! leaves the session untouched and notifies nobody.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use salon_core::validation::{validate_login, validate_reset_email, validate_signup};
use salon_core::User;

use crate::error::ApiError;
use crate::state::{AuthOutcome, AuthStore, PasswordReset};

/// Login form fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup form fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Session as the screens see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// User's name, or "Guest"
    pub greeting_name: String,
}

/// Signs in.
///
/// ## Errors
/// `VALIDATION_ERROR` "Please fill in all fields" if either field is empty.
pub fn login(auth: &AuthStore, form: &LoginForm) -> Result<AuthOutcome, ApiError> {
    debug!(email = %form.email, "login command");

    validate_login(&form.email, &form.password).map_err(|e| {
        warn!(error = %e, "Login form rejected");
        e
    })?;

    Ok(auth.login(&form.email, &form.password))
}

/// Creates an account and signs in.
///
/// ## Errors
/// - `VALIDATION_ERROR` "Please fill in all fields" if any field is empty
/// - `VALIDATION_ERROR` "Passwords do not match"
pub fn signup(auth: &AuthStore, form: &SignupForm) -> Result<AuthOutcome, ApiError> {
    debug!(email = %form.email, name = %form.name, "signup command");

    validate_signup(
        &form.name,
        &form.email,
        &form.password,
        &form.confirm_password,
    )
    .map_err(|e| {
        warn!(error = %e, "Signup form rejected");
        e
    })?;

    Ok(auth.signup(&form.name, &form.email, &form.password))
}

/// Signs out. Always succeeds.
pub fn logout(auth: &AuthStore) -> SessionResponse {
    debug!("logout command");
    auth.logout();
    get_session(auth)
}

/// Sends a (pretend) password reset link.
///
/// ## Errors
/// `VALIDATION_ERROR` "Please enter your email" if the email is empty.
pub fn forgot_password(auth: &AuthStore, email: &str) -> Result<PasswordReset, ApiError> {
    debug!(email = %email, "forgot_password command");

    validate_reset_email(email).map_err(|e| {
        warn!(error = %e, "Reset form rejected");
        e
    })?;

    Ok(auth.request_password_reset(email))
}

/// Gets the current session.
pub fn get_session(auth: &AuthStore) -> SessionResponse {
    debug!("get_session command");
    let state = auth.state();
    SessionResponse {
        user: state.current_user().cloned(),
        is_authenticated: state.is_authenticated(),
        greeting_name: state.greeting_name().to_string(),
    }
}
