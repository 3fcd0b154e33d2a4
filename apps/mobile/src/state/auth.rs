//! # Auth State
//!
//! Holds the signed-in user. Sign-in, sign-up and password reset are mocked:
//! they always succeed and never leave the process.
//!
//! ## Session State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                 login / signup                                          │
//! │   ┌───────────┐ ───────────────► ┌───────────────┐                      │
//! │   │ anonymous │                  │ authenticated │ ◄─┐ login / signup   │
//! │   └───────────┘ ◄─────────────── └───────────────┘ ──┘ (replaces user) │
//! │     ▲      │         logout                                             │
//! │     └──────┘ logout (no-op, still notifies)                             │
//! │                                                                         │
//! │   Initial: anonymous. Terminal: none.                                   │
//! │   Invariant: is_authenticated == current_user.is_some()                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Placeholder Values
//! The mock backend fills in a fixed id, phone and avatar. On login the
//! name is also fixed (`"John Doe"`); only signup uses the typed name.

use serde::Serialize;
use tracing::info;

use salon_core::User;

use super::store::{Store, SubscriptionId};

/// Id given to every mocked user.
pub const PLACEHOLDER_USER_ID: &str = "1";

/// Name given to every user who signs in (login does not know the name).
pub const PLACEHOLDER_NAME: &str = "John Doe";

pub const PLACEHOLDER_PHONE: &str = "+1 234 567 8900";

pub const PLACEHOLDER_AVATAR_URL: &str = "https://i.pravatar.cc/150?img=12";

/// Confirmation returned by every password reset request.
pub const PASSWORD_RESET_MESSAGE: &str = "Password reset link sent to your email";

/// Name shown in the home screen greeting when nobody is signed in.
pub const GUEST_NAME: &str = "Guest";

// =============================================================================
// Auth State
// =============================================================================

/// Snapshot of the session.
///
/// Fields are private; the only constructors keep `is_authenticated` and
/// `current_user` in agreement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    current_user: Option<User>,
    is_authenticated: bool,
}

impl AuthState {
    /// Nobody signed in.
    pub fn anonymous() -> Self {
        AuthState::default()
    }

    pub fn signed_in(user: User) -> Self {
        AuthState {
            current_user: Some(user),
            is_authenticated: true,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Name for the home screen greeting.
    pub fn greeting_name(&self) -> &str {
        self.current_user
            .as_ref()
            .map_or(GUEST_NAME, |user| user.name.as_str())
    }
}

/// Outcome of a mocked login or signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOutcome {
    pub success: bool,
    pub user: Option<User>,
}

/// Outcome of a mocked password reset request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Auth Store
// =============================================================================

/// The session store.
///
/// ## No Validation
/// Every operation accepts any input. Empty fields and mismatched
/// passwords are rejected by the commands layer before it gets here.
#[derive(Debug, Default)]
pub struct AuthStore {
    store: Store<AuthState>,
}

impl AuthStore {
    /// Creates a store with nobody signed in.
    pub fn new() -> Self {
        AuthStore::default()
    }

    pub fn state(&self) -> AuthState {
        self.store.snapshot()
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.read(|s| s.current_user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.read(AuthState::is_authenticated)
    }

    /// Signs in. Always succeeds.
    ///
    /// The user keeps the given email; every other field is a placeholder,
    /// including the name.
    pub fn login(&self, email: &str, _password: &str) -> AuthOutcome {
        let user = placeholder_user(PLACEHOLDER_NAME, email);
        info!(email = %email, "User signed in");
        self.sign_in(user)
    }

    /// Creates an account and signs in. Always succeeds.
    ///
    /// The user keeps the given name and email; id, phone and avatar are
    /// placeholders.
    pub fn signup(&self, name: &str, email: &str, _password: &str) -> AuthOutcome {
        let user = placeholder_user(name, email);
        info!(email = %email, name = %name, "User signed up");
        self.sign_in(user)
    }

    /// Clears the session. Safe to call when already signed out.
    pub fn logout(&self) {
        self.store.update(|s| *s = AuthState::anonymous());
        info!("User signed out");
    }

    /// Pretends to send a reset link. Does not touch the session.
    pub fn request_password_reset(&self, email: &str) -> PasswordReset {
        info!(email = %email, "Password reset requested");
        PasswordReset {
            success: true,
            message: PASSWORD_RESET_MESSAGE.to_string(),
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    fn sign_in(&self, user: User) -> AuthOutcome {
        self.store.update(|s| *s = AuthState::signed_in(user.clone()));
        AuthOutcome {
            success: true,
            user: Some(user),
        }
    }
}

fn placeholder_user(name: &str, email: &str) -> User {
    User {
        id: PLACEHOLDER_USER_ID.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: PLACEHOLDER_PHONE.to_string(),
        avatar_url: PLACEHOLDER_AVATAR_URL.to_string(),
    }
}
