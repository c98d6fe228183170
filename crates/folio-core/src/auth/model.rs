//! Identity and authentication state models.

use serde::{Deserialize, Serialize};

/// Shown when the gateway rejects a login without a detail message.
pub const LOGIN_FALLBACK_MESSAGE: &str = "Credenciales incorrectas";

/// The user a session was issued for, as echoed by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl Identity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: None,
        }
    }
}

/// The authentication state machine.
///
/// Cyclic, no terminal states: logout always returns to `Anonymous`.
/// `Error` is an anonymous state that remembers why the last attempt
/// failed so the UI can surface it; the user may retry from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    /// A login or silent startup verification is in flight.
    Authenticating,
    Authenticated(Identity),
    Error(String),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// True for `Anonymous` and `Error`: both render the login form.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous | Self::Error(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
