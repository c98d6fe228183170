//! Authentication: identity, state machine, and the controller that owns
//! the session lifecycle.

pub mod controller;
pub mod credential;
pub mod gateway;
pub mod model;

pub use controller::AuthController;
pub use credential::CredentialSlot;
pub use gateway::AuthGateway;
pub use model::{AuthState, Identity, LOGIN_FALLBACK_MESSAGE};
