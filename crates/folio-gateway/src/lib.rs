//! HTTP gateway clients for the Folio backend.
//!
//! One client per backend service, all sharing a single [`ApiClient`] that
//! carries the base URL, the timeout, and the bearer-credential slot.

pub mod auth;
pub mod client;
pub mod messages;
pub mod posts;
pub mod projects;

pub use auth::HttpAuthGateway;
pub use client::ApiClient;
pub use messages::HttpMessageGateway;
pub use posts::HttpPostGateway;
pub use projects::HttpProjectGateway;
