//! Folio core: the content-management subsystem behind the portfolio site.
//!
//! Owns the authentication state machine, session persistence, the admin
//! panel controller with its disposable caches, and the public read path
//! with seed fallback. Network access lives behind the gateway traits;
//! the HTTP implementations are in `folio-gateway`.

pub mod admin;
pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod message;
pub mod post;
pub mod project;
pub mod session;

// Re-export common error type
pub use error::{FolioError, Result};
