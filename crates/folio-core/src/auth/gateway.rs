//! Authentication gateway contract.

use async_trait::async_trait;

use crate::auth::model::Identity;
use crate::error::Result;
use crate::session::Session;

/// Remote authentication contract.
///
/// `verify` authenticates with whatever credential the implementation
/// currently carries (the shared slot for the HTTP gateway); a rejected
/// credential must come back as `FolioError::Auth`.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a session.
    ///
    /// Failures carry the gateway's detail message when it sent one.
    async fn login(&self, username: &str, password: &str) -> Result<Session>;

    /// Re-asserts the current credential against the gateway.
    async fn verify(&self) -> Result<Identity>;
}
