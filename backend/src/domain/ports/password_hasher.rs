//! Port for one-way password hashing.

use async_trait::async_trait;

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Failures raised by hashing adapters.
    pub enum PasswordHashError {
        /// The hashing backend could not produce a hash.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

/// Produces opaque password credentials. Implementations must not block
/// the async runtime.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password.
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError>;
}
