//! Port for turning a bearer credential into a verified identity.

use crate::domain::AuthClaim;

use super::define_port_error;

define_port_error! {
    /// Reasons a presented credential is rejected.
    pub enum TokenVerificationError {
        /// Signature or encoding is invalid.
        Malformed { message: String } => "token rejected: {message}",
        /// The credential is past its expiry.
        Expired => "token expired",
        /// The subject claim is not a valid user identifier.
        InvalidSubject => "token subject is not a valid user id",
    }
}

/// Validates credentials without touching any store.
#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and extract its identity claim.
    fn verify(&self, token: &str) -> Result<AuthClaim, TokenVerificationError>;
}
