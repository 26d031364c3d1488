//! `bcrypt` adapter for the `PasswordHasher` port.
//!
//! Hashing is CPU bound, so it runs on the blocking pool.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// bcrypt hasher with a configurable work factor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Hasher using `cost` rounds; see [`bcrypt::DEFAULT_COST`].
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        let cost = self.cost;
        let password = Zeroizing::new(password.to_owned());
        let encoded = tokio::task::spawn_blocking(move || bcrypt::hash(password.as_str(), cost))
            .await
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?;
        Ok(PasswordHash::new(encoded))
    }
}
