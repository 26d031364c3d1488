//! HS256 JSON Web Token adapter for the `TokenVerifier` port.
//!
//! Claims carry the user id as `sub` plus the username. Expiry is checked
//! with zero leeway. `issue` exists for tooling and tests; no HTTP endpoint
//! mints tokens.

use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    get_current_timestamp,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ports::{TokenVerificationError, TokenVerifier};
use crate::domain::{AuthClaim, UserId};

/// Default credential lifetime.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    username: String,
    iat: u64,
    exp: u64,
}

/// Signs and verifies bearer tokens with a shared secret.
#[derive(Clone)]
pub struct JwtTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl JwtTokens {
    /// Build an adapter keyed by `secret` with the default lifetime.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Override the lifetime of issued tokens.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Mint a token for `user_id`.
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::UserId;
    /// use bloglist::domain::ports::TokenVerifier;
    /// use bloglist::outbound::jwt::JwtTokens;
    ///
    /// let tokens = JwtTokens::new(b"doc-secret");
    /// let user_id = UserId::random();
    /// let token = tokens.issue(user_id, "root").unwrap();
    /// assert_eq!(tokens.verify(&token).unwrap().user_id(), user_id);
    /// ```
    pub fn issue(
        &self,
        user_id: UserId,
        username: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = get_current_timestamp();
        self.sign(user_id, username, iat, iat.saturating_add(self.ttl.as_secs()))
    }

    fn sign(
        &self,
        user_id: UserId,
        username: &str,
        iat: u64,
        exp: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_owned(),
            iat,
            exp,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }
}

impl TokenVerifier for JwtTokens {
    fn verify(&self, token: &str) -> Result<AuthClaim, TokenVerificationError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            debug!(error = %err, "bearer token rejected");
            match err.kind() {
                ErrorKind::ExpiredSignature => TokenVerificationError::expired(),
                _ => TokenVerificationError::malformed(err.to_string()),
            }
        })?;
        let user_id =
            UserId::new(&data.claims.sub).map_err(|_| TokenVerificationError::invalid_subject())?;
        Ok(AuthClaim::new(user_id, data.claims.username))
    }
}
