//! Server settings loaded via OrthoConfig and their resolved form.
//!
//! Every setting can be supplied as a `BLOGLIST_*` environment variable or
//! the matching command-line flag.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;
use zeroize::Zeroizing;

use bloglist::domain::UpdatePolicy;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Raw settings as read from the environment and CLI.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOGLIST")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// HS256 signing secret for bearer tokens.
    pub jwt_secret: Option<String>,
    /// File holding the signing secret; used when `jwt_secret` is unset.
    pub jwt_secret_file: Option<PathBuf>,
    /// Lifetime of issued tokens in seconds.
    #[ortho_config(default = 3600)]
    pub token_ttl_secs: u64,
    /// Who may update blog entries: `open` (anyone) or `owner-only`.
    ///
    /// Defaults to `open`, which lets unauthenticated clients change any
    /// entry's fields.
    pub update_policy: Option<String>,
}

/// Settings after parsing and secret resolution.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) jwt_secret: Zeroizing<Vec<u8>>,
    pub(crate) token_ttl: Duration,
    pub(crate) update_policy: UpdatePolicy,
}

impl ServerConfig {
    /// Resolve raw settings.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidInput`] for unparseable values, and an
    /// error when no signing secret is configured in a release build.
    pub fn from_settings(settings: &ServerSettings) -> io::Result<Self> {
        let raw_addr = settings.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr.parse().map_err(|err| {
            invalid_input(format!("invalid bind address `{raw_addr}`: {err}"))
        })?;
        let update_policy = match settings.update_policy.as_deref() {
            Some(raw) => raw.parse().map_err(invalid_input)?,
            None => UpdatePolicy::default(),
        };
        let token_ttl = Duration::from_secs(settings.token_ttl_secs);

        Ok(Self {
            bind_addr,
            jwt_secret: resolve_secret(settings)?,
            token_ttl,
            update_policy,
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn invalid_input(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

fn resolve_secret(settings: &ServerSettings) -> io::Result<Zeroizing<Vec<u8>>> {
    if let Some(secret) = settings.jwt_secret.as_deref().filter(|s| !s.is_empty()) {
        return Ok(Zeroizing::new(secret.as_bytes().to_vec()));
    }
    if let Some(path) = &settings.jwt_secret_file {
        let bytes = std::fs::read(path).map_err(|err| {
            io::Error::other(format!(
                "failed to read JWT secret at {}: {err}",
                path.display()
            ))
        })?;
        return Ok(Zeroizing::new(bytes));
    }
    if cfg!(debug_assertions) {
        warn!("no JWT secret configured; using an ephemeral secret (dev only)");
        let mut secret = Vec::with_capacity(32);
        secret.extend_from_slice(uuid::Uuid::new_v4().as_bytes());
        secret.extend_from_slice(uuid::Uuid::new_v4().as_bytes());
        return Ok(Zeroizing::new(secret));
    }
    Err(invalid_input(
        "BLOGLIST_JWT_SECRET or BLOGLIST_JWT_SECRET_FILE must be set".to_owned(),
    ))
}
