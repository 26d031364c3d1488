//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-process document stores for blogs and users
//! - **jwt**: HS256 bearer token verification (and issuance for tooling)
//! - **bcrypt_hasher**: password hashing on the blocking pool
//!
//! Adapters are thin translators between domain types and infrastructure.
//! They contain no business logic.

pub mod bcrypt_hasher;
pub mod jwt;
pub mod memory;
