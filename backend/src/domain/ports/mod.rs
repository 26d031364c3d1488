//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`BlogRepository`, `UserRepository`, `TokenVerifier`,
//! `PasswordHasher`) are implemented by outbound adapters. Driving ports
//! (`BlogCommand`, `BlogQuery`, `UserRegistration`, `UsersQuery`) are
//! implemented by domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod blog_command;
mod blog_query;
mod blog_repository;
mod password_hasher;
mod token_verifier;
mod user_registration;
mod user_repository;
mod users_query;

pub use blog_command::BlogCommand;
pub use blog_query::BlogQuery;
#[cfg(test)]
pub use blog_repository::MockBlogRepository;
pub use blog_repository::{BlogRepository, BlogRepositoryError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use token_verifier::MockTokenVerifier;
pub use token_verifier::{TokenVerificationError, TokenVerifier};
pub use user_registration::{UserAccount, UserRegistration};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_query::{BlogSummary, UserListing, UsersQuery};
