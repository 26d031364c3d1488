//! Multi-user blog list backend.
//!
//! The [`domain`] owns ownership rules and the services that keep users and
//! blog entries consistent; [`inbound`] and [`outbound`] adapt it to HTTP,
//! JWT, bcrypt, and in-process stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
