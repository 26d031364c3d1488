//! In-process document store adapters.
//!
//! Both stores keep records in insertion order behind a `tokio` read/write
//! lock. Each port method takes the lock once, so single-record mutations
//! (field updates, comment appends, back-reference edits) are atomic and
//! concurrent writers never lose each other's changes.

mod blog_repository;
mod user_repository;

pub use blog_repository::InMemoryBlogRepository;
pub use user_repository::InMemoryUserRepository;
