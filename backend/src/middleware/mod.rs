//! Request middleware.
//!
//! Purpose: request lifecycle concerns that sit in front of every handler.
//! Authentication is deliberately absent: handlers extract credentials
//! explicitly and pass them to the domain.

pub mod trace;

pub use trace::Trace;
