//! Library error types
//!
//! All routing failures are returned as values; nothing in the core
//! panics on bad input. `NotFound` is deliberately not an error - it is a
//! normal dispatch outcome (see [`crate::outcome::DispatchOutcome`]).

use thiserror::Error;

/// Errors surfaced by route construction, registration and dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The method specification was empty or contained an unknown method.
    #[error("invalid method specification: {0:?}")]
    InvalidMethod(String),

    /// A route with the same normalized path and an overlapping method
    /// set is already registered.
    #[error("a route with that path and method already exists: {0}")]
    RouteAlreadyExists(String),

    /// The matched route has no bound handler.
    #[error("route handler is not callable: {0}")]
    NotCallable(String),
}
