//! Waymark - Core
//!
//! A segment-based URL router: register path templates with named
//! `:param` segments against HTTP methods, match incoming requests,
//! extract parameters and dispatch bound handlers.
//!
//! # Overview
//!
//! Waymark is routing only - it neither parses nor serves HTTP. The host
//! framework feeds it a method and path per request and acts on the
//! returned [`DispatchOutcome`]: `Handled` stops further processing,
//! `NotFound` falls through to the host's own handling, `Unauthorized`
//! becomes a 401-class response.
//!
//! # Quick Start
//!
//! Add `waymark-core` to your `Cargo.toml`:
//!
//! ```toml,ignore
//! [dependencies]
//! waymark-core = "0.1"
//! ```
//!
//! Then register routes and dispatch:
//!
//! ```rust,ignore
//! use waymark_core::prelude::*;
//!
//! let mut router = Router::new();
//! router.get("/users/:id", |params| {
//!     println!("user {}", params["id"]);
//! }, RouteOptions::new())?;
//!
//! match router.handle_request("GET", "/users/42") {
//!     DispatchOutcome::Handled { .. } => { /* request consumed */ }
//!     DispatchOutcome::NotFound => { /* fall through */ }
//!     DispatchOutcome::Unauthorized => { /* answer 401 */ }
//!     DispatchOutcome::Error(e) => { /* surface e */ }
//! }
//! # Ok::<(), waymark_core::RouterError>(())
//! ```
//!
//! # Architecture
//!
//! - [`router`] - ordered route registry and the dispatch algorithm
//! - [`route`] - one template-to-handler binding with match testing and
//!   parameter extraction
//! - [`method`] - HTTP method parsing including the ANY wildcard
//! - [`options`] - per-route options (literal or lazily computed)
//! - [`meta`] - pluggable per-route metadata overrides keyed by route id
//! - [`auth`] - authorization collaborator for private routes
//! - [`params`] - extracted parameters and the current-match shim
//! - [`outcome`] - dispatch outcomes and derived page effects
//! - [`config`] - configuration with TOML and environment supersedence
//!
//! # Matching semantics
//!
//! First match wins, in registration order, after filtering by method.
//! Specificity is never arbitrated: a parameter segment and a literal
//! segment at the same position are equally good, and whichever route
//! was registered first takes the request.

pub mod auth;
pub mod config; // Configuration with TOML + environment supersedence
pub mod error;
pub mod meta; // Per-route metadata overrides keyed by route id
pub mod method;
pub mod options;
pub mod outcome;
pub mod params;
pub mod route;
pub mod router;

// Prelude module for convenient imports
pub mod prelude;

// Re-export main types for convenience
pub use auth::{AuthProvider, NullAuth, StaticAuth};
pub use config::RouterConfig;
pub use error::RouterError;
pub use meta::{MemoryMetaStore, MetaProvider, NullMeta};
pub use method::{HttpMethod, IntoMethods};
pub use options::{OptionValue, RouteOptions};
pub use outcome::{DispatchOutcome, PageEffects};
pub use params::{current_param, current_params, PathParams};
pub use route::{Handler, Route};
pub use router::Router;

/// Result type for routing operations
pub type Result<T> = std::result::Result<T, RouterError>;
