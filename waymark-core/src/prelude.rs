//! Prelude module for convenient imports.
//!
//! Import everything you need with a single line:
//!
//! ```rust,ignore
//! use waymark_core::prelude::*;
//! ```

// === Registry and dispatch ===
pub use crate::route::{Handler, Route};
pub use crate::router::Router;

// === Methods and options ===
pub use crate::method::HttpMethod;
pub use crate::options::{OptionValue, RouteOptions};

// === Outcomes ===
pub use crate::outcome::{DispatchOutcome, PageEffects};

// === Parameters ===
pub use crate::params::{current_param, current_params, PathParams};

// === Collaborators ===
pub use crate::auth::{AuthProvider, NullAuth, StaticAuth};
pub use crate::meta::{MemoryMetaStore, MetaProvider, NullMeta};

// === Configuration and errors ===
pub use crate::config::RouterConfig;
pub use crate::error::RouterError;
