//! Dispatch outcomes and derived page effects
//!
//! Routing one request terminates in exactly one of four outcomes.
//! Explicit `NotFound` rather than a silent default: the host decides
//! whether to fall through to its own handling.

use crate::error::RouterError;
use crate::params::PathParams;

/// Presentational data derived from a matched route's options.
///
/// The core only computes this; acting on it (emitting the robots meta
/// tag, decorating the body class list, overriding the page title) is
/// the host's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageEffects {
    /// Whether the page allows indexing by robots; when false the host
    /// emits a `noindex,nofollow` meta tag.
    pub robots: bool,
    /// Body classes: the configured base class plus the route's
    /// `body_class` option, with the host's not-found marker removed.
    pub body_classes: Vec<String>,
    /// Page title override, when the route carries one.
    pub title: Option<String>,
}

/// Terminal result of routing one request.
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    /// A route matched and its handler ran exactly once. The host stops
    /// further routing.
    Handled {
        params: PathParams,
        effects: PageEffects,
    },
    /// A private route matched but the caller failed the auth check.
    /// The host answers with a 401-class response.
    Unauthorized,
    /// No route matched. The host falls through to its own handling.
    NotFound,
    /// A route matched but could not be dispatched.
    Error(RouterError),
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, DispatchOutcome::Handled { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DispatchOutcome::NotFound)
    }
}
