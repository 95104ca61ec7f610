//! Authorization collaborator for private routes
//!
//! Routes registered with `private: true` require the current caller to
//! be authenticated and to hold the route's `capabilities` capability.
//! Both questions are answered by the host through an [`AuthProvider`];
//! the router only asks them, it never decides who the caller is.

/// Authorization provider trait
///
/// Implement this trait to connect the router to the host's user model.
/// Consulted only when a matched route is private.
pub trait AuthProvider: Send + Sync {
    /// Whether the current caller is authenticated at all.
    fn is_authenticated(&self) -> bool;

    /// Whether the current caller holds the named capability.
    fn user_can(&self, capability: &str) -> bool;
}

/// Denies everything. The safe default when the host wires no provider.
#[derive(Debug, Default)]
pub struct NullAuth;

impl AuthProvider for NullAuth {
    fn is_authenticated(&self) -> bool {
        false
    }

    fn user_can(&self, _capability: &str) -> bool {
        false
    }
}

/// Provider backed by a fixed capability set.
///
/// Suited to hosts with a single ambient user context per request cycle,
/// and to tests.
#[derive(Debug, Default)]
pub struct StaticAuth {
    authenticated: bool,
    capabilities: Vec<String>,
}

impl StaticAuth {
    pub fn new(authenticated: bool) -> Self {
        Self { authenticated, capabilities: Vec::new() }
    }

    /// Grant a capability to the caller.
    pub fn with_capability(mut self, capability: &str) -> Self {
        self.capabilities.push(capability.to_string());
        self
    }
}

impl AuthProvider for StaticAuth {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn user_can(&self, capability: &str) -> bool {
        self.authenticated && self.capabilities.iter().any(|c| c == capability)
    }
}
