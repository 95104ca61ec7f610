//! Route registry and request dispatching
//!
//! The router is an ordered registry of [`Route`]s. Registration order is
//! semantically significant: the first registered route that matches a
//! request wins. Literal-versus-parameter specificity is deliberately not
//! arbitrated - `/users/:id` registered before `/users/active` will
//! capture `GET /users/active` with `id = "active"`. Register the more
//! specific template first when that matters.
//!
//! The registry is populated during an initialization phase and treated
//! as read-only while requests are matched; hosts serving requests
//! concurrently give each worker its own router.

use std::sync::Arc;

use crate::auth::{AuthProvider, NullAuth};
use crate::config::RouterConfig;
use crate::error::RouterError;
use crate::meta::{MetaProvider, NullMeta};
use crate::method::{self, HttpMethod, IntoMethods};
use crate::options::RouteOptions;
use crate::outcome::DispatchOutcome;
use crate::params::PathParams;
use crate::route::{Handler, Route};

/// Ordered collection of routes plus the dispatch algorithm.
pub struct Router {
    routes: Vec<Route>,
    config: Arc<RouterConfig>,
    auth: Arc<dyn AuthProvider>,
    meta: Arc<dyn MetaProvider>,
}

impl Router {
    /// Create an empty router with default configuration, a deny-all
    /// auth provider and no metadata overrides.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create an empty router with explicit configuration.
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            routes: Vec::new(),
            config: Arc::new(config),
            auth: Arc::new(NullAuth),
            meta: Arc::new(NullMeta),
        }
    }

    /// Set the authorization collaborator consulted by private routes.
    ///
    /// Collaborators are handed to each route at registration time, so
    /// wire them before registering routes.
    pub fn with_auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = auth;
        self
    }

    /// Set the metadata override source consulted by option reads.
    ///
    /// Collaborators are handed to each route at registration time, so
    /// wire them before registering routes.
    pub fn with_meta(mut self, meta: Arc<dyn MetaProvider>) -> Self {
        self.meta = meta;
        self
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// All registered routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Register a route.
    ///
    /// Fails with [`RouterError::RouteAlreadyExists`] when a route with
    /// the same normalized path and an overlapping method set is already
    /// registered, and with [`RouterError::InvalidMethod`] when the
    /// method specification is empty or unknown.
    pub fn register(
        &mut self,
        methods: impl IntoMethods,
        path: &str,
        handler: Handler,
        options: RouteOptions,
    ) -> Result<&Route, RouterError> {
        let methods = methods.into_methods()?;
        let normalized = Route::normalize_path(path);

        if self.lookup(&normalized, &methods).is_some() {
            log::warn!(
                "rejected duplicate route /{} [{}]",
                normalized,
                method::join(&methods)
            );
            return Err(RouterError::RouteAlreadyExists(normalized));
        }

        let mut route = Route::new(methods, path, handler, options)?;
        route.attach(self.config.clone(), self.auth.clone(), self.meta.clone());
        log::debug!("registered route /{} ({})", route.path(), route.id());

        let index = self.routes.len();
        self.routes.push(route);
        Ok(&self.routes[index])
    }

    /// Register a GET route.
    pub fn get<F>(
        &mut self,
        path: &str,
        handler: F,
        options: RouteOptions,
    ) -> Result<&Route, RouterError>
    where
        F: Fn(&PathParams) + Send + Sync + 'static,
    {
        self.register(HttpMethod::GET, path, Handler::new(handler), options)
    }

    /// Register a POST route.
    pub fn post<F>(
        &mut self,
        path: &str,
        handler: F,
        options: RouteOptions,
    ) -> Result<&Route, RouterError>
    where
        F: Fn(&PathParams) + Send + Sync + 'static,
    {
        self.register(HttpMethod::POST, path, Handler::new(handler), options)
    }

    /// Register a PUT route.
    pub fn put<F>(
        &mut self,
        path: &str,
        handler: F,
        options: RouteOptions,
    ) -> Result<&Route, RouterError>
    where
        F: Fn(&PathParams) + Send + Sync + 'static,
    {
        self.register(HttpMethod::PUT, path, Handler::new(handler), options)
    }

    /// Register a DELETE route.
    pub fn delete<F>(
        &mut self,
        path: &str,
        handler: F,
        options: RouteOptions,
    ) -> Result<&Route, RouterError>
    where
        F: Fn(&PathParams) + Send + Sync + 'static,
    {
        self.register(HttpMethod::DELETE, path, Handler::new(handler), options)
    }

    /// Register a HEAD route.
    pub fn head<F>(
        &mut self,
        path: &str,
        handler: F,
        options: RouteOptions,
    ) -> Result<&Route, RouterError>
    where
        F: Fn(&PathParams) + Send + Sync + 'static,
    {
        self.register(HttpMethod::HEAD, path, Handler::new(handler), options)
    }

    /// Register a catch-all route matching every HTTP method.
    pub fn any<F>(
        &mut self,
        path: &str,
        handler: F,
        options: RouteOptions,
    ) -> Result<&Route, RouterError>
    where
        F: Fn(&PathParams) + Send + Sync + 'static,
    {
        self.register(HttpMethod::ANY, path, Handler::new(handler), options)
    }

    /// Find a registered route with the same normalized path and an
    /// overlapping method set. Returns `None` when the method
    /// specification does not parse.
    pub fn exists(&self, path: &str, methods: impl IntoMethods) -> Option<&Route> {
        let methods = methods.into_methods().ok()?;
        self.lookup(&Route::normalize_path(path), &methods)
    }

    fn lookup(&self, normalized: &str, methods: &[HttpMethod]) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.path() == normalized && method::overlaps(route.methods(), methods))
    }

    /// Find a route by its stable identifier. Used by metadata and admin
    /// collaborators.
    pub fn route_by_id(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.id() == id)
    }

    /// All routes admitting `method` (exact or via ANY), in registration
    /// order.
    pub fn routes_by_method(&self, method: HttpMethod) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|route| method::allows(route.methods(), method))
            .collect()
    }

    /// The first route, in registration order, matching the request.
    pub fn match_request(&self, method: &str, path: &str) -> Option<&Route> {
        let method = match method.parse::<HttpMethod>() {
            Ok(method) => method,
            Err(_) => {
                log::debug!("unparseable request method {:?}", method);
                return None;
            }
        };

        self.routes_by_method(method)
            .into_iter()
            .find(|route| route.is_match(method, path))
    }

    /// The single per-request entry point: match and dispatch.
    ///
    /// Returns [`DispatchOutcome::NotFound`] when no route matches,
    /// signaling the host to fall through to its own handling.
    pub fn handle_request(&self, method: &str, path: &str) -> DispatchOutcome {
        match self.match_request(method, path) {
            Some(route) => route.dispatch(path),
            None => {
                log::debug!("no route matched {} {}", method, path);
                DispatchOutcome::NotFound
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_params: &PathParams) {}

    #[test]
    fn test_register_and_lookup() {
        let mut router = Router::new();
        let id = router
            .get("/users/:id", noop, RouteOptions::new())
            .unwrap()
            .id()
            .to_string();

        assert_eq!(router.route_count(), 1);
        assert!(router.route_by_id(&id).is_some());
        assert!(router.route_by_id("nope").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut router = Router::new();
        router.get("/users/:id", noop, RouteOptions::new()).unwrap();

        let err = router
            .get("/users/:id/", noop, RouteOptions::new())
            .unwrap_err();
        assert!(matches!(err, RouterError::RouteAlreadyExists(path) if path == "users/:id"));
    }

    #[test]
    fn test_disjoint_methods_coexist() {
        let mut router = Router::new();
        router.get("/users/:id", noop, RouteOptions::new()).unwrap();
        router.post("/users/:id", noop, RouteOptions::new()).unwrap();
        assert_eq!(router.route_count(), 2);
    }

    #[test]
    fn test_any_overlaps_every_method() {
        let mut router = Router::new();
        router.any("/ping", noop, RouteOptions::new()).unwrap();
        assert!(matches!(
            router.get("/ping", noop, RouteOptions::new()),
            Err(RouterError::RouteAlreadyExists(_))
        ));

        let mut router = Router::new();
        router.get("/ping", noop, RouteOptions::new()).unwrap();
        assert!(matches!(
            router.any("/ping", noop, RouteOptions::new()),
            Err(RouterError::RouteAlreadyExists(_))
        ));
    }

    #[test]
    fn test_exists_intersection() {
        let mut router = Router::new();
        router
            .register("GET,POST", "/form", Handler::new(noop), RouteOptions::new())
            .unwrap();

        assert!(router.exists("/form", "POST").is_some());
        assert!(router.exists("form/", "ANY").is_some());
        assert!(router.exists("/form", "DELETE").is_none());
        assert!(router.exists("/other", "GET").is_none());
    }

    #[test]
    fn test_routes_by_method_preserves_order() {
        let mut router = Router::new();
        router.get("/a", noop, RouteOptions::new()).unwrap();
        router.post("/b", noop, RouteOptions::new()).unwrap();
        router.any("/c", noop, RouteOptions::new()).unwrap();

        let gets: Vec<&str> = router
            .routes_by_method(HttpMethod::GET)
            .iter()
            .map(|route| route.path())
            .collect();
        assert_eq!(gets, vec!["a", "c"]);
    }

    #[test]
    fn test_first_match_wins_over_specificity() {
        let mut router = Router::new();
        router.get("/users/:id", noop, RouteOptions::new()).unwrap();
        router.get("/users/active", noop, RouteOptions::new()).unwrap();

        // Registration order decides: the parameter route shadows the
        // literal one registered after it.
        let matched = router.match_request("GET", "/users/active").unwrap();
        assert_eq!(matched.path(), "users/:id");

        let params = matched.extract_params("/users/active");
        assert_eq!(params.get("id"), Some(&"active".to_string()));
    }

    #[test]
    fn test_registration_order_reversed() {
        let mut router = Router::new();
        router.get("/users/active", noop, RouteOptions::new()).unwrap();
        router.get("/users/:id", noop, RouteOptions::new()).unwrap();

        let matched = router.match_request("GET", "/users/active").unwrap();
        assert_eq!(matched.path(), "users/active");
    }

    #[test]
    fn test_match_request_filters_by_method() {
        let mut router = Router::new();
        router.post("/submit", noop, RouteOptions::new()).unwrap();

        assert!(router.match_request("POST", "/submit").is_some());
        assert!(router.match_request("post", "/submit").is_some());
        assert!(router.match_request("GET", "/submit").is_none());
        assert!(router.match_request("BOGUS", "/submit").is_none());
    }

    #[test]
    fn test_handle_request_not_found_on_empty_registry() {
        let router = Router::new();
        assert!(router.handle_request("GET", "/nope").is_not_found());
    }

    #[test]
    fn test_handle_request_dispatches_first_match() {
        let mut router = Router::new();
        router.get("/users/:id", noop, RouteOptions::new()).unwrap();

        match router.handle_request("GET", "/users/42") {
            DispatchOutcome::Handled { params, .. } => {
                assert_eq!(params.get("id"), Some(&"42".to_string()));
            }
            other => panic!("expected Handled, got {:?}", other),
        }
    }

    #[test]
    fn test_handle_request_unauthorized_private_route() {
        let mut router = Router::new();
        router
            .get("/admin", noop, RouteOptions::new().with("private", true))
            .unwrap();

        assert!(matches!(
            router.handle_request("GET", "/admin"),
            DispatchOutcome::Unauthorized
        ));
    }

    #[test]
    fn test_invalid_method_registration() {
        let mut router = Router::new();
        assert!(matches!(
            router.register("", "/x", Handler::new(noop), RouteOptions::new()),
            Err(RouterError::InvalidMethod(_))
        ));
        assert!(matches!(
            router.register("TRACE", "/x", Handler::new(noop), RouteOptions::new()),
            Err(RouterError::InvalidMethod(_))
        ));
        assert_eq!(router.route_count(), 0);
    }
}
