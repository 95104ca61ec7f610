//! Route record: one path template bound to a handler and a method set
//!
//! A route is immutable after construction. Its template is a
//! slash-delimited pattern where a segment of the form `:name`
//! (name = `[-_a-zA-Z0-9]+`) captures the corresponding request segment
//! into the parameter mapping; every other segment must match exactly,
//! case-sensitively.
//!
//! Matching is computed fresh on every call. There is deliberately no
//! per-instance match cache: a cached flag on a long-lived route would
//! leak a stale match into the next request sharing the same object.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::{AuthProvider, NullAuth};
use crate::config::RouterConfig;
use crate::error::RouterError;
use crate::meta::{MetaProvider, NullMeta};
use crate::method::{self, HttpMethod, IntoMethods};
use crate::options::{truthy, OptionValue, RouteOptions};
use crate::outcome::{DispatchOutcome, PageEffects};
use crate::params::{self, PathParams};

/// Handler bound to a route.
///
/// Handlers receive the extracted parameter mapping as their single
/// argument. `Unbound` registers the template without behavior (e.g.
/// while the host's wiring is incomplete); dispatching it yields
/// [`RouterError::NotCallable`].
#[derive(Clone)]
pub enum Handler {
    Bound(Arc<dyn Fn(&PathParams) + Send + Sync>),
    Unbound,
}

impl Handler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&PathParams) + Send + Sync + 'static,
    {
        Handler::Bound(Arc::new(f))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Handler::Bound(_))
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handler::Bound(_) => f.debug_tuple("Bound").finish(),
            Handler::Unbound => f.debug_tuple("Unbound").finish(),
        }
    }
}

/// One registered path-template-to-handler binding.
#[derive(Clone)]
pub struct Route {
    id: String,
    path: String,
    methods: Vec<HttpMethod>,
    handler: Handler,
    options: RouteOptions,
    config: Arc<RouterConfig>,
    auth: Arc<dyn AuthProvider>,
    meta: Arc<dyn MetaProvider>,
}

impl Route {
    /// Create a new route.
    ///
    /// Normalizes the path template, parses and deduplicates the method
    /// specification (rejecting an empty set), derives the stable id and
    /// merges `options` over the documented defaults.
    pub fn new(
        methods: impl IntoMethods,
        path: &str,
        handler: Handler,
        options: RouteOptions,
    ) -> Result<Self, RouterError> {
        let methods = methods.into_methods()?;
        let path = Self::normalize_path(path);
        let id = slugify(&format!("{}-{}", path, method::join(&methods)));
        let options = RouteOptions::defaults().merged(options);

        Ok(Self {
            id,
            path,
            methods,
            handler,
            options,
            config: Arc::new(RouterConfig::default()),
            auth: Arc::new(NullAuth),
            meta: Arc::new(NullMeta),
        })
    }

    /// Hand the router's shared collaborators to this route. Called once
    /// at registration.
    pub(crate) fn attach(
        &mut self,
        config: Arc<RouterConfig>,
        auth: Arc<dyn AuthProvider>,
        meta: Arc<dyn MetaProvider>,
    ) {
        self.config = config;
        self.auth = auth;
        self.meta = meta;
    }

    /// Stable identifier derived from the normalized path and method set.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The normalized path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The deduplicated method set.
    pub fn methods(&self) -> &[HttpMethod] {
        &self.methods
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Normalize a path template: trim slashes, drop empty segments,
    /// rejoin with `/`.
    pub fn normalize_path(path: &str) -> String {
        tokenize(path).join("/")
    }

    /// Check whether `method` + `request_path` match this route.
    ///
    /// Token counts must be equal; at each position the template segment
    /// must either be a parameter token or equal the request segment
    /// case-sensitively.
    pub fn is_match(&self, method: HttpMethod, request_path: &str) -> bool {
        if !method::allows(&self.methods, method) {
            return false;
        }

        let route_parts = tokenize(&self.path);
        let request_parts = tokenize(request_path);

        if route_parts.len() != request_parts.len() {
            return false;
        }

        route_parts
            .iter()
            .zip(&request_parts)
            .all(|(route_part, request_part)| {
                param_name(route_part).is_some() || route_part == request_part
            })
    }

    /// Extract the `:name` parameters from a request path.
    ///
    /// Callers must have validated the path with [`Self::is_match`]
    /// first; the router's dispatch path guarantees this. Values are
    /// trimmed and stripped of control characters.
    pub fn extract_params(&self, request_path: &str) -> PathParams {
        let route_parts = tokenize(&self.path);
        let request_parts = tokenize(request_path);

        let mut extracted = PathParams::new();
        for (route_part, request_part) in route_parts.iter().zip(&request_parts) {
            if let Some(name) = param_name(route_part) {
                extracted.insert(name.to_string(), sanitize(request_part));
            }
        }

        extracted
    }

    /// Resolve an option value.
    ///
    /// Resolution order: meta-provider override keyed by `(id, name)`,
    /// then the merged instance options, then `default`. Computed values
    /// are invoked with this route and their return value used.
    pub fn get_option(&self, name: &str, default: Value) -> Value {
        if let Some(value) = self.meta.get(&self.id, name) {
            return value;
        }

        match self.options.get(name) {
            Some(OptionValue::Literal(value)) => value.clone(),
            Some(OptionValue::Computed(compute)) => compute(self),
            None => default,
        }
    }

    /// The resolved page title, or `default` when the route carries no
    /// non-empty `title` option.
    pub fn page_title(&self, default: &str) -> String {
        match self.get_option("title", Value::Null) {
            Value::String(title) if !title.trim().is_empty() => title,
            _ => default.to_string(),
        }
    }

    /// Presentational data derived from this route's options; see
    /// [`PageEffects`].
    pub fn page_effects(&self) -> PageEffects {
        let robots = truthy(&self.get_option("robots", Value::Bool(false)));

        let mut body_classes = vec![self.config.base_body_class.clone()];
        if let Value::String(extra) = self.get_option("body_class", Value::Null) {
            body_classes.extend(extra.split_whitespace().map(str::to_string));
        }
        body_classes.retain(|class| class != &self.config.strip_class);

        let title = match self.get_option("title", Value::Null) {
            Value::String(title) if !title.trim().is_empty() => Some(title),
            _ => None,
        };

        PageEffects { robots, body_classes, title }
    }

    /// Dispatch this route for a matching request path.
    ///
    /// Private routes first consult the auth provider; a caller that is
    /// not authenticated or lacks the required capability is turned away
    /// without the handler ever running. Otherwise the handler is
    /// invoked exactly once with the extracted parameters, wrapped by
    /// the current-params shim.
    pub fn dispatch(&self, request_path: &str) -> DispatchOutcome {
        if truthy(&self.get_option("private", Value::Bool(false))) {
            let capability = self.get_option("capabilities", Value::Null);
            let capability = capability.as_str().unwrap_or(&self.config.default_capability);

            if !self.auth.is_authenticated() || !self.auth.user_can(capability) {
                log::warn!("denied access to private route {} ({})", self.path, self.id);
                return DispatchOutcome::Unauthorized;
            }
        }

        let extracted = self.extract_params(request_path);
        let effects = self.page_effects();

        match &self.handler {
            Handler::Unbound => DispatchOutcome::Error(RouterError::NotCallable(self.id.clone())),
            Handler::Bound(callback) => {
                params::set_current(&extracted);
                callback(&extracted);
                params::clear_current();

                log::debug!("dispatched route {} for {}", self.id, request_path);
                DispatchOutcome::Handled { params: extracted, effects }
            }
        }
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("methods", &self.methods)
            .field("handler", &self.handler)
            .field("options", &self.options)
            .finish()
    }
}

/// Split a path into its non-empty segments.
fn tokenize(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

/// The captured name of a parameter token (`:name`), if the token is one.
fn param_name(token: &str) -> Option<&str> {
    let name = token.strip_prefix(':')?;
    if !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Some(name)
    } else {
        None
    }
}

/// Trim surrounding whitespace and neutralize control characters. HTML
/// escaping is a presentation concern and does not happen here.
fn sanitize(value: &str) -> String {
    value.trim().chars().filter(|c| !c.is_control()).collect()
}

/// Deterministic slug: lowercase alphanumerics with single dashes.
fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
