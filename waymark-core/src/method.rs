//! HTTP method parsing and representation
//!
//! Routes are registered against a set of methods. The set can be given
//! as a typed method, a slice of methods, or a comma-separated string
//! (`"GET,POST"`). Blank entries are discarded and duplicates collapse;
//! an empty result is rejected with [`RouterError::InvalidMethod`].
//!
//! [`HttpMethod::ANY`] is a pseudo-method: it matches every request
//! method during filtering and intersects every method set during
//! duplicate detection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;

/// HTTP methods understood by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
    PATCH,
    HEAD,
    OPTIONS,
    /// Wildcard matching every HTTP method.
    ANY,
}

impl HttpMethod {
    /// Convert method to string
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
            HttpMethod::ANY => "ANY",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::GET),
            "POST" => Ok(HttpMethod::POST),
            "PUT" => Ok(HttpMethod::PUT),
            "DELETE" => Ok(HttpMethod::DELETE),
            "PATCH" => Ok(HttpMethod::PATCH),
            "HEAD" => Ok(HttpMethod::HEAD),
            "OPTIONS" => Ok(HttpMethod::OPTIONS),
            "ANY" => Ok(HttpMethod::ANY),
            _ => Err(RouterError::InvalidMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True when `set` admits `method`: exact membership or the ANY wildcard.
pub fn allows(set: &[HttpMethod], method: HttpMethod) -> bool {
    set.iter().any(|m| *m == method || *m == HttpMethod::ANY)
}

/// True when the two sets intersect. ANY on either side intersects
/// everything.
pub fn overlaps(a: &[HttpMethod], b: &[HttpMethod]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&HttpMethod::ANY)
        || b.contains(&HttpMethod::ANY)
        || a.iter().any(|m| b.contains(m))
}

/// Join a method set for display and id derivation (`"GET.POST"`).
pub fn join(set: &[HttpMethod]) -> String {
    set.iter().map(HttpMethod::as_str).collect::<Vec<_>>().join(".")
}

/// Conversion into a deduplicated, non-empty method set.
///
/// Implemented for single methods, method slices and vectors, and
/// comma-separated strings.
pub trait IntoMethods {
    fn into_methods(self) -> Result<Vec<HttpMethod>, RouterError>;
}

impl IntoMethods for HttpMethod {
    fn into_methods(self) -> Result<Vec<HttpMethod>, RouterError> {
        Ok(vec![self])
    }
}

impl IntoMethods for Vec<HttpMethod> {
    fn into_methods(self) -> Result<Vec<HttpMethod>, RouterError> {
        let mut set = Vec::with_capacity(self.len());
        for method in self {
            if !set.contains(&method) {
                set.push(method);
            }
        }
        if set.is_empty() {
            return Err(RouterError::InvalidMethod(String::new()));
        }
        Ok(set)
    }
}

impl IntoMethods for &[HttpMethod] {
    fn into_methods(self) -> Result<Vec<HttpMethod>, RouterError> {
        self.to_vec().into_methods()
    }
}

impl IntoMethods for &str {
    fn into_methods(self) -> Result<Vec<HttpMethod>, RouterError> {
        let mut set = Vec::new();
        for part in self.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let method = part.parse::<HttpMethod>()?;
            if !set.contains(&method) {
                set.push(method);
            }
        }
        if set.is_empty() {
            return Err(RouterError::InvalidMethod(self.to_string()));
        }
        Ok(set)
    }
}

impl IntoMethods for String {
    fn into_methods(self) -> Result<Vec<HttpMethod>, RouterError> {
        self.as_str().into_methods()
    }
}

impl IntoMethods for &[&str] {
    fn into_methods(self) -> Result<Vec<HttpMethod>, RouterError> {
        self.join(",").into_methods()
    }
}
