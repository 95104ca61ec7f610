//! Route options
//!
//! Options are free-form named values attached to a route at
//! registration, merged over documented defaults. A value is either a
//! literal JSON value or a function computed lazily every time the option
//! is read, with the route as its sole argument (e.g. a title derived
//! from context).
//!
//! Documented defaults:
//!
//! - `robots: false` - whether the page allows indexing by robots
//! - `private: false` - whether the route requires authentication
//! - `capabilities: "manage_options"` - capability required when private
//!
//! Free-form keys like `title` and `body_class` are carried verbatim.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::route::Route;

/// Capability required by private routes when none is configured.
pub const DEFAULT_CAPABILITY: &str = "manage_options";

/// A single option value: literal, or computed on every read.
#[derive(Clone)]
pub enum OptionValue {
    Literal(Value),
    Computed(Arc<dyn Fn(&Route) -> Value + Send + Sync>),
}

impl OptionValue {
    /// Wrap a function resolved lazily at read time.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Route) -> Value + Send + Sync + 'static,
    {
        OptionValue::Computed(Arc::new(f))
    }
}

impl std::fmt::Debug for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            OptionValue::Computed(_) => f.debug_tuple("Computed").finish(),
        }
    }
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        OptionValue::Literal(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Literal(Value::Bool(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Literal(Value::String(value.to_string()))
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Literal(Value::String(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Literal(Value::from(value))
    }
}

/// Named option values attached to a route.
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    values: HashMap<String, OptionValue>,
}

impl RouteOptions {
    /// Empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The documented defaults every route starts from.
    pub fn defaults() -> Self {
        Self::new()
            .with("robots", false)
            .with("private", false)
            .with("capabilities", DEFAULT_CAPABILITY)
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Insert or replace a value.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Apply `overrides` on top of `self`; overriding keys win.
    pub fn merged(mut self, overrides: RouteOptions) -> Self {
        self.values.extend(overrides.values);
        self
    }
}

/// Loose truthiness for option values, so hosts can store `true`, `1` or
/// a non-empty string interchangeably for flags like `private`.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = RouteOptions::defaults();
        assert!(matches!(
            options.get("robots"),
            Some(OptionValue::Literal(Value::Bool(false)))
        ));
        assert!(matches!(
            options.get("private"),
            Some(OptionValue::Literal(Value::Bool(false)))
        ));
        assert!(matches!(
            options.get("capabilities"),
            Some(OptionValue::Literal(Value::String(s))) if s == DEFAULT_CAPABILITY
        ));
    }

    #[test]
    fn test_merged_overrides_win() {
        let merged = RouteOptions::defaults()
            .merged(RouteOptions::new().with("private", true).with("title", "Dashboard"));

        assert!(matches!(
            merged.get("private"),
            Some(OptionValue::Literal(Value::Bool(true)))
        ));
        assert!(matches!(
            merged.get("title"),
            Some(OptionValue::Literal(Value::String(s))) if s == "Dashboard"
        ));
        // Untouched defaults survive the merge
        assert!(merged.contains("capabilities"));
    }

    #[test]
    fn test_truthy() {
        assert!(!truthy(&Value::Null));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!("yes")));
    }
}
