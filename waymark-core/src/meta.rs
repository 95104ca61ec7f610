//! Per-route metadata overrides
//!
//! Hosts may persist per-route settings outside the process (an
//! admin-edited page title, a toggled robots flag) keyed by the stable
//! route id. A [`MetaProvider`] exposes that store to the router:
//! [`crate::route::Route::get_option`] consults it before the in-memory
//! options on every read.
//!
//! The storage mechanism is the host's concern; [`MemoryMetaStore`] is a
//! ready-made in-memory implementation for hosts without their own store
//! and for tests.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

/// Pluggable override source for route options, keyed by route id and
/// option name.
pub trait MetaProvider: Send + Sync {
    /// Look up an override for `(route_id, name)`. `None` means the
    /// route's own options apply.
    fn get(&self, route_id: &str, name: &str) -> Option<Value>;
}

/// Provider that never overrides anything. The default wiring.
#[derive(Debug, Default)]
pub struct NullMeta;

impl MetaProvider for NullMeta {
    fn get(&self, _route_id: &str, _name: &str) -> Option<Value> {
        None
    }
}

/// Simple thread-safe in-memory override store.
#[derive(Debug, Default)]
pub struct MemoryMetaStore {
    entries: RwLock<HashMap<String, HashMap<String, Value>>>,
}

impl MemoryMetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an override for one route option.
    pub fn set(&self, route_id: &str, name: &str, value: Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries
                .entry(route_id.to_string())
                .or_default()
                .insert(name.to_string(), value);
        }
    }

    /// Remove an override, if present.
    pub fn remove(&self, route_id: &str, name: &str) {
        if let Ok(mut entries) = self.entries.write() {
            if let Some(route_entries) = entries.get_mut(route_id) {
                route_entries.remove(name);
            }
        }
    }
}

impl MetaProvider for MemoryMetaStore {
    fn get(&self, route_id: &str, name: &str) -> Option<Value> {
        let entries = self.entries.read().ok()?;
        entries.get(route_id)?.get(name).cloned()
    }
}
