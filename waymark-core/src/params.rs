//! Extracted path parameters and the current-match shim
//!
//! Handlers receive the extracted parameter mapping as their argument;
//! that is the primary access path. For handler code that cannot take the
//! argument directly, [`current_params`] and [`current_param`] expose the
//! mapping of the route being dispatched on the current thread. The shim
//! is set immediately before a handler is invoked and cleared right
//! after, so it is only meaningful for the duration of that single
//! invocation.

use std::cell::RefCell;
use std::collections::HashMap;

/// Path parameters extracted from a matched route
pub type PathParams = HashMap<String, String>;

thread_local! {
    // Scoped to the dispatching thread so concurrent hosts with one
    // router per worker cannot observe each other's match.
    static CURRENT_PARAMS: RefCell<Option<PathParams>> = RefCell::new(None);
}

/// Parameters of the route currently being dispatched on this thread.
/// Empty outside of a handler invocation.
pub fn current_params() -> PathParams {
    CURRENT_PARAMS.with(|cell| cell.borrow().clone().unwrap_or_default())
}

/// A single parameter of the current route, or `fallback` when absent.
pub fn current_param(name: &str, fallback: &str) -> String {
    current_params()
        .get(name)
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

pub(crate) fn set_current(params: &PathParams) {
    CURRENT_PARAMS.with(|cell| *cell.borrow_mut() = Some(params.clone()));
}

pub(crate) fn clear_current() {
    CURRENT_PARAMS.with(|cell| *cell.borrow_mut() = None);
}
