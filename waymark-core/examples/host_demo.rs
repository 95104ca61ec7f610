//! Minimal host embedding: wire collaborators, register routes during
//! init, then drive the router with a few requests and act on the
//! outcomes the way a host framework would.
//!
//! Run with: `cargo run --example host_demo`

use std::sync::Arc;

use waymark_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let meta = Arc::new(MemoryMetaStore::new());
    let auth = Arc::new(StaticAuth::new(true).with_capability("edit_pages"));

    let mut router = Router::new().with_auth(auth).with_meta(meta.clone());

    router.get(
        "/users/:id",
        |params| println!("  -> user profile for {}", params["id"]),
        RouteOptions::new().with("title", "User profile"),
    )?;

    router.register(
        "GET,POST",
        "/contact",
        Handler::new(|_| println!("  -> contact form")),
        RouteOptions::new().with("body_class", "contact narrow"),
    )?;

    router.get(
        "/admin/settings",
        |_| println!("  -> admin settings"),
        RouteOptions::new().with("private", true).with("capabilities", "edit_pages"),
    )?;

    // An admin-style override persisted outside the process.
    if let Some(route) = router.exists("/users/:id", "GET") {
        meta.set(route.id(), "title", serde_json::json!("Member profile"));
    }

    for (method, path) in [
        ("GET", "/users/42"),
        ("POST", "/contact"),
        ("GET", "/admin/settings"),
        ("GET", "/nowhere"),
    ] {
        println!("{} {}", method, path);
        match router.handle_request(method, path) {
            DispatchOutcome::Handled { effects, .. } => {
                println!("  handled; title={:?} classes={:?}", effects.title, effects.body_classes);
            }
            DispatchOutcome::Unauthorized => println!("  401 unauthorized"),
            DispatchOutcome::NotFound => println!("  falling through to host handling"),
            DispatchOutcome::Error(e) => println!("  error: {}", e),
        }
    }

    Ok(())
}
