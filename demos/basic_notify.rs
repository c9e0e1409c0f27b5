//! # Example: basic_notify
//!
//! Attach a few observers to an HTTP-request-like subject and broadcast events.
//!
//! Demonstrates:
//! - Priority ordering (higher priority runs first, ties in attach order)
//! - Broadcast vs. halt-on-first notification
//! - Group detach by kind
//!
//! ## Run
//! ```bash
//! cargo run --example basic_notify
//! ```

use std::sync::Arc;

use eventvisor::{Observer, ObserverError, ObserverFn, ObserverRef, Registry, kind_of};

struct Request {
    method: &'static str,
    url: &'static str,
}

/// Answers cacheable requests before they hit the network.
struct CachePlugin;

impl Observer<Request, str> for CachePlugin {
    fn update(&self, req: &Request, event: &str, _: Option<&str>) -> Result<bool, ObserverError> {
        let hit = event == "request.before_send" && req.method == "GET";
        println!("[cache] event={event} hit={hit}");
        Ok(hit)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subject = Arc::new(Request {
        method: "GET",
        url: "https://example.com/",
    });
    let mut reg: Registry<Request, str> = Registry::new(subject, Vec::new());

    let audit: ObserverRef<Request, str> =
        ObserverFn::arc("audit", |req: &Request, event: &str, ctx| {
            println!("[audit] {} {} event={event} ctx={ctx:?}", req.method, req.url);
            Ok(false)
        });
    let cache: ObserverRef<Request, str> = Arc::new(CachePlugin);

    reg.attach(audit.clone(), -10);
    reg.attach(cache, 100);
    reg.attach(audit, 0); // already attached: no-op

    println!("broadcast -> {:?}", reg.notify("request.before_send", Some("attempt=1"))?);
    println!("until     -> {:?}", reg.notify_until("request.before_send", None)?);

    let removed = reg.detach_kind(kind_of::<CachePlugin>());
    println!("detached {} cache observer(s); {} left", removed.len(), reg.len());
    println!("until     -> {:?}", reg.notify_until("request.before_send", None)?);
    Ok(())
}
