//! # Example: shared_registry
//!
//! A one-shot observer that removes itself while being notified.
//!
//! Demonstrates:
//! - `SharedRegistry` cloned into an observer
//! - Snapshot semantics: the change applies from the next pass
//!
//! ## Run
//! ```bash
//! cargo run --example shared_registry
//! ```

use std::sync::Arc;

use eventvisor::{ObserverFn, ObserverRef, SharedRegistry};

struct Connection {
    peer: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let shared: SharedRegistry<Connection> =
        SharedRegistry::with_subject(Arc::new(Connection { peer: "10.0.0.7:443" }), Vec::new());

    let handle = shared.clone();
    let once: ObserverRef<Connection> =
        ObserverFn::arc("handshake", move |c: &Connection, event: &str, _| {
            println!("[handshake] peer={} event={event} (detaching)", c.peer);
            handle.detach_kind("handshake");
            Ok(false)
        });
    let tracer: ObserverRef<Connection> =
        ObserverFn::arc("tracer", |c: &Connection, event: &str, _| {
            println!("[tracer] peer={} event={event}", c.peer);
            Ok(false)
        });

    shared.attach(once, 10);
    shared.attach(tracer, 0);

    for round in 1..=2 {
        let results = shared.notify("conn.open", None)?;
        println!("round {round}: {} observer(s) notified", results.len());
    }
    Ok(())
}
