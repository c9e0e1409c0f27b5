//! # Example: log_writer
//!
//! Route every notification through the built-in `LogWriter` observer.
//!
//! ## Run
//! ```bash
//! RUST_LOG=info cargo run --example log_writer --features logging
//! ```

use std::sync::Arc;

use eventvisor::{LogWriter, ObserverRef, Registry};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let writer: ObserverRef<&'static str, str> = Arc::new(LogWriter::new());
    let reg = Registry::new(Arc::new("GET /index.html"), vec![writer]);

    reg.notify("request.before_send", Some("attempt=1"))?;
    reg.notify("request.complete", None)?;
    Ok(())
}
