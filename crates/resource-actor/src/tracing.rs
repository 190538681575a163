//! # Observability
//!
//! One subscriber for the whole process. Actors log their lifecycle and every
//! request with an `entity_type` field, clients add `#[instrument]` spans, and
//! the HTTP layer adds request spans on top.
//!
//! ```bash
//! RUST_LOG=info cargo run               # lifecycle and state changes
//! RUST_LOG=debug cargo run              # payloads, lookups, engine evaluations
//! RUST_LOG=stockwise=debug,info cargo run
//! ```
//!
//! At `info` a suggestion being accepted reads roughly:
//!
//! ```text
//! INFO accept_suggestion{sku=BAN-001}: Action ok entity_type="Suggestion" id=BAN-001
//! INFO accept_suggestion{sku=BAN-001}: Created entity_type="Order" id=order_3 size=3
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Filtering comes from `RUST_LOG` and falls back to `info`. Module paths are
/// hidden (`with_target(false)`) because every actor event already carries
/// `entity_type`. Calling this twice is harmless; the second call is ignored,
/// which lets tests and binaries share it.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
