//! # Observability & Tracing
//!
//! Structured logging with the `tracing` crate. Store operations log the record type,
//! id and store size; lifecycle calls log the columns involved.
//!
//! ```bash
//! # Orders created, moved, deleted
//! RUST_LOG=info cargo run
//!
//! # Every store request, drag target changes, payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the store actor
//! RUST_LOG=store_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a short session reads like:
//!
//! ```text
//! INFO Store started entity_type="Order"
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO create: Order created id=order_1 column=ordered
//! INFO Put entity_type="Order" id=order_1 replaced=true size=1
//! INFO update: Order moved id=order_1 from=ordered to=preparing
//! ```

/// Initializes the global subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
