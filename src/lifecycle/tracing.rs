//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! What gets traced:
//!
//! - **Store lifecycle**: startup, shutdown and final size (`entity_type` field)
//! - **Store operations**: Create, Get, List, Update, Delete with the entity `id`
//! - **Service calls**: one span per [`PersonService`](crate::person::PersonService) method
//! - **Codec**: `Encoded` events with `shape`, `links`, `actions` and `entities` counts at
//!   debug level, rejected sub-entities at warn level
//!
//! ```bash
//! RUST_LOG=info cargo run                        # lifecycle only
//! RUST_LOG=debug cargo run                       # payloads and codec events
//! RUST_LOG=hateoas_siren::siren=debug cargo run  # codec only
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
