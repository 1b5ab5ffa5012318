//! # System Lifecycle
//!
//! Starting, wiring and stopping the sample system.
//!
//! - [`PersonSystem`] - spawns the person store, builds the Siren mapper and shuts down cleanly
//! - [`setup_tracing`] - installs the log subscriber
//!
//! Shutdown follows the actor pattern: dropping every client closes the store's channel, the
//! store logs its final size and exits, and [`PersonSystem::shutdown`] awaits its task.

pub mod system;
pub mod tracing;

pub use system::*;
pub use tracing::*;
