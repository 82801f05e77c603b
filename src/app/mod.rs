//! appshelf application runtime: terminal setup, background workers and the event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::workers::status::{StatusCommand, StatusWorker};
pub use runtime::{initialize_app_state, run};
