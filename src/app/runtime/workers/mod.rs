/// Terminal input reader and tick timer.
pub mod auxiliary;
/// Install/uninstall executor worker.
pub mod executor;
/// One-at-a-time status refresh worker.
pub mod status;
