//! Install subsystem: package-manager command builders, the executor and the audit log.

pub mod command;
mod executor;
mod logging;

pub use command::{PlannedCommand, build_command, shell_single_quote};
pub use executor::{ExecutorReport, ExecutorRequest, PlannedOperation, execute_plan, plan_operations};
pub use logging::log_operations;
