use std::io::Write;
use std::path::Path;

use crate::state::types::SelectedOperation;

/// What: Append completed operations to an audit log under the logs directory.
///
/// Input:
/// - `ops`: Operations that finished successfully.
///
/// Output:
/// - `Ok(())` on success; otherwise an I/O error.
///
/// # Errors
/// - Returns `Err` when the log file cannot be opened or written to.
///
/// Details:
/// - Writes to `logs_dir/operations.log`, one `<timestamp> <verb> <key>` line per operation.
pub fn log_operations(ops: &[SelectedOperation]) -> std::io::Result<()> {
    log_operations_to(&crate::config::logs_dir().join("operations.log"), ops)
}

/// Same as [`log_operations`] with an explicit file path.
pub(crate) fn log_operations_to(path: &Path, ops: &[SelectedOperation]) -> std::io::Result<()> {
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let when = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    for op in ops {
        writeln!(f, "{when} {} {}", op.operation.verb(), op.key)?;
    }
    Ok(())
}
