//! Runs planned package-manager commands and reports what finished.

use std::process::Stdio;

use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use super::command::{PlannedCommand, build_command};
use crate::catalog::Catalog;
use crate::state::types::SelectedOperation;

/// One confirmed operation paired with its command (or the reason it has none).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedOperation {
    /// Confirmed user intent.
    pub operation: SelectedOperation,
    /// Command to run, or why the operation is unsupported.
    pub command: Result<PlannedCommand, String>,
}

/// Work handed to the executor worker.
#[derive(Clone, Debug)]
pub struct ExecutorRequest {
    /// Operations in confirmation order.
    pub plan: Vec<PlannedOperation>,
    /// If `true`, commands are only logged.
    pub dry_run: bool,
}

/// Result of one executor request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutorReport {
    /// Operations whose command exited successfully.
    pub completed: Vec<SelectedOperation>,
    /// Human-readable failure lines (`<name>: <reason>`).
    pub failed: Vec<String>,
    /// `DRY RUN: <command>` lines, one per planned command.
    pub dry_run_lines: Vec<String>,
}

/// What: Pair each confirmed operation with its package-manager command.
///
/// Inputs:
/// - `catalog`: Catalog used to resolve keys to applications
/// - `ops`: Confirmed operations
///
/// Output:
/// - One [`PlannedOperation`] per input, in order; unknown keys carry an error.
#[must_use]
pub fn plan_operations(catalog: &Catalog, ops: &[SelectedOperation]) -> Vec<PlannedOperation> {
    ops.iter()
        .map(|op| PlannedOperation {
            operation: op.clone(),
            command: catalog.get(&op.key).map_or_else(
                || Err(format!("{} is not in the catalog", op.key)),
                |app| build_command(app, op.operation),
            ),
        })
        .collect()
}

/// What: Spawn one command and wait for it.
///
/// Output:
/// - `Ok(())` on a zero exit status; `Err` with the last stderr line (or the exit status).
async fn run_command(cmd: &PlannedCommand) -> Result<(), String> {
    let out = Command::new(&cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| format!("failed to start {}: {e}", cmd.program))?;
    if out.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&out.stderr);
    let reason = stderr
        .lines()
        .map(str::trim)
        .rfind(|l| !l.is_empty())
        .map_or_else(|| out.status.to_string(), str::to_string);
    if cmd.uses_sudo() && reason.contains("password is required") {
        return Err(format!("{reason} (run `sudo -v` first)"));
    }
    Err(reason)
}

/// What: Execute a request sequentially.
///
/// Inputs:
/// - `request`: Planned operations and the dry-run flag
/// - `cancel`: Parent token; cancellation stops before the next command
///
/// Output:
/// - Report with completed operations, failures and dry-run lines.
///
/// Details:
/// - Unsupported operations are reported as failures without spawning anything.
/// - Successful operations are appended to the operations audit log.
pub async fn execute_plan(request: ExecutorRequest, cancel: &CancellationToken) -> ExecutorReport {
    let mut report = ExecutorReport::default();
    for planned in request.plan {
        let name = planned.operation.name.clone();
        let cmd = match planned.command {
            Ok(cmd) => cmd,
            Err(e) => {
                report.failed.push(format!("{name}: {e}"));
                continue;
            }
        };
        if request.dry_run {
            let line = format!("DRY RUN: {}", cmd.display());
            tracing::info!("{line}");
            report.dry_run_lines.push(line);
            continue;
        }
        tracing::info!(command = %cmd.display(), "running operation");
        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::info!("executor cancelled");
                break;
            }
            r = run_command(&cmd) => r,
        };
        match result {
            Ok(()) => report.completed.push(planned.operation),
            Err(e) => {
                tracing::warn!(key = %planned.operation.key, error = %e, "operation failed");
                report.failed.push(format!("{name}: {e}"));
            }
        }
    }
    if !report.completed.is_empty()
        && let Err(e) = super::log_operations(&report.completed)
    {
        tracing::warn!(error = %e, "failed to write operations log");
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_catalog;
    use crate::state::types::Operation;

    fn op(key: &str, operation: Operation) -> SelectedOperation {
        SelectedOperation {
            key: key.into(),
            operation,
            name: key.into(),
        }
    }

    #[test]
    /// What: Planning resolves keys and flags unsupported or unknown entries.
    ///
    /// Inputs:
    /// - apt install, github install, unknown key.
    ///
    /// Output:
    /// - Command for apt; errors for the other two.
    fn plan_operations_resolves_commands() {
        let plan = plan_operations(
            &test_catalog(),
            &[
                op("htop", Operation::Install),
                op("lazygit", Operation::Install),
                op("nope", Operation::Uninstall),
            ],
        );
        assert_eq!(plan.len(), 3);
        assert_eq!(
            plan[0].command.as_ref().map(PlannedCommand::display),
            Ok("sudo -n apt-get install -y htop".to_string())
        );
        assert!(plan[1].command.is_err());
        assert!(
            plan[2]
                .command
                .as_ref()
                .is_err_and(|e| e.contains("not in the catalog"))
        );
    }

    #[tokio::test]
    /// What: Dry runs only describe commands and report unsupported operations as failures.
    ///
    /// Inputs:
    /// - Dry-run request with an apt uninstall and an unsupported github install.
    ///
    /// Output:
    /// - One `DRY RUN:` line, one failure, nothing completed.
    async fn dry_run_reports_lines_only() {
        let plan = plan_operations(
            &test_catalog(),
            &[op("btop", Operation::Uninstall), op("lazygit", Operation::Install)],
        );
        let report = execute_plan(ExecutorRequest { plan, dry_run: true }, &CancellationToken::new()).await;
        assert!(report.completed.is_empty());
        assert_eq!(
            report.dry_run_lines,
            vec!["DRY RUN: sudo -n apt-get remove -y btop".to_string()]
        );
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].starts_with("lazygit: "));
    }
}
