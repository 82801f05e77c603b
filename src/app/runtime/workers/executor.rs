//! Background worker running confirmed install/uninstall operations.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::install::{ExecutorReport, ExecutorRequest, execute_plan};

/// What: Spawn the executor worker.
///
/// Inputs:
/// - `req_rx`: Requests built by the event loop on commit
/// - `res_tx`: Reports sent back to the event loop
/// - `cancel`: Parent token; cancellation stops the worker before its next command
///
/// Details:
/// - Requests are handled one after another so two commits never run package managers
///   concurrently.
pub fn spawn_executor_worker(
    mut req_rx: mpsc::UnboundedReceiver<ExecutorRequest>,
    res_tx: mpsc::UnboundedSender<ExecutorReport>,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        loop {
            let request = tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                req = req_rx.recv() => match req {
                    Some(r) => r,
                    None => break,
                },
            };
            tracing::info!(
                operations = request.plan.len(),
                dry_run = request.dry_run,
                "executor received request"
            );
            let report = execute_plan(request, &cancel).await;
            if cancel.is_cancelled() || res_tx.send(report).is_err() {
                break;
            }
        }
        tracing::debug!("executor worker stopped");
    });
}
