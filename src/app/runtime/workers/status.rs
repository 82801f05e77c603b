//! One-at-a-time status refresh pipeline.
//!
//! A single task drains an explicit queue of [`StatusRequest`]s. Each check
//! finishes (or times out) before the next one starts, and its result is sent
//! back to the event loop as an [`AppEvent`].

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::events::AppEvent;
use crate::state::types::StatusUpdate;
use crate::status::{StatusChecker, StatusRequest, VersionFetcher, bounded_check, bounded_version};

/// Instructions for the status worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusCommand {
    /// Drop the queue and check every given application from the start.
    RefreshAll(Vec<StatusRequest>),
    /// Append applications that are not already queued.
    Enqueue(Vec<StatusRequest>),
}

/// Backends and pacing used by the status worker.
#[derive(Clone)]
pub struct StatusWorker {
    /// Installation checker.
    pub checker: Arc<dyn StatusChecker>,
    /// Version fetcher used after positive checks.
    pub fetcher: Arc<dyn VersionFetcher>,
    /// Pause before the first check.
    pub start_delay: Duration,
}

/// Apply one command to the pending queue.
fn apply_command(queue: &mut VecDeque<StatusRequest>, cmd: StatusCommand) {
    match cmd {
        StatusCommand::RefreshAll(requests) => {
            tracing::debug!(count = requests.len(), "status queue restarted");
            queue.clear();
            queue.extend(requests);
        }
        StatusCommand::Enqueue(requests) => {
            for r in requests {
                if !queue.iter().any(|q| q.key == r.key) {
                    queue.push_back(r);
                }
            }
        }
    }
}

impl StatusWorker {
    /// What: Drain status commands until the channel closes or `cancel` fires.
    ///
    /// Inputs:
    /// - `cmd_rx`: Commands from the event loop
    /// - `event_tx`: Sink for [`AppEvent::StatusUpdate`] / [`AppEvent::VersionUpdate`]
    /// - `cancel`: Parent token bounding every check
    ///
    /// Details:
    /// - Pending commands are applied before each check, so a refresh restarts the queue at
    ///   the next step.
    /// - An installed result is followed by a best-effort version fetch for the same key.
    /// - After cancellation no further events are sent.
    pub async fn run(
        self,
        mut cmd_rx: mpsc::UnboundedReceiver<StatusCommand>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        cancel: CancellationToken,
    ) {
        let mut queue: VecDeque<StatusRequest> = VecDeque::new();
        let mut started = false;
        loop {
            while let Ok(cmd) = cmd_rx.try_recv() {
                apply_command(&mut queue, cmd);
            }
            let Some(request) = queue.pop_front() else {
                let cmd = tokio::select! {
                    biased;
                    () = cancel.cancelled() => None,
                    cmd = cmd_rx.recv() => cmd,
                };
                match cmd {
                    Some(cmd) => {
                        apply_command(&mut queue, cmd);
                        continue;
                    }
                    None => break,
                }
            };
            if !started {
                started = true;
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => break,
                    () = tokio::time::sleep(self.start_delay) => {}
                }
                // Commands that arrived during the delay still take precedence.
                queue.push_front(request);
                continue;
            }

            let Some(installed) = bounded_check(&*self.checker, &request, &cancel).await else {
                break;
            };
            let update = StatusUpdate {
                key: request.key.clone(),
                installed,
            };
            if event_tx.send(AppEvent::StatusUpdate(update)).is_err() {
                break;
            }
            if installed {
                let Some(version) = bounded_version(&*self.fetcher, &request, &cancel).await else {
                    break;
                };
                let ev = AppEvent::VersionUpdate {
                    key: request.key,
                    version,
                };
                if event_tx.send(ev).is_err() {
                    break;
                }
            }
            tokio::task::yield_now().await;
        }
        tracing::debug!(remaining = queue.len(), "status worker stopped");
    }

    /// Spawn [`StatusWorker::run`] on the runtime.
    pub fn spawn(
        self,
        cmd_rx: mpsc::UnboundedReceiver<StatusCommand>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        cancel: CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run(cmd_rx, event_tx, cancel))
    }
}
