use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::workers::status::StatusCommand;
use crate::events::AppEvent;
use crate::install::{ExecutorReport, ExecutorRequest};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Every worker reports into the event loop through these channels; the loop is the only
///   place state is mutated.
pub struct Channels {
    /// Sender cloned into the input reader, tick and status workers.
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Events consumed by the loop.
    pub event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Stops the blocking input thread.
    pub input_cancelled: Arc<AtomicBool>,
    /// Commands for the status worker.
    pub status_tx: mpsc::UnboundedSender<StatusCommand>,
    /// Receiver handed to the status worker when it is spawned.
    pub status_rx: Option<mpsc::UnboundedReceiver<StatusCommand>>,
    /// Requests for the executor worker.
    pub executor_req_tx: mpsc::UnboundedSender<ExecutorRequest>,
    /// Receiver handed to the executor worker when it is spawned.
    pub executor_req_rx: Option<mpsc::UnboundedReceiver<ExecutorRequest>>,
    /// Sender handed to the executor worker.
    pub executor_res_tx: mpsc::UnboundedSender<ExecutorReport>,
    /// Executor reports consumed by the loop.
    pub executor_res_rx: mpsc::UnboundedReceiver<ExecutorReport>,
    /// Parent token for every background task.
    pub cancel: CancellationToken,
}

impl Channels {
    /// What: Create all channel pairs and the shared cancellation token.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<AppEvent>();
        let (status_tx, status_rx) = mpsc::unbounded_channel::<StatusCommand>();
        let (executor_req_tx, executor_req_rx) = mpsc::unbounded_channel::<ExecutorRequest>();
        let (executor_res_tx, executor_res_rx) = mpsc::unbounded_channel::<ExecutorReport>();
        Self {
            event_tx,
            event_rx,
            input_cancelled: Arc::new(AtomicBool::new(false)),
            status_tx,
            status_rx: Some(status_rx),
            executor_req_tx,
            executor_req_rx: Some(executor_req_rx),
            executor_res_tx,
            executor_res_rx,
            cancel: CancellationToken::new(),
        }
    }

    /// What: Signal every background task to stop.
    ///
    /// Details:
    /// - Cancels the token (status checks, executor, tick) and raises the input thread flag.
    pub fn shutdown(&self) {
        self.cancel.cancel();
        self.input_cancelled
            .store(true, std::sync::atomic::Ordering::Relaxed);
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
