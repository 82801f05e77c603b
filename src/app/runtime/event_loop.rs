use tokio::select;

use super::channels::Channels;
use crate::app::terminal::Screen;
use super::workers::status::StatusCommand;
use crate::events::{AppEvent, Outcome, handle_app_event};
use crate::install::{ExecutorReport, ExecutorRequest, plan_operations};
use crate::state::{AppState, Modal};
use crate::status::StatusRequest;
use crate::ui::ui;

/// Status requests for every catalog application, in catalog order.
fn all_requests(app: &AppState) -> Vec<StatusRequest> {
    app.catalog.apps().map(StatusRequest::from_app).collect()
}

/// What: Act on the follow-up work requested by an event handler.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Worker channels
/// - `outcome`: Result of [`handle_app_event`]
///
/// Output:
/// - `true` when the loop should exit.
fn handle_outcome(app: &mut AppState, channels: &Channels, outcome: Outcome) -> bool {
    match outcome {
        Outcome::Continue => {}
        Outcome::Exit => return true,
        Outcome::Ready | Outcome::RefreshAll => {
            let requests = all_requests(app);
            tracing::info!(count = requests.len(), "starting status refresh");
            let _ = channels.status_tx.send(StatusCommand::RefreshAll(requests));
        }
        Outcome::Recheck(keys) => {
            let requests: Vec<StatusRequest> = keys
                .iter()
                .filter_map(|k| app.catalog.get(k))
                .map(StatusRequest::from_app)
                .collect();
            if !requests.is_empty() {
                let _ = channels.status_tx.send(StatusCommand::Enqueue(requests));
            }
        }
        Outcome::Commit(ops) => {
            let plan = plan_operations(&app.catalog, &ops);
            app.show_toast(format!("Running {} operations", plan.len()));
            let _ = channels.executor_req_tx.send(ExecutorRequest {
                plan,
                dry_run: app.dry_run,
            });
        }
    }
    false
}

/// What: Fold an executor report into the state.
///
/// Details:
/// - The report ends the running commit, so new confirmations are accepted again.
/// - Failures and dry-run lines are shown in an alert; completed operations go through the
///   regular [`AppEvent::CompletedOperations`] path so the status pipeline re-checks them.
fn handle_executor_report(app: &mut AppState, channels: &Channels, report: ExecutorReport) -> bool {
    app.in_flight.clear();
    let mut lines = report.dry_run_lines;
    if !report.failed.is_empty() {
        lines.push(format!("{} operations failed:", report.failed.len()));
        lines.extend(report.failed);
    }
    if !lines.is_empty() {
        app.modal = Modal::Alert {
            message: lines.join("\n"),
        };
    }
    if report.completed.is_empty() {
        return false;
    }
    let outcome = handle_app_event(app, AppEvent::CompletedOperations(report.completed));
    handle_outcome(app, channels, outcome)
}

/// What: Process one message from any channel.
///
/// Output:
/// - `true` if the event loop should exit.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            let outcome = handle_app_event(app, ev);
            handle_outcome(app, channels, outcome)
        }
        Some(report) = channels.executor_res_rx.recv() => {
            handle_executor_report(app, channels, report)
        }
        else => true
    }
}

/// What: Run the main event loop, rendering between messages.
///
/// Inputs:
/// - `terminal`: Terminal for rendering (`None` in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
pub async fn run_event_loop(
    terminal: &mut Option<Screen>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }
        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
