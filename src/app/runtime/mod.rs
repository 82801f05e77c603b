use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::events::AppEvent;
use crate::state::AppState;
use crate::status::CommandStatusChecker;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
pub mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use workers::auxiliary::{spawn_input_thread, spawn_tick_worker};
use workers::executor::spawn_executor_worker;
use workers::status::StatusWorker;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Terminal size assumed in headless mode.
const HEADLESS_SIZE: (u16, u16) = (80, 24);

/// What: Build the initial screen state from the catalog and settings.
///
/// Inputs:
/// - `catalog`: Loaded catalog
/// - `settings`: User settings (filters, scroll buffer, dry-run default)
/// - `dry_run_flag`: `--dry-run`; either source enables dry-run
///
/// Output:
/// - State in Normal mode with the configured filters and buffer.
#[must_use]
pub fn initialize_app_state(catalog: Catalog, settings: &Settings, dry_run_flag: bool) -> AppState {
    let mut app = AppState::new(catalog);
    app.filters = settings.filters();
    app.scroll_buffer = settings.scroll_buffer;
    app.dry_run = dry_run_flag || settings.dry_run_default;
    tracing::info!(
        categories = app.catalog.category_count(),
        apps = app.catalog.app_count(),
        dry_run = app.dry_run,
        "state initialised"
    );
    app
}

/// What: Run the appshelf screen end-to-end: set up the terminal, spawn workers, drive the
/// event loop and restore the terminal on exit.
///
/// Inputs:
/// - `catalog`: Loaded catalog
/// - `settings`: User settings
/// - `dry_run_flag`: When `true`, package-manager commands are logged instead of executed
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup or restore errors.
///
/// Details:
/// - Workers: terminal input reader, tick timer, status pipeline and executor, all bound to one
///   cancellation token that is cancelled when the loop ends.
/// - Headless mode (`APPSHELF_TEST_HEADLESS=1`) skips the terminal and the status pipeline and
///   feeds a fixed window size.
pub async fn run(catalog: Catalog, settings: Settings, dry_run_flag: bool) -> Result<()> {
    let headless = crate::util::is_headless();
    let mut terminal = if headless {
        None
    } else {
        Some(setup_terminal()?)
    };

    let mut app = initialize_app_state(catalog, &settings, dry_run_flag);
    let mut channels = Channels::new();

    if !headless && let Some(status_rx) = channels.status_rx.take() {
        let checker = Arc::new(CommandStatusChecker);
        StatusWorker {
            checker: checker.clone(),
            fetcher: checker,
            start_delay: Duration::from_millis(settings.status_check_delay_ms),
        }
        .spawn(status_rx, channels.event_tx.clone(), channels.cancel.clone());
    }
    if let Some(req_rx) = channels.executor_req_rx.take() {
        spawn_executor_worker(req_rx, channels.executor_res_tx.clone(), channels.cancel.clone());
    }
    spawn_tick_worker(channels.event_tx.clone(), channels.cancel.clone());
    spawn_input_thread(
        headless,
        channels.event_tx.clone(),
        channels.input_cancelled.clone(),
    );

    let (width, height) = if headless {
        HEADLESS_SIZE
    } else {
        crossterm::terminal::size().unwrap_or(HEADLESS_SIZE)
    };
    let _ = channels.event_tx.send(AppEvent::WindowResize { width, height });

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    tracing::debug!("main loop exited; stopping workers");
    channels.shutdown();

    drop(terminal);
    restore_terminal()
}
