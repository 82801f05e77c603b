//! Event handling layer for the appshelf screen.
//!
//! Every message the loop receives is an [`AppEvent`]; handlers mutate
//! [`AppState`] synchronously and report follow-up work to the runtime as an
//! [`Outcome`]. Key handling is split by mode into submodules.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::{
    apply_completed_operations, apply_filter_update, apply_search_update, apply_status_update,
    apply_version_update, sync_view,
};
use crate::state::types::{FilterSettings, ScreenMode, SearchFocus, SelectedOperation, StatusUpdate};
use crate::state::AppState;

mod modals;
mod normal;
mod search;

/// Rows reserved outside the list body (header and footer).
pub const CHROME_ROWS: u16 = 2;

/// Messages processed by the event loop, one at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    /// Terminal size changed (also sent once at startup).
    WindowResize {
        /// Terminal columns.
        width: u16,
        /// Terminal rows.
        height: u16,
    },
    /// Result of one status check.
    StatusUpdate(StatusUpdate),
    /// Version fetched for an installed application (empty on failure).
    VersionUpdate {
        /// Application key.
        key: String,
        /// Version string.
        version: String,
    },
    /// Replacement search query.
    SearchUpdate(String),
    /// Replacement filter/sort settings.
    FilterUpdate(FilterSettings),
    /// Terminal key press.
    KeyInput(KeyEvent),
    /// Operations the executor finished successfully.
    CompletedOperations(Vec<SelectedOperation>),
    /// Periodic tick (toast expiry).
    Tick,
}

/// Follow-up work requested from the runtime after handling an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do.
    Continue,
    /// Leave the event loop.
    Exit,
    /// First window size is known: start the status pipeline.
    Ready,
    /// Re-check every application from the start of the catalog.
    RefreshAll,
    /// Re-check the given keys (after completed operations).
    Recheck(Vec<String>),
    /// Hand confirmed operations to the executor.
    Commit(Vec<SelectedOperation>),
}

/// What: Dispatch one event and mutate the [`AppState`].
///
/// Inputs:
/// - `app`: Mutable application state
/// - `event`: Event to handle
///
/// Output:
/// - The [`Outcome`] the runtime should act on.
///
/// Details:
/// - Every state-changing branch ends with [`sync_view`] so content, block metrics and scroll
///   offsets never lag behind the state.
pub fn handle_app_event(app: &mut AppState, event: AppEvent) -> Outcome {
    let outcome = match event {
        AppEvent::WindowResize { width, height } => handle_resize(app, width, height),
        AppEvent::StatusUpdate(update) => {
            apply_status_update(app, &update);
            Outcome::Continue
        }
        AppEvent::VersionUpdate { key, version } => {
            apply_version_update(app, &key, &version);
            Outcome::Continue
        }
        AppEvent::SearchUpdate(query) => {
            apply_search_update(app, query);
            Outcome::Continue
        }
        AppEvent::FilterUpdate(filters) => {
            apply_filter_update(app, filters);
            Outcome::Continue
        }
        AppEvent::KeyInput(ke) => handle_key(app, ke),
        AppEvent::CompletedOperations(ops) => {
            apply_completed_operations(app, &ops);
            let summary = completed_summary(&ops);
            if !summary.is_empty() {
                app.show_toast(summary);
            }
            Outcome::Recheck(ops.into_iter().map(|o| o.key).collect())
        }
        AppEvent::Tick => {
            app.expire_toast(std::time::Instant::now());
            return Outcome::Continue;
        }
    };
    sync_view(app);
    outcome
}

/// What: Apply a new terminal size to both viewports.
///
/// Output:
/// - [`Outcome::Ready`] on the first resize, [`Outcome::Continue`] afterwards.
fn handle_resize(app: &mut AppState, width: u16, height: u16) -> Outcome {
    let body = height.saturating_sub(CHROME_ROWS);
    app.list_viewport.set_size(width, body);
    app.search_viewport.set_size(width, body);
    tracing::debug!(width, height, body, "window resized");
    if app.ready {
        Outcome::Continue
    } else {
        app.ready = true;
        tracing::info!("screen ready");
        Outcome::Ready
    }
}

/// What: Route a key press by modal, then by screen mode.
///
/// Details:
/// - Only `Press` events are handled; Ctrl-C exits from anywhere.
fn handle_key(app: &mut AppState, ke: KeyEvent) -> Outcome {
    if ke.kind != KeyEventKind::Press {
        return Outcome::Continue;
    }
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return Outcome::Exit;
    }
    if app.modal.is_open() {
        return modals::handle_modal_key(app, ke);
    }
    match app.mode {
        ScreenMode::Normal => normal::handle_normal_key(app, ke),
        ScreenMode::Search(SearchFocus::Field) => search::handle_field_key(app, ke),
        ScreenMode::Search(SearchFocus::Results) => search::handle_results_key(app, ke),
    }
}

/// Shared handling for `f`, `t`, `s` and `r`; `None` when `code` is not one of them.
fn handle_filter_key(app: &mut AppState, code: KeyCode) -> Option<Outcome> {
    let mut filters = app.filters;
    match code {
        KeyCode::Char('f') => filters.install_status = filters.install_status.next(),
        KeyCode::Char('t') => filters.package_type = filters.package_type.next(),
        KeyCode::Char('s') => filters.sort = filters.sort.next(),
        KeyCode::Char('r') => {
            app.catalog.mark_all_pending();
            app.show_toast("Refreshing installation status");
            return Some(Outcome::RefreshAll);
        }
        _ => return None,
    }
    Some(handle_app_event(app, AppEvent::FilterUpdate(filters)))
}

/// Toast text for a batch of completed operations.
fn completed_summary(ops: &[SelectedOperation]) -> String {
    match ops {
        [] => String::new(),
        [one] => format!("{} {}ed", one.name, one.operation.verb()),
        many => format!("{} operations completed", many.len()),
    }
}

#[cfg(test)]
pub(crate) fn key(code: KeyCode) -> AppEvent {
    AppEvent::KeyInput(KeyEvent::new(code, KeyModifiers::NONE))
}

#[cfg(test)]
mod tests;
