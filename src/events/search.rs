//! Search-mode key handling for the text field and the result list.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{AppEvent, Outcome, handle_app_event, handle_filter_key};
use crate::logic::{
    deactivate_search, mark_uninstall_on_target, move_search_selection, open_confirmation,
    toggle_install_on_target, toggle_search_focus,
};
use crate::state::{AppState, Modal};

/// What: Handle a key press while the search field has focus.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `ke`: Key event
///
/// Output:
/// - Always [`Outcome::Continue`].
///
/// Details:
/// - Printable characters (including `j`, `k`, `g`, space and `d`) edit the query.
/// - Up/Down are ignored; `{`/`}` move focus to the results.
/// - Enter leaves search keeping the query; Esc leaves search and clears it.
pub(super) fn handle_field_key(app: &mut AppState, ke: KeyEvent) -> Outcome {
    match ke.code {
        KeyCode::Esc => deactivate_search(app, false),
        KeyCode::Enter => deactivate_search(app, true),
        KeyCode::Char('{' | '}') | KeyCode::Tab => toggle_search_focus(app),
        KeyCode::Backspace => {
            let mut q = app.query.clone();
            if q.pop().is_some() {
                return handle_app_event(app, AppEvent::SearchUpdate(q));
            }
        }
        KeyCode::Char(c) if !ke.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            let mut q = app.query.clone();
            q.push(c);
            return handle_app_event(app, AppEvent::SearchUpdate(q));
        }
        _ => {}
    }
    Outcome::Continue
}

/// What: Handle a key press while the result list has focus.
///
/// Output:
/// - [`Outcome::Exit`] for `q`, [`Outcome::RefreshAll`] for `r`, otherwise `Continue`.
///
/// Details:
/// - Movement is clamped to the result range. Enter commits the selection like in Normal mode.
pub(super) fn handle_results_key(app: &mut AppState, ke: KeyEvent) -> Outcome {
    match ke.code {
        KeyCode::Char('q') => return Outcome::Exit,
        KeyCode::Char('?') => app.modal = Modal::Help,
        KeyCode::Esc => deactivate_search(app, false),
        KeyCode::Enter => {
            open_confirmation(app);
        }
        KeyCode::Char('{' | '}') | KeyCode::Tab => toggle_search_focus(app),
        KeyCode::Char('j') | KeyCode::Down => {
            move_search_selection(app, 1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            move_search_selection(app, -1);
        }
        KeyCode::Char(' ') => {
            toggle_install_on_target(app);
        }
        KeyCode::Char('d') => {
            mark_uninstall_on_target(app);
        }
        code => {
            if let Some(outcome) = handle_filter_key(app, code) {
                return outcome;
            }
        }
    }
    Outcome::Continue
}
