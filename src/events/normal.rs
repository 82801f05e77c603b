//! Normal-mode key handling (category/item cursor).

use crossterm::event::{KeyCode, KeyEvent};

use super::{Outcome, handle_filter_key};
use crate::logic::{
    activate_search, jump_first, jump_last, mark_uninstall_on_target, navigate_down, navigate_up,
    next_category, open_confirmation, prev_category, toggle_install_on_target,
};
use crate::state::{AppState, Modal};

/// What: Handle a key press in Normal mode.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `ke`: Key event (already filtered to presses)
///
/// Output:
/// - [`Outcome::Exit`] for `q`, [`Outcome::RefreshAll`] for `r`, otherwise `Continue`.
///
/// Details:
/// - `{` on the first category cannot move further up; the screen takes that as a request to
///   open the search field.
pub(super) fn handle_normal_key(app: &mut AppState, ke: KeyEvent) -> Outcome {
    match ke.code {
        KeyCode::Char('q') => return Outcome::Exit,
        KeyCode::Char('?') => app.modal = Modal::Help,
        KeyCode::Char('/') => activate_search(app),
        KeyCode::Enter => {
            open_confirmation(app);
        }
        KeyCode::Char('{') => {
            if !prev_category(app) {
                tracing::debug!("top of list reached; activating search");
                activate_search(app);
            }
        }
        KeyCode::Char('}') => {
            next_category(app);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            navigate_down(app);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            navigate_up(app);
        }
        KeyCode::Char('g') | KeyCode::Home => jump_first(app),
        KeyCode::Char('G') | KeyCode::End => jump_last(app),
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
