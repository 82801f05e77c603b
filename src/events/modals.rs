//! Key handling while a modal dialog is open.

use crossterm::event::{KeyCode, KeyEvent};

use super::Outcome;
use crate::logic::accept_confirmation;
use crate::state::{AppState, Modal};

/// What: Handle a key press for the open modal.
///
/// Inputs:
/// - `app`: Mutable application state with `app.modal` open
/// - `ke`: Key event
///
/// Output:
/// - [`Outcome::Commit`] when the confirmation is accepted; `Continue` otherwise.
///
/// Details:
/// - Modals swallow every other key so the list underneath never moves.
/// - Confirming commits the live selection, never the list captured when the modal opened.
pub(super) fn handle_modal_key(app: &mut AppState, ke: KeyEvent) -> Outcome {
    match &app.modal {
        Modal::Alert { .. } => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
                app.modal = Modal::None;
            }
        }
        Modal::Help => {
            if matches!(
                ke.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('?' | 'q')
            ) {
                app.modal = Modal::None;
            }
        }
        Modal::ConfirmOperations { .. } => match ke.code {
            KeyCode::Esc | KeyCode::Char('n') => app.modal = Modal::None,
            KeyCode::Enter | KeyCode::Char('y') => {
                if let Some(operations) = accept_confirmation(app) {
                    tracing::info!(
                        count = operations.len(),
                        dry_run = app.dry_run,
                        "operations confirmed"
                    );
                    return Outcome::Commit(operations);
                }
            }
            _ => {}
        },
        Modal::None => {}
    }
    Outcome::Continue
}
