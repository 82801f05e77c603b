//! Administrator-privileges prompt text and the confirmation modal for commits.

use crate::state::types::{Operation, SelectedOperation};
use crate::state::{AppState, Modal};

/// What: Build the administrator-privileges message for an operation set.
///
/// Inputs:
/// - `ops`: Operations about to run
///
/// Output:
/// - `Installing N applications requires administrator privileges.` for installs only,
///   `Uninstalling N applications ...` for uninstalls only, and
///   `Installing N and uninstalling M applications ...` for a mix.
///
/// Details:
/// - The count is printed as-is; `1 applications` is the established wording.
#[must_use]
pub fn privilege_message(ops: &[SelectedOperation]) -> String {
    let installs = ops
        .iter()
        .filter(|o| o.operation == Operation::Install)
        .count();
    let uninstalls = ops.len() - installs;
    match (installs, uninstalls) {
        (n, 0) => format!("Installing {n} applications requires administrator privileges."),
        (0, m) => format!("Uninstalling {m} applications requires administrator privileges."),
        (n, m) => format!(
            "Installing {n} and uninstalling {m} applications requires administrator privileges."
        ),
    }
}

/// What: Open the confirmation modal for the pending selection (Enter / commit).
///
/// Inputs:
/// - `app`: State whose selection is committed
///
/// Output:
/// - `true` when a modal was opened; `false` (with a toast) when nothing is selected or an
///   earlier commit is still running.
pub fn open_confirmation(app: &mut AppState) -> bool {
    if !app.in_flight.is_empty() {
        tracing::debug!(in_flight = app.in_flight.len(), "commit refused while operations run");
        app.show_toast("Operations are still running");
        return false;
    }
    let operations = app.selection.selected_operations(&app.catalog);
    if operations.is_empty() {
        app.show_toast("Nothing selected");
        return false;
    }
    let message = privilege_message(&operations);
    tracing::info!(count = operations.len(), "confirming operations");
    app.modal = Modal::ConfirmOperations {
        operations,
        message,
    };
    true
}

/// What: Accept the open confirmation against the live selection (Enter / `y`).
///
/// Inputs:
/// - `app`: State with [`Modal::ConfirmOperations`] open
///
/// Output:
/// - `Some(operations)` when the live selection still matches the list shown; their keys are
///   recorded in `in_flight`.
/// - `None` otherwise: the modal closes with a toast when nothing is left, or reopens with the
///   rebuilt list when status updates or completed operations changed it.
pub fn accept_confirmation(app: &mut AppState) -> Option<Vec<SelectedOperation>> {
    let Modal::ConfirmOperations {
        operations: shown, ..
    } = std::mem::take(&mut app.modal)
    else {
        return None;
    };
    let live = app.selection.selected_operations(&app.catalog);
    if live.is_empty() {
        tracing::info!(shown = shown.len(), "selection emptied while confirming");
        app.show_toast("Nothing selected");
        return None;
    }
    if live != shown {
        tracing::info!(
            shown = shown.len(),
            live = live.len(),
            "selection changed while confirming; asking again"
        );
        app.show_toast("Selection changed; confirm again");
        app.modal = Modal::ConfirmOperations {
            message: privilege_message(&live),
            operations: live,
        };
        return None;
    }
    app.in_flight.extend(live.iter().map(|o| o.key.clone()));
    Some(live)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(key: &str, operation: Operation) -> SelectedOperation {
        SelectedOperation {
            key: key.into(),
            operation,
            name: key.into(),
        }
    }

    #[test]
    /// What: Message wording for install-only, uninstall-only and mixed sets.
    ///
    /// Inputs:
    /// - One install; two uninstalls; two installs plus one uninstall.
    ///
    /// Output:
    /// - Exact strings for each case.
    fn privilege_message_variants() {
        assert_eq!(
            privilege_message(&[op("hadolint", Operation::Install)]),
            "Installing 1 applications requires administrator privileges."
        );
        assert_eq!(
            privilege_message(&[op("a", Operation::Uninstall), op("b", Operation::Uninstall)]),
            "Uninstalling 2 applications requires administrator privileges."
        );
        assert_eq!(
            privilege_message(&[
                op("a", Operation::Install),
                op("b", Operation::Uninstall),
                op("c", Operation::Install)
            ]),
            "Installing 2 and uninstalling 1 applications requires administrator privileges."
        );
    }

    #[test]
    /// What: Committing with nothing selected shows a toast instead of a modal.
    ///
    /// Inputs:
    /// - Fresh state, then one install selection.
    ///
    /// Output:
    /// - First call returns false with a toast; second opens the modal with one operation.
    fn open_confirmation_requires_selection() {
        let mut app = AppState::new(crate::catalog::test_catalog());
        assert!(!open_confirmation(&mut app));
        assert!(app.toast_message.is_some());
        let htop = app.catalog.get("htop").cloned().expect("htop");
        app.selection.toggle_install(&htop);
        assert!(open_confirmation(&mut app));
        match &app.modal {
            Modal::ConfirmOperations { operations, .. } => assert_eq!(operations.len(), 1),
            other => panic!("unexpected modal {other:?}"),
        }
    }

    #[test]
    /// What: Accepting re-reads the selection and tracks committed keys.
    ///
    /// Inputs:
    /// - htop selected, modal opened, accepted; then a second open while it runs.
    ///
    /// Output:
    /// - Operations returned and htop in flight; the second open is refused with a toast.
    fn accept_confirmation_tracks_in_flight() {
        let mut app = AppState::new(crate::catalog::test_catalog());
        let htop = app.catalog.get("htop").cloned().expect("htop");
        app.selection.toggle_install(&htop);
        assert!(open_confirmation(&mut app));
        let ops = accept_confirmation(&mut app).expect("accepted");
        assert_eq!(ops.len(), 1);
        assert!(app.in_flight.contains("htop"));
        assert!(!app.modal.is_open());

        assert!(!open_confirmation(&mut app));
        assert_eq!(
            app.toast_message.as_deref(),
            Some("Operations are still running")
        );
        assert!(accept_confirmation(&mut app).is_none());
    }
}
