use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::*;
use crate::catalog::test_catalog;
use crate::state::types::{
    InstallStatusFilter, Operation, SelectedOperation, SelectionState, StatusUpdate,
};
use crate::state::Modal;

fn ready_app() -> AppState {
    let mut app = AppState::new(test_catalog());
    assert_eq!(
        handle_app_event(&mut app, AppEvent::WindowResize { width: 80, height: 20 }),
        Outcome::Ready
    );
    app
}

fn press(app: &mut AppState, code: KeyCode) -> Outcome {
    handle_app_event(app, key(code))
}

fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
/// What: Only the first resize reports readiness; both viewports get the body height.
///
/// Inputs:
/// - Two resize events.
///
/// Output:
/// - `Ready` then `Continue`; body height is the terminal height minus header and footer.
fn resize_reports_ready_once() {
    let mut app = ready_app();
    assert!(app.ready);
    assert_eq!(app.list_viewport.height(), 18);
    assert_eq!(
        handle_app_event(&mut app, AppEvent::WindowResize { width: 100, height: 30 }),
        Outcome::Continue
    );
    assert_eq!(app.search_viewport.height(), 28);
    assert_eq!(app.list_viewport.width(), 100);
}

#[test]
/// What: Typing in the search field edits the query, including navigation letters.
///
/// Inputs:
/// - `/`, then `gi`, then `j`, then Backspace twice... and `t`.
///
/// Output:
/// - Query tracks the keys; Down does not move a selection while the field has focus.
fn field_keys_edit_query() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.mode, ScreenMode::Search(SearchFocus::Field));
    assert_eq!(app.filtered_apps.len(), app.catalog.app_count());

    type_text(&mut app, "gij");
    assert_eq!(app.query, "gij");
    assert!(app.filtered_apps.is_empty());
    assert_eq!(app.search_selection, None);

    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "t");
    assert_eq!(app.query, "git");
    assert_eq!(app.filtered_apps, vec!["git".to_string(), "lazygit".to_string()]);

    press(&mut app, KeyCode::Down);
    assert_eq!(app.search_selection, Some(0));
    assert_eq!(app.mode, ScreenMode::Search(SearchFocus::Field));
}

#[test]
/// What: Enter keeps the query when leaving search, Esc clears it.
///
/// Inputs:
/// - Search for `vlc`, Enter, reactivate, Esc.
///
/// Output:
/// - Query preserved and reused after Enter; cleared after Esc; results discarded both times.
fn enter_keeps_query_escape_clears() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "vlc");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, ScreenMode::Normal);
    assert_eq!(app.query, "vlc");
    assert!(app.filtered_apps.is_empty());

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.filtered_apps, vec!["vlc".to_string()]);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, ScreenMode::Normal);
    assert!(app.query.is_empty());
    assert_eq!(app.search_selection, None);
}

#[test]
/// What: `{` at the first category opens search; elsewhere it moves to the previous category.
///
/// Inputs:
/// - `}` to the second category, then `{` twice.
///
/// Output:
/// - Back on the first category's last item, then Search with the field focused.
fn brace_at_top_requests_search() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('}'));
    assert_eq!(app.current_category, 1);
    press(&mut app, KeyCode::Char('{'));
    assert_eq!(app.current_category, 0);
    assert_eq!(app.current_app().map(|a| a.key.as_str()), Some("mise"));
    press(&mut app, KeyCode::Char('{'));
    assert_eq!(app.mode, ScreenMode::Search(SearchFocus::Field));
}

#[test]
/// What: Braces flip search focus and result keys act on the selected result.
///
/// Inputs:
/// - Search `git`, `}` to results, `j`, Space, `{` back to the field.
///
/// Output:
/// - Second result (lazygit) selected for install; focus back on the field.
fn results_focus_moves_and_selects() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "git");
    press(&mut app, KeyCode::Char('}'));
    assert_eq!(app.mode, ScreenMode::Search(SearchFocus::Results));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.search_selection, Some(1));
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.selection.get("lazygit"), SelectionState::Install);
    press(&mut app, KeyCode::Char('{'));
    assert_eq!(app.mode, ScreenMode::Search(SearchFocus::Field));
    assert_eq!(app.query, "git");
}

#[test]
/// What: Committing opens the confirmation modal and Enter hands the operations over.
///
/// Inputs:
/// - Space on the first application (git, installed: Install), `d` on it, Enter, Enter.
///
/// Output:
/// - `Commit([{git, Uninstall}])` and the modal closes.
fn commit_flow_through_confirmation() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(press(&mut app, KeyCode::Enter), Outcome::Continue);
    let Modal::ConfirmOperations { message, .. } = &app.modal else {
        panic!("confirmation modal expected");
    };
    assert_eq!(
        message,
        "Uninstalling 1 applications requires administrator privileges."
    );
    // Navigation keys are swallowed while the modal is open.
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.current_app().map(|a| a.key.as_str()), Some("git"));

    match press(&mut app, KeyCode::Enter) {
        Outcome::Commit(ops) => {
            assert_eq!(ops.len(), 1);
            assert_eq!(ops[0].key, "git");
            assert_eq!(ops[0].operation, Operation::Uninstall);
        }
        other => panic!("expected commit, got {other:?}"),
    }
    assert_eq!(app.modal, Modal::None);
}

#[test]
/// What: A status update arriving while the confirmation is open invalidates a stale uninstall.
///
/// Inputs:
/// - `d` on installed git, Enter, then `StatusUpdate { git, installed: false }`, Enter.
///
/// Output:
/// - No commit; modal closed with "Nothing selected"; nothing in flight.
fn status_update_while_confirming_blocks_stale_commit() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.modal, Modal::ConfirmOperations { .. }));

    handle_app_event(
        &mut app,
        AppEvent::StatusUpdate(StatusUpdate {
            key: "git".into(),
            installed: false,
        }),
    );
    assert!(app.selection.is_empty());

    assert_eq!(press(&mut app, KeyCode::Enter), Outcome::Continue);
    assert_eq!(app.modal, Modal::None);
    assert_eq!(app.toast_message.as_deref(), Some("Nothing selected"));
    assert!(app.in_flight.is_empty());
}

#[test]
/// What: A completed operation arriving while the confirmation is open re-asks with the live list.
///
/// Inputs:
/// - `d` on git, `G`, Space on htop, Enter; completed git uninstall; Enter; Enter.
///
/// Output:
/// - First Enter reopens the modal with only the htop install; the second commits it.
fn completed_operation_while_confirming_reasks() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.current_app().map(|a| a.key.as_str()), Some("htop"));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    let Modal::ConfirmOperations { operations, .. } = &app.modal else {
        panic!("confirmation modal expected");
    };
    assert_eq!(operations.len(), 2);

    handle_app_event(
        &mut app,
        AppEvent::CompletedOperations(vec![SelectedOperation {
            key: "git".into(),
            operation: Operation::Uninstall,
            name: "Git".into(),
        }]),
    );

    assert_eq!(press(&mut app, KeyCode::Enter), Outcome::Continue);
    let Modal::ConfirmOperations {
        operations,
        message,
    } = &app.modal
    else {
        panic!("confirmation should reopen with the live selection");
    };
    assert_eq!(operations.len(), 1);
    assert_eq!(operations[0].key, "htop");
    assert_eq!(
        message,
        "Installing 1 applications requires administrator privileges."
    );

    match press(&mut app, KeyCode::Enter) {
        Outcome::Commit(ops) => {
            assert_eq!(ops.len(), 1);
            assert_eq!(ops[0].key, "htop");
            assert_eq!(ops[0].operation, Operation::Install);
        }
        other => panic!("expected commit, got {other:?}"),
    }
}

#[test]
/// What: A second commit is refused until the executor reports back.
///
/// Inputs:
/// - Space on git, Enter, Enter (commit), then Enter again; then the in-flight set cleared.
///
/// Output:
/// - One commit; the next Enter opens nothing and toasts; once cleared, Enter opens the modal.
fn second_commit_refused_while_running() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);
    assert!(matches!(press(&mut app, KeyCode::Enter), Outcome::Commit(_)));
    assert!(app.in_flight.contains("git"));

    assert_eq!(press(&mut app, KeyCode::Enter), Outcome::Continue);
    assert_eq!(app.modal, Modal::None);
    assert_eq!(
        app.toast_message.as_deref(),
        Some("Operations are still running")
    );

    app.in_flight.clear();
    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.modal, Modal::ConfirmOperations { .. }));
}

#[test]
/// What: Committing without selections shows a toast instead of a modal.
///
/// Inputs:
/// - Enter on a fresh screen.
///
/// Output:
/// - No modal, toast "Nothing selected".
fn empty_commit_toasts() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.modal, Modal::None);
    assert_eq!(app.toast_message.as_deref(), Some("Nothing selected"));
}

#[test]
/// What: Exit keys depend on focus; releases are ignored.
///
/// Inputs:
/// - `q` in the search field, Ctrl-C there, `q` in Normal mode, a key release.
///
/// Output:
/// - `q` is typed in the field; Ctrl-C and Normal `q` exit; release is ignored.
fn exit_keys() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(press(&mut app, KeyCode::Char('q')), Outcome::Continue);
    assert_eq!(app.query, "q");
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(handle_app_event(&mut app, AppEvent::KeyInput(ctrl_c)), Outcome::Exit);

    let mut app = ready_app();
    let release = KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(handle_app_event(&mut app, AppEvent::KeyInput(release)), Outcome::Continue);
    assert_eq!(press(&mut app, KeyCode::Char('q')), Outcome::Exit);
}

#[test]
/// What: Filter keys replace the settings and recompute active search results.
///
/// Inputs:
/// - `/`, `}` to results, `f` (Installed).
///
/// Output:
/// - Only installed applications remain and the cursor is reset to the first result.
fn filter_key_recomputes_results() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('}'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.filters.install_status, InstallStatusFilter::Installed);
    assert_eq!(app.filtered_apps.len(), 3);
    assert_eq!(app.search_selection, Some(0));
    assert!(
        app.filtered_apps
            .iter()
            .all(|k| app.catalog.get(k).is_some_and(|a| a.installed))
    );
}

#[test]
/// What: `r` re-marks every application pending and asks for a full refresh.
///
/// Inputs:
/// - `r` in Normal mode.
///
/// Output:
/// - `RefreshAll`, all applications pending.
fn refresh_key_marks_pending() {
    let mut app = ready_app();
    assert_eq!(press(&mut app, KeyCode::Char('r')), Outcome::RefreshAll);
    assert!(app.catalog.apps().all(|a| a.status_pending));
}

#[test]
/// What: Completed operations update the catalog and request a recheck of their keys.
///
/// Inputs:
/// - Install selection on hadolint, then a completed install for it.
///
/// Output:
/// - `Recheck(["hadolint"])`, installed flag set, selection cleared, toast shown.
fn completed_operations_request_recheck() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.selection.get("hadolint"), SelectionState::Install);
    let ops = vec![SelectedOperation {
        key: "hadolint".into(),
        operation: Operation::Install,
        name: "Hadolint".into(),
    }];
    assert_eq!(
        handle_app_event(&mut app, AppEvent::CompletedOperations(ops)),
        Outcome::Recheck(vec!["hadolint".to_string()])
    );
    assert!(app.catalog.get("hadolint").is_some_and(|a| a.installed));
    assert!(app.selection.is_empty());
    assert_eq!(app.toast_message.as_deref(), Some("Hadolint installed"));
}

#[test]
/// What: Help opens with `?` and closes with Esc.
///
/// Inputs:
/// - `?`, `j`, Esc.
///
/// Output:
/// - Modal open and cursor unchanged, then closed.
fn help_modal_round_trip() {
    let mut app = ready_app();
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.modal, Modal::Help);
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.current_app().map(|a| a.key.as_str()), Some("git"));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.modal, Modal::None);
}
