//! State updates driven by background results and settings changes.

use crate::logic::navigation::recompute_search;
use crate::state::AppState;
use crate::state::types::{FilterSettings, Operation, SelectedOperation, StatusUpdate};

/// What: Apply one status check result.
///
/// Inputs:
/// - `app`: State to update
/// - `update`: Observed install state for one key
///
/// Output:
/// - `true` when the application is installed (caller may fetch its version).
///
/// Details:
/// - `status_pending` is cleared unconditionally, even for timeouts reported as not installed.
/// - Any selection for the key is dropped: a fresh observation replaces the assumed state.
/// - Unknown keys are ignored.
pub fn apply_status_update(app: &mut AppState, update: &StatusUpdate) -> bool {
    let Some(a) = app.catalog.get_mut(&update.key) else {
        tracing::debug!(key = %update.key, "status update for unknown key ignored");
        return false;
    };
    a.installed = update.installed;
    a.status_pending = false;
    if !update.installed {
        a.version.clear();
    }
    app.selection.clear(&update.key);
    update.installed
}

/// What: Store a fetched version string.
///
/// Details:
/// - Empty versions (fetch failures) leave the field empty; unknown keys are ignored.
pub fn apply_version_update(app: &mut AppState, key: &str, version: &str) {
    if let Some(a) = app.catalog.get_mut(key) {
        a.version = version.trim().to_string();
    }
}

/// What: Fold operations reported by the executor back into the catalog and selection.
///
/// Inputs:
/// - `app`: State to update
/// - `ops`: Operations that finished successfully
///
/// Details:
/// - Install sets `installed = true`; Uninstall sets `installed = false` and clears the version.
///   Both clear the selection entry and the pending flag for the key.
pub fn apply_completed_operations(app: &mut AppState, ops: &[SelectedOperation]) {
    for op in ops {
        let Some(a) = app.catalog.get_mut(&op.key) else {
            continue;
        };
        match op.operation {
            Operation::Install => a.installed = true,
            Operation::Uninstall => {
                a.installed = false;
                a.version.clear();
            }
        }
        a.status_pending = false;
        app.selection.clear(&op.key);
        tracing::info!(key = %op.key, operation = op.operation.verb(), "operation completed");
    }
}

/// What: Replace the query and refresh results when search is active.
pub fn apply_search_update(app: &mut AppState, query: String) {
    app.query = query;
    if app.mode.is_search() {
        recompute_search(app);
    }
}

/// What: Replace filter/sort settings wholesale and refresh results when search is active.
pub fn apply_filter_update(app: &mut AppState, filters: FilterSettings) {
    app.filters = filters;
    tracing::debug!(
        install_status = filters.install_status.label(),
        package_type = filters.package_type.label(),
        sort = filters.sort.label(),
        "filters updated"
    );
    if app.mode.is_search() {
        recompute_search(app);
    }
}
