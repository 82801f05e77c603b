//! Cursor movement for Normal mode (category/item) and Search mode (flat result index).
//!
//! Movement functions only touch cursor state; callers recompose content and
//! re-apply "ensure visible" through [`crate::logic::scroll::sync_view`].

use crate::logic::search::search_keys;
use crate::state::AppState;
use crate::state::types::{ScreenMode, SearchFocus, SelectionState};

/// Index of the first non-empty category at or after `from`.
fn next_non_empty(app: &AppState, from: usize) -> Option<usize> {
    app.catalog
        .categories()
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, c)| !c.apps.is_empty())
        .map(|(i, _)| i)
}

/// Index of the last non-empty category strictly before `before`.
fn prev_non_empty(app: &AppState, before: usize) -> Option<usize> {
    app.catalog
        .categories()
        .iter()
        .enumerate()
        .take(before)
        .rev()
        .find(|(_, c)| !c.apps.is_empty())
        .map(|(i, _)| i)
}

/// Make `idx` the active category with its cursor at `app_idx`.
fn enter_category(app: &mut AppState, idx: usize, app_idx: usize) {
    app.current_category = idx;
    if let Some(cat) = app.catalog.category_mut(idx) {
        cat.current_app = app_idx.min(cat.last_index());
    }
}

/// What: Advance the Normal-mode cursor by one application.
///
/// Inputs:
/// - `app`: State whose category cursor moves
///
/// Output:
/// - `true` when the cursor moved.
///
/// Details:
/// - Past the last item of a category the cursor enters the next non-empty category at item 0.
/// - At the very last application this is a no-op.
pub fn navigate_down(app: &mut AppState) -> bool {
    let Some(cat) = app.catalog.category(app.current_category) else {
        return false;
    };
    if !cat.apps.is_empty() && cat.current_app < cat.last_index() {
        let next = cat.current_app + 1;
        if let Some(cat) = app.catalog.category_mut(app.current_category) {
            cat.current_app = next;
        }
        return true;
    }
    match next_non_empty(app, app.current_category + 1) {
        Some(idx) => {
            enter_category(app, idx, 0);
            true
        }
        None => false,
    }
}

/// What: Move the Normal-mode cursor back by one application.
///
/// Output:
/// - `true` when the cursor moved.
///
/// Details:
/// - Before the first item of a category the cursor enters the previous non-empty category at
///   its last item. At the very first application this is a no-op.
pub fn navigate_up(app: &mut AppState) -> bool {
    let Some(cat) = app.catalog.category(app.current_category) else {
        return false;
    };
    if cat.current_app > 0 && !cat.apps.is_empty() {
        let prev = cat.current_app - 1;
        if let Some(cat) = app.catalog.category_mut(app.current_category) {
            cat.current_app = prev;
        }
        return true;
    }
    match prev_non_empty(app, app.current_category) {
        Some(idx) => {
            let last = app.catalog.category(idx).map_or(0, |c| c.last_index());
            enter_category(app, idx, last);
            true
        }
        None => false,
    }
}

/// What: Jump to the next category (`}` in Normal mode).
///
/// Output:
/// - `true` when a later non-empty category exists; its cursor is reset to 0.
pub fn next_category(app: &mut AppState) -> bool {
    match next_non_empty(app, app.current_category + 1) {
        Some(idx) => {
            enter_category(app, idx, 0);
            true
        }
        None => false,
    }
}

/// What: Jump to the previous category (`{` in Normal mode).
///
/// Output:
/// - `true` when moved; the new category's cursor sits on its last item.
/// - `false` at the first category, where the caller asks the screen to activate search.
pub fn prev_category(app: &mut AppState) -> bool {
    match prev_non_empty(app, app.current_category) {
        Some(idx) => {
            let last = app.catalog.category(idx).map_or(0, |c| c.last_index());
            enter_category(app, idx, last);
            true
        }
        None => false,
    }
}

/// What: Jump to the first application across all categories (`g`).
pub fn jump_first(app: &mut AppState) {
    if let Some(idx) = next_non_empty(app, 0) {
        enter_category(app, idx, 0);
    }
}

/// What: Jump to the last application across all categories (`G`).
pub fn jump_last(app: &mut AppState) {
    if let Some(idx) = prev_non_empty(app, app.catalog.category_count()) {
        let last = app.catalog.category(idx).map_or(0, |c| c.last_index());
        enter_category(app, idx, last);
    }
}

/// What: Move the search cursor by `delta`, clamped to the result range.
///
/// Inputs:
/// - `app`: State in Search mode
/// - `delta`: Signed step (no wraparound)
///
/// Output:
/// - `true` when the selection changed.
pub fn move_search_selection(app: &mut AppState, delta: isize) -> bool {
    if app.filtered_apps.is_empty() {
        app.search_selection = None;
        return false;
    }
    let last = app.filtered_apps.len() - 1;
    let current = app.search_selection.unwrap_or(0).min(last);
    let next = if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta.unsigned_abs()).min(last)
    };
    let changed = app.search_selection != Some(next);
    app.search_selection = Some(next);
    changed
}

/// What: Recompute `filtered_apps` for the current query and filters and reset the cursor.
///
/// Details:
/// - Selection becomes 0 when results exist, `None` otherwise; the search viewport returns to
///   the top.
pub fn recompute_search(app: &mut AppState) {
    app.filtered_apps = search_keys(&app.catalog, &app.query, &app.filters);
    app.search_selection = if app.filtered_apps.is_empty() {
        None
    } else {
        Some(0)
    };
    app.search_viewport.goto_top();
    tracing::debug!(
        query = %app.query,
        results = app.filtered_apps.len(),
        "search recomputed"
    );
}

/// What: Enter Search mode with the text field focused (`/`).
///
/// Details:
/// - A query preserved by a previous Enter is reused; otherwise the empty query lists every
///   application passing the filters.
pub fn activate_search(app: &mut AppState) {
    app.mode = ScreenMode::Search(SearchFocus::Field);
    recompute_search(app);
}

/// What: Leave Search mode.
///
/// Inputs:
/// - `keep_query`: `true` for Enter in the field (query preserved), `false` for Esc.
///
/// Details:
/// - Results are discarded and the search cursor reset in both cases.
pub fn deactivate_search(app: &mut AppState, keep_query: bool) {
    app.mode = ScreenMode::Normal;
    if !keep_query {
        app.query.clear();
    }
    app.filtered_apps.clear();
    app.search_selection = None;
}

/// What: Flip search focus between the field and the results (`{` / `}` in Search mode).
///
/// Details:
/// - Focusing the results with no selection selects the first result when one exists.
pub fn toggle_search_focus(app: &mut AppState) {
    app.mode = match app.mode {
        ScreenMode::Search(SearchFocus::Field) => {
            if app.search_selection.is_none() && !app.filtered_apps.is_empty() {
                app.search_selection = Some(0);
            }
            ScreenMode::Search(SearchFocus::Results)
        }
        ScreenMode::Search(SearchFocus::Results) => ScreenMode::Search(SearchFocus::Field),
        ScreenMode::Normal => ScreenMode::Normal,
    };
}

/// What: Toggle install selection on the current target (Space).
///
/// Output:
/// - New selection state, or `None` when there is no target (empty list or field focused).
pub fn toggle_install_on_target(app: &mut AppState) -> Option<SelectionState> {
    let target = app.target_app()?.clone();
    let state = app.selection.toggle_install(&target);
    tracing::debug!(key = %target.key, ?state, "toggled install selection");
    Some(state)
}

/// What: Mark the current target for uninstall (`d`).
///
/// Output:
/// - Key of the marked application, or `None` when there is no target.
pub fn mark_uninstall_on_target(app: &mut AppState) -> Option<String> {
    let key = app.target_app()?.key.clone();
    app.selection.mark_uninstall(&key);
    tracing::debug!(key = %key, "marked for uninstall");
    Some(key)
}
