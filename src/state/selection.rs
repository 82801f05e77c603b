//! Tri-state selection store keyed by application key.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::state::types::{Application, Operation, SelectedOperation, SelectionState};

/// Mapping from application key to pending user intent.
///
/// Absence from the map is equivalent to [`SelectionState::None`]; the map
/// never stores `None` explicitly.
#[derive(Clone, Debug, Default)]
pub struct SelectionStore {
    /// Non-`None` selections keyed by application key.
    entries: HashMap<String, SelectionState>,
}

impl SelectionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Read the selection for `key`.
    ///
    /// Output:
    /// - Stored state, or `SelectionState::None` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> SelectionState {
        self.entries
            .get(key)
            .copied()
            .unwrap_or(SelectionState::None)
    }

    /// What: Read the selection for `app`, ignoring an Uninstall that is no longer valid.
    ///
    /// Inputs:
    /// - `app`: Application whose live `installed` flag validates the entry.
    ///
    /// Output:
    /// - Effective state; an Uninstall on a not-installed application reads as `None`.
    #[must_use]
    pub fn effective(&self, app: &Application) -> SelectionState {
        match self.get(&app.key) {
            SelectionState::Uninstall if !app.installed => SelectionState::None,
            s => s,
        }
    }

    /// What: Toggle the install selection for `app`.
    ///
    /// Inputs:
    /// - `app`: Target application (its `installed` flag validates Uninstall entries).
    ///
    /// Output:
    /// - The new state after the toggle.
    ///
    /// Details:
    /// - An Uninstall on a not-installed application is first reset to None.
    /// - None → Install, Install → None (entry removed), Uninstall → Install.
    pub fn toggle_install(&mut self, app: &Application) -> SelectionState {
        if self.get(&app.key) == SelectionState::Uninstall && !app.installed {
            tracing::debug!(key = %app.key, "dropping stale uninstall selection");
            self.entries.remove(&app.key);
        }
        let next = match self.get(&app.key) {
            SelectionState::None | SelectionState::Uninstall => SelectionState::Install,
            SelectionState::Install => SelectionState::None,
        };
        self.set(&app.key, next);
        next
    }

    /// Unconditionally mark `key` for uninstall. Repeating is a no-op.
    pub fn mark_uninstall(&mut self, key: &str) {
        self.set(key, SelectionState::Uninstall);
    }

    /// Drop any selection for `key`.
    pub fn clear(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Number of non-`None` entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no selections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// What: List every pending operation in catalog order.
    ///
    /// Inputs:
    /// - `catalog`: Catalog providing category order, in-category order and display names.
    ///
    /// Output:
    /// - `SelectedOperation` for each effective Install/Uninstall selection.
    ///
    /// Details:
    /// - Order follows the catalog, never map iteration order, so repeated calls agree.
    /// - Uninstall entries on applications that are not installed are skipped.
    #[must_use]
    pub fn selected_operations(&self, catalog: &Catalog) -> Vec<SelectedOperation> {
        catalog
            .apps()
            .filter_map(|app| {
                let operation = match self.effective(app) {
                    SelectionState::None => return None,
                    SelectionState::Install => Operation::Install,
                    SelectionState::Uninstall => Operation::Uninstall,
                };
                Some(SelectedOperation {
                    key: app.key.clone(),
                    operation,
                    name: app.name.clone(),
                })
            })
            .collect()
    }

    /// Store `state` for `key`, removing the entry for `None`.
    fn set(&mut self, key: &str, state: SelectionState) {
        if state == SelectionState::None {
            self.entries.remove(key);
        } else {
            self.entries.insert(key.to_string(), state);
        }
    }
}
