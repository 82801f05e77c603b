//! Core logic for navigation, scrolling, search and state updates.

pub mod navigation;
pub mod password;
pub mod scroll;
pub mod search;
pub mod updates;

pub use navigation::{
    activate_search, deactivate_search, jump_first, jump_last, mark_uninstall_on_target,
    move_search_selection, navigate_down, navigate_up, next_category, prev_category,
    recompute_search, toggle_install_on_target, toggle_search_focus,
};
pub use password::{accept_confirmation, open_confirmation, privilege_message};
pub use scroll::{ScrollBuffer, ensure_selection_visible, sync_view};
pub use search::{search, search_keys};
pub use updates::{
    apply_completed_operations, apply_filter_update, apply_search_update, apply_status_update,
    apply_version_update,
};
