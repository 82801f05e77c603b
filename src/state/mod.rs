//! Application state: value types, the selection store, modals and the `AppState` container.

pub mod app_state;
pub mod modal;
pub mod selection;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use selection::SelectionStore;
pub use types::{
    Application, Category, FilterSettings, InstallStatusFilter, Operation, PackageType,
    PackageTypeFilter, ScreenMode, SearchFocus, SelectedOperation, SelectionState, SortOption,
    StatusUpdate,
};
