//! Central `AppState` container for the browser screen.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::logic::scroll::{BlockMetrics, ScrollBuffer};
use crate::state::modal::Modal;
use crate::state::selection::SelectionStore;
use crate::state::types::{Application, FilterSettings, ScreenMode, SearchFocus};
use crate::ui::viewport::Viewport;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Screen state mutated by the event loop.
///
/// Every field is owned by the loop; background workers only talk to it
/// through events, so no locking is involved.
#[derive(Debug)]
pub struct AppState {
    /// Loaded catalog with its key index.
    pub catalog: Catalog,
    /// Pending install/uninstall intents.
    pub selection: SelectionStore,
    /// Normal or search mode (with search focus).
    pub mode: ScreenMode,
    /// Active category in Normal mode.
    pub current_category: usize,
    /// Search query text; kept when search is left with Enter.
    pub query: String,
    /// Active filters and sort option.
    pub filters: FilterSettings,
    /// Keys of the current search results, in display order.
    pub filtered_apps: Vec<String>,
    /// Index into `filtered_apps`; `None` when there are no results or search is off.
    pub search_selection: Option<usize>,
    /// Viewport showing the categorized list.
    pub list_viewport: Viewport,
    /// Viewport showing search results.
    pub search_viewport: Viewport,
    /// Heights of the composed category blocks, refreshed with the list content.
    pub list_blocks: Vec<BlockMetrics>,
    /// Normal-mode scroll buffer.
    pub scroll_buffer: ScrollBuffer,
    /// Set once the first window size is known.
    pub ready: bool,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// If `true`, operations are logged instead of executed.
    pub dry_run: bool,
    /// Keys handed to the executor whose report has not arrived yet.
    pub in_flight: HashSet<String>,
    /// Transient toast message.
    pub toast_message: Option<String>,
    /// Deadline after which the toast is hidden.
    pub toast_expires_at: Option<Instant>,
}

impl AppState {
    /// What: Create the initial state for `catalog`.
    ///
    /// Output:
    /// - Normal mode, cursor on the first application, empty selection, zero-sized viewports.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionStore::new(),
            mode: ScreenMode::Normal,
            current_category: 0,
            query: String::new(),
            filters: FilterSettings::default(),
            filtered_apps: Vec::new(),
            search_selection: None,
            list_viewport: Viewport::default(),
            search_viewport: Viewport::default(),
            list_blocks: Vec::new(),
            scroll_buffer: ScrollBuffer::default(),
            ready: false,
            modal: Modal::None,
            dry_run: false,
            in_flight: HashSet::new(),
            toast_message: None,
            toast_expires_at: None,
        }
    }

    /// What: Resolve the Normal-mode cursor.
    ///
    /// Output:
    /// - Application under the category/item cursor, or `None` for an empty catalog.
    #[must_use]
    pub fn current_app(&self) -> Option<&Application> {
        self.catalog.category(self.current_category)?.current()
    }

    /// What: Resolve the search cursor.
    ///
    /// Output:
    /// - Application at `search_selection` in `filtered_apps`, if any.
    #[must_use]
    pub fn selected_search_app(&self) -> Option<&Application> {
        let key = self.filtered_apps.get(self.search_selection?)?;
        self.catalog.get(key)
    }

    /// What: Application that Space / `d` act on in the current mode.
    ///
    /// Output:
    /// - Normal: cursor application. Search with results focused: selected result.
    ///   Search with field focused: `None`.
    #[must_use]
    pub fn target_app(&self) -> Option<&Application> {
        match self.mode {
            ScreenMode::Normal => self.current_app(),
            ScreenMode::Search(SearchFocus::Results) => self.selected_search_app(),
            ScreenMode::Search(SearchFocus::Field) => None,
        }
    }

    /// Show `message` as a toast for [`TOAST_DURATION`].
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(Instant::now() + TOAST_DURATION);
    }

    /// What: Hide the toast once its deadline has passed.
    ///
    /// Inputs:
    /// - `now`: Current instant (injected for tests).
    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast_expires_at.is_some_and(|deadline| now >= deadline) {
            self.toast_message = None;
            self.toast_expires_at = None;
        }
    }
}
