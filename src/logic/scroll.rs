//! Line accounting and "ensure visible" scrolling for both screen modes.

use crate::state::AppState;
use crate::state::types::ScreenMode;
use crate::ui::viewport::Viewport;

/// Lines above the first search result: border, padding, title, blank line.
pub const SEARCH_HEADER_LINES: usize = 4;

/// Asymmetric buffer kept between the cursor and the viewport edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollBuffer {
    /// Lines kept above the cursor.
    pub top: usize,
    /// Lines kept below the cursor.
    pub bottom: usize,
}

impl ScrollBuffer {
    /// Normal mode default: aggressive upward scrolling for wide category borders.
    pub const WIDE: Self = Self { top: 6, bottom: 3 };
    /// Normal mode compact preset.
    pub const COMPACT: Self = Self { top: 3, bottom: 3 };
    /// Search mode buffer.
    pub const SEARCH: Self = Self { top: 3, bottom: 2 };

    /// What: Shrink the buffer to fit a viewport of `height` lines.
    ///
    /// Inputs:
    /// - `height`: Viewport height in lines.
    ///
    /// Output:
    /// - Buffer with `top + bottom + 2 <= height` (or both zero), shrinking the larger side first
    ///   (bottom on ties).
    ///
    /// Details:
    /// - Overlapping top and bottom zones would make the scroll rule oscillate.
    #[must_use]
    pub const fn fit(self, height: usize) -> Self {
        let mut top = self.top;
        let mut bottom = self.bottom;
        while top + bottom > 0 && height < top + bottom + 2 {
            if top > bottom {
                top -= 1;
            } else {
                bottom -= 1;
            }
        }
        Self { top, bottom }
    }
}

impl Default for ScrollBuffer {
    fn default() -> Self {
        Self::WIDE
    }
}

/// Rendered size of one category block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockMetrics {
    /// Lines taken by the (possibly wrapped) category title.
    pub title_height: usize,
    /// Total lines of the block: title, borders, padding, items, summary.
    pub height: usize,
}

/// What: Compute the content line of the Normal-mode cursor.
///
/// Inputs:
/// - `blocks`: Metrics of every composed category block, in display order
/// - `current_category`: Active category index
/// - `current_app`: Cursor index inside the active category
///
/// Output:
/// - Zero-based line of the cursor row inside the composed list content.
///
/// Details:
/// - Every earlier block contributes its height plus one blank separator line.
/// - Inside the active block: title lines, then border top and padding (2), then `current_app`.
#[must_use]
pub fn calculate_actual_selection_line(
    blocks: &[BlockMetrics],
    current_category: usize,
    current_app: usize,
) -> usize {
    let before: usize = blocks
        .iter()
        .take(current_category)
        .map(|b| b.height + 1)
        .sum();
    let title = blocks.get(current_category).map_or(1, |b| b.title_height);
    before + title + 2 + current_app
}

/// Content line of search result `selection`.
#[must_use]
pub const fn search_selection_line(selection: usize) -> usize {
    SEARCH_HEADER_LINES + selection
}

/// What: Scroll `viewport` so `selection_line` sits outside the buffer zones.
///
/// Inputs:
/// - `selection_line`: Content line of the cursor
/// - `viewport`: Viewport whose offset is adjusted
/// - `buffer`: Desired top/bottom buffer (fitted to the viewport height)
///
/// Details:
/// - `line <= top + top_buf` scrolls up to `line - top_buf`.
/// - `line >= bottom - bottom_buf` scrolls down to `line - height + bottom_buf + 1`.
/// - The viewport clamps the offset to `[0, max(0, total - height)]`; a zero-height viewport
///   is left untouched. Calling twice in a row yields the same offset.
pub fn ensure_visible(selection_line: usize, viewport: &mut Viewport, buffer: ScrollBuffer) {
    let height = usize::from(viewport.height());
    if height == 0 {
        return;
    }
    let buf = buffer.fit(height);
    let top = viewport.y_offset();
    let bottom = top + height - 1;
    if selection_line <= top + buf.top {
        viewport.set_y_offset(selection_line.saturating_sub(buf.top));
    } else if selection_line + buf.bottom >= bottom {
        viewport.set_y_offset((selection_line + buf.bottom + 1).saturating_sub(height));
    }
}

/// What: Keep the cursor of the active mode visible.
///
/// Inputs:
/// - `app`: State whose composed content and viewports are current
///
/// Details:
/// - Normal mode uses the configured list buffer; search uses [`ScrollBuffer::SEARCH`].
/// - No-op when there is nothing to point at.
pub fn ensure_selection_visible(app: &mut AppState) {
    match app.mode {
        ScreenMode::Normal => {
            let Some(cat) = app.catalog.category(app.current_category) else {
                return;
            };
            if cat.apps.is_empty() {
                return;
            }
            let line =
                calculate_actual_selection_line(&app.list_blocks, app.current_category, cat.current_app);
            tracing::trace!(line, offset = app.list_viewport.y_offset(), "ensure list line visible");
            ensure_visible(line, &mut app.list_viewport, app.scroll_buffer);
        }
        ScreenMode::Search(_) => {
            if let Some(sel) = app.search_selection {
                ensure_visible(
                    search_selection_line(sel),
                    &mut app.search_viewport,
                    ScrollBuffer::SEARCH,
                );
            }
        }
    }
}

/// What: Recompose content for the current state and re-apply "ensure visible".
///
/// Inputs:
/// - `app`: State mutated by the last handled event
pub fn sync_view(app: &mut AppState) {
    crate::ui::compose::refresh_content(app);
    ensure_selection_visible(app);
}
