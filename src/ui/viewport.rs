//! Scrollable text region with an offset/height/total-lines contract.

use ratatui::text::Line;

/// A vertically scrollable block of pre-rendered lines.
///
/// The offset is kept within `[0, max(0, total_lines - height)]` after every
/// mutation, whichever of content, size or offset changed.
#[derive(Clone, Debug, Default)]
pub struct Viewport {
    /// Visible width in columns.
    width: u16,
    /// Visible height in lines.
    height: u16,
    /// First visible line.
    y_offset: usize,
    /// Full content; `lines.len()` is the total line count.
    lines: Vec<Line<'static>>,
}

impl Viewport {
    /// Create an empty viewport of the given size.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            y_offset: 0,
            lines: Vec::new(),
        }
    }

    /// Visible width.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Visible height.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn y_offset(&self) -> usize {
        self.y_offset
    }

    /// Total number of content lines.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Largest valid offset: `max(0, total - height)`.
    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.total_lines().saturating_sub(usize::from(self.height))
    }

    /// What: Resize the viewport and re-clamp the offset.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    /// What: Replace the content and re-clamp the offset.
    ///
    /// Inputs:
    /// - `lines`: Fully composed content.
    pub fn set_content(&mut self, lines: Vec<Line<'static>>) {
        self.lines = lines;
        self.clamp();
    }

    /// What: Set the offset, clamped to the valid range.
    pub fn set_y_offset(&mut self, offset: usize) {
        self.y_offset = offset.min(self.max_offset());
    }

    /// What: Scroll by a signed number of lines, clamped to the valid range.
    pub fn scroll_by(&mut self, delta: isize) {
        let next = if delta < 0 {
            self.y_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.y_offset.saturating_add(delta.unsigned_abs())
        };
        self.set_y_offset(next);
    }

    /// Reset the offset to the top.
    pub const fn goto_top(&mut self) {
        self.y_offset = 0;
    }

    /// Full content.
    #[must_use]
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// What: Lines currently inside the visible window.
    ///
    /// Output:
    /// - Slice `[offset, offset + height)` clipped to the content.
    #[must_use]
    pub fn visible_lines(&self) -> &[Line<'static>] {
        let start = self.y_offset.min(self.lines.len());
        let end = start
            .saturating_add(usize::from(self.height))
            .min(self.lines.len());
        &self.lines[start..end]
    }

    /// Re-apply the offset bounds.
    fn clamp(&mut self) {
        self.y_offset = self.y_offset.min(self.max_offset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<Line<'static>> {
        (0..n).map(|i| Line::from(format!("line {i}"))).collect()
    }

    #[test]
    /// What: Offset stays in bounds for scroll, resize and content changes.
    ///
    /// Inputs:
    /// - 50 lines in a 10-line viewport; scroll past both ends, shrink content, grow height.
    ///
    /// Output:
    /// - Offset always within `[0, max(0, total - height)]`.
    fn offset_clamped_on_every_mutation() {
        let mut vp = Viewport::new(40, 10);
        vp.set_content(lines(50));
        vp.scroll_by(100);
        assert_eq!(vp.y_offset(), 40);
        vp.scroll_by(-1000);
        assert_eq!(vp.y_offset(), 0);
        vp.set_y_offset(35);
        vp.set_content(lines(20));
        assert_eq!(vp.y_offset(), 10);
        vp.set_size(40, 30);
        assert_eq!(vp.y_offset(), 0);
        assert_eq!(vp.max_offset(), 0);
    }

    #[test]
    /// What: Visible slice follows the offset and clips at the end.
    ///
    /// Inputs:
    /// - 12 lines, height 5, offset 9 (clamped to 7).
    ///
    /// Output:
    /// - Five visible lines starting at "line 7".
    fn visible_lines_window() {
        let mut vp = Viewport::new(20, 5);
        vp.set_content(lines(12));
        vp.set_y_offset(9);
        let vis = vp.visible_lines();
        assert_eq!(vis.len(), 5);
        assert_eq!(vis[0].to_string(), "line 7");
    }
}
