//! Composes list and search content into lines with deterministic heights.
//!
//! Category block layout (each row is one line):
//! title (wrapped), border top, padding, one row per application (or a
//! placeholder), optional selection summary, padding, border bottom. Blocks are
//! separated by a single blank line. Search content is border top, padding,
//! title, blank, one row per result, padding, border bottom.

use std::fmt::Write;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::logic::scroll::BlockMetrics;
use crate::state::AppState;
use crate::state::types::{Application, Category, ScreenMode, SearchFocus, SelectionState};
use crate::util::{fit_to_width, truncate_to_width, wrap_to_width};

/// Width used before the first resize reports the real terminal size.
const FALLBACK_WIDTH: usize = 80;
/// Narrowest box drawn; below this, lines are simply clipped by the terminal.
const MIN_WIDTH: usize = 12;

/// Selection marker shown at the start of an application row.
const fn marker(state: SelectionState) -> &'static str {
    match state {
        SelectionState::None => "[ ]",
        SelectionState::Install => "[+]",
        SelectionState::Uninstall => "[-]",
    }
}

/// Status glyph and its color.
const fn status_glyph(app: &Application) -> (&'static str, Color) {
    if app.status_pending {
        ("…", Color::Yellow)
    } else if app.installed {
        ("✓", Color::Green)
    } else {
        (" ", Color::Reset)
    }
}

fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn border_top(inner: usize) -> Line<'static> {
    Line::styled(format!("┌{}┐", "─".repeat(inner)), border_style())
}

fn border_bottom(inner: usize) -> Line<'static> {
    Line::styled(format!("└{}┘", "─".repeat(inner)), border_style())
}

/// Boxed row: `│ <content> │`; callers size the content to the text width.
fn boxed(content: Vec<Span<'static>>) -> Line<'static> {
    let mut spans = vec![Span::styled("│ ", border_style())];
    spans.extend(content);
    spans.push(Span::styled(" │", border_style()));
    Line::from(spans)
}

fn padding(inner: usize) -> Line<'static> {
    Line::styled(format!("│{}│", " ".repeat(inner)), border_style())
}

/// What: Compose one application row.
///
/// Inputs:
/// - `app`: Application to show
/// - `state`: Effective selection state
/// - `text_width`: Columns available between the box edges
/// - `highlighted`: Whether the row is under the cursor
/// - `extra`: Optional tag inserted after the name (e.g. package type in search)
fn app_row(
    app: &Application,
    state: SelectionState,
    text_width: usize,
    highlighted: bool,
    extra: Option<&str>,
) -> Vec<Span<'static>> {
    let (glyph, glyph_color) = status_glyph(app);
    let mut label = app.name.clone();
    if !app.version.is_empty() {
        label.push(' ');
        label.push_str(&app.version);
    }
    if let Some(tag) = extra {
        let _ = write!(label, " [{tag}]");
    }
    let head_width = marker(state).len() + 1 + 1 + 1;
    let rest_width = text_width.saturating_sub(head_width);
    let body = if app.description.is_empty() {
        label
    } else {
        format!("{label}  {}", app.description)
    };
    let body = fit_to_width(&body, rest_width);

    let base = if highlighted {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let marker_style = match state {
        SelectionState::None => base,
        SelectionState::Install => base.fg(Color::Green).add_modifier(Modifier::BOLD),
        SelectionState::Uninstall => base.fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    vec![
        Span::styled(marker(state), marker_style),
        Span::styled(" ", base),
        Span::styled(glyph, base.fg(glyph_color)),
        Span::styled(" ", base),
        Span::styled(body, base),
    ]
}

/// What: Compose a category block and measure it.
///
/// Inputs:
/// - `app`: State providing selection and mode
/// - `cat`: Category to draw
/// - `is_current`: Whether the Normal-mode cursor lives in this category
/// - `width`: Total width of the block
///
/// Output:
/// - Block lines and their metrics; `metrics.height == lines.len()`.
fn compose_category(
    app: &AppState,
    cat: &Category,
    is_current: bool,
    width: usize,
) -> (Vec<Line<'static>>, BlockMetrics) {
    let inner = width - 2;
    let text_width = inner - 2;
    let installed = cat.apps.iter().filter(|a| a.installed).count();
    let title = format!("{} ({installed}/{} installed)", cat.name, cat.apps.len());
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let title_lines: Vec<Line<'static>> = wrap_to_width(&title, width)
        .into_iter()
        .map(|t| Line::styled(t, title_style))
        .collect();
    let title_height = title_lines.len();

    let mut lines = title_lines;
    lines.push(border_top(inner));
    lines.push(padding(inner));
    if cat.apps.is_empty() {
        lines.push(boxed(vec![Span::styled(
            fit_to_width("No applications in this category", text_width),
            Style::default().fg(Color::DarkGray),
        )]));
    }
    let highlight_cursor = is_current && app.mode == ScreenMode::Normal;
    let mut selected = 0usize;
    for (i, a) in cat.apps.iter().enumerate() {
        let state = app.selection.effective(a);
        if state != SelectionState::None {
            selected += 1;
        }
        lines.push(boxed(app_row(
            a,
            state,
            text_width,
            highlight_cursor && i == cat.current_app,
            None,
        )));
    }
    if selected > 0 {
        lines.push(boxed(vec![Span::styled(
            fit_to_width(&format!("{selected} selected"), text_width),
            Style::default().fg(Color::Magenta),
        )]));
    }
    lines.push(padding(inner));
    lines.push(border_bottom(inner));
    let metrics = BlockMetrics {
        title_height,
        height: lines.len(),
    };
    (lines, metrics)
}

fn effective_width(width: u16) -> usize {
    match usize::from(width) {
        0 => FALLBACK_WIDTH,
        w => w.max(MIN_WIDTH),
    }
}

/// What: Compose the categorized list.
///
/// Inputs:
/// - `app`: Current state
/// - `width`: Viewport width (0 before the first resize)
///
/// Output:
/// - All lines plus one [`BlockMetrics`] per category, in category order.
#[must_use]
pub fn compose_list(app: &AppState, width: u16) -> (Vec<Line<'static>>, Vec<BlockMetrics>) {
    let width = effective_width(width);
    let mut lines = Vec::new();
    let mut blocks = Vec::with_capacity(app.catalog.category_count());
    for (ci, cat) in app.catalog.categories().iter().enumerate() {
        if ci > 0 {
            lines.push(Line::default());
        }
        let (block, metrics) = compose_category(app, cat, ci == app.current_category, width);
        lines.extend(block);
        blocks.push(metrics);
    }
    (lines, blocks)
}

/// What: Compose the search result list.
///
/// Inputs:
/// - `app`: Current state (`filtered_apps`, `search_selection`, focus)
/// - `width`: Viewport width
///
/// Output:
/// - Lines whose result rows start at line 4.
#[must_use]
pub fn compose_search(app: &AppState, width: u16) -> Vec<Line<'static>> {
    let width = effective_width(width);
    let inner = width - 2;
    let text_width = inner - 2;
    let results_focused = app.mode == ScreenMode::Search(SearchFocus::Results);
    let mut lines = vec![border_top(inner), padding(inner)];
    let title = format!("Results ({})", app.filtered_apps.len());
    lines.push(boxed(vec![Span::styled(
        fit_to_width(&title, text_width),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]));
    lines.push(padding(inner));
    if app.filtered_apps.is_empty() {
        lines.push(boxed(vec![Span::styled(
            fit_to_width("No matching applications", text_width),
            Style::default().fg(Color::DarkGray),
        )]));
    }
    for (i, key) in app.filtered_apps.iter().enumerate() {
        let Some(a) = app.catalog.get(key) else {
            continue;
        };
        let highlighted = results_focused && app.search_selection == Some(i);
        let tag = a.package_type().as_str();
        lines.push(boxed(app_row(
            a,
            app.selection.effective(a),
            text_width,
            highlighted,
            Some(tag),
        )));
    }
    lines.push(padding(inner));
    lines.push(border_bottom(inner));
    lines
}

/// What: Recompose list (and search) content and hand it to the viewports.
///
/// Inputs:
/// - `app`: State to compose; its viewports and block metrics are updated in place
///
/// Details:
/// - The viewports re-clamp their offsets against the new line counts.
pub fn refresh_content(app: &mut AppState) {
    let (lines, blocks) = compose_list(app, app.list_viewport.width());
    app.list_blocks = blocks;
    app.list_viewport.set_content(lines);
    if app.mode.is_search() {
        let lines = compose_search(app, app.search_viewport.width());
        app.search_viewport.set_content(lines);
    } else {
        app.search_viewport.set_content(Vec::new());
    }
}

/// Plain text of a composed line (spans concatenated).
#[must_use]
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Truncate a header/footer string to the frame width.
#[must_use]
pub fn clip(text: &str, width: u16) -> String {
    truncate_to_width(text, usize::from(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_catalog;
    use crate::logic::scroll::calculate_actual_selection_line;
    use unicode_width::UnicodeWidthStr;

    #[test]
    /// What: Block metrics match the composed lines and the cursor row lands where the line
    /// accounting says.
    ///
    /// Inputs:
    /// - Test catalog at width 60, cursor on every application in turn.
    ///
    /// Output:
    /// - Sum of heights plus separators equals total lines; the highlighted row index equals
    ///   `calculate_actual_selection_line`.
    fn cursor_row_matches_line_accounting() {
        let mut app = AppState::new(test_catalog());
        let (lines, blocks) = compose_list(&app, 60);
        let expected: usize = blocks.iter().map(|b| b.height).sum::<usize>() + blocks.len() - 1;
        assert_eq!(lines.len(), expected);

        for ci in 0..app.catalog.category_count() {
            let count = app.catalog.categories()[ci].apps.len();
            for ai in 0..count {
                app.current_category = ci;
                if let Some(cat) = app.catalog.category_mut(ci) {
                    cat.current_app = ai;
                }
                let (lines, blocks) = compose_list(&app, 60);
                let line = calculate_actual_selection_line(&blocks, ci, ai);
                let key = &app.catalog.categories()[ci].apps[ai].name;
                let text = line_text(&lines[line]);
                assert!(text.contains(key.as_str()), "line {line}: {text:?} should show {key}");
                let reversed = lines[line]
                    .spans
                    .iter()
                    .any(|s| s.style.add_modifier.contains(Modifier::REVERSED));
                assert!(reversed, "cursor row should be highlighted");
            }
        }
    }

    #[test]
    /// What: Narrow widths wrap category titles and the accounting follows.
    ///
    /// Inputs:
    /// - Width 14 so "Development (1/4 installed)" wraps.
    ///
    /// Output:
    /// - Title height above one; cursor row in the second category still matches.
    fn wrapped_titles_shift_lines() {
        let mut app = AppState::new(test_catalog());
        app.current_category = 1;
        let (lines, blocks) = compose_list(&app, 14);
        assert!(blocks[0].title_height > 1);
        let line = calculate_actual_selection_line(&blocks, 1, 0);
        assert!(line_text(&lines[line]).contains("Spo"));
    }

    #[test]
    /// What: Selections add a summary row inside the block.
    ///
    /// Inputs:
    /// - Install selection on htop.
    ///
    /// Output:
    /// - System block grows by one line and contains "1 selected" and the `[+]` marker.
    fn selection_adds_summary_row() {
        let mut app = AppState::new(test_catalog());
        let (_, before) = compose_list(&app, 60);
        let htop = app.catalog.get("htop").cloned().expect("htop");
        app.selection.toggle_install(&htop);
        let (lines, after) = compose_list(&app, 60);
        assert_eq!(after[2].height, before[2].height + 1);
        let all: Vec<String> = lines.iter().map(line_text).collect();
        assert!(all.iter().any(|l| l.contains("1 selected")));
        assert!(all.iter().any(|l| l.contains("[+]") && l.contains("htop")));
    }

    #[test]
    /// What: Search rows start after the four header lines.
    ///
    /// Inputs:
    /// - Two results with the second selected and results focused.
    ///
    /// Output:
    /// - Title shows the count; line 5 shows and highlights the second result.
    fn search_rows_start_at_line_four() {
        let mut app = AppState::new(test_catalog());
        app.mode = ScreenMode::Search(SearchFocus::Results);
        app.filtered_apps = vec!["btop".into(), "htop".into()];
        app.search_selection = Some(1);
        let lines = compose_search(&app, 50);
        assert!(line_text(&lines[2]).contains("Results (2)"));
        assert!(line_text(&lines[4]).contains("btop"));
        assert!(line_text(&lines[5]).contains("htop"));
        assert!(
            lines[5]
                .spans
                .iter()
                .any(|s| s.style.add_modifier.contains(Modifier::REVERSED))
        );
    }

    #[test]
    /// What: An empty result list shows the placeholder row inside the border.
    ///
    /// Inputs:
    /// - Search mode with no filtered applications at width 40.
    ///
    /// Output:
    /// - Placeholder on line 4, boxed by the side borders and exactly 40 columns wide.
    fn empty_search_shows_placeholder_row() {
        let mut app = AppState::new(test_catalog());
        app.mode = ScreenMode::Search(SearchFocus::Field);
        let lines = compose_search(&app, 40);
        assert!(line_text(&lines[2]).contains("Results (0)"));
        let row = line_text(&lines[4]);
        assert!(row.starts_with("│ No matching applications"));
        assert!(row.ends_with(" │"));
        assert_eq!(row.width(), 40);
    }
}
