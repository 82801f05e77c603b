//! Screen rendering: header, viewport body, footer and modals.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Position,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, ScreenMode, SearchFocus};

pub mod compose;
mod modals;
pub mod viewport;

/// What: Build the header line: search field or hint on the left, filters on the right.
///
/// Inputs:
/// - `app`: Current state
/// - `width`: Frame width
///
/// Output:
/// - One line no wider than `width`.
#[must_use]
pub fn header_line(app: &AppState, width: u16) -> Line<'static> {
    let left = match app.mode {
        ScreenMode::Normal if app.query.is_empty() => {
            format!(" appshelf  {} apps  (/ to search)", app.catalog.app_count())
        }
        ScreenMode::Normal => format!(" appshelf  last search: {}", app.query),
        ScreenMode::Search(_) => format!(" / {}", app.query),
    };
    let right = format!(
        "Status: {} | Type: {} | Sort: {}{} ",
        app.filters.install_status.label(),
        app.filters.package_type.label(),
        app.filters.sort.label(),
        if app.dry_run { " | DRY RUN" } else { "" },
    );
    let cols = usize::from(width);
    let left_style = match app.mode {
        ScreenMode::Search(SearchFocus::Field) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        ScreenMode::Search(SearchFocus::Results) => Style::default().fg(Color::Yellow),
        ScreenMode::Normal => Style::default().add_modifier(Modifier::BOLD),
    };
    if left.width() + right.width() + 1 > cols {
        return Line::from(Span::styled(compose::clip(&left, width), left_style));
    }
    let gap = cols - left.width() - right.width();
    Line::from(vec![
        Span::styled(left, left_style),
        Span::raw(" ".repeat(gap)),
        Span::styled(right, Style::default().fg(Color::DarkGray)),
    ])
}

/// Key hints for the current mode.
fn key_hints(app: &AppState) -> &'static str {
    match app.mode {
        ScreenMode::Normal => {
            " j/k move  {/} category  g/G ends  space install  d uninstall  enter commit  / search  f/t/s filter  r refresh  ? help  q quit"
        }
        ScreenMode::Search(SearchFocus::Field) => {
            " type to search  enter keep query  esc cancel  {/} results"
        }
        ScreenMode::Search(SearchFocus::Results) => {
            " j/k move  space install  d uninstall  enter commit  f/t/s filter  {/} field  esc cancel"
        }
    }
}

/// What: Build the footer line: the toast when one is showing, otherwise key hints.
#[must_use]
pub fn footer_line(app: &AppState, width: u16) -> Line<'static> {
    if let Some(msg) = &app.toast_message {
        return Line::from(Span::styled(
            compose::clip(&format!(" {msg}"), width),
            Style::default().fg(Color::Black).bg(Color::Green),
        ));
    }
    let mut hints = key_hints(app).to_string();
    if !app.selection.is_empty() {
        hints = format!(" {} selected |{hints}", app.selection.len());
    }
    Line::from(Span::styled(
        compose::clip(&hints, width),
        Style::default().fg(Color::DarkGray),
    ))
}

/// What: Render the whole screen.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: State whose viewports already hold composed content
///
/// Details:
/// - The body shows exactly the viewport's visible window; composition and scrolling happen in
///   the event handlers, never during drawing.
pub fn ui(f: &mut Frame, app: &AppState) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(Paragraph::new(header_line(app, area.width)), chunks[0]);

    let viewport = if app.mode.is_search() {
        &app.search_viewport
    } else {
        &app.list_viewport
    };
    f.render_widget(Paragraph::new(viewport.visible_lines().to_vec()), chunks[1]);

    f.render_widget(Paragraph::new(footer_line(app, area.width)), chunks[2]);

    if app.mode == ScreenMode::Search(SearchFocus::Field) && !app.modal.is_open() {
        let x = u16::try_from(3 + app.query.width()).unwrap_or(u16::MAX);
        f.set_cursor_position(Position::new(
            x.min(area.width.saturating_sub(1)),
            chunks[0].y,
        ));
    }

    modals::render_modal(f, app, area);
}
