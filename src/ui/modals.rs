use ratatui::{
    Frame,
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};

/// Key binding overview shown by the help modal.
const HELP_KEYS: &[(&str, &str)] = &[
    ("j / Down", "next application"),
    ("k / Up", "previous application"),
    ("{ / }", "previous / next category (search focus in search mode)"),
    ("g / G", "first / last application"),
    ("Space", "toggle install"),
    ("d", "mark for uninstall"),
    ("Enter", "review and commit selections"),
    ("/", "search"),
    ("f", "cycle install status filter"),
    ("t", "cycle package type filter"),
    ("s", "cycle sort order"),
    ("r", "refresh installation status"),
    ("Esc", "leave search, clearing the query"),
    ("q / Ctrl-C", "quit"),
];

/// What: Render a centered modal with a bold title and the supplied lines.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `area`: Full screen area used to center the modal
/// - `box_title`: Border title
/// - `lines`: Prepared content
///
/// Details:
/// - Width and height are clamped to the screen, leaving a margin where there is room.
fn render_simple_list_modal(f: &mut Frame, area: Rect, box_title: &str, lines: Vec<Line<'static>>) {
    let content_h = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let w = area.width.saturating_sub(8).clamp(area.width.min(20), 80);
    let h = content_h
        .saturating_add(2)
        .min(area.height.saturating_sub(4).max(area.height.min(3)));
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };
    f.render_widget(Clear, rect);
    let boxw = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(
                format!(" {box_title} "),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    f.render_widget(boxw, rect);
}

/// Lines for the confirmation modal: message, operation list and key hint.
fn confirm_lines(app: &AppState, message: &str) -> Vec<Line<'static>> {
    let Modal::ConfirmOperations { operations, .. } = &app.modal else {
        return Vec::new();
    };
    let mut lines = vec![Line::from(message.to_string()), Line::from("")];
    for op in operations {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<10}", op.operation.verb()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(op.name.clone()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter/y confirm  Esc/n cancel",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Draw whichever modal is open; no-op when none is.
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { message } => {
            let mut lines: Vec<Line<'static>> =
                message.lines().map(|l| Line::from(l.to_string())).collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Enter/Esc close",
                Style::default().fg(Color::DarkGray),
            )));
            render_simple_list_modal(f, area, "Alert", lines);
        }
        Modal::Help => {
            let lines = HELP_KEYS
                .iter()
                .map(|(keys, what)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{keys:<12}"),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw((*what).to_string()),
                    ])
                })
                .collect();
            render_simple_list_modal(f, area, "Help", lines);
        }
        Modal::ConfirmOperations { message, .. } => {
            let lines = confirm_lines(app, message);
            render_simple_list_modal(f, area, "Confirm", lines);
        }
    }
}
