//! Small helpers for display-width-aware text layout and environment checks.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Environment variable that disables terminal setup for smoke tests.
pub const HEADLESS_ENV: &str = "APPSHELF_TEST_HEADLESS";

/// What: Report whether the process runs in headless test mode.
///
/// Output:
/// - `true` when `APPSHELF_TEST_HEADLESS=1`.
#[must_use]
pub fn is_headless() -> bool {
    std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1")
}

/// What: Truncate `text` to at most `max` display columns.
///
/// Inputs:
/// - `text`: Text to shorten
/// - `max`: Column budget
///
/// Output:
/// - `text` unchanged when it fits; otherwise a prefix followed by `…` that fits in `max`.
///
/// Details:
/// - Wide characters (CJK, emoji) count as two columns.
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// What: Truncate or right-pad `text` to exactly `width` display columns.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_to_width(text, width);
    let used = out.width();
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

/// What: Word-wrap `text` into lines of at most `width` columns.
///
/// Inputs:
/// - `text`: Text to wrap
/// - `width`: Column budget (treated as 1 when zero)
///
/// Output:
/// - At least one line; words longer than `width` are split.
#[must_use]
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let sep = usize::from(!current.is_empty());
        if current.width() + sep + word.width() <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        let mut rest = word;
        while rest.width() > width {
            let mut used = 0usize;
            let split = rest
                .char_indices()
                .find(|(_, c)| {
                    used += c.width().unwrap_or(0);
                    used > width
                })
                .map_or(rest.len(), |(i, _)| i);
            if split == 0 {
                break;
            }
            lines.push(rest[..split].to_string());
            rest = &rest[split..];
        }
        current.push_str(rest);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
