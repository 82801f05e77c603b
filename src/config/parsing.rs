/// What: Strip an inline `#` or `//` comment from a settings value.
///
/// Inputs:
/// - `s`: Raw value text after `=`
///
/// Output:
/// - Trimmed value without the trailing comment.
///
/// Details:
/// - A leading `#` is kept so that color-like values such as `#aabbcc` survive.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    let cut = match s.strip_prefix('#') {
        Some(rest) => rest.find('#').map(|j| j + 1),
        None => s.find('#'),
    };
    if let Some(i) = cut {
        s = &s[..i];
    }
    s.trim()
}

/// Parse a boolean setting (`true`/`1`/`yes`/`on`).
pub(crate) fn parse_bool(val: &str) -> bool {
    matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Inline comments are removed and booleans accept common spellings.
    ///
    /// Inputs:
    /// - Values with `#` and `//` comments; boolean spellings.
    ///
    /// Output:
    /// - Comment-free trimmed values; `true` only for recognised truthy words.
    fn inline_comments_and_bools() {
        assert_eq!(strip_inline_comment("status   # sort by status"), "status");
        assert_eq!(strip_inline_comment("compact // tight"), "compact");
        assert_eq!(strip_inline_comment("#abc # note"), "#abc");
        assert!(parse_bool(" Yes "));
        assert!(parse_bool("on"));
        assert!(!parse_bool("nope"));
    }
}
