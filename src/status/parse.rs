//! Parsers for package-manager and `--version` output.

/// What: Interpret `dpkg-query -W -f='${Status}'` output.
///
/// Output:
/// - `true` only for the `install ok installed` state.
#[must_use]
pub fn dpkg_status_installed(output: &str) -> bool {
    output.trim().ends_with("ok installed")
}

/// What: Pull a version-looking token out of `--version` output.
///
/// Inputs:
/// - `output`: Raw stdout (ANSI escapes allowed)
///
/// Output:
/// - First whitespace token of the first non-empty line that starts with a digit (after an
///   optional `v`) and contains a dot; empty when none is found.
///
/// Details:
/// - Trailing punctuation such as `,` or `)` is trimmed.
#[must_use]
pub fn first_version_token(output: &str) -> String {
    let clean = strip_ansi_escapes::strip_str(output);
    let Some(line) = clean.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return String::new();
    };
    line.split_whitespace()
        .map(|t| t.trim_end_matches([',', ')', ';']))
        .map(|t| t.strip_prefix('v').unwrap_or(t))
        .find(|t| t.starts_with(|c: char| c.is_ascii_digit()) && t.contains('.'))
        .map(str::to_string)
        .unwrap_or_default()
}

/// What: Extract the `Version:` field from `flatpak info` output.
#[must_use]
pub fn flatpak_info_version(output: &str) -> String {
    output
        .lines()
        .filter_map(|l| l.trim().strip_prefix("Version:"))
        .map(|v| v.trim().to_string())
        .next()
        .unwrap_or_default()
}

/// What: Extract the version column for `name` from `snap list` output.
///
/// Details:
/// - The first line is the header (`Name Version Rev ...`).
#[must_use]
pub fn snap_list_version(output: &str, name: &str) -> String {
    output
        .lines()
        .skip(1)
        .filter_map(|l| {
            let mut cols = l.split_whitespace();
            let n = cols.next()?;
            let v = cols.next()?;
            (n == name).then(|| v.to_string())
        })
        .next()
        .unwrap_or_default()
}
