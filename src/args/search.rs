//! Command-line search over the catalog.

use crate::catalog::Catalog;
use crate::logic::search::search;
use crate::state::types::FilterSettings;

/// What: Format search results as one `key  name  [type]  description` line each.
#[must_use]
pub fn format_results(catalog: &Catalog, query: &str) -> Vec<String> {
    search(catalog, query, &FilterSettings::default())
        .into_iter()
        .map(|a| {
            format!(
                "{:<14} {:<22} [{}]  {}",
                a.key,
                a.name,
                a.package_type().as_str(),
                a.description
            )
        })
        .collect()
}

/// What: Print catalog matches for `query` and exit.
///
/// Details:
/// - Uses the same word matching as the TUI search; exits with code 1 when nothing matches.
pub fn handle_search(catalog: &Catalog, query: &str) -> ! {
    tracing::info!(query = %query, "search requested from CLI");
    let lines = format_results(catalog, query);
    if lines.is_empty() {
        eprintln!("appshelf: no applications match '{query}'");
        std::process::exit(1);
    }
    for line in lines {
        println!("{line}");
    }
    std::process::exit(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: CLI search output lists matches with their package type.
    ///
    /// Inputs:
    /// - Query "viewer" over the test catalog.
    ///
    /// Output:
    /// - One line for htop tagged `[apt]`.
    fn format_results_lists_matches() {
        let lines = format_results(&crate::catalog::test_catalog(), "viewer");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("htop"));
        assert!(lines[0].contains("[apt]"));
    }
}
