//! Search, filter and sort engine over the whole catalog.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::state::types::{
    Application, FilterSettings, InstallStatusFilter, PackageTypeFilter, SortOption,
};

/// Keyword sets for the derived category label, checked in order.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Development",
        &[
            "code", "editor", "git", "compiler", "debug", "lint", "docker", "container",
            "kubernetes", "runtime", "develop", "programming", "script", "sdk",
        ],
    ),
    (
        "Media",
        &[
            "video", "audio", "music", "image", "photo", "media", "player", "graphics",
            "streaming", "recording",
        ],
    ),
    (
        "Productivity",
        &[
            "office", "note", "document", "productivity", "calendar", "task", "pdf",
            "spreadsheet", "reference",
        ],
    ),
    (
        "System",
        &[
            "system", "monitor", "disk", "backup", "process", "network", "file", "usage",
            "restore",
        ],
    ),
    (
        "Communication",
        &[
            "chat", "mail", "email", "messag", "communication", "voice", "browser", "web",
        ],
    ),
];

/// What: Check an application against the install status filter.
///
/// Inputs:
/// - `app`: Candidate application
/// - `filter`: Active install status filter
///
/// Output:
/// - `true` when the application passes.
#[must_use]
pub const fn passes_install_status_filter(app: &Application, filter: InstallStatusFilter) -> bool {
    match filter {
        InstallStatusFilter::All => true,
        InstallStatusFilter::Installed => app.installed,
        InstallStatusFilter::NotInstalled => !app.installed,
    }
}

/// What: Check an application against the package type filter.
///
/// Inputs:
/// - `app`: Candidate application
/// - `filter`: Active package type filter
///
/// Output:
/// - `true` when the filter is `All` or the derived package type matches.
#[must_use]
pub fn passes_package_type_filter(app: &Application, filter: PackageTypeFilter) -> bool {
    match filter {
        PackageTypeFilter::All => true,
        PackageTypeFilter::Only(t) => app.package_type() == t,
    }
}

/// What: Derive a coarse category label from name and description keywords.
///
/// Inputs:
/// - `app`: Application to classify
///
/// Output:
/// - One of Development, Media, Productivity, System, Communication, or Other.
///
/// Details:
/// - Only used for the Category sort; the catalog's own categories are unaffected.
#[must_use]
pub fn derived_category_label(app: &Application) -> &'static str {
    let hay = format!("{} {}", app.name, app.description).to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| hay.contains(w)))
        .map_or("Other", |(label, _)| label)
}

/// What: Word-boundary-preferred match of `query_lower` against name and description.
///
/// Inputs:
/// - `app`: Candidate application
/// - `query_lower`: Trimmed, lowercased, non-empty query
///
/// Output:
/// - `true` when every query term is a substring of at least one word of
///   `name + description`.
///
/// Details:
/// - For a single-term query this is "some word contains the query"; there is no fuzzy tier.
#[must_use]
pub fn matches_query(app: &Application, query_lower: &str) -> bool {
    let hay = format!("{} {}", app.name, app.description).to_lowercase();
    let words: Vec<&str> = hay.split_whitespace().collect();
    query_lower
        .split_whitespace()
        .all(|term| words.iter().any(|w| w.contains(term)))
}

/// Case-insensitive display-name comparison with key as final tiebreak.
fn by_name(a: &Application, b: &Application) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.key.cmp(&b.key))
}

/// What: Sort applications in place per `sort`.
///
/// Inputs:
/// - `apps`: Applications to order
/// - `sort`: Active sort option
///
/// Details:
/// - Status puts installed first; Type orders by package-type tag; Category by derived label.
///   Every option breaks ties by name.
pub fn sort_apps(apps: &mut [&Application], sort: SortOption) {
    match sort {
        SortOption::Name => apps.sort_by(|a, b| by_name(a, b)),
        SortOption::Status => {
            apps.sort_by(|a, b| b.installed.cmp(&a.installed).then_with(|| by_name(a, b)));
        }
        SortOption::Type => apps.sort_by(|a, b| {
            a.package_type()
                .as_str()
                .cmp(b.package_type().as_str())
                .then_with(|| by_name(a, b))
        }),
        SortOption::Category => apps.sort_by(|a, b| {
            derived_category_label(a)
                .cmp(derived_category_label(b))
                .then_with(|| by_name(a, b))
        }),
    }
}

/// What: Produce the filtered, sorted and query-matched application list.
///
/// Inputs:
/// - `catalog`: Full catalog
/// - `query`: Raw query text (trimmed and lowercased here)
/// - `filters`: Install status / package type filters and sort option
///
/// Output:
/// - Matching applications in final display order.
///
/// Details:
/// - An empty query returns every application passing the filters.
/// - Sorting runs before and after query matching so the final order always follows `sort`.
#[must_use]
pub fn search<'a>(
    catalog: &'a Catalog,
    query: &str,
    filters: &FilterSettings,
) -> Vec<&'a Application> {
    let mut apps: Vec<&Application> = catalog
        .apps()
        .filter(|a| passes_install_status_filter(a, filters.install_status))
        .filter(|a| passes_package_type_filter(a, filters.package_type))
        .collect();
    sort_apps(&mut apps, filters.sort);

    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return apps;
    }
    let mut matched: Vec<&Application> = apps
        .into_iter()
        .filter(|a| matches_query(a, &q))
        .collect();
    sort_apps(&mut matched, filters.sort);
    matched
}

/// Keys of [`search`] results, in order.
#[must_use]
pub fn search_keys(catalog: &Catalog, query: &str, filters: &FilterSettings) -> Vec<String> {
    search(catalog, query, filters)
        .into_iter()
        .map(|a| a.key.clone())
        .collect()
}
