//! Command-line catalog listing.

use crate::catalog::Catalog;

/// What: Render the catalog as pretty JSON grouped by category.
///
/// Output:
/// - `Ok(json)` with one object per category (`name`, `apps`).
///
/// # Errors
///
/// - Returns `Err` if serialization fails.
pub fn catalog_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(catalog.categories())
}

/// What: Print the catalog as JSON and exit.
///
/// Details:
/// - Install status is not checked here; every application reports `status_pending = true`.
/// - Exits with code 1 if serialization fails.
pub fn handle_list(catalog: &Catalog) -> ! {
    tracing::info!(apps = catalog.app_count(), "catalog listing requested from CLI");
    match catalog_json(catalog) {
        Ok(json) => {
            println!("{json}");
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("appshelf: failed to serialize catalog: {e}");
            tracing::error!(error = %e, "catalog serialization failed");
            std::process::exit(1);
        }
    }
}
