use std::path::Path;

use super::CatalogEntry;

/// On-disk catalog layout: a list of `[[app]]` tables.
#[derive(Debug, serde::Deserialize)]
struct CatalogFile {
    /// Application entries.
    #[serde(default, rename = "app")]
    apps: Vec<CatalogEntry>,
}

/// What: Read catalog entries from a TOML file.
///
/// Inputs:
/// - `path`: File containing `[[app]]` tables with `key`, `name`, `group` and optional
///   `description`, `source`, `package`, `tool`.
///
/// Output:
/// - Parsed entries in file order.
///
/// # Errors
///
/// - Returns `Err(String)` when the file cannot be read or is not valid catalog TOML.
pub fn load_catalog_file(path: &Path) -> Result<Vec<CatalogEntry>, String> {
    let body = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let parsed: CatalogFile =
        toml::from_str(&body).map_err(|e| format!("invalid catalog {}: {e}", path.display()))?;
    Ok(parsed.apps)
}
