use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::parsing::{parse_bool, strip_inline_comment};
use crate::config::paths::{resolve_catalog_path, resolve_settings_config_path};
use crate::logic::scroll::ScrollBuffer;
use crate::state::types::{FilterSettings, InstallStatusFilter, PackageTypeFilter, SortOption};

/// Default delay between the first resize and the first status check.
pub const DEFAULT_STATUS_CHECK_DELAY_MS: u64 = 500;

/// User-configurable settings loaded from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Initial sort option for search results.
    pub sort_option: SortOption,
    /// Initial install status filter.
    pub install_status_filter: InstallStatusFilter,
    /// Initial package type filter.
    pub package_type_filter: PackageTypeFilter,
    /// Normal-mode scroll buffer (`wide` = 6/3, `compact` = 3/3).
    pub scroll_buffer: ScrollBuffer,
    /// Delay before the status pipeline starts.
    pub status_check_delay_ms: u64,
    /// Start in dry-run mode.
    pub dry_run_default: bool,
    /// Catalog file overriding the built-in registry.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_option: SortOption::Name,
            install_status_filter: InstallStatusFilter::All,
            package_type_filter: PackageTypeFilter::All,
            scroll_buffer: ScrollBuffer::WIDE,
            status_check_delay_ms: DEFAULT_STATUS_CHECK_DELAY_MS,
            dry_run_default: false,
            catalog_path: None,
        }
    }
}

impl Settings {
    /// Initial filter/sort settings for the screen.
    #[must_use]
    pub const fn filters(&self) -> FilterSettings {
        FilterSettings {
            install_status: self.install_status_filter,
            package_type: self.package_type_filter,
            sort: self.sort_option,
        }
    }
}

/// What: Parse `settings.conf` content into `settings`.
///
/// Inputs:
/// - `content`: File content (`key = value` lines, `#`/`//` comments)
/// - `settings`: Settings to update in place
///
/// Details:
/// - Keys are lowercased with `.`, `-` and spaces normalised to `_`.
/// - Unknown keys and unparsable values are ignored (logged at debug level).
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        let applied = match key.as_str() {
            "sort_option" | "sort" => SortOption::from_config_key(val)
                .map(|v| settings.sort_option = v)
                .is_some(),
            "install_status_filter" | "status_filter" => InstallStatusFilter::from_config_key(val)
                .map(|v| settings.install_status_filter = v)
                .is_some(),
            "package_type_filter" | "type_filter" => PackageTypeFilter::from_config_key(val)
                .map(|v| settings.package_type_filter = v)
                .is_some(),
            "scroll_buffer" => match val.to_ascii_lowercase().as_str() {
                "wide" => {
                    settings.scroll_buffer = ScrollBuffer::WIDE;
                    true
                }
                "compact" => {
                    settings.scroll_buffer = ScrollBuffer::COMPACT;
                    true
                }
                _ => false,
            },
            "status_check_delay_ms" => val
                .parse::<u64>()
                .map(|v| settings.status_check_delay_ms = v)
                .is_ok(),
            "dry_run_default" | "app_dry_run_default" => {
                settings.dry_run_default = parse_bool(val);
                true
            }
            "catalog_path" | "catalog" => {
                settings.catalog_path = (!val.is_empty()).then(|| expand_home(val));
                true
            }
            _ => false,
        };
        if !applied {
            debug!(key = %key, value = %val, "ignored settings entry");
        }
    }
}

/// Expand a leading `~/` using `$HOME`.
fn expand_home(val: &str) -> PathBuf {
    if let Some(rest) = val.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return Path::new(&home).join(rest);
    }
    PathBuf::from(val)
}

/// What: Load settings from a specific file.
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match std::fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut out),
        Err(e) => warn!(path = %path.display(), error = %e, "failed to read settings; using defaults"),
    }
    out
}

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Output:
/// - Settings from the first config file found, or defaults. When no `catalog_path` is set
///   and a `catalog.toml` sits next to the settings, it becomes the catalog path.
#[must_use]
pub fn settings() -> Settings {
    let mut out = resolve_settings_config_path()
        .map_or_else(Settings::default, |p| load_settings_from(&p));
    if out.catalog_path.is_none() {
        out.catalog_path = resolve_catalog_path();
    }
    debug!(?out, "settings loaded");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::PackageType;

    #[test]
    /// What: Every supported key is parsed; junk is ignored.
    ///
    /// Inputs:
    /// - Content with comments, aliases, an unknown key and a bad number.
    ///
    /// Output:
    /// - Settings reflect the recognised values; the bad delay keeps its default.
    fn parse_settings_reads_known_keys() {
        let content = "\
# appshelf settings
sort-option = type        # by package type
install_status_filter = not installed
package_type_filter = flatpak
scroll_buffer = compact
status_check_delay_ms = soon
dry_run_default = yes
catalog_path = /opt/appshelf/catalog.toml
mystery = 42
";
        let mut s = Settings::default();
        parse_settings(content, &mut s);
        assert_eq!(s.sort_option, SortOption::Type);
        assert_eq!(s.install_status_filter, InstallStatusFilter::NotInstalled);
        assert_eq!(
            s.package_type_filter,
            PackageTypeFilter::Only(PackageType::Flatpak)
        );
        assert_eq!(s.scroll_buffer, ScrollBuffer::COMPACT);
        assert_eq!(s.status_check_delay_ms, DEFAULT_STATUS_CHECK_DELAY_MS);
        assert!(s.dry_run_default);
        assert_eq!(
            s.catalog_path.as_deref(),
            Some(Path::new("/opt/appshelf/catalog.toml"))
        );
        assert_eq!(s.filters().sort, SortOption::Type);
    }

    #[test]
    /// What: Loading from a file applies values; a missing file yields defaults.
    ///
    /// Inputs:
    /// - Temp `settings.conf` with a delay, and a path that does not exist.
    ///
    /// Output:
    /// - Delay applied from the file; defaults otherwise.
    fn load_settings_from_file_or_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "status_check_delay_ms = 50\n").expect("write");
        assert_eq!(load_settings_from(&path).status_check_delay_ms, 50);
        assert_eq!(
            load_settings_from(&dir.path().join("missing.conf")),
            Settings::default()
        );
    }
}
