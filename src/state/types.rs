//! Core value types used by appshelf state.

/// A single installable application from the catalog.
///
/// Created once at startup from a catalog entry. Only the status pipeline and
/// completed operations mutate `installed`, `status_pending` and `version`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Application {
    /// Stable unique identifier (catalog key).
    pub key: String,
    /// Human-friendly display name.
    pub name: String,
    /// One-line description suitable for list display.
    pub description: String,
    /// Source / install-method tag as written in the catalog (e.g. `apt`, `flatpak:org.gimp.GIMP`).
    pub source: String,
    /// Identifier handed to the package manager (apt package, flatpak ref, snap name).
    pub package: String,
    /// Binary used for presence and version checks.
    pub tool: String,
    /// Whether the application is currently installed (false until checked).
    pub installed: bool,
    /// `true` until the first status check for this application completes.
    pub status_pending: bool,
    /// Installed version when known; empty otherwise.
    pub version: String,
}

impl Application {
    /// What: Derive the package-type tag from the source string.
    ///
    /// Output:
    /// - The [`PackageType`] matching the source (see [`PackageType::from_source`]).
    #[must_use]
    pub fn package_type(&self) -> PackageType {
        PackageType::from_source(&self.source)
    }
}

/// Named, ordered grouping of applications with its own cursor.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Category {
    /// Category display name.
    pub name: String,
    /// Applications in this category, sorted by name.
    pub apps: Vec<Application>,
    /// Index of the "current" application when this category is active.
    #[serde(skip)]
    pub current_app: usize,
}

impl Category {
    /// What: Return the application under this category's cursor.
    ///
    /// Output:
    /// - `Some(&Application)` when the category is non-empty; `None` otherwise.
    #[must_use]
    pub fn current(&self) -> Option<&Application> {
        self.apps.get(self.current_app)
    }

    /// Index of the last application, `0` for an empty category.
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.apps.len().saturating_sub(1)
    }
}

/// Per-application user intent awaiting confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub enum SelectionState {
    /// No pending operation (equivalent to absence from the store).
    #[default]
    None,
    /// Install on commit.
    Install,
    /// Uninstall on commit.
    Uninstall,
}

/// Operation handed to (and reported back by) the executor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Operation {
    /// Install the application.
    Install,
    /// Uninstall the application.
    Uninstall,
}

impl Operation {
    /// Lowercase verb used in logs and executor output.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Uninstall => "uninstall",
        }
    }
}

/// A confirmed user intent: `{key, operation, display name}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SelectedOperation {
    /// Application key.
    pub key: String,
    /// Requested operation.
    pub operation: Operation,
    /// Display name used on the confirmation screen.
    pub name: String,
}

/// Result of one status check, fed back into the event loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusUpdate {
    /// Application key the check was run for.
    pub key: String,
    /// Observed install state (`false` on timeout or error).
    pub installed: bool,
}

/// Package type derived from an application's source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum PackageType {
    /// Debian/Ubuntu archive package.
    Apt,
    /// Flatpak application.
    Flatpak,
    /// Snap package.
    Snap,
    /// Standalone `.deb` download.
    Deb,
    /// Tool managed by `mise`.
    Mise,
    /// Tool managed by `aqua`.
    Aqua,
    /// Binary release from GitHub.
    Github,
    /// Custom install script.
    Script,
}

impl PackageType {
    /// All package types in filter cycling order.
    pub const ALL: [Self; 8] = [
        Self::Apt,
        Self::Flatpak,
        Self::Snap,
        Self::Deb,
        Self::Mise,
        Self::Aqua,
        Self::Github,
        Self::Script,
    ];

    /// What: Derive the package type from a source / install-method string.
    ///
    /// Inputs:
    /// - `source`: Raw source tag from the catalog.
    ///
    /// Output:
    /// - First type whose token occurs in the lowercased source; `Script` otherwise.
    ///
    /// Details:
    /// - Tokens are checked in the order apt, flatpak, snap, `.deb`, mise, aqua, github, script.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        let s = source.to_lowercase();
        if s.contains("apt") {
            Self::Apt
        } else if s.contains("flatpak") {
            Self::Flatpak
        } else if s.contains("snap") {
            Self::Snap
        } else if s.contains(".deb") {
            Self::Deb
        } else if s.contains("mise") {
            Self::Mise
        } else if s.contains("aqua") {
            Self::Aqua
        } else if s.contains("github") {
            Self::Github
        } else {
            Self::Script
        }
    }

    /// Lowercase tag used for sorting, display and settings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Flatpak => "flatpak",
            Self::Snap => "snap",
            Self::Deb => "deb",
            Self::Mise => "mise",
            Self::Aqua => "aqua",
            Self::Github => "github",
            Self::Script => "script",
        }
    }

    /// Parse a lowercase tag as produced by [`PackageType::as_str`].
    #[must_use]
    pub fn from_tag(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim().to_lowercase())
    }
}

/// Install status filter for the search view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InstallStatusFilter {
    /// Every application passes.
    #[default]
    All,
    /// Only installed applications pass.
    Installed,
    /// Only applications that are not installed pass.
    NotInstalled,
}

impl InstallStatusFilter {
    /// Next value in the `f` key cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Installed,
            Self::Installed => Self::NotInstalled,
            Self::NotInstalled => Self::All,
        }
    }

    /// Short label for the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Installed => "Installed",
            Self::NotInstalled => "Not Installed",
        }
    }

    /// Parse a settings value (`all`, `installed`, `not_installed`).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "all" => Some(Self::All),
            "installed" => Some(Self::Installed),
            "not_installed" | "notinstalled" | "missing" => Some(Self::NotInstalled),
            _ => None,
        }
    }
}

/// Package type filter for the search view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PackageTypeFilter {
    /// Every package type passes.
    #[default]
    All,
    /// Only the given package type passes.
    Only(PackageType),
}

impl PackageTypeFilter {
    /// Next value in the `t` key cycle: All, then each type, then All again.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(PackageType::ALL[0]),
            Self::Only(t) => PackageType::ALL
                .iter()
                .position(|x| *x == t)
                .and_then(|i| PackageType::ALL.get(i + 1))
                .map_or(Self::All, |n| Self::Only(*n)),
        }
    }

    /// Short label for the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(t) => t.as_str(),
        }
    }

    /// Parse a settings value (`all` or a package type tag).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        PackageType::from_tag(s).map(Self::Only)
    }
}

/// Sort option for the search view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Alphabetical by display name.
    #[default]
    Name,
    /// Installed first, then name.
    Status,
    /// Package type tag, then name.
    Type,
    /// Derived category label, then name.
    Category,
}

impl SortOption {
    /// Next value in the `s` key cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Status,
            Self::Status => Self::Type,
            Self::Type => Self::Category,
            Self::Category => Self::Name,
        }
    }

    /// Short label for the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Status => "Status",
            Self::Type => "Type",
            Self::Category => "Category",
        }
    }

    /// Parse a settings value (`name`, `status`, `type`, `category`).
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" | "alphabetical" => Some(Self::Name),
            "status" | "installed" => Some(Self::Status),
            "type" | "package_type" => Some(Self::Type),
            "category" => Some(Self::Category),
            _ => None,
        }
    }
}

/// Filter and sort settings, replaced wholesale on every update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSettings {
    /// Install status filter.
    pub install_status: InstallStatusFilter,
    /// Package type filter.
    pub package_type: PackageTypeFilter,
    /// Sort option applied to search results.
    pub sort: SortOption,
}

/// Which part of the search UI owns keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFocus {
    /// Search text field: printable keys edit the query.
    Field,
    /// Result list: navigation and selection keys apply.
    Results,
}

/// Top-level navigation mode of the screen.
///
/// Replaces independent "search active" / "search has focus" flags so that
/// focus without an active search cannot be represented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenMode {
    /// Category/item cursor over the full catalog.
    #[default]
    Normal,
    /// Flat cursor over filtered search results.
    Search(SearchFocus),
}

impl ScreenMode {
    /// Whether search mode is active.
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Package type derivation follows the fixed token order and defaults to script.
    ///
    /// Inputs:
    /// - Source strings for each token plus an empty and an unknown source.
    ///
    /// Output:
    /// - Matching `PackageType` values; `Script` for empty/unknown.
    ///
    /// Details:
    /// - `.deb` must be recognised by its extension, not by a bare `deb` substring.
    fn package_type_from_source_token_order() {
        assert_eq!(PackageType::from_source("apt"), PackageType::Apt);
        assert_eq!(
            PackageType::from_source("flatpak:org.gimp.GIMP"),
            PackageType::Flatpak
        );
        assert_eq!(PackageType::from_source("snap"), PackageType::Snap);
        assert_eq!(
            PackageType::from_source("https://example.com/tool_amd64.deb"),
            PackageType::Deb
        );
        assert_eq!(PackageType::from_source("mise:hadolint"), PackageType::Mise);
        assert_eq!(PackageType::from_source("aqua:cli/cli"), PackageType::Aqua);
        assert_eq!(
            PackageType::from_source("github:junegunn/fzf"),
            PackageType::Github
        );
        assert_eq!(PackageType::from_source("debian-ish"), PackageType::Script);
        assert_eq!(PackageType::from_source(""), PackageType::Script);
        assert_eq!(PackageType::from_source("curl | sh"), PackageType::Script);
    }

    #[test]
    /// What: Filter and sort cycles visit every value and wrap around.
    ///
    /// Inputs:
    /// - Repeated `next()` calls starting at the defaults.
    ///
    /// Output:
    /// - Install status cycles in 3 steps, sort in 4, package type in 9.
    fn filter_and_sort_cycles_wrap() {
        let mut f = InstallStatusFilter::All;
        for _ in 0..3 {
            f = f.next();
        }
        assert_eq!(f, InstallStatusFilter::All);

        let mut s = SortOption::Name;
        for _ in 0..4 {
            s = s.next();
        }
        assert_eq!(s, SortOption::Name);

        let mut t = PackageTypeFilter::All;
        t = t.next();
        assert_eq!(t, PackageTypeFilter::Only(PackageType::Apt));
        for _ in 0..8 {
            t = t.next();
        }
        assert_eq!(t, PackageTypeFilter::All);
    }

    #[test]
    /// What: Settings keys map onto filter/sort enums, including aliases.
    ///
    /// Inputs:
    /// - Known keys, aliases and an unknown key.
    ///
    /// Output:
    /// - `Some(..)` for recognised values, `None` otherwise.
    fn config_keys_parse_with_aliases() {
        assert_eq!(
            InstallStatusFilter::from_config_key("not-installed"),
            Some(InstallStatusFilter::NotInstalled)
        );
        assert_eq!(
            PackageTypeFilter::from_config_key("Flatpak"),
            Some(PackageTypeFilter::Only(PackageType::Flatpak))
        );
        assert_eq!(
            PackageTypeFilter::from_config_key("all"),
            Some(PackageTypeFilter::All)
        );
        assert_eq!(SortOption::from_config_key("status"), Some(SortOption::Status));
        assert_eq!(SortOption::from_config_key("popularity"), None);
    }
}
