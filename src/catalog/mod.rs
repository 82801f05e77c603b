//! Catalog adapter: turns registry entries into sorted categories and an O(1) key index.

use std::collections::HashMap;
use std::path::Path;

use crate::state::types::{Application, Category};

mod file;
mod registry;

pub use file::load_catalog_file;
pub use registry::builtin_entries;

/// One application as described by a catalog source.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct CatalogEntry {
    /// Unique application key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    #[serde(default)]
    pub description: String,
    /// Source / install-method tag.
    #[serde(default)]
    pub source: String,
    /// Grouping label; becomes the category name.
    #[serde(alias = "category")]
    pub group: String,
    /// Package-manager identifier; defaults to `key`.
    #[serde(default)]
    pub package: Option<String>,
    /// Binary used for presence/version checks; defaults to `key`.
    #[serde(default)]
    pub tool: Option<String>,
}

/// Loaded catalog: sorted categories plus a key → position index.
///
/// The index is built once per load and only rebuilt through
/// [`Catalog::from_entries`]; categories and their application order never
/// change afterwards.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Categories sorted by name, each with applications sorted by name.
    categories: Vec<Category>,
    /// Key → (category index, application index).
    index: HashMap<String, (usize, usize)>,
}

impl Catalog {
    /// What: Group entries into categories and build the key index.
    ///
    /// Inputs:
    /// - `entries`: Raw catalog entries in any order.
    ///
    /// Output:
    /// - Catalog whose categories are sorted by name and whose applications are sorted by
    ///   display name; every application starts not installed and status-pending.
    ///
    /// Details:
    /// - Duplicate keys keep the first occurrence and are logged.
    #[must_use]
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut groups: HashMap<String, Vec<Application>> = HashMap::new();
        let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
        for e in entries {
            if !seen.insert(e.key.clone()) {
                tracing::warn!(key = %e.key, "duplicate catalog key ignored");
                continue;
            }
            let app = Application {
                package: e.package.unwrap_or_else(|| e.key.clone()),
                tool: e.tool.unwrap_or_else(|| e.key.clone()),
                key: e.key,
                name: e.name,
                description: e.description,
                source: e.source,
                installed: false,
                status_pending: true,
                version: String::new(),
            };
            groups.entry(e.group).or_default().push(app);
        }
        let mut categories: Vec<Category> = groups
            .into_iter()
            .map(|(name, mut apps)| {
                apps.sort_by(|a, b| {
                    a.name
                        .to_lowercase()
                        .cmp(&b.name.to_lowercase())
                        .then_with(|| a.key.cmp(&b.key))
                });
                Category {
                    name,
                    apps,
                    current_app: 0,
                }
            })
            .collect();
        categories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        let mut index = HashMap::new();
        for (ci, cat) in categories.iter().enumerate() {
            for (ai, app) in cat.apps.iter().enumerate() {
                index.insert(app.key.clone(), (ci, ai));
            }
        }
        tracing::debug!(
            categories = categories.len(),
            apps = index.len(),
            "catalog built"
        );
        Self { categories, index }
    }

    /// What: Load the catalog from `path` when given, falling back to the built-in registry.
    ///
    /// Inputs:
    /// - `path`: Optional catalog TOML file.
    ///
    /// Output:
    /// - Catalog from the file, or from [`builtin_entries`] if the file is absent or invalid.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(p) = path {
            match load_catalog_file(p) {
                Ok(entries) if !entries.is_empty() => {
                    tracing::info!(path = %p.display(), count = entries.len(), "loaded catalog file");
                    return Self::from_entries(entries);
                }
                Ok(_) => {
                    tracing::warn!(path = %p.display(), "catalog file is empty; using built-in catalog");
                }
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "failed to load catalog file; using built-in catalog");
                }
            }
        }
        Self::from_entries(builtin_entries())
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category at `idx`.
    #[must_use]
    pub fn category(&self, idx: usize) -> Option<&Category> {
        self.categories.get(idx)
    }

    /// Mutable category at `idx` (cursor updates only).
    pub fn category_mut(&mut self, idx: usize) -> Option<&mut Category> {
        self.categories.get_mut(idx)
    }

    /// Number of categories.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of applications.
    #[must_use]
    pub fn app_count(&self) -> usize {
        self.index.len()
    }

    /// Whether no application is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Position of `key` as (category index, application index).
    #[must_use]
    pub fn position(&self, key: &str) -> Option<(usize, usize)> {
        self.index.get(key).copied()
    }

    /// Application for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Application> {
        let (c, a) = self.position(key)?;
        self.categories.get(c)?.apps.get(a)
    }

    /// Mutable application for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Application> {
        let (c, a) = self.position(key)?;
        self.categories.get_mut(c)?.apps.get_mut(a)
    }

    /// Every application in catalog order (category order, then in-category order).
    pub fn apps(&self) -> impl Iterator<Item = &Application> {
        self.categories.iter().flat_map(|c| c.apps.iter())
    }

    /// Re-mark every application as status-pending.
    pub fn mark_all_pending(&mut self) {
        for cat in &mut self.categories {
            for app in &mut cat.apps {
                app.status_pending = true;
            }
        }
    }
}

#[cfg(test)]
/// What: Build a small deterministic catalog for unit tests.
///
/// Output:
/// - Three categories ("Development", "Media", "System") with mixed install states.
pub(crate) fn test_catalog() -> Catalog {
    let e = |key: &str, name: &str, desc: &str, source: &str, group: &str| CatalogEntry {
        key: key.to_string(),
        name: name.to_string(),
        description: desc.to_string(),
        source: source.to_string(),
        group: group.to_string(),
        package: None,
        tool: None,
    };
    let mut catalog = Catalog::from_entries(vec![
        e("git", "Git", "Distributed version control", "apt", "Development"),
        e("hadolint", "Hadolint", "Dockerfile linter", "mise:hadolint", "Development"),
        e("lazygit", "Lazygit", "Terminal UI for git commands", "github:jesseduffield/lazygit", "Development"),
        e("mise", "mise", "Polyglot runtime manager", "script", "Development"),
        e("spotify", "Spotify", "Music streaming client", "snap", "Media"),
        e("vlc", "VLC", "Versatile media player", "flatpak:org.videolan.VLC", "Media"),
        e("btop", "btop", "Resource monitor", "apt", "System"),
        e("htop", "htop", "Interactive process viewer", "apt", "System"),
    ]);
    for key in ["git", "btop", "vlc"] {
        if let Some(a) = catalog.get_mut(key) {
            a.installed = true;
            a.status_pending = false;
        }
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Categories and applications are sorted and indexed.
    ///
    /// Inputs:
    /// - Test catalog built from unsorted entries.
    ///
    /// Output:
    /// - Category names ascend; index resolves every key to its application.
    fn from_entries_sorts_and_indexes() {
        let c = test_catalog();
        let names: Vec<&str> = c.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Development", "Media", "System"]);
        let dev: Vec<&str> = c.categories()[0].apps.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(dev, vec!["git", "hadolint", "lazygit", "mise"]);
        for app in c.apps() {
            assert_eq!(c.get(&app.key).map(|a| &a.key), Some(&app.key));
        }
        assert_eq!(c.app_count(), 8);
    }

    #[test]
    /// What: New catalogs start with every application pending and not installed.
    ///
    /// Inputs:
    /// - Built-in registry.
    ///
    /// Output:
    /// - All applications pending and not installed; package/tool default to key.
    fn builtin_catalog_starts_pending() {
        let c = Catalog::from_entries(builtin_entries());
        assert!(!c.is_empty());
        assert!(c.apps().all(|a| a.status_pending && !a.installed));
        assert!(c.get("hadolint").is_some());
    }

    #[test]
    /// What: Duplicate keys keep the first entry.
    ///
    /// Inputs:
    /// - Two entries sharing a key in different groups.
    ///
    /// Output:
    /// - Single application located in the first group.
    fn duplicate_keys_keep_first() {
        let mk = |group: &str| CatalogEntry {
            key: "jq".into(),
            name: "jq".into(),
            description: String::new(),
            source: "apt".into(),
            group: group.into(),
            package: None,
            tool: None,
        };
        let c = Catalog::from_entries(vec![mk("A"), mk("B")]);
        assert_eq!(c.app_count(), 1);
        assert_eq!(c.category_count(), 1);
        assert_eq!(c.categories()[0].name, "A");
    }

    #[test]
    /// What: Missing catalog file falls back to the built-in registry.
    ///
    /// Inputs:
    /// - Path that does not exist.
    ///
    /// Output:
    /// - Catalog equal in size to the built-in registry.
    fn load_falls_back_to_builtin() {
        let c = Catalog::load(Some(Path::new("/nonexistent/appshelf/catalog.toml")));
        assert_eq!(c.app_count(), Catalog::from_entries(builtin_entries()).app_count());
    }
}
