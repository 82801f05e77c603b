use std::env;
use std::path::{Path, PathBuf};

/// Config directory name under `$HOME/.config` or `$XDG_CONFIG_HOME`.
const APP_DIR: &str = "appshelf";

/// Candidate config directories in priority order: `$HOME/.config/appshelf`, then XDG.
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(h) = env::var("HOME") {
        dirs.push(Path::new(&h).join(".config").join(APP_DIR));
    }
    if let Ok(x) = env::var("XDG_CONFIG_HOME")
        && !x.trim().is_empty()
    {
        dirs.push(Path::new(&x).join(APP_DIR));
    }
    dirs
}

/// Determine the path of `settings.conf`, if one exists.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    candidate_dirs()
        .into_iter()
        .map(|d| d.join("settings.conf"))
        .find(|p| p.is_file())
}

/// Determine the path of a user `catalog.toml`, if one exists.
pub(crate) fn resolve_catalog_path() -> Option<PathBuf> {
    candidate_dirs()
        .into_iter()
        .map(|d| d.join("catalog.toml"))
        .find(|p| p.is_file())
}

/// What: Config directory for appshelf, created on demand.
///
/// Output:
/// - `$HOME/.config/appshelf` when HOME is set and writable; otherwise
///   `$XDG_CONFIG_HOME/appshelf` (or `./.config/appshelf`).
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let base = match env::var("XDG_CONFIG_HOME") {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from(".").join(".config"),
    };
    let dir = base.join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `$HOME/.config/appshelf/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
