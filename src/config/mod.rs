//! User configuration: config/log directories and `settings.conf`.

mod parsing;
pub mod paths;
pub mod settings;

pub use paths::{config_dir, logs_dir};
pub use settings::{Settings, load_settings_from, parse_settings, settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
