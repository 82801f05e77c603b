//! Installation status and version checks behind async traits.
//!
//! Checks are bounded by a per-package-type timeout and a parent
//! [`CancellationToken`]; every failure degrades to "not installed" or an
//! empty version.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::state::types::{Application, PackageType};

mod command;
mod parse;

pub use command::CommandStatusChecker;
pub use parse::{dpkg_status_installed, first_version_token, flatpak_info_version, snap_list_version};

/// Timeout for binary/tool presence checks.
pub const BINARY_CHECK_TIMEOUT: Duration = Duration::from_secs(2);
/// Timeout for apt/dpkg checks.
pub const APT_CHECK_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for flatpak and snap checks.
pub const SANDBOX_CHECK_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for best-effort version fetches.
pub const VERSION_TIMEOUT: Duration = Duration::from_secs(2);

/// Everything a checker needs to know about one application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusRequest {
    /// Application key.
    pub key: String,
    /// Package-manager identifier.
    pub package: String,
    /// Binary used for presence/version checks.
    pub tool: String,
    /// Raw source tag.
    pub source: String,
    /// Derived package type.
    pub package_type: PackageType,
}

impl StatusRequest {
    /// Build a request from a catalog application.
    #[must_use]
    pub fn from_app(app: &Application) -> Self {
        Self {
            key: app.key.clone(),
            package: app.package.clone(),
            tool: app.tool.clone(),
            source: app.source.clone(),
            package_type: app.package_type(),
        }
    }
}

/// What: Timeout for a status check of `package_type`.
///
/// Output:
/// - 2 s for tool-based types, 5 s for apt and `.deb`, 10 s for flatpak and snap.
#[must_use]
pub const fn check_timeout(package_type: PackageType) -> Duration {
    match package_type {
        PackageType::Apt | PackageType::Deb => APT_CHECK_TIMEOUT,
        PackageType::Flatpak | PackageType::Snap => SANDBOX_CHECK_TIMEOUT,
        PackageType::Mise | PackageType::Aqua | PackageType::Github | PackageType::Script => {
            BINARY_CHECK_TIMEOUT
        }
    }
}

/// Reports whether an application is installed.
#[async_trait]
pub trait StatusChecker: Send + Sync {
    /// Check installation state; implementations return `false` on any error.
    async fn check(&self, request: &StatusRequest) -> bool;
}

/// Fetches the installed version of an application.
#[async_trait]
pub trait VersionFetcher: Send + Sync {
    /// Return the version string, or an empty string when unknown.
    async fn fetch_version(&self, request: &StatusRequest) -> String;
}

/// What: Run a status check bounded by its timeout and the parent token.
///
/// Inputs:
/// - `checker`: Status checker
/// - `request`: Application to check
/// - `cancel`: Parent cancellation token
///
/// Output:
/// - `Some(installed)`; a timeout yields `Some(false)`.
/// - `None` when `cancel` fired first.
pub async fn bounded_check(
    checker: &dyn StatusChecker,
    request: &StatusRequest,
    cancel: &CancellationToken,
) -> Option<bool> {
    let limit = check_timeout(request.package_type);
    let scope = cancel.child_token();
    tokio::select! {
        biased;
        () = scope.cancelled() => None,
        res = tokio::time::timeout(limit, checker.check(request)) => Some(res.unwrap_or_else(|_| {
            tracing::warn!(key = %request.key, timeout_ms = limit.as_millis(), "status check timed out");
            false
        })),
    }
}

/// What: Fetch a version bounded by [`VERSION_TIMEOUT`] and the parent token.
///
/// Output:
/// - `Some(version)` (empty on timeout); `None` when cancelled.
pub async fn bounded_version(
    fetcher: &dyn VersionFetcher,
    request: &StatusRequest,
    cancel: &CancellationToken,
) -> Option<String> {
    let scope = cancel.child_token();
    tokio::select! {
        biased;
        () = scope.cancelled() => None,
        res = tokio::time::timeout(VERSION_TIMEOUT, fetcher.fetch_version(request)) => {
            Some(res.unwrap_or_default())
        }
    }
}
