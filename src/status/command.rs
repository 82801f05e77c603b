//! Status checker backed by package-manager commands.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::parse::{dpkg_status_installed, first_version_token, flatpak_info_version, snap_list_version};
use super::{StatusChecker, StatusRequest, VersionFetcher};
use crate::state::types::PackageType;

/// Checks installation state with `dpkg-query`, `flatpak`, `snap`, `mise` or a `PATH` lookup.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandStatusChecker;

/// What: Run `program args..` and capture stdout.
///
/// Output:
/// - `Some(stdout)` when the command ran and exited successfully; `None` otherwise.
///
/// Details:
/// - The child is killed when the future is dropped (timeout or cancellation).
async fn run_capture(program: &str, args: &[&str]) -> Option<String> {
    let out = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| tracing::debug!(program, error = %e, "status command failed to start"))
        .ok()?;
    if !out.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// What: Identifier to hand to flatpak.
///
/// Details:
/// - `flatpak:<ref>` sources carry the ref; otherwise the configured package is used.
fn flatpak_ref(request: &StatusRequest) -> &str {
    match request.source.split_once(':') {
        Some((_, r)) if request.package == request.key && !r.is_empty() => r,
        _ => &request.package,
    }
}

/// Whether `tool` resolves on `PATH`.
///
/// The lookup walks `PATH` on the filesystem, so it runs on the blocking pool.
async fn on_path(tool: &str) -> bool {
    let tool = tool.to_string();
    tokio::task::spawn_blocking(move || which::which(tool).is_ok())
        .await
        .unwrap_or(false)
}

#[async_trait]
impl StatusChecker for CommandStatusChecker {
    async fn check(&self, request: &StatusRequest) -> bool {
        let installed = match request.package_type {
            PackageType::Apt | PackageType::Deb => {
                run_capture("dpkg-query", &["-W", "-f=${Status}", &request.package])
                    .await
                    .is_some_and(|s| dpkg_status_installed(&s))
            }
            PackageType::Flatpak => run_capture("flatpak", &["info", flatpak_ref(request)])
                .await
                .is_some(),
            PackageType::Snap => run_capture("snap", &["list", &request.package])
                .await
                .is_some(),
            PackageType::Mise => {
                on_path(&request.tool).await
                    || run_capture("mise", &["which", &request.tool])
                        .await
                        .is_some()
            }
            PackageType::Aqua | PackageType::Github | PackageType::Script => {
                on_path(&request.tool).await
            }
        };
        tracing::debug!(key = %request.key, installed, "status checked");
        installed
    }
}

#[async_trait]
impl VersionFetcher for CommandStatusChecker {
    async fn fetch_version(&self, request: &StatusRequest) -> String {
        match request.package_type {
            PackageType::Apt | PackageType::Deb => {
                run_capture("dpkg-query", &["-W", "-f=${Version}", &request.package])
                    .await
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default()
            }
            PackageType::Flatpak => run_capture("flatpak", &["info", flatpak_ref(request)])
                .await
                .map(|s| flatpak_info_version(&s))
                .unwrap_or_default(),
            PackageType::Snap => run_capture("snap", &["list", &request.package])
                .await
                .map(|s| snap_list_version(&s, &request.package))
                .unwrap_or_default(),
            PackageType::Mise
            | PackageType::Aqua
            | PackageType::Github
            | PackageType::Script => run_capture(&request.tool, &["--version"])
                .await
                .map(|s| first_version_token(&s))
                .unwrap_or_default(),
        }
    }
}
