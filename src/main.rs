//! appshelf binary entrypoint kept minimal. The full runtime lives in `appshelf::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use appshelf::{app, args, catalog::Catalog, config};

/// Log timestamp formatter: local time as `YYYY-MM-DD-T HH:MM:SS`.
struct AppshelfTimer;

impl tracing_subscriber::fmt::time::FormatTime for AppshelfTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S");
        write!(w, "{ts}")
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialise tracing into `logs_dir()/appshelf.log`, falling back to stderr.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
fn init_logging(level: &str) {
    let make_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = config::logs_dir().join("appshelf.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(make_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(AppshelfTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // The TUI owns stdout; stderr keeps startup unblocked.
            tracing_subscriber::fmt()
                .with_env_filter(make_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(AppshelfTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = config::settings();
    let catalog_path = cli.catalog.clone().or_else(|| settings.catalog_path.clone());
    let catalog = Catalog::load(catalog_path.as_deref());
    args::process_args(&cli, &catalog);

    tracing::info!(dry_run = cli.dry_run, "appshelf starting");
    if let Err(err) = app::run(catalog, settings, cli.dry_run).await {
        tracing::error!(error = ?err, "application error");
        eprintln!("appshelf: {err}");
    }
    tracing::info!("appshelf exited");
}
