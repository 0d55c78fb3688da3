pub mod models;
pub mod services;

pub use models::{AnalysisResult, Confidence, FactorName, FactorScores, ScoreBand};
pub use services::detection::{analyze, AnalysisError, Analyzer, EXAMPLE_TEXT};

use services::config_store::LoggingConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "cipherwrite_";
const LOGS_TO_KEEP: usize = 30;

fn env_flag(name: &str) -> bool {
    matches!(
        std::env::var(name).as_deref(),
        Ok("1") | Ok("true") | Ok("TRUE")
    )
}

/// Resolve the per-session log directory; `None` means console only.
fn resolve_logs_dir(config: &LoggingConfig) -> Option<PathBuf> {
    if env_flag("CIPHERWRITE_DISABLE_FILE_LOG") || !config.file_logging {
        return None;
    }
    match std::env::var("CIPHERWRITE_LOG_DIR") {
        Ok(p) if !p.trim().is_empty() => Some(PathBuf::from(p)),
        _ => config.log_dir.clone(),
    }
}

/// Initialize logging: console on stderr, plus a timestamped log file when a
/// log directory is configured. Returns the log file path, if any.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) -> Option<PathBuf> {
    // Configure subscriber filter as early as possible (so fallback logging is consistent).
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(logs_dir) = resolve_logs_dir(config) else {
        init_console_only_logging(env_filter);
        return None;
    };

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        init_console_only_logging(env_filter);
        info!(error = %e, dir = %logs_dir.display(), "Falling back to console-only logging (log dir not writable)");
        return None;
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("{}{}.log", LOG_FILE_PREFIX, timestamp);

    // Create a dedicated file per session; keep log writes non-blocking.
    let file_appender = rolling::never(&logs_dir, &log_filename);
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true);

    // Reports go to stdout, so the console layer always writes to stderr
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .is_ok();
    if !installed {
        return None;
    }
    let _ = LOG_GUARD.set(file_guard);

    let log_file = logs_dir.join(&log_filename);
    info!("Log file: {}", log_file.display());
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Best-effort cleanup in the background.
    if !env_flag("CIPHERWRITE_DISABLE_LOG_CLEANUP") {
        std::thread::spawn(move || {
            cleanup_old_logs(&logs_dir, LOGS_TO_KEEP);
        });
    }

    Some(log_file)
}

fn init_console_only_logging(env_filter: EnvFilter) {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

/// Remove all but the `keep` most recently modified session logs.
pub fn cleanup_old_logs(logs_dir: &Path, keep: usize) {
    let mut entries: Vec<_> = match fs::read_dir(logs_dir) {
        Ok(rd) => rd.filter_map(|e| e.ok()).collect(),
        Err(_) => return,
    };

    entries.retain(|e| {
        let name = e.file_name().to_string_lossy().to_string();
        name.starts_with(LOG_FILE_PREFIX) && name.ends_with(".log")
    });

    if entries.len() <= keep {
        return;
    }

    entries.sort_by_key(|e| {
        e.metadata()
            .and_then(|m| m.modified())
            .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
    });

    let remove_count = entries.len().saturating_sub(keep);
    for entry in entries.into_iter().take(remove_count) {
        let _ = fs::remove_file(entry.path());
    }
}
