use crate::cli::Args;
use crate::config::Config;
use crate::constants::LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "nhl_report=info";

fn env_filter(default_directive: &str) -> Result<EnvFilter, AppError> {
    let directive = default_directive
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a log file path into (directory, file name).
fn split_log_path(custom_path: &str) -> (String, String) {
    let path = Path::new(custom_path);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(LOG_FILE_NAME);
    (parent.to_string_lossy().to_string(), file_name.to_string())
}

/// Where the daily appender writes: `{dir}/{name}.YYYY-MM-DD`.
fn daily_log_pattern(log_dir: &str, file_name: &str) -> String {
    Path::new(log_dir)
        .join(format!("{file_name}.YYYY-MM-DD"))
        .to_string_lossy()
        .to_string()
}

async fn ensure_log_dir(log_dir: &str) -> Result<(), AppError> {
    if Path::new(log_dir).exists() {
        return Ok(());
    }
    tokio::fs::create_dir_all(log_dir)
        .await
        .map_err(|e| AppError::log_setup_error(format!("Failed to create log directory: {e}")))
}

/// Sets up logging for the application.
///
/// - Console: stdout, `nhl_report=info` unless `RUST_LOG` says otherwise,
///   warnings only with `--quiet`
/// - File: daily rolling file when a log file is given on the command line or
///   in the config; the directory is created if missing. The configured name
///   is a prefix, each day's file gets a `.YYYY-MM-DD` suffix.
///
/// Returns the log file pattern, if any, and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    args: &Args,
    config: &Config,
) -> Result<(Option<String>, Option<WorkerGuard>), AppError> {
    let console_directive = if args.quiet {
        "nhl_report=warn"
    } else {
        DEFAULT_DIRECTIVE
    };
    let console_layer = fmt::Layer::new()
        .with_writer(stdout)
        .with_ansi(true)
        .with_filter(env_filter(console_directive)?);

    let registry = tracing_subscriber::registry();

    let Some(custom_path) = args.log_file.as_ref().or(config.log_file_path.as_ref()) else {
        registry
            .with(console_layer)
            .try_init()
            .map_err(|e| AppError::log_setup_error(e.to_string()))?;
        return Ok((None, None));
    };

    let (log_dir, log_file_name) = split_log_path(custom_path);
    ensure_log_dir(&log_dir).await?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard flushes buffered lines when dropped
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    registry
        .with(console_layer)
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter(DEFAULT_DIRECTIVE)?),
        )
        .try_init()
        .map_err(|e| AppError::log_setup_error(e.to_string()))?;

    Ok((Some(daily_log_pattern(&log_dir, &log_file_name)), Some(guard)))
}
