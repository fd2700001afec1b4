use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::AppError;

use super::rendering::Report;

/// Writes the page to `path`, replacing any previous file, and returns the
/// absolute path written. Missing parent directories are created.
pub async fn write_report(report: &Report, path: impl AsRef<Path>) -> Result<PathBuf, AppError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Ensuring output directory exists: {}", parent.display());
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::report_write(path.display().to_string(), e))?;
    }

    tokio::fs::write(path, report.html.as_bytes())
        .await
        .map_err(|e| AppError::report_write(path.display().to_string(), e))?;

    let absolute = tokio::fs::canonicalize(path)
        .await
        .map_err(|e| AppError::report_write(path.display().to_string(), e))?;

    info!(
        "Wrote report ({} bytes) to {}",
        report.html.len(),
        absolute.display()
    );
    Ok(absolute)
}
