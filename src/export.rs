//! Export of assembled payloads to files or any writer.

use crate::error::ApiError;
use crate::payload::PayloadResult;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a payload ended up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub bytes: usize,
    pub digest: String,
}

/// Write the assembled payload to `path`, creating parent directories.
pub fn write_payload(result: &PayloadResult, path: &Path) -> Result<ExportSummary, ApiError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;
    write_to(result, &mut file)?;
    file.sync_all()?;

    let summary = ExportSummary {
        path: path.to_path_buf(),
        bytes: result.assembled().len(),
        digest: crate::payload::stats::digest(result.assembled()),
    };
    info!(
        path = %summary.path.display(),
        bytes = summary.bytes,
        "Exported payload"
    );
    Ok(summary)
}

/// Write the assembled payload as UTF-8 with no trailing newline.
pub fn write_to<W: Write>(result: &PayloadResult, writer: &mut W) -> Result<(), ApiError> {
    writer.write_all(result.assembled().as_bytes())?;
    writer.flush()?;
    Ok(())
}
