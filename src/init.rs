//! Workspace initialization
//!
//! Writes `config/config.toml` with the built-in defaults via `rendstress init`.
//! An existing file is left alone unless `force` is set.

use crate::config::{ConfigLoader, StressConfig};
use crate::error::ApiError;
use std::path::{Path, PathBuf};
use tracing::info;

/// What `init` did to the workspace config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Overwritten,
    Skipped,
}

/// Summary of initialization operations
#[derive(Debug, Clone)]
pub struct InitSummary {
    pub path: PathBuf,
    pub outcome: InitOutcome,
}

/// Preview of what would be initialized
#[derive(Debug, Clone)]
pub struct InitPreview {
    pub path: PathBuf,
    pub exists: bool,
}

/// Render the default configuration as TOML.
pub fn default_config_toml() -> Result<String, ApiError> {
    toml::to_string_pretty(&StressConfig::default())
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize default config: {}", e)))
}

/// Write the default workspace configuration
pub fn initialize_workspace(workspace_root: &Path, force: bool) -> Result<InitSummary, ApiError> {
    let path = ConfigLoader::workspace_config_path(workspace_root);
    let existed = path.exists();

    if existed && !force {
        return Ok(InitSummary {
            path,
            outcome: InitOutcome::Skipped,
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, default_config_toml()?)?;
    info!(path = %path.display(), overwritten = existed, "Wrote workspace configuration");

    Ok(InitSummary {
        path,
        outcome: if existed {
            InitOutcome::Overwritten
        } else {
            InitOutcome::Created
        },
    })
}

/// List what would be initialized without actually creating files
pub fn list_initialization(workspace_root: &Path) -> InitPreview {
    let path = ConfigLoader::workspace_config_path(workspace_root);
    let exists = path.exists();
    InitPreview { path, exists }
}
