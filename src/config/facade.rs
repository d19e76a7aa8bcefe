//! Configuration loader: defaults, global file, workspace files, environment.

use config::{ConfigError, Environment, File};
use std::path::{Path, PathBuf};

use super::merge;
use super::sources::{global_file, workspace_file};
use super::StressConfig;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): built-in defaults, global config file,
    /// `config/config.toml`, `config/{RENDSTRESS_ENV}.toml`, then
    /// `RENDSTRESS__SECTION__KEY` environment variables.
    pub fn load(workspace_root: &Path) -> Result<StressConfig, ConfigError> {
        let builder = merge::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(
            Environment::with_prefix("RENDSTRESS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Load configuration from a single file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<StressConfig, ConfigError> {
        merge::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Path of the global config file, if a home directory is known.
    pub fn xdg_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Path of the workspace base config file.
    pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
        workspace_root.join("config").join("config.toml")
    }

    /// Built-in defaults without touching the filesystem.
    pub fn default() -> StressConfig {
        StressConfig::default()
    }
}
