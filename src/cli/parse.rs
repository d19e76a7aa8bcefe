//! CLI parse: clap types for rendstress. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rendstress CLI - structured Unicode payloads for renderer stress tests
#[derive(Parser)]
#[command(name = "rendstress")]
#[command(version)]
#[command(about = "Generate structured Unicode payloads for stress-testing text renderers you own")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a payload and print it, or write it to a file
    Generate {
        /// Variant name or alias (see `rendstress variants`)
        #[arg(long)]
        variant: Option<String>,
        /// Repetition count (10 to 2500000)
        #[arg(long, allow_negative_numbers = true)]
        intensity: Option<i64>,
        /// Write the payload here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Summary format when writing to a file (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Prompt for variant and intensity
        #[arg(long)]
        interactive: bool,
    },
    /// Predict payload size without building it
    Estimate {
        /// Variant name or alias
        #[arg(long)]
        variant: Option<String>,
        /// Repetition count
        #[arg(long, allow_negative_numbers = true)]
        intensity: Option<i64>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the available variants
    Variants {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Report Unicode statistics for an existing file
    Inspect {
        /// File to inspect
        path: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Write config/config.toml with the default settings
    Init {
        /// Force re-initialization (overwrite existing)
        #[arg(long)]
        force: bool,

        /// List what would be initialized without creating
        #[arg(long)]
        list: bool,
    },
}
