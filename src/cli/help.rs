//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string used in log spans (e.g. "generate", "inspect").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Estimate { .. } => "estimate",
        Commands::Variants { .. } => "variants",
        Commands::Inspect { .. } => "inspect",
        Commands::Init { .. } => "init",
    }
}

/// True when the command's output is an assembled payload that must reach
/// stdout byte for byte, with no trailing newline.
pub fn writes_raw_payload(command: &Commands) -> bool {
    matches!(command, Commands::Generate { output: None, .. })
}

/// Output format requested by a command, if it takes one.
pub fn output_format(command: &Commands) -> Option<&str> {
    match command {
        Commands::Generate { format, .. }
        | Commands::Estimate { format, .. }
        | Commands::Variants { format }
        | Commands::Inspect { format, .. } => Some(format.as_str()),
        Commands::Init { .. } => None,
    }
}
