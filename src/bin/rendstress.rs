//! rendstress CLI Binary
//!
//! Command-line interface for the rendstress payload generator.

use anyhow::Context;
use clap::Parser;
use rendstress::cli::{Cli, RunContext};
use rendstress::config::ConfigLoader;
use rendstress::logging::{init_logging, LoggingConfig};
use std::io::Write;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("rendstress CLI starting");

    let context = match RunContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", rendstress::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            let trailing_newline = !rendstress::cli::writes_raw_payload(&cli.command);
            if let Err(e) = emit(&output, trailing_newline) {
                error!("Failed to write output: {:#}", e);
                eprintln!("error: {:#}", e);
                process::exit(1);
            }
            info!("Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", rendstress::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Write command output to stdout. Payloads are written exactly as
/// assembled; summaries and tables get a trailing newline.
fn emit(output: &str, trailing_newline: bool) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_output(&mut stdout, output, trailing_newline)
}

fn write_output<W: Write>(
    out: &mut W,
    output: &str,
    trailing_newline: bool,
) -> anyhow::Result<()> {
    out.write_all(output.as_bytes())
        .context("failed to write output to stdout")?;
    if trailing_newline {
        out.write_all(b"\n").context("failed to write output to stdout")?;
    }
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Build logging configuration from CLI args, environment, and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
        // An explicit --log-output value still takes precedence below.
        if config.output == "file" {
            config.output = "file+stderr".to_string();
        }
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    let output_uses_file = config.output == "file" || config.output == "file+stderr";
    if config.enabled && output_uses_file {
        let resolved =
            rendstress::logging::resolve_log_file_path(cli.log_file.clone(), config.file.clone());
        if let Ok(path) = resolved {
            config.file = Some(path);
        }
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
