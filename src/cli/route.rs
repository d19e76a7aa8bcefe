//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::config::{ConfigLoader, StressConfig};
use crate::error::ApiError;
use crate::export;
use crate::generation::{GenerationPlan, GenerationRequest, GenerationStatus, Generator};
use crate::init;
use crate::payload::{PayloadResult, Variant, MAX_INTENSITY, MIN_INTENSITY};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, info_span};

use crate::cli::help::{command_name, output_format};
use crate::cli::output::check_format;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_estimate_json, format_estimate_text, format_generate_summary_json,
    format_generate_summary_text, format_init_preview, format_init_summary, format_inspect_json,
    format_inspect_text, format_status_line, format_variants_json, format_variants_text,
    variant_rows, EstimateView, GenerateSummary, InspectReport,
};

/// Runtime context for CLI execution: workspace and merged configuration.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    workspace_root: PathBuf,
    config: StressConfig,
    color: bool,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::with_config(workspace_root, config.validated()?))
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: StressConfig) -> Self {
        Self {
            workspace_root,
            config,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn config(&self) -> &StressConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let name = command_name(command);
        let _span = info_span!("command", name).entered();
        if let Some(format) = output_format(command) {
            check_format(format)?;
        }

        let started = Instant::now();
        let result = self.execute_inner(command);
        debug!(
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate {
                variant,
                intensity,
                output,
                format,
                interactive,
            } => {
                let request = if *interactive {
                    self.prompt_request(variant.as_deref(), *intensity)?
                } else {
                    self.resolve_request(variant.as_deref(), *intensity)?
                };
                self.handle_generate(request, output.as_deref(), format, *interactive)
            }
            Commands::Estimate {
                variant,
                intensity,
                format,
            } => {
                let request = self.resolve_request(variant.as_deref(), *intensity)?;
                self.handle_estimate(request, format)
            }
            Commands::Variants { format } => {
                let rows = variant_rows();
                if format == "json" {
                    format_variants_json(&rows)
                } else {
                    Ok(format_variants_text(&rows))
                }
            }
            Commands::Inspect { path, format } => self.handle_inspect(path, format),
            Commands::Init { force, list } => self.handle_init(*force, *list),
        }
    }

    /// Fill gaps in the command line from the configured defaults.
    fn resolve_request(
        &self,
        variant: Option<&str>,
        intensity: Option<i64>,
    ) -> Result<GenerationRequest, ApiError> {
        let defaults = &self.config.generator;
        let variant = variant.unwrap_or(&defaults.default_variant);
        let intensity = intensity.unwrap_or(defaults.default_intensity);
        Ok(GenerationRequest::parse(variant, intensity)?)
    }

    fn prompt_request(
        &self,
        variant: Option<&str>,
        intensity: Option<i64>,
    ) -> Result<GenerationRequest, ApiError> {
        use dialoguer::{Input, Select};

        let defaults = self.config.generator.default_request()?;
        let variant = match variant {
            Some(name) => name.parse::<Variant>()?,
            None => {
                let items: Vec<String> = Variant::ALL
                    .iter()
                    .map(|v| format!("{:<18} {}", v.as_str(), v.mechanism()))
                    .collect();
                let default_index = Variant::ALL
                    .iter()
                    .position(|v| *v == defaults.variant)
                    .unwrap_or(0);
                let selection = Select::new()
                    .with_prompt("Variant")
                    .items(&items)
                    .default(default_index)
                    .interact()
                    .map_err(|e| {
                        ApiError::ConfigError(format!("Failed to get user input: {}", e))
                    })?;
                Variant::ALL[selection]
            }
        };

        let intensity = match intensity {
            Some(value) => value,
            None => Input::new()
                .with_prompt(format!("Intensity ({}-{})", MIN_INTENSITY, MAX_INTENSITY))
                .default(defaults.intensity)
                .validate_with(|value: &i64| -> Result<(), String> {
                    crate::payload::validate(*value).map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?,
        };

        Ok(GenerationRequest::new(variant, intensity))
    }

    fn handle_generate(
        &self,
        request: GenerationRequest,
        output: Option<&Path>,
        format: &str,
        echo_status: bool,
    ) -> Result<String, ApiError> {
        let (result, status) = self.run_generation(request, echo_status)?;

        let Some(path) = output else {
            return Ok(result.into_assembled());
        };

        let exported = export::write_payload(&result, path)?;
        let summary = GenerateSummary::new(&result, &exported);
        if format == "json" {
            format_generate_summary_json(&summary)
        } else {
            Ok(format_generate_summary_text(&summary, &status, self.color))
        }
    }

    /// Drive one request through the generator on a private runtime.
    fn run_generation(
        &self,
        request: GenerationRequest,
        echo_status: bool,
    ) -> Result<(PayloadResult, GenerationStatus), ApiError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let generator = Generator::new(self.config.generator.settings());
        let color = std::io::stderr().is_terminal();

        let result = runtime.block_on(async {
            let handle = generator.spawn(request);
            let mut status_rx = handle.status();
            let watcher = tokio::spawn(async move {
                loop {
                    let status = status_rx.borrow_and_update().clone();
                    if status.state.is_terminal() {
                        break;
                    }
                    if echo_status {
                        eprintln!("{}", format_status_line(&status, color));
                    }
                    if status_rx.changed().await.is_err() {
                        break;
                    }
                }
            });
            let result = handle.join().await;
            watcher.abort();
            result
        });

        let status = generator.status();
        if echo_status {
            eprintln!("{}", format_status_line(&status, color));
        }
        let result = result?;
        info!(
            variant = %result.variant(),
            intensity = result.intensity().get(),
            length = result.length(),
            "Generate command produced payload"
        );
        Ok((result, status))
    }

    fn handle_estimate(&self, request: GenerationRequest, format: &str) -> Result<String, ApiError> {
        let plan = GenerationPlan::for_request(&request, self.config.generator.max_payload_chars)?;
        let view = EstimateView::from(plan);
        if format == "json" {
            format_estimate_json(&view)
        } else {
            Ok(format_estimate_text(&view, self.color))
        }
    }

    fn handle_inspect(&self, path: &Path, format: &str) -> Result<String, ApiError> {
        let text = std::fs::read_to_string(path)?;
        let report = InspectReport::new(path.to_path_buf(), &text);
        if format == "json" {
            format_inspect_json(&report)
        } else {
            Ok(format_inspect_text(&report))
        }
    }

    fn handle_init(&self, force: bool, list: bool) -> Result<String, ApiError> {
        if list {
            let preview = init::list_initialization(&self.workspace_root);
            Ok(format_init_preview(&preview))
        } else {
            let summary = init::initialize_workspace(&self.workspace_root, force)?;
            Ok(format_init_summary(&summary))
        }
    }
}
