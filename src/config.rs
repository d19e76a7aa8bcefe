//! Configuration System
//!
//! Layered configuration for the generator and the logging stack. Defaults,
//! a global file, workspace files and `RENDSTRESS__*` environment variables
//! are merged by [`ConfigLoader`] and validated before use.

use crate::error::{ApiError, GenerationError};
use crate::generation::{GenerationRequest, GeneratorSettings};
use crate::logging::LoggingConfig;
use crate::payload::{Intensity, Variant};
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

pub(crate) const DEFAULT_VARIANT: &str = "vortex-chaos";
pub(crate) const DEFAULT_INTENSITY: i64 = 10;
pub(crate) const DEFAULT_MAX_PAYLOAD_CHARS: u64 = GeneratorSettings::DEFAULT_MAX_PAYLOAD_CHARS;
pub(crate) const DEFAULT_SCHEDULE_DELAY_MS: u64 = 500;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StressConfig {
    /// Generator defaults and limits
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[generator]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Variant used when `--variant` is not given
    #[serde(default = "default_variant")]
    pub default_variant: String,

    /// Intensity used when `--intensity` is not given
    #[serde(default = "default_intensity")]
    pub default_intensity: i64,

    /// Ceiling on assembled payload length, in code points
    #[serde(default = "default_max_payload_chars")]
    pub max_payload_chars: u64,

    /// Delay before a scheduled build starts
    #[serde(default = "default_schedule_delay_ms")]
    pub schedule_delay_ms: u64,
}

fn default_variant() -> String {
    DEFAULT_VARIANT.to_string()
}

fn default_intensity() -> i64 {
    DEFAULT_INTENSITY
}

fn default_max_payload_chars() -> u64 {
    DEFAULT_MAX_PAYLOAD_CHARS
}

fn default_schedule_delay_ms() -> u64 {
    DEFAULT_SCHEDULE_DELAY_MS
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_variant: default_variant(),
            default_intensity: default_intensity(),
            max_payload_chars: default_max_payload_chars(),
            schedule_delay_ms: default_schedule_delay_ms(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = self.default_variant.parse::<Variant>() {
            errors.push(format!("default_variant: {}", e));
        }
        if let Err(e) = Intensity::new(self.default_intensity) {
            errors.push(format!("default_intensity: {}", e));
        }
        if self.max_payload_chars == 0 {
            errors.push("max_payload_chars must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Request built from the configured defaults.
    pub fn default_request(&self) -> Result<GenerationRequest, GenerationError> {
        GenerationRequest::parse(&self.default_variant, self.default_intensity)
    }

    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            max_payload_chars: self.max_payload_chars,
            schedule_delay: Duration::from_millis(self.schedule_delay_ms),
        }
    }
}

impl From<&GeneratorConfig> for GeneratorSettings {
    fn from(config: &GeneratorConfig) -> Self {
        config.settings()
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Generator(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Generator(msg) => write!(f, "Generator: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl StressConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors: Vec<ValidationError> = Vec::new();

        if let Err(generator_errors) = self.generator.validate() {
            errors.extend(generator_errors.into_iter().map(ValidationError::Generator));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold every problem into one `ApiError`.
    pub fn validated(self) -> Result<Self, ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}
