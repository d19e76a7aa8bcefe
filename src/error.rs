//! Error types for the rendstress payload generator.

use thiserror::Error;

/// Errors produced by a single generation request.
///
/// None of these are persisted; each one belongs to the `generate` call that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Intensity must be between {min} and {max}, got {value}")]
    OutOfRange { value: i64, min: u32, max: u32 },

    #[error("Unknown variant: {0}. Run `rendstress variants` to list the available variants.")]
    UnknownVariant(String),

    #[error("Payload of {requested} characters exceeds the configured limit of {limit} characters")]
    PayloadTooLarge { requested: u64, limit: u64 },

    #[error("Generation failed: {0}")]
    Internal(String),
}

impl GenerationError {
    /// True for failures the caller caused with its input, as opposed to
    /// failures raised while building.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GenerationError::OutOfRange { .. }
                | GenerationError::UnknownVariant(_)
                | GenerationError::PayloadTooLarge { .. }
        )
    }
}

/// Crate-level errors surfaced by the CLI and configuration layers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
