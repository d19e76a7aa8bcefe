//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

use crate::config::{
    DEFAULT_INTENSITY, DEFAULT_MAX_PAYLOAD_CHARS, DEFAULT_SCHEDULE_DELAY_MS, DEFAULT_VARIANT,
};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("generator.default_variant", DEFAULT_VARIANT)?
        .set_default("generator.default_intensity", DEFAULT_INTENSITY)?
        .set_default(
            "generator.max_payload_chars",
            DEFAULT_MAX_PAYLOAD_CHARS as i64,
        )?
        .set_default(
            "generator.schedule_delay_ms",
            DEFAULT_SCHEDULE_DELAY_MS as i64,
        )
}
