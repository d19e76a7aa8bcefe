//! rendstress: deterministic Unicode stress payloads for text renderers.
//!
//! A request names a [`payload::Variant`] and an intensity. The
//! [`generation::Generator`] validates and sizes it, builds the body off the
//! caller's thread, and wraps it in sentinels and a fixed announcement.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod generation;
pub mod init;
pub mod logging;
pub mod payload;

pub use error::{ApiError, GenerationError};
pub use generation::{GenerationRequest, Generator, GeneratorSettings};
pub use payload::{PayloadResult, Variant};
