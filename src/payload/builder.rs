//! Body construction: one rule per variant, each a deterministic function of
//! the validated intensity. Output buffers are sized from `body_size` before
//! the first push, so a build performs at most one allocation.

use crate::error::GenerationError;
use crate::payload::glyphs::ZWS;
use crate::payload::intensity::Intensity;
use crate::payload::variant::Variant;
use serde::Serialize;

/// Zero-width spaces emitted per unit of intensity by `InvisibleFlood`.
pub const FLOOD_ZWS_PER_UNIT: u64 = 100;

/// Hard cap on the `InvisibleFlood` body, independent of intensity.
pub const FLOOD_ZWS_CAP: u64 = 50_000;

/// Analytic size of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BodySize {
    pub chars: u64,
    pub bytes: u64,
}

/// Size of the body `build` would produce, computed without building it.
pub fn body_size(variant: Variant, intensity: Intensity) -> BodySize {
    let n = u64::from(intensity.get());
    match variant.block() {
        None => {
            let count = flood_len(intensity);
            BodySize {
                chars: count,
                bytes: count * ZWS.len_utf8() as u64,
            }
        }
        Some(block) => BodySize {
            chars: n * block.char_len() as u64,
            bytes: n * block.byte_len() as u64,
        },
    }
}

fn flood_len(intensity: Intensity) -> u64 {
    (u64::from(intensity.get()) * FLOOD_ZWS_PER_UNIT).min(FLOOD_ZWS_CAP)
}

/// Seam the orchestrator builds bodies through.
pub trait BodyBuilder: Send + Sync + 'static {
    /// Append the body for `variant` at `intensity` to `out`.
    fn build_into(
        &self,
        variant: Variant,
        intensity: Intensity,
        out: &mut String,
    ) -> Result<(), GenerationError>;
}

/// The production builder: the per-variant rules below.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantBuilder;

impl BodyBuilder for VariantBuilder {
    fn build_into(
        &self,
        variant: Variant,
        intensity: Intensity,
        out: &mut String,
    ) -> Result<(), GenerationError> {
        build_into(variant, intensity, out)
    }
}

/// Append the body for `variant` at `intensity` to `out`.
pub fn build_into(
    variant: Variant,
    intensity: Intensity,
    out: &mut String,
) -> Result<(), GenerationError> {
    reserve(out, body_size(variant, intensity).bytes)?;
    match variant.block() {
        None => {
            out.extend(std::iter::repeat(ZWS).take(flood_len(intensity) as usize));
        }
        Some(block) => {
            let unit = block.as_str();
            for _ in 0..intensity.get() {
                out.push_str(unit);
            }
        }
    }
    Ok(())
}

/// Build the body for `variant` at `intensity` into a new string.
pub fn build(variant: Variant, intensity: Intensity) -> Result<String, GenerationError> {
    let mut body = String::new();
    build_into(variant, intensity, &mut body)?;
    Ok(body)
}

/// Reserve `additional` bytes, reporting allocation failure instead of aborting.
pub(crate) fn reserve(out: &mut String, additional: u64) -> Result<(), GenerationError> {
    let additional = usize::try_from(additional).map_err(|_| {
        GenerationError::Internal(format!(
            "{} bytes does not fit in addressable memory",
            additional
        ))
    })?;
    out.try_reserve_exact(additional).map_err(|e| {
        GenerationError::Internal(format!("failed to reserve {} bytes: {}", additional, e))
    })
}
