use crate::error::GenerationError;
use crate::payload::{
    body_size, BodySize, Intensity, Variant, FIXED_OVERHEAD_BYTES, FIXED_OVERHEAD_CHARS,
    MAX_INTENSITY,
};
use serde::{Deserialize, Serialize};

/// What the caller asked for. The intensity is unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub variant: Variant,
    pub intensity: i64,
}

impl GenerationRequest {
    pub fn new(variant: Variant, intensity: i64) -> Self {
        Self { variant, intensity }
    }

    /// Build a request from a variant name as typed by a user.
    pub fn parse(variant: &str, intensity: i64) -> Result<Self, GenerationError> {
        Ok(Self::new(variant.parse()?, intensity))
    }
}

/// Sizes of a validated request, known before anything is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    pub variant: Variant,
    pub intensity: Intensity,
    pub body: BodySize,
    pub assembled: BodySize,
    pub limit_chars: u64,
}

impl GenerationPlan {
    /// Validate the request's intensity and size the payload.
    pub fn for_request(
        request: &GenerationRequest,
        limit_chars: u64,
    ) -> Result<Self, GenerationError> {
        let intensity = Intensity::new(request.intensity)?;
        let body = body_size(request.variant, intensity);
        Ok(Self {
            variant: request.variant,
            intensity,
            body,
            assembled: BodySize {
                chars: body.chars + FIXED_OVERHEAD_CHARS as u64,
                bytes: body.bytes + FIXED_OVERHEAD_BYTES as u64,
            },
            limit_chars,
        })
    }

    pub fn within_limit(&self) -> bool {
        self.assembled.chars <= self.limit_chars
    }

    pub fn check_limit(&self) -> Result<(), GenerationError> {
        if self.within_limit() {
            Ok(())
        } else {
            Err(GenerationError::PayloadTooLarge {
                requested: self.assembled.chars,
                limit: self.limit_chars,
            })
        }
    }

    /// Largest intensity this variant can run at under the limit.
    pub fn max_intensity_within_limit(variant: Variant, limit_chars: u64) -> Option<Intensity> {
        let budget = limit_chars.checked_sub(FIXED_OVERHEAD_CHARS as u64)?;
        let max = match variant.block() {
            None => i64::from(MAX_INTENSITY),
            Some(block) => {
                let n = budget / block.char_len() as u64;
                i64::try_from(n)
                    .unwrap_or(i64::MAX)
                    .min(i64::from(MAX_INTENSITY))
            }
        };
        let intensity = Intensity::new(max).ok()?;
        let plan = Self::for_request(&GenerationRequest::new(variant, max), limit_chars).ok()?;
        plan.within_limit().then_some(intensity)
    }
}
