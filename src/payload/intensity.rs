//! Intensity validation. An `Intensity` can only be obtained through `new`, so
//! the builder never sees an out-of-range repetition count.

use crate::error::GenerationError;
use serde::Serialize;
use std::fmt;

pub const MIN_INTENSITY: u32 = 10;
pub const MAX_INTENSITY: u32 = 2_500_000;

/// A validated repetition count in `MIN_INTENSITY..=MAX_INTENSITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Intensity(u32);

impl Intensity {
    pub fn new(value: i64) -> Result<Self, GenerationError> {
        if value < i64::from(MIN_INTENSITY) || value > i64::from(MAX_INTENSITY) {
            return Err(GenerationError::OutOfRange {
                value,
                min: MIN_INTENSITY,
                max: MAX_INTENSITY,
            });
        }
        Ok(Intensity(value as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Pure range predicate.
pub fn validate(value: i64) -> Result<(), GenerationError> {
    Intensity::new(value).map(|_| ())
}
