//! Payload assembly: start sentinel, body, end sentinel, announcement.

use crate::error::GenerationError;
use crate::payload::builder::{body_size, reserve, BodyBuilder};
use crate::payload::glyphs::ZWS;
use crate::payload::intensity::Intensity;
use crate::payload::stats::PayloadStats;
use crate::payload::variant::Variant;
use std::ops::Range;
use std::sync::OnceLock;

pub const START_MARKER: &str = "---[RENDSTRESS START]---";
pub const END_MARKER: &str = "---[RENDSTRESS END]---";
pub const SENTINEL_ZWS_COUNT: usize = 150;
pub const ANNOUNCEMENT: &str =
    "\n\n=== RENDER STRESS SAMPLE COMPLETE ===\nGenerated for text-layout robustness testing.";

const fn char_count(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut n = 0;
    while i < bytes.len() {
        if bytes[i] & 0xC0 != 0x80 {
            n += 1;
        }
        i += 1;
    }
    n
}

const ZWS_UTF8_LEN: usize = 3;

/// Code points added around every body.
pub const FIXED_OVERHEAD_CHARS: usize = char_count(START_MARKER)
    + SENTINEL_ZWS_COUNT
    + 1
    + 1
    + SENTINEL_ZWS_COUNT
    + char_count(END_MARKER)
    + char_count(ANNOUNCEMENT);

/// UTF-8 bytes added around every body.
pub const FIXED_OVERHEAD_BYTES: usize = START_MARKER.len()
    + SENTINEL_ZWS_COUNT * ZWS_UTF8_LEN
    + 1
    + 1
    + SENTINEL_ZWS_COUNT * ZWS_UTF8_LEN
    + END_MARKER.len()
    + ANNOUNCEMENT.len();

/// Marker followed by the zero-width run and a line break.
pub fn start_sentinel() -> &'static str {
    static SENTINEL: OnceLock<String> = OnceLock::new();
    SENTINEL.get_or_init(|| {
        let mut s = String::with_capacity(START_MARKER.len() + SENTINEL_ZWS_COUNT * 3 + 1);
        s.push_str(START_MARKER);
        s.extend(std::iter::repeat(ZWS).take(SENTINEL_ZWS_COUNT));
        s.push('\n');
        s
    })
}

/// Line break, zero-width run, then the marker.
pub fn end_sentinel() -> &'static str {
    static SENTINEL: OnceLock<String> = OnceLock::new();
    SENTINEL.get_or_init(|| {
        let mut s = String::with_capacity(END_MARKER.len() + SENTINEL_ZWS_COUNT * 3 + 1);
        s.push('\n');
        s.extend(std::iter::repeat(ZWS).take(SENTINEL_ZWS_COUNT));
        s.push_str(END_MARKER);
        s
    })
}

/// An assembled payload. The body is a slice of `assembled`, not a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadResult {
    variant: Variant,
    intensity: Intensity,
    assembled: String,
    body: Range<usize>,
    length: usize,
}

impl PayloadResult {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn assembled(&self) -> &str {
        &self.assembled
    }

    pub fn body(&self) -> &str {
        &self.assembled[self.body.clone()]
    }

    /// Code points in `assembled`.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn stats(&self) -> PayloadStats {
        PayloadStats::of(&self.assembled)
    }

    pub fn into_assembled(self) -> String {
        self.assembled
    }
}

/// Incremental assembly over one pre-sized buffer: `begin` writes the start
/// sentinel, `append_body` lets a builder write in place, `finish` closes the
/// payload and measures it.
#[derive(Debug)]
pub struct PayloadAssembler {
    variant: Variant,
    intensity: Intensity,
    out: String,
    body_start: usize,
}

impl PayloadAssembler {
    /// Reserve room for `body_bytes` plus the fixed overhead and write the
    /// start sentinel.
    pub fn begin(
        variant: Variant,
        intensity: Intensity,
        body_bytes: u64,
    ) -> Result<Self, GenerationError> {
        let mut out = String::new();
        reserve(&mut out, FIXED_OVERHEAD_BYTES as u64 + body_bytes)?;
        out.push_str(start_sentinel());
        let body_start = out.len();
        Ok(Self {
            variant,
            intensity,
            out,
            body_start,
        })
    }

    pub fn append_body<B: BodyBuilder + ?Sized>(
        &mut self,
        builder: &B,
    ) -> Result<(), GenerationError> {
        builder.build_into(self.variant, self.intensity, &mut self.out)
    }

    pub fn append_str(&mut self, body: &str) {
        self.out.push_str(body);
    }

    pub fn finish(self) -> PayloadResult {
        let Self {
            variant,
            intensity,
            mut out,
            body_start,
        } = self;
        let body_end = out.len();
        out.push_str(end_sentinel());
        out.push_str(ANNOUNCEMENT);
        let length = out.chars().count();
        PayloadResult {
            variant,
            intensity,
            assembled: out,
            body: body_start..body_end,
            length,
        }
    }
}

/// Assemble a payload, letting `builder` write the body directly into the
/// output buffer.
pub fn assemble<B: BodyBuilder + ?Sized>(
    variant: Variant,
    intensity: Intensity,
    builder: &B,
) -> Result<PayloadResult, GenerationError> {
    let mut assembler =
        PayloadAssembler::begin(variant, intensity, body_size(variant, intensity).bytes)?;
    assembler.append_body(builder)?;
    Ok(assembler.finish())
}

/// Assemble a payload around an already built body.
pub fn assemble_body(
    variant: Variant,
    intensity: Intensity,
    body: &str,
) -> Result<PayloadResult, GenerationError> {
    let mut assembler = PayloadAssembler::begin(variant, intensity, body.len() as u64)?;
    assembler.append_str(body);
    Ok(assembler.finish())
}
