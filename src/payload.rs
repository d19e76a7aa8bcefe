//! Payload domain: variants, intensity validation, body construction, assembly
//! and inspection. Everything here is pure; scheduling lives in `generation`.

pub mod assembler;
pub mod builder;
pub mod intensity;
pub mod stats;
pub mod variant;

pub use assembler::{
    assemble, assemble_body, end_sentinel, start_sentinel, PayloadAssembler, PayloadResult,
    ANNOUNCEMENT, END_MARKER, FIXED_OVERHEAD_BYTES, FIXED_OVERHEAD_CHARS, SENTINEL_ZWS_COUNT,
    START_MARKER,
};
pub use builder::{build, build_into, body_size, BodyBuilder, BodySize, VariantBuilder};
pub use intensity::{validate, Intensity, MAX_INTENSITY, MIN_INTENSITY};
pub use stats::PayloadStats;
pub use variant::{CharacterBlock, Variant};

/// Code points the variants are assembled from.
pub mod glyphs {
    pub const ZWS: char = '\u{200B}';
    pub const RLO: char = '\u{202E}';
    pub const LRO: char = '\u{202D}';
    pub const PDF: char = '\u{202C}';
    pub const COMBINING_ACUTE: char = '\u{0301}';
    pub const VORTEX: char = '\u{1F300}';
    pub const SKULL: char = '\u{1F480}';
    pub const STACK_BASE: char = '\u{2620}';
    pub const DIACRITIC_BASE: char = 'A';

    /// 💥🔥💀❌🌀⚠⛔🛑
    pub const EMOJI_CLUSTER: &str =
        "\u{1F4A5}\u{1F525}\u{1F480}\u{274C}\u{1F300}\u{26A0}\u{26D4}\u{1F6D1}";

    /// Bidirectional formatting characters that open or close an embedding.
    pub fn is_bidi_control(c: char) -> bool {
        matches!(c, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
    }
}
