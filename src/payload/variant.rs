//! The closed set of payload variants and their repeating blocks.

use crate::error::GenerationError;
use crate::payload::glyphs::{
    COMBINING_ACUTE, DIACRITIC_BASE, EMOJI_CLUSTER, LRO, PDF, RLO, SKULL, STACK_BASE, VORTEX, ZWS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Payload construction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Zero-width space accumulation.
    InvisibleFlood,
    /// Nested bidirectional overrides.
    VortexChaos,
    /// Combining-mark stacking on a base letter.
    DiacriticHell,
    /// All of the above in one composite block.
    UltimateDoomsday,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::InvisibleFlood,
        Variant::VortexChaos,
        Variant::DiacriticHell,
        Variant::UltimateDoomsday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::InvisibleFlood => "invisible-flood",
            Variant::VortexChaos => "vortex-chaos",
            Variant::DiacriticHell => "diacritic-hell",
            Variant::UltimateDoomsday => "ultimate-doomsday",
        }
    }

    /// Short alternative spelling accepted on input.
    pub fn alias(self) -> &'static str {
        match self {
            Variant::InvisibleFlood => "zws",
            Variant::VortexChaos => "vortex",
            Variant::DiacriticHell => "diacritic",
            Variant::UltimateDoomsday => "ultimate",
        }
    }

    /// Which part of a text pipeline the variant puts under load.
    pub fn mechanism(self) -> &'static str {
        match self {
            Variant::InvisibleFlood => "zero-width accumulation (length and parser stress)",
            Variant::VortexChaos => "bidi override nesting (direction resolution)",
            Variant::DiacriticHell => "combining-mark stacking (glyph composition)",
            Variant::UltimateDoomsday => "all mechanisms combined",
        }
    }

    /// The repeating block, or `None` for `InvisibleFlood`, which repeats a
    /// single code point under its own cap instead.
    pub fn block(self) -> Option<&'static CharacterBlock> {
        match self {
            Variant::InvisibleFlood => None,
            Variant::VortexChaos => {
                static BLOCK: OnceLock<CharacterBlock> = OnceLock::new();
                Some(BLOCK.get_or_init(vortex_block))
            }
            Variant::DiacriticHell => {
                static BLOCK: OnceLock<CharacterBlock> = OnceLock::new();
                Some(BLOCK.get_or_init(diacritic_block))
            }
            Variant::UltimateDoomsday => {
                static BLOCK: OnceLock<CharacterBlock> = OnceLock::new();
                Some(BLOCK.get_or_init(doomsday_block))
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == normalized || v.alias() == normalized)
            .ok_or_else(|| GenerationError::UnknownVariant(s.to_string()))
    }
}

/// Immutable repeating unit of a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterBlock {
    text: String,
    chars: usize,
}

impl CharacterBlock {
    fn new(text: String) -> Self {
        let chars = text.chars().count();
        Self { text, chars }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Code points per block.
    pub fn char_len(&self) -> usize {
        self.chars
    }

    /// UTF-8 bytes per block.
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}

fn push_repeated(out: &mut String, c: char, count: usize) {
    out.extend(std::iter::repeat(c).take(count));
}

fn vortex_block() -> CharacterBlock {
    let mut s = String::new();
    s.push(RLO);
    push_repeated(&mut s, ZWS, 10);
    s.push(LRO);
    push_repeated(&mut s, ZWS, 10);
    s.push(PDF);
    s.push(VORTEX);
    CharacterBlock::new(s)
}

fn diacritic_block() -> CharacterBlock {
    let mut s = String::new();
    s.push(DIACRITIC_BASE);
    push_repeated(&mut s, COMBINING_ACUTE, 50);
    push_repeated(&mut s, ZWS, 10);
    s.push(SKULL);
    CharacterBlock::new(s)
}

fn doomsday_block() -> CharacterBlock {
    let mut s = String::new();
    s.push(RLO);
    push_repeated(&mut s, ZWS, 250);
    s.push(LRO);
    push_repeated(&mut s, ZWS, 250);
    s.push(PDF);
    s.push(STACK_BASE);
    push_repeated(&mut s, COMBINING_ACUTE, 350);
    push_repeated(&mut s, ZWS, 500);
    for _ in 0..15 {
        s.push_str(EMOJI_CLUSTER);
    }
    push_repeated(&mut s, ZWS, 600);
    s.push(RLO);
    s.push_str(EMOJI_CLUSTER);
    s.push(PDF);
    CharacterBlock::new(s)
}
