//! Payload inspection: what a renderer will actually be handed.

use crate::payload::glyphs::{is_bidi_control, ZWS};
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadStats {
    /// Unicode scalar values.
    pub chars: u64,
    pub utf8_bytes: u64,
    /// Length as seen by UTF-16 based toolkits.
    pub utf16_units: u64,
    pub zero_width_spaces: u64,
    pub bidi_controls: u64,
    pub combining_marks: u64,
    /// Most combining marks stacked on a single base.
    pub longest_combining_run: u64,
    pub lines: u64,
    /// blake3 of the UTF-8 bytes, hex encoded.
    pub digest: String,
}

impl PayloadStats {
    pub fn of(text: &str) -> Self {
        let mut stats = PayloadStats {
            chars: 0,
            utf8_bytes: text.len() as u64,
            utf16_units: 0,
            zero_width_spaces: 0,
            bidi_controls: 0,
            combining_marks: 0,
            longest_combining_run: 0,
            lines: 0,
            digest: digest(text),
        };
        let mut run = 0u64;
        for c in text.chars() {
            stats.chars += 1;
            stats.utf16_units += c.len_utf16() as u64;
            if is_combining_mark(c) {
                stats.combining_marks += 1;
                run += 1;
                stats.longest_combining_run = stats.longest_combining_run.max(run);
                continue;
            }
            run = 0;
            if c == ZWS {
                stats.zero_width_spaces += 1;
            } else if is_bidi_control(c) {
                stats.bidi_controls += 1;
            }
        }
        if !text.is_empty() {
            stats.lines = text.lines().count() as u64;
        }
        stats
    }
}

pub fn digest(text: &str) -> String {
    hex::encode(blake3::hash(text.as_bytes()).as_bytes())
}
