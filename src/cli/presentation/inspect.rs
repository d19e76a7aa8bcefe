//! Inspect presentation.

use crate::cli::output::to_json;
use crate::error::ApiError;
use crate::payload::{PayloadStats, END_MARKER, START_MARKER};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub path: PathBuf,
    /// Starts with the start sentinel and contains the end sentinel.
    pub framed: bool,
    #[serde(flatten)]
    pub stats: PayloadStats,
}

impl InspectReport {
    pub fn new(path: PathBuf, text: &str) -> Self {
        Self {
            path,
            framed: text.starts_with(START_MARKER) && text.contains(END_MARKER),
            stats: PayloadStats::of(text),
        }
    }
}

pub fn format_inspect_text(report: &InspectReport) -> String {
    let stats = &report.stats;
    let mut output = format!("{}\n", report.path.display());
    output.push_str(&format!("  Characters:            {}\n", stats.chars));
    output.push_str(&format!("  UTF-8 bytes:           {}\n", stats.utf8_bytes));
    output.push_str(&format!("  UTF-16 units:          {}\n", stats.utf16_units));
    output.push_str(&format!("  Lines:                 {}\n", stats.lines));
    output.push_str(&format!("  Zero-width spaces:     {}\n", stats.zero_width_spaces));
    output.push_str(&format!("  Bidi controls:         {}\n", stats.bidi_controls));
    output.push_str(&format!("  Combining marks:       {}\n", stats.combining_marks));
    output.push_str(&format!(
        "  Longest combining run: {}\n",
        stats.longest_combining_run
    ));
    output.push_str(&format!(
        "  Sentinel framed:       {}\n",
        if report.framed { "yes" } else { "no" }
    ));
    output.push_str(&format!("  Digest:                {}", stats.digest));
    output
}

pub fn format_inspect_json(report: &InspectReport) -> Result<String, ApiError> {
    to_json(report)
}
