//! Generate and estimate presentation.

use crate::cli::output::to_json;
use crate::error::ApiError;
use crate::export::ExportSummary;
use crate::generation::{GenerationPlan, GenerationStatus, StatusTone};
use crate::payload::{PayloadResult, PayloadStats, Variant};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// One status line, colored by tone when `color` is set.
pub fn format_status_line(status: &GenerationStatus, color: bool) -> String {
    let label = format!("[{}]", status.state.as_str());
    if !color {
        return format!("{} {}", label, status.message);
    }
    let label = match status.state.tone() {
        StatusTone::Neutral => label.dimmed().to_string(),
        StatusTone::Working => label.yellow().to_string(),
        StatusTone::Success => label.green().to_string(),
        StatusTone::Error => label.red().to_string(),
    };
    format!("{} {}", label, status.message)
}

/// Result of `generate --output`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSummary {
    pub variant: Variant,
    pub intensity: u32,
    /// Code points in the assembled payload.
    pub length: usize,
    pub body_length: usize,
    pub path: PathBuf,
    pub generated_at: String,
    pub stats: PayloadStats,
}

impl GenerateSummary {
    pub fn new(result: &PayloadResult, export: &ExportSummary) -> Self {
        Self {
            variant: result.variant(),
            intensity: result.intensity().get(),
            length: result.length(),
            body_length: result.body().chars().count(),
            path: export.path.clone(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            stats: result.stats(),
        }
    }
}

pub fn format_generate_summary_text(
    summary: &GenerateSummary,
    status: &GenerationStatus,
    color: bool,
) -> String {
    let mut output = String::new();
    output.push_str(&format_status_line(status, color));
    output.push('\n');
    output.push_str(&format!("Variant:      {}\n", summary.variant));
    output.push_str(&format!("Intensity:    {}\n", summary.intensity));
    output.push_str(&format!(
        "Length:       {} characters ({} in body)\n",
        summary.length, summary.body_length
    ));
    output.push_str(&format!("UTF-8 bytes:  {}\n", summary.stats.utf8_bytes));
    output.push_str(&format!("UTF-16 units: {}\n", summary.stats.utf16_units));
    output.push_str(&format!("Digest:       {}\n", summary.stats.digest));
    output.push_str(&format!("Written to:   {}", summary.path.display()));
    output
}

pub fn format_generate_summary_json(summary: &GenerateSummary) -> Result<String, ApiError> {
    to_json(summary)
}

/// `estimate` output: the plan plus the ceiling verdict.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateView {
    #[serde(flatten)]
    pub plan: GenerationPlan,
    pub within_limit: bool,
}

impl From<GenerationPlan> for EstimateView {
    fn from(plan: GenerationPlan) -> Self {
        Self {
            within_limit: plan.within_limit(),
            plan,
        }
    }
}

pub fn format_estimate_text(view: &EstimateView, color: bool) -> String {
    let plan = &view.plan;
    let verdict = if view.within_limit {
        "within limit".to_string()
    } else {
        "exceeds limit".to_string()
    };
    let verdict = match (color, view.within_limit) {
        (false, _) => verdict,
        (true, true) => verdict.green().to_string(),
        (true, false) => verdict.red().to_string(),
    };
    format!(
        "Variant:    {}\nIntensity:  {}\nBody:       {} characters, {} bytes\nAssembled:  {} characters, {} bytes\nLimit:      {} characters ({})",
        plan.variant,
        plan.intensity,
        plan.body.chars,
        plan.body.bytes,
        plan.assembled.chars,
        plan.assembled.bytes,
        plan.limit_chars,
        verdict
    )
}

pub fn format_estimate_json(view: &EstimateView) -> Result<String, ApiError> {
    to_json(view)
}
