//! Init command presentation: preview and summary formatters.

use crate::init::{InitOutcome, InitPreview, InitSummary};

pub fn format_init_preview(preview: &InitPreview) -> String {
    if preview.exists {
        format!(
            "Configuration already exists at {}.\nRun 'rendstress init --force' to overwrite it.",
            preview.path.display()
        )
    } else {
        format!(
            "Initialization Preview:\n\nWould create:\n  - {}\n\nRun 'rendstress init' to perform initialization.",
            preview.path.display()
        )
    }
}

pub fn format_init_summary(summary: &InitSummary) -> String {
    match summary.outcome {
        InitOutcome::Created => format!("  ✓ {}", summary.path.display()),
        InitOutcome::Overwritten => format!("  ✓ {} (overwritten)", summary.path.display()),
        InitOutcome::Skipped => format!(
            "  ⊘ {} (already exists, skipped)",
            summary.path.display()
        ),
    }
}
