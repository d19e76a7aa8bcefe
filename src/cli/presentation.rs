//! CLI presentation: text and json formatters per command family.

mod generate;
mod init;
mod inspect;
mod variants;

pub use generate::{
    format_estimate_json, format_estimate_text, format_generate_summary_json,
    format_generate_summary_text, format_status_line, EstimateView, GenerateSummary,
};
pub use init::{format_init_preview, format_init_summary};
pub use inspect::{format_inspect_json, format_inspect_text, InspectReport};
pub use variants::{format_variants_json, format_variants_text, variant_rows, VariantRow};
