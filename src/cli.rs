//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, output_format, writes_raw_payload};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_estimate_json, format_estimate_text, format_generate_summary_json,
    format_generate_summary_text, format_init_preview, format_init_summary, format_inspect_json,
    format_inspect_text, format_status_line, format_variants_json, format_variants_text,
    variant_rows, EstimateView, GenerateSummary, InspectReport, VariantRow,
};
pub use route::RunContext;
