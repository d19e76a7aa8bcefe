//! Variant listing presentation.

use crate::cli::output::to_json;
use crate::error::ApiError;
use crate::payload::builder::{FLOOD_ZWS_CAP, FLOOD_ZWS_PER_UNIT};
use crate::payload::Variant;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VariantRow {
    pub name: &'static str,
    pub alias: &'static str,
    /// Code points per intensity step; `None` when the variant is capped
    /// rather than block-repeated.
    pub unit_chars: Option<usize>,
    pub unit_bytes: Option<usize>,
    pub mechanism: &'static str,
}

pub fn variant_rows() -> Vec<VariantRow> {
    Variant::ALL
        .into_iter()
        .map(|variant| VariantRow {
            name: variant.as_str(),
            alias: variant.alias(),
            unit_chars: variant.block().map(|b| b.char_len()),
            unit_bytes: variant.block().map(|b| b.byte_len()),
            mechanism: variant.mechanism(),
        })
        .collect()
}

pub fn format_variants_text(rows: &[VariantRow]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Variant", "Alias", "Unit (chars)", "Unit (bytes)", "Mechanism"]);
    for row in rows {
        let (chars, bytes) = match (row.unit_chars, row.unit_bytes) {
            (Some(chars), Some(bytes)) => (chars.to_string(), bytes.to_string()),
            _ => (
                format!("{} (cap {})", FLOOD_ZWS_PER_UNIT, FLOOD_ZWS_CAP),
                format!("{} (cap {})", FLOOD_ZWS_PER_UNIT * 3, FLOOD_ZWS_CAP * 3),
            ),
        };
        table.add_row(vec![
            row.name.to_string(),
            row.alias.to_string(),
            chars,
            bytes,
            row.mechanism.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_variants_json(rows: &[VariantRow]) -> Result<String, ApiError> {
    to_json(&rows)
}
