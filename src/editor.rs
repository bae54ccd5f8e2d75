//! Helpers for an editor surface displaying one ratio field per degree
//!
//! Parsing lives here rather than in the tuning core: the core only ever
//! receives numeric ratio tables.

use crate::error::{Result, TuningError};
use crate::tuning::Tuning;

/// Maximum number of fractional digits shown for a ratio
pub const RATIO_DECIMALS: usize = 4;

/// Format a ratio with at most four fractional digits, trailing zeros dropped
pub fn format_ratio(ratio: f64) -> String {
    let formatted = format!("{:.*}", RATIO_DECIMALS, ratio);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Parse one text field per degree into a ratio table.
///
/// Stops at the first field that is not a number and reports its 1-based
/// degree.
pub fn parse_ratio_fields<S: AsRef<str>>(fields: &[S]) -> Result<Vec<f64>> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let text = field.as_ref();
            text.trim()
                .parse::<f64>()
                .map_err(|_| TuningError::InvalidNumericInput {
                    step: i + 1,
                    input: text.to_string(),
                })
        })
        .collect()
}

/// Render a tuning as a degree / ratio / cents / frequency table
pub fn format_table(tuning: &Tuning) -> String {
    let mut lines = vec![
        format!(
            "# reference pitch {} = {:.2} Hz",
            tuning.reference_pitch(),
            tuning.reference_frequency()
        ),
        format!("{:>6}  {:>8}  {:>9}  {:>10}", "degree", "ratio", "cents", "Hz"),
    ];

    let rows = tuning
        .ratios()
        .iter()
        .zip(tuning.frequencies())
        .zip(tuning.cents())
        .enumerate()
        .map(|(i, ((ratio, freq), cents))| {
            format!(
                "{:>6}  {:>8}  {:>9.2}  {:>10.3}",
                i + 1,
                format_ratio(*ratio),
                cents,
                freq
            )
        });
    lines.extend(rows);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
