//! Ratio to frequency conversion

/// Convert ratios to absolute frequencies in Hz.
///
/// Plain elementwise multiply, no rounding; the output has the same length
/// as `ratios`.
pub fn to_frequencies(ratios: &[f64], reference_frequency: f64) -> Vec<f64> {
    ratios
        .iter()
        .map(|ratio| ratio * reference_frequency)
        .collect()
}

/// Convert a frequency ratio to cents (1200 per octave)
pub fn ratio_to_cents(ratio: f64) -> f64 {
    1200.0 * ratio.log2()
}

/// Convert cents back to a frequency ratio
pub fn cents_to_ratio(cents: f64) -> f64 {
    2.0_f64.powf(cents / 1200.0)
}
