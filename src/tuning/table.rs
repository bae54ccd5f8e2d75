//! Tuning table: a ratio set plus its derived frequencies
//!
//! Ratios and frequencies are always replaced together, so
//! `frequencies[i] == ratios[i] * reference.frequency` holds after every
//! mutation.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{Reference, OCTAVE_RATIO};
use crate::error::Result;
use crate::tuning::freq::{ratio_to_cents, to_frequencies};
use crate::tuning::presets::PresetId;

/// A mutable tuning system holding one ratio per scale degree.
///
/// No validation is applied to the ratios: the tonic is conventionally 1.0
/// and ratios are expected to be positive, but neither is enforced.
///
/// Deserializing reads only the ratios and reference; frequencies are always
/// rebuilt from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "TuningRepr")]
pub struct Tuning {
    ratios: Vec<f64>,
    frequencies: Vec<f64>,
    reference: Reference,
}

/// Serialized form accepted when reading a tuning back in
#[derive(Deserialize)]
struct TuningRepr {
    ratios: Vec<f64>,
    #[serde(default)]
    reference: Reference,
}

impl From<TuningRepr> for Tuning {
    fn from(repr: TuningRepr) -> Self {
        let mut tuning = Tuning::with_reference(repr.reference);
        tuning.set_ratios(repr.ratios);
        tuning
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::new()
    }
}

impl Tuning {
    /// Create an empty tuning anchored at Middle C
    pub fn new() -> Self {
        Self::with_reference(Reference::MIDDLE_C)
    }

    /// Create an empty tuning anchored at the given reference
    pub fn with_reference(reference: Reference) -> Self {
        Self {
            ratios: Vec::new(),
            frequencies: Vec::new(),
            reference,
        }
    }

    /// Create a tuning from a ratio table, anchored at Middle C
    pub fn from_ratios(ratios: Vec<f64>) -> Self {
        let mut tuning = Self::new();
        tuning.set_ratios(ratios);
        tuning
    }

    /// Create a tuning from a preset, anchored at Middle C
    pub fn from_preset(id: impl Into<PresetId>) -> Result<Self> {
        let mut tuning = Self::new();
        tuning.set_to_preset(id)?;
        Ok(tuning)
    }

    /// Replace the ratio table and recompute frequencies
    pub fn set_ratios(&mut self, ratios: Vec<f64>) {
        let frequencies = to_frequencies(&ratios, self.reference.frequency);
        debug!(
            "Tuning: set {} ratios (reference pitch={}, freq={} Hz)",
            ratios.len(),
            self.reference.pitch,
            self.reference.frequency
        );
        self.ratios = ratios;
        self.frequencies = frequencies;
    }

    /// Replace the ratio table with a copy of a preset's ratios.
    ///
    /// An unknown preset leaves the tuning untouched.
    pub fn set_to_preset(&mut self, id: impl Into<PresetId>) -> Result<()> {
        let preset = id.into().resolve()?;
        debug!("Tuning: loading preset {}", preset);
        self.set_ratios(preset.ratios());
        Ok(())
    }

    /// Move the tuning to a new reference and recompute frequencies
    pub fn set_reference(&mut self, reference: Reference) {
        debug!(
            "Tuning: new reference pitch={}, freq={} Hz for {} ratios",
            reference.pitch,
            reference.frequency,
            self.ratios.len()
        );
        self.reference = reference;
        self.frequencies = to_frequencies(&self.ratios, reference.frequency);
    }

    /// Current ratio table
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Absolute frequency of each degree in Hz
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Ratio of each degree in cents above the tonic
    pub fn cents(&self) -> Vec<f64> {
        self.ratios.iter().map(|&ratio| ratio_to_cents(ratio)).collect()
    }

    /// Reference pitch/frequency pair
    pub fn reference(&self) -> Reference {
        self.reference
    }

    /// MIDI-style pitch number the tonic is anchored to
    pub fn reference_pitch(&self) -> f64 {
        self.reference.pitch
    }

    /// Frequency of the tonic in Hz
    pub fn reference_frequency(&self) -> f64 {
        self.reference.frequency
    }

    /// Number of scale degrees
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// True if no ratios have been set
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Frequency for an arbitrary pitch number.
    ///
    /// The table repeats every octave around the reference pitch: pitch
    /// `reference_pitch + k * len + d` sounds degree `d` shifted by `k`
    /// octaves. Fractional pitches are interpolated geometrically between
    /// neighbouring table entries. Returns `None` for an empty tuning or
    /// when the pitch lies so far above the reference that the frequency
    /// overflows.
    pub fn frequency_for_pitch(&self, pitch: f64) -> Option<f64> {
        if self.is_empty() || !pitch.is_finite() {
            return None;
        }

        let offset = pitch - self.reference.pitch;
        let low = offset.floor();
        let frac = offset - low;

        let low_freq = self.frequency_for_step(low);
        let freq = if frac == 0.0 {
            low_freq
        } else {
            let high_freq = self.frequency_for_step(low + 1.0);
            if high_freq == low_freq {
                low_freq
            } else {
                low_freq * (high_freq / low_freq).powf(frac)
            }
        };

        freq.is_finite().then_some(freq)
    }

    /// Frequency of the table entry `step` degrees above the tonic.
    ///
    /// `step` is a whole number; the octave shift stays in `f64` so huge
    /// steps overflow to infinity or underflow to zero instead of wrapping.
    fn frequency_for_step(&self, step: f64) -> f64 {
        let n = self.len() as f64;
        let degree = (step.rem_euclid(n) as usize).min(self.len() - 1);
        let octave = step.div_euclid(n);
        self.frequencies[degree] * OCTAVE_RATIO.powf(octave)
    }
}
