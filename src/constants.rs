//! Reference constants shared by every preset tuning

use serde::{Deserialize, Serialize};

/// MIDI pitch number of Middle C (C4)
pub const MIDDLE_C_PITCH: f64 = 60.0;

/// Frequency of Middle C in Hz, 440 * 2^(-9/12)
pub const MIDDLE_C_FREQ: f64 = 261.625_565_300_598_6;

/// Size of the octave the scale repeats over
pub const OCTAVE_RATIO: f64 = 2.0;

/// Anchor pair tying a tuning's tonic to an absolute pitch.
///
/// `pitch` is a MIDI-style pitch number and `frequency` is the frequency
/// (in Hz) of the tonic sounding at that pitch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// MIDI-style pitch number of the tonic
    pub pitch: f64,

    /// Frequency of the tonic in Hz
    pub frequency: f64,
}

impl Reference {
    /// Middle C: MIDI 60 at ~261.63 Hz
    pub const MIDDLE_C: Reference = Reference {
        pitch: MIDDLE_C_PITCH,
        frequency: MIDDLE_C_FREQ,
    };

    /// Create a reference from a pitch number and its frequency
    pub fn new(pitch: f64, frequency: f64) -> Self {
        Self { pitch, frequency }
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self::MIDDLE_C
    }
}
