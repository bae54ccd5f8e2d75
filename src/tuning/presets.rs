//! Catalog of preset tuning systems
//!
//! Each preset is an ordered table of frequency ratios relative to the tonic.
//! The tables are immutable process-wide state; lookups hand out copies so a
//! caller can never modify the catalog through a returned value.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TuningError};

/// 12-tone equal temperament, 2^(i/12)
static TWELVE_TET_RATIOS: Lazy<[f64; 12]> = Lazy::new(|| {
    let mut ratios = [0.0; 12];
    for (i, ratio) in ratios.iter_mut().enumerate() {
        *ratio = 2.0_f64.powf(i as f64 / 12.0);
    }
    ratios
});

/// Pythagorean, with Gb dropped from the 13 note cycle
const PYTHAGOREAN_RATIOS: [f64; 12] = [
    1.0,
    256.0 / 243.0,
    9.0 / 8.0,
    32.0 / 27.0,
    81.0 / 64.0,
    4.0 / 3.0,
    729.0 / 512.0,
    3.0 / 2.0,
    128.0 / 81.0,
    27.0 / 16.0,
    16.0 / 9.0,
    243.0 / 128.0,
];

/// Ptolemaic just intonation
const PTOLEMY_RATIOS: [f64; 12] = [
    1.0,
    16.0 / 15.0,
    9.0 / 8.0,
    6.0 / 5.0,
    5.0 / 4.0,
    4.0 / 3.0,
    1.40625,
    3.0 / 2.0,
    8.0 / 5.0,
    5.0 / 3.0,
    9.0 / 5.0,
    15.0 / 8.0,
];

/// Sethares dissonance-curve minima for the Chinese erhu. Not monotonic.
const ERHU_RATIOS: [f64; 12] = [
    1.0, 1.0, 1.17, 1.17, 1.30, 1.34, 1.34, 1.51, 1.51, 1.67, 1.67, 1.85,
];

/// A preset tuning system shipped with the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// 12-tone equal temperament
    TwelveTet,
    /// Pythagorean tuning
    Pythagorean,
    /// Ptolemaic just intonation
    Ptolemy,
    /// Erhu-derived dissonance-curve tuning
    Erhu,
}

impl Preset {
    /// All presets in selection order; a preset's index is its position here
    pub const ALL: [Preset; 4] = [
        Preset::TwelveTet,
        Preset::Pythagorean,
        Preset::Ptolemy,
        Preset::Erhu,
    ];

    /// Stable human-readable name, unique within the catalog
    pub fn label(self) -> &'static str {
        match self {
            Preset::TwelveTet => "12-TET",
            Preset::Pythagorean => "Pythagorean",
            Preset::Ptolemy => "Ptolemy",
            Preset::Erhu => "Erhu",
        }
    }

    /// 0-based position of the preset in [`Preset::ALL`]
    pub fn index(self) -> usize {
        match self {
            Preset::TwelveTet => 0,
            Preset::Pythagorean => 1,
            Preset::Ptolemy => 2,
            Preset::Erhu => 3,
        }
    }

    /// Look up a preset by its 0-based index
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| TuningError::UnknownPreset {
                id: index.to_string(),
            })
    }

    /// Look up a preset by label, ignoring ASCII case
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| TuningError::UnknownPreset {
                id: name.to_string(),
            })
    }

    /// Borrow the static ratio table
    fn table(self) -> &'static [f64] {
        match self {
            Preset::TwelveTet => &TWELVE_TET_RATIOS[..],
            Preset::Pythagorean => &PYTHAGOREAN_RATIOS,
            Preset::Ptolemy => &PTOLEMY_RATIOS,
            Preset::Erhu => &ERHU_RATIOS,
        }
    }

    /// Copy of the preset's ratio table
    pub fn ratios(self) -> Vec<f64> {
        self.table().to_vec()
    }

    /// Number of scale degrees in the preset
    pub fn degree_count(self) -> usize {
        self.table().len()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either a label ("Pythagorean") or a 0-based index ("1")
impl FromStr for Preset {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self> {
        PresetId::from(s).resolve()
    }
}

/// Identifier used to select a preset: a 0-based index or a label
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresetId {
    /// Position in [`Preset::ALL`]
    Index(usize),
    /// Preset label
    Name(String),
}

impl PresetId {
    /// Resolve the identifier against the catalog
    pub fn resolve(&self) -> Result<Preset> {
        match self {
            PresetId::Index(index) => Preset::from_index(*index),
            PresetId::Name(name) => Preset::from_name(name),
        }
    }
}

impl From<usize> for PresetId {
    fn from(index: usize) -> Self {
        PresetId::Index(index)
    }
}

impl From<Preset> for PresetId {
    fn from(preset: Preset) -> Self {
        PresetId::Index(preset.index())
    }
}

impl From<&str> for PresetId {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(index) => PresetId::Index(index),
            Err(_) => PresetId::Name(s.to_string()),
        }
    }
}

impl From<String> for PresetId {
    fn from(s: String) -> Self {
        PresetId::from(s.as_str())
    }
}

/// Copy of the ratio table for the given preset identifier
pub fn preset_ratios(id: impl Into<PresetId>) -> Result<Vec<f64>> {
    Ok(id.into().resolve()?.ratios())
}

/// Labels of all presets in selection order
pub fn preset_labels() -> Vec<&'static str> {
    Preset::ALL.iter().map(|preset| preset.label()).collect()
}
