//! Tuning systems expressed as per-octave frequency ratios, and smooth
//! trajectories between them.
//!
//! A [`Tuning`] holds one ratio per scale degree relative to the tonic plus
//! the absolute frequencies those ratios produce at a reference pitch. Two
//! tunings can be morphed into a third with [`build_interpolated`] or a
//! [`TrajectoryBuilder`], using one of the [`CurveKind`] interpolation
//! shapes. The resulting frequency table is what a playback engine retunes
//! its voices with.
//!
//! ```
//! use tuning_trajectory::{build_interpolated, CurveKind, Preset};
//!
//! let source = Preset::TwelveTet.ratios();
//! let dest = Preset::Pythagorean.ratios();
//! let morph = build_interpolated(&source, &dest, 0.5, CurveKind::Linear).unwrap();
//! assert_eq!(morph.frequencies().len(), 12);
//! ```

#![warn(missing_docs)]

pub mod constants;
pub mod editor;
pub mod error;
pub mod tuning;

pub use constants::{Reference, MIDDLE_C_FREQ, MIDDLE_C_PITCH};
pub use error::{Result, TuningError};
pub use tuning::{
    build_interpolated, mix_from_percent, CurveKind, Preset, PresetId, TrajectoryBuilder, Tuning,
};
