//! Tuning trajectories
//!
//! A trajectory morphs one tuning into another. Each scale degree is
//! interpolated independently between the source and destination ratio at
//! the requested mix position, and the result is packaged as a brand new
//! [`Tuning`] with freshly computed frequencies.

use log::{debug, trace};

use crate::constants::Reference;
use crate::error::{Result, TuningError};
use crate::tuning::interp::CurveKind;
use crate::tuning::table::Tuning;

/// Convert a 0..=100 fader position into a mix position
pub fn mix_from_percent(percent: u8) -> f64 {
    percent as f64 / 100.0
}

/// Interpolate every degree between `source` and `dest` at `mix`.
///
/// Returns a new tuning anchored at Middle C. Fails before computing
/// anything if the degree counts differ, and returns no partial result if
/// the curve rejects any degree.
pub fn build_interpolated(
    source: &[f64],
    dest: &[f64],
    mix: f64,
    curve: CurveKind,
) -> Result<Tuning> {
    check_degree_counts(source, dest)?;
    interpolate(source, dest, mix, curve, Reference::MIDDLE_C)
}

fn check_degree_counts(source: &[f64], dest: &[f64]) -> Result<()> {
    if source.len() != dest.len() {
        return Err(TuningError::DegreeCountMismatch {
            source_len: source.len(),
            dest_len: dest.len(),
        });
    }
    Ok(())
}

fn interpolate(
    source: &[f64],
    dest: &[f64],
    mix: f64,
    curve: CurveKind,
    reference: Reference,
) -> Result<Tuning> {
    let ratios = source
        .iter()
        .zip(dest)
        .enumerate()
        .map(|(degree, (&a, &b))| -> Result<f64> {
            let ratio = curve.interp(a, b, mix)?;
            trace!("TRAJ: degree {} {} -> {} @ {} = {}", degree, a, b, mix, ratio);
            Ok(ratio)
        })
        .collect::<Result<Vec<f64>>>()?;

    debug!(
        "TRAJ: built {} degrees with {} curve at mix {}",
        ratios.len(),
        curve,
        mix
    );

    let mut tuning = Tuning::with_reference(reference);
    tuning.set_ratios(ratios);
    Ok(tuning)
}

/// Builder for one or more interpolated tunings between two ratio sets.
///
/// The builder keeps its own copies of the source and destination ratios,
/// so later edits to the originating tunings do not affect it.
#[derive(Clone, Debug)]
pub struct TrajectoryBuilder {
    source: Vec<f64>,
    dest: Vec<f64>,
    curve: CurveKind,
    reference: Reference,
}

impl TrajectoryBuilder {
    /// Create a builder from two ratio tables of equal length
    pub fn new(source: &[f64], dest: &[f64]) -> Result<Self> {
        check_degree_counts(source, dest)?;
        Ok(Self {
            source: source.to_vec(),
            dest: dest.to_vec(),
            curve: CurveKind::default(),
            reference: Reference::MIDDLE_C,
        })
    }

    /// Create a builder from the current ratios of two tunings
    pub fn between(source: &Tuning, dest: &Tuning) -> Result<Self> {
        Self::new(source.ratios(), dest.ratios())
    }

    /// Select the interpolation curve
    pub fn curve(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    /// Anchor built tunings at a different reference
    pub fn reference(mut self, reference: Reference) -> Self {
        self.reference = reference;
        self
    }

    /// Number of degrees in each built tuning
    pub fn degree_count(&self) -> usize {
        self.source.len()
    }

    /// Build the tuning at a single mix position
    pub fn at(&self, mix: f64) -> Result<Tuning> {
        interpolate(&self.source, &self.dest, mix, self.curve, self.reference)
    }

    /// Build `steps` tunings at evenly spaced mix positions from 0 to 1.
    ///
    /// A single step yields only the source position.
    pub fn sweep(&self, steps: usize) -> Result<Vec<Tuning>> {
        let positions: Vec<f64> = match steps {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => (0..steps)
                .map(|i| i as f64 / (steps - 1) as f64)
                .collect(),
        };
        positions.into_iter().map(|mix| self.at(mix)).collect()
    }
}
