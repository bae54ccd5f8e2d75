//! Interpolation curves for morphing between two tunings
//!
//! Every curve is anchored at `(0, a)` and `(1, b)` and evaluated at the mix
//! position `t`. `t` is not clamped: positions outside [0, 1] extrapolate
//! along the same formula.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TuningError};

/// Shape of the interpolation applied per scale degree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurveKind {
    /// Straight line between the endpoints
    #[default]
    Linear,
    /// Raised-cosine ease in and out
    HalfCosine,
    /// Geometric interpolation; both endpoints must be positive
    Exponential,
}

impl CurveKind {
    /// All curve kinds in selection order
    pub const ALL: [CurveKind; 3] = [
        CurveKind::Linear,
        CurveKind::HalfCosine,
        CurveKind::Exponential,
    ];

    /// Select a curve by its 0-based position in [`CurveKind::ALL`]
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| TuningError::UnknownCurve {
                id: index.to_string(),
            })
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            CurveKind::Linear => "Linear",
            CurveKind::HalfCosine => "Half Cosine",
            CurveKind::Exponential => "Exponential",
        }
    }

    /// Evaluate the curve between `a` (at `t = 0`) and `b` (at `t = 1`)
    pub fn interp(self, a: f64, b: f64, t: f64) -> Result<f64> {
        match self {
            CurveKind::Linear => Ok(linear(a, b, t)),
            CurveKind::HalfCosine => Ok(half_cosine(a, b, t)),
            CurveKind::Exponential => exponential(a, b, t),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CurveKind {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }

        match s.to_ascii_lowercase().as_str() {
            "linear" | "lin" => Ok(CurveKind::Linear),
            "half-cosine" | "halfcosine" | "half cosine" | "cosine" | "cos" => {
                Ok(CurveKind::HalfCosine)
            }
            "exponential" | "exp" => Ok(CurveKind::Exponential),
            _ => Err(TuningError::UnknownCurve { id: s.to_string() }),
        }
    }
}

/// `a + (b - a) * t`
pub fn linear(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `a + (b - a) * (1 - cos(t * pi)) / 2`
///
/// Exact at both endpoints. Outside [0, 1] the cosine keeps oscillating, so
/// extrapolation is not monotonic.
pub fn half_cosine(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * (1.0 - (t * PI).cos()) / 2.0
}

/// `a * (b / a)^t`
///
/// Fails with [`TuningError::InvalidExponentialDomain`] unless both `a` and
/// `b` are strictly positive (NaN included).
pub fn exponential(a: f64, b: f64, t: f64) -> Result<f64> {
    if !(a > 0.0 && b > 0.0) {
        return Err(TuningError::InvalidExponentialDomain { start: a, end: b });
    }
    Ok(a * (b / a).powf(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_endpoints() {
        for curve in CurveKind::ALL {
            for (a, b) in [(1.0, 2.0), (1.05946, 1.05350), (1.5, 1.5), (1.85, 1.0)] {
                assert!((curve.interp(a, b, 0.0).unwrap() - a).abs() < EPS, "{curve} at 0");
                assert!((curve.interp(a, b, 1.0).unwrap() - b).abs() < EPS, "{curve} at 1");
            }
        }
    }

    #[test]
    fn test_linear_midpoint() {
        assert!((linear(1.0, 2.0, 0.5) - 1.5).abs() < EPS);
        assert!((linear(-3.0, 5.0, 0.5) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_linear_extrapolates() {
        assert!((linear(1.0, 2.0, 2.0) - 3.0).abs() < EPS);
        assert!((linear(1.0, 2.0, -1.0) - 0.0).abs() < EPS);
    }

    #[test]
    fn test_half_cosine_shape() {
        assert!((half_cosine(1.0, 2.0, 0.5) - 1.5).abs() < EPS);
        // eases in: slower than linear over the first half
        assert!(half_cosine(1.0, 2.0, 0.25) < linear(1.0, 2.0, 0.25));
        // not monotonic past t = 1
        assert!((half_cosine(1.0, 2.0, 2.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_exponential_midpoint_is_geometric_mean() {
        let v = exponential(1.0, 4.0, 0.5).unwrap();
        assert!((v - 2.0).abs() < EPS);
    }

    #[test]
    fn test_exponential_extrapolates() {
        let v = exponential(1.0, 2.0, 2.0).unwrap();
        assert!((v - 4.0).abs() < EPS);
    }

    #[test]
    fn test_exponential_domain() {
        for (a, b) in [(0.0, 1.0), (-1.0, 2.0), (1.0, 0.0), (1.0, -2.0), (f64::NAN, 1.0)] {
            let err = CurveKind::Exponential.interp(a, b, 0.5).unwrap_err();
            assert!(matches!(err, TuningError::InvalidExponentialDomain { .. }));
        }
    }

    #[test]
    fn test_other_curves_accept_non_positive() {
        assert_eq!(CurveKind::Linear.interp(0.0, 2.0, 0.5).unwrap(), 1.0);
        assert!(CurveKind::HalfCosine.interp(-1.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_curve_selection() {
        assert_eq!(CurveKind::from_index(0).unwrap(), CurveKind::Linear);
        assert_eq!(CurveKind::from_index(2).unwrap(), CurveKind::Exponential);
        assert!(matches!(
            CurveKind::from_index(3),
            Err(TuningError::UnknownCurve { .. })
        ));

        assert_eq!("Half-Cosine".parse::<CurveKind>().unwrap(), CurveKind::HalfCosine);
        assert_eq!("exp".parse::<CurveKind>().unwrap(), CurveKind::Exponential);
        assert_eq!("1".parse::<CurveKind>().unwrap(), CurveKind::HalfCosine);
        assert!("spline".parse::<CurveKind>().is_err());
    }
}
