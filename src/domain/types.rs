//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - produced and consumed by the pure numeric routines
//! - serialized for the `--json` output of the demo binary
//! - inspected by callers that want to mask or reject undefined samples

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MassError;

/// Effective-mass computation strategy.
///
/// Closed set: identifiers are parsed once at the boundary via [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassStrategy {
    /// `m(t) = ln(C(t) / C(t+1))`
    Log,
}

impl MassStrategy {
    pub const ALL: [MassStrategy; 1] = [MassStrategy::Log];

    /// Identifier accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            MassStrategy::Log => "log",
        }
    }
}

impl fmt::Display for MassStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MassStrategy {
    type Err = MassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MassStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| MassError::UnsupportedStrategy(s.to_string()))
    }
}

/// A single effective-mass sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassPoint {
    Valid(f64),
    /// The correlator ratio at this index was not strictly positive (zero,
    /// sign flip) or not finite, so the logarithm is undefined.
    Undefined,
}

impl MassPoint {
    pub fn value(self) -> Option<f64> {
        match self {
            MassPoint::Valid(v) => Some(v),
            MassPoint::Undefined => None,
        }
    }

    /// Value with undefined samples reported as `0.0`.
    pub fn value_or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, MassPoint::Undefined)
    }
}

/// Effective-mass curve `m(t)` for `t = 0..T-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveMassCurve {
    strategy: MassStrategy,
    points: Vec<MassPoint>,
}

impl EffectiveMassCurve {
    pub fn new(strategy: MassStrategy, points: Vec<MassPoint>) -> Self {
        Self { strategy, points }
    }

    pub fn strategy(&self) -> MassStrategy {
        self.strategy
    }

    pub fn points(&self) -> &[MassPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Plain values; undefined samples become `0.0`.
    ///
    /// Use [`EffectiveMassCurve::undefined_indices`] (or the tagged
    /// [`EffectiveMassCurve::points`]) to tell those apart from a genuine zero.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value_or_zero()).collect()
    }

    pub fn undefined_indices(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_undefined())
            .map(|(i, _)| i)
            .collect()
    }

    /// Plateau window over `range` (half-open), or `None` if the range is empty
    /// or reaches past the end of the curve.
    pub fn window(&self, range: Range<usize>) -> Option<PlateauWindow<'_>> {
        if range.start >= range.end || range.end > self.points.len() {
            return None;
        }
        Some(PlateauWindow {
            start: range.start,
            points: &self.points[range],
        })
    }
}

/// A caller-chosen contiguous slice of an effective-mass curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateauWindow<'a> {
    start: usize,
    points: &'a [MassPoint],
}

impl<'a> PlateauWindow<'a> {
    /// First curve index covered by the window.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last curve index covered by the window.
    pub fn end(&self) -> usize {
        self.start + self.points.len()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &'a [MassPoint] {
        self.points
    }

    /// Values in the window; undefined samples become `0.0`.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value_or_zero()).collect()
    }

    /// Uncertainties proportional to the values: `dm = frac * |m|`.
    pub fn relative_uncertainties(&self, frac: f64) -> Vec<f64> {
        self.points
            .iter()
            .map(|p| frac * p.value_or_zero().abs())
            .collect()
    }

    pub fn has_undefined(&self) -> bool {
        self.points.iter().any(|p| p.is_undefined())
    }

    /// Curve indices (not window-local) of undefined samples.
    pub fn undefined_indices(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_undefined())
            .map(|(i, _)| self.start + i)
            .collect()
    }
}

/// How the fitted variance is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CovarianceScaling {
    /// Uncertainties are relative: scale the variance by `chi2 / dof`.
    #[default]
    ReducedChiSquare,
    /// Uncertainties are absolute one-sigma errors.
    Absolute,
}

/// Options for the plateau fit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitOptions {
    pub scaling: CovarianceScaling,
}

/// Constant fit over a plateau window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Fitted constant (the plateau mass).
    pub mass: f64,
    /// Variance of `mass` (the 1x1 parameter covariance).
    pub variance: f64,
    /// `sqrt(variance)`.
    pub uncertainty: f64,
    /// Weighted sum of squared residuals at the optimum.
    pub chi2: f64,
    /// Degrees of freedom, `n - 1`.
    pub dof: usize,
    pub n: usize,
}

impl FitResult {
    /// `chi2 / dof`, or `None` when there are no degrees of freedom.
    pub fn chi2_per_dof(&self) -> Option<f64> {
        (self.dof > 0).then(|| self.chi2 / self.dof as f64)
    }
}

/// Configuration of the demo pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Temporal extent `T` of the synthetic correlator.
    pub extent: usize,
    pub amplitude: f64,
    pub mass: f64,
    /// Relative Gaussian noise on each correlator sample.
    pub noise: f64,
    pub seed: u64,
    pub strategy: String,
    /// Plateau window, half-open, in effective-mass indices.
    pub window: Range<usize>,
    /// Per-point uncertainty as a fraction of `|m_eff|`.
    pub rel_uncertainty: f64,
    pub scaling: CovarianceScaling,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            extent: 24,
            amplitude: 1.0,
            mass: 0.15,
            noise: 0.001,
            seed: 42,
            strategy: MassStrategy::Log.name().to_string(),
            window: 4..16,
            rel_uncertainty: 0.01,
            scaling: CovarianceScaling::ReducedChiSquare,
            plot: true,
            plot_width: 60,
            plot_height: 15,
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> EffectiveMassCurve {
        EffectiveMassCurve::new(
            MassStrategy::Log,
            vec![
                MassPoint::Valid(0.3),
                MassPoint::Valid(0.2),
                MassPoint::Undefined,
                MassPoint::Valid(-0.1),
            ],
        )
    }

    #[test]
    fn strategy_parses_known_identifier() {
        assert_eq!("log".parse::<MassStrategy>(), Ok(MassStrategy::Log));
        assert_eq!(MassStrategy::Log.to_string(), "log");
    }

    #[test]
    fn strategy_rejects_unknown_identifier() {
        let err = "Log".parse::<MassStrategy>().unwrap_err();
        assert_eq!(err, MassError::UnsupportedStrategy("Log".to_string()));
    }

    #[test]
    fn values_map_undefined_to_zero() {
        let c = curve();
        assert_eq!(c.values(), vec![0.3, 0.2, 0.0, -0.1]);
        assert_eq!(c.undefined_indices(), vec![2]);
    }

    #[test]
    fn window_bounds_and_indices() {
        let c = curve();
        assert!(c.window(2..2).is_none());
        assert!(c.window(1..5).is_none());

        let w = c.window(1..4).unwrap();
        assert_eq!((w.start(), w.end(), w.len()), (1, 4, 3));
        assert!(w.has_undefined());
        assert_eq!(w.undefined_indices(), vec![2]);

        let clean = c.window(0..2).unwrap();
        assert!(!clean.has_undefined());
        assert_eq!(clean.values(), vec![0.3, 0.2]);
    }

    #[test]
    fn relative_uncertainties_use_absolute_value() {
        let c = curve();
        let w = c.window(1..4).unwrap();
        let dm = w.relative_uncertainties(0.5);
        assert!((dm[0] - 0.1).abs() < 1e-15);
        assert_eq!(dm[1], 0.0);
        assert!((dm[2] - 0.05).abs() < 1e-15);
    }

    #[test]
    fn chi2_per_dof_requires_dof() {
        let mut fit = FitResult { mass: 0.2, variance: 0.0, uncertainty: 0.0, chi2: 3.0, dof: 3, n: 4 };
        assert_eq!(fit.chi2_per_dof(), Some(1.0));
        fit.dof = 0;
        assert_eq!(fit.chi2_per_dof(), None);
    }
}
