//! Constant fit over a plateau window.
//!
//! Given:
//! - effective-mass values `m_i` for `i = 0..N` (already sliced to the plateau)
//! - per-point uncertainties `dm_i`
//!
//! we fit the model `f(i) = x` by minimizing
//!
//! ```text
//! chi2(x) = Σ (m_i - x)^2 / dm_i^2
//! ```
//!
//! The model is linear in `x`, so this is a one-column weighted least squares
//! problem with a direct solution: the inverse-variance weighted mean, with
//! variance `1 / Σ dm_i^-2`. With `CovarianceScaling::ReducedChiSquare` the
//! variance is additionally multiplied by `chi2 / (N - 1)`, treating `dm` as
//! relative rather than absolute errors.

use nalgebra::{DMatrix, DVector};

use crate::domain::{CovarianceScaling, FitOptions, FitResult};
use crate::error::{FitError, MassError};
use crate::math::weighted_least_squares;

/// Fit `m` to a constant with uncertainties `dm`, using default options.
pub fn fit_plateau_mass(m: &[f64], dm: &[f64]) -> Result<FitResult, MassError> {
    fit_plateau_mass_with(m, dm, &FitOptions::default())
}

/// Fit `m` to a constant with uncertainties `dm`.
pub fn fit_plateau_mass_with(m: &[f64], dm: &[f64], opts: &FitOptions) -> Result<FitResult, MassError> {
    validate(m, dm)?;

    let n = m.len();
    let start = m.iter().sum::<f64>() / n as f64;

    // Solve with sigma rescaled into (0, 1] so 1/sigma^2 stays representable
    // for very large or very small uncertainties.
    let scale = dm.iter().copied().fold(0.0_f64, f64::max);
    let x = DMatrix::<f64>::from_element(n, 1, 1.0);
    let y = DVector::from_column_slice(m);
    let sigma = DVector::from_iterator(n, dm.iter().map(|s| s / scale));
    let sol = weighted_least_squares(&x, &y, &sigma)?;

    let mass = sol.beta[0];
    if !mass.is_finite() {
        return Err(FitError::Singular.into());
    }

    let scaled_variance = sol.covariance[(0, 0)];
    let chi2 = sol.chi2 / scale / scale;
    let dof = n - 1;

    let variance = match opts.scaling {
        CovarianceScaling::Absolute => scaled_variance * scale * scale,
        CovarianceScaling::ReducedChiSquare if dof == 0 => {
            tracing::warn!(n, "plateau fit has no degrees of freedom, variance is unbounded");
            f64::INFINITY
        }
        // Independent of the overall scale of dm.
        CovarianceScaling::ReducedChiSquare => scaled_variance * sol.chi2 / dof as f64,
    };

    let unbounded = opts.scaling == CovarianceScaling::ReducedChiSquare && dof == 0;
    if !chi2.is_finite() || !(variance.is_finite() || unbounded) {
        return Err(FitError::Overflow { chi2, variance }.into());
    }

    tracing::debug!(
        n,
        start,
        mass,
        variance,
        chi2,
        scaling = ?opts.scaling,
        "plateau fit"
    );

    Ok(FitResult {
        mass,
        variance,
        uncertainty: variance.sqrt(),
        chi2,
        dof,
        n,
    })
}

fn validate(m: &[f64], dm: &[f64]) -> Result<(), FitError> {
    if m.len() != dm.len() {
        return Err(FitError::LengthMismatch {
            values: m.len(),
            uncertainties: dm.len(),
        });
    }
    if m.is_empty() {
        return Err(FitError::Empty);
    }
    if let Some((index, &value)) = m.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(FitError::NonFiniteValue { index, value });
    }
    if let Some((index, &value)) = dm
        .iter()
        .enumerate()
        .find(|(_, s)| !(s.is_finite() && **s > 0.0))
    {
        return Err(FitError::InvalidUncertainty { index, value });
    }
    Ok(())
}
