//! Weighted least squares solver.
//!
//! The plateau fit is a linear regression of the form:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2 / σ_i^2
//! ```
//!
//! Implementation choices:
//! - We scale rows by `1/σ_i` and solve an ordinary least squares problem.
//! - We use SVD to solve the least-squares problem robustly even when
//!   the design matrix is tall (more rows than columns).
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - The parameter covariance is the inverse of the weighted normal matrix
//!   `(X_w^T X_w)^{-1}`.

use nalgebra::{DMatrix, DVector};

use crate::error::FitError;

/// Solution of a weighted least squares problem.
#[derive(Debug, Clone)]
pub struct WlsSolution {
    pub beta: DVector<f64>,
    /// Unscaled parameter covariance `(X^T W X)^{-1}`.
    pub covariance: DMatrix<f64>,
    /// `Σ r_i^2 / σ_i^2` at `beta`.
    pub chi2: f64,
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Solve `y ≈ X β` with per-row standard deviations `sigma`.
///
/// Callers validate shapes and that every `sigma` is finite and positive.
pub fn weighted_least_squares(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
    sigma: &DVector<f64>,
) -> Result<WlsSolution, FitError> {
    let mut xw = x.clone();
    let mut yw = y.clone();
    for (i, &s) in sigma.iter().enumerate() {
        for j in 0..xw.ncols() {
            xw[(i, j)] /= s;
        }
        yw[i] /= s;
    }

    let normal = xw.transpose() * &xw;
    let covariance = normal.try_inverse().ok_or(FitError::Singular)?;
    if covariance.iter().any(|v| !v.is_finite()) {
        return Err(FitError::Singular);
    }

    let beta = solve_least_squares(&xw, &yw).ok_or(FitError::Singular)?;
    let chi2 = (&yw - &xw * &beta).norm_squared();

    Ok(WlsSolution {
        beta,
        covariance,
        chi2,
    })
}
