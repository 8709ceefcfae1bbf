//! The demo pipeline:
//! synthetic correlator -> effective mass -> plateau window -> constant fit
//!
//! The front-end (`app::run`) only handles presentation (text, plot or JSON).

use std::ops::Range;

use crate::data::generate_correlator;
use crate::domain::{DemoConfig, EffectiveMassCurve, FitOptions, FitResult, PlateauWindow};
use crate::error::AppError;
use crate::fit::fit_plateau_mass_with;
use crate::mass::effective_mass;

/// All computed outputs of a single `meff demo` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub correlator: Vec<f64>,
    pub curve: EffectiveMassCurve,
    pub window: Range<usize>,
    pub fit: FitResult,
}

impl RunOutput {
    /// The plateau window the fit was computed on.
    pub fn plateau(&self) -> Result<PlateauWindow<'_>, AppError> {
        plateau_window(&self.curve, &self.window)
    }
}

/// Execute the full demo pipeline and return the computed outputs.
pub fn run_demo(config: &DemoConfig) -> Result<RunOutput, AppError> {
    if !(config.rel_uncertainty.is_finite() && config.rel_uncertainty > 0.0) {
        return Err(AppError::new(2, "Relative uncertainty must be finite and > 0."));
    }

    let correlator = generate_correlator(config)?;
    run_demo_with_correlator(config, correlator)
}

/// Execute the pipeline on a caller-supplied correlator.
pub fn run_demo_with_correlator(config: &DemoConfig, correlator: Vec<f64>) -> Result<RunOutput, AppError> {
    let curve = effective_mass(&correlator, &config.strategy)?;

    let undefined = curve.undefined_indices();
    if !undefined.is_empty() {
        tracing::warn!(?undefined, "effective mass undefined at some time slices");
    }

    let window = plateau_window(&curve, &config.window)?;
    if window.has_undefined() {
        return Err(AppError::new(
            4,
            format!(
                "Plateau window [{}, {}) contains undefined effective-mass samples at t={:?}.",
                window.start(),
                window.end(),
                window.undefined_indices()
            ),
        ));
    }

    let values = window.values();
    let dm = window.relative_uncertainties(config.rel_uncertainty);
    let opts = FitOptions {
        scaling: config.scaling,
    };
    let fit = fit_plateau_mass_with(&values, &dm, &opts)?;

    tracing::info!(
        mass = fit.mass,
        uncertainty = fit.uncertainty,
        chi2 = fit.chi2,
        dof = fit.dof,
        "plateau fit"
    );

    Ok(RunOutput {
        correlator,
        window: config.window.clone(),
        curve,
        fit,
    })
}

fn plateau_window<'a>(curve: &'a EffectiveMassCurve, range: &Range<usize>) -> Result<PlateauWindow<'a>, AppError> {
    curve.window(range.clone()).ok_or_else(|| {
        AppError::new(
            2,
            format!(
                "Plateau window [{}, {}) is empty or outside the effective-mass curve (length {}).",
                range.start,
                range.end,
                curve.len()
            ),
        )
    })
}
