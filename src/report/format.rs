//! Formatted terminal output.
//!
//! We keep formatting code in one place so the numeric code stays clean and
//! output changes are localized.

use crate::domain::{CovarianceScaling, DemoConfig, EffectiveMassCurve, FitResult, PlateauWindow};

/// Format the run summary (inputs, effective-mass table, fit result).
pub fn format_run_summary(
    config: &DemoConfig,
    curve: &EffectiveMassCurve,
    window: &PlateauWindow<'_>,
    fit: &FitResult,
) -> String {
    let mut out = String::new();

    out.push_str("=== meff - effective mass plateau fit ===\n");
    out.push_str(&format!(
        "Correlator: T={} | A={} | m={} | noise={} | seed={}\n",
        config.extent, config.amplitude, config.mass, config.noise, config.seed
    ));
    out.push_str(&format!("Strategy: {}\n", curve.strategy()));

    out.push_str("\n   t   m_eff(t)\n");
    for (t, p) in curve.points().iter().enumerate() {
        let marker = if (window.start()..window.end()).contains(&t) { "*" } else { " " };
        let value = p.value().map(|v| format!("{v:.6}")).unwrap_or_else(|| "undefined".to_string());
        out.push_str(&format!("{marker}{t:>3}   {value}\n"));
    }

    out.push_str(&format!(
        "\nPlateau: t=[{}, {}) | n={} | dm = {} * |m_eff|\n",
        window.start(),
        window.end(),
        window.len(),
        config.rel_uncertainty
    ));
    out.push_str(&format_fit(fit, config.scaling));
    out
}

/// Format a single fit result.
pub fn format_fit(fit: &FitResult, scaling: CovarianceScaling) -> String {
    let scaling = match scaling {
        CovarianceScaling::ReducedChiSquare => "reduced chi2",
        CovarianceScaling::Absolute => "absolute",
    };
    let chi2_dof = fit
        .chi2_per_dof()
        .map(|v| format!("{v:.4}"))
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "Fit: m = {:.6} +/- {:.6} | chi2/dof = {chi2_dof} (dof={}) | errors: {scaling}\n",
        fit.mass, fit.uncertainty, fit.dof
    )
}
