//! Reporting utilities: run summaries for the terminal and JSON output.

pub mod format;

pub use format::*;

use serde::Serialize;

use crate::domain::{EffectiveMassCurve, FitResult, MassStrategy};

/// Machine-readable summary of a demo run (`--json`).
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub strategy: MassStrategy,
    pub correlator: Vec<f64>,
    /// Full effective-mass curve; undefined samples are `null`.
    pub effective_mass: Vec<Option<f64>>,
    /// Half-open plateau window `[start, end)`.
    pub window: [usize; 2],
    pub fit: FitResult,
}

impl RunReport {
    pub fn new(correlator: &[f64], curve: &EffectiveMassCurve, window: [usize; 2], fit: FitResult) -> Self {
        Self {
            strategy: curve.strategy(),
            correlator: correlator.to_vec(),
            effective_mass: curve.points().iter().map(|p| p.value()).collect(),
            window,
            fit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MassPoint;

    #[test]
    fn report_serializes_undefined_as_null() {
        let curve = EffectiveMassCurve::new(MassStrategy::Log, vec![MassPoint::Valid(0.5), MassPoint::Undefined]);
        let fit = FitResult { mass: 0.5, variance: 0.0, uncertainty: 0.0, chi2: 0.0, dof: 0, n: 1 };
        let report = RunReport::new(&[1.0, 0.6, 0.0], &curve, [0, 1], fit);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strategy"], "log");
        assert_eq!(json["effective_mass"], serde_json::json!([0.5, null]));
        assert_eq!(json["window"], serde_json::json!([0, 1]));
        assert_eq!(json["fit"]["n"], 1);
    }
}
