//! Log-ratio effective mass.
//!
//! `m(t) = ln(C(t) / C(t+1))` for `t = 0..T-1`.
//!
//! The ratio must be strictly positive and finite for the logarithm to be
//! real. A zero sample, a sign flip between neighbours, or a zero denominator
//! yields `MassPoint::Undefined` for that index instead of an error.

use crate::domain::{EffectiveMassCurve, MassPoint, MassStrategy};

/// Compute the log-ratio effective mass of `correlator`.
///
/// Correlators shorter than two samples produce an empty curve. A positive
/// sample followed by an exact zero gives a ratio of `+inf`, which is reported
/// as `MassPoint::Undefined` (so `0.0` in `values()`), not as an infinite mass.
pub fn effective_mass_log(correlator: &[f64]) -> EffectiveMassCurve {
    let points: Vec<MassPoint> = correlator
        .windows(2)
        .enumerate()
        .map(|(t, pair)| {
            let point = log_ratio(pair[0], pair[1]);
            if point.is_undefined() {
                tracing::debug!(t, c_t = pair[0], c_next = pair[1], "undefined log-ratio effective mass");
            }
            point
        })
        .collect();

    EffectiveMassCurve::new(MassStrategy::Log, points)
}

fn log_ratio(c_t: f64, c_next: f64) -> MassPoint {
    let ratio = c_t / c_next;
    if ratio.is_finite() && ratio > 0.0 {
        MassPoint::Valid(ratio.ln())
    } else {
        MassPoint::Undefined
    }
}
