//! Single-state correlator model.
//!
//! Asymptotically a two-point correlator decays as
//!
//! - `C(t) = A exp(-m t)`
//!
//! so the log-ratio `ln(C(t)/C(t+1))` equals `m` at every `t`.

/// Evaluate `A exp(-m t)`.
pub fn exp_decay(t: f64, amplitude: f64, mass: f64) -> f64 {
    amplitude * (-mass * t).exp()
}

/// Sample `A exp(-m t)` at `t = 0..extent`.
pub fn exp_decay_series(extent: usize, amplitude: f64, mass: f64) -> Vec<f64> {
    (0..extent).map(|t| exp_decay(t as f64, amplitude, mass)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_starts_at_amplitude() {
        assert_eq!(exp_decay(0.0, 2.5, 0.3), 2.5);
    }

    #[test]
    fn series_has_constant_ratio() {
        let c = exp_decay_series(8, 1.0, 0.2);
        assert_eq!(c.len(), 8);
        for w in c.windows(2) {
            assert!((w[0] / w[1] - 0.2_f64.exp()).abs() < 1e-12);
        }
    }
}
