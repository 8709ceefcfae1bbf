//! Synthetic correlator generation.
//!
//! Each sample of a pure exponential decay is multiplied by an independent
//! Gaussian factor `N(1, noise)`:
//!
//! `C(t) = (1 + noise * z_t) * A exp(-m t)`

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::DemoConfig;
use crate::error::AppError;
use crate::math::exp_decay;

/// Generate a noisy exponential decay correlator for `config`.
pub fn generate_correlator(config: &DemoConfig) -> Result<Vec<f64>, AppError> {
    if config.extent < 2 {
        return Err(AppError::new(2, "Extent must be >= 2."));
    }
    if !(config.amplitude.is_finite() && config.amplitude > 0.0) {
        return Err(AppError::new(2, "Amplitude must be finite and > 0."));
    }
    if !config.mass.is_finite() {
        return Err(AppError::new(2, "Mass must be finite."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(1.0, config.noise)
        .map_err(|e| AppError::new(2, format!("Noise distribution error: {e}")))?;

    let correlator: Vec<f64> = (0..config.extent)
        .map(|t| normal.sample(&mut rng) * exp_decay(t as f64, config.amplitude, config.mass))
        .collect();

    tracing::debug!(
        extent = config.extent,
        amplitude = config.amplitude,
        mass = config.mass,
        noise = config.noise,
        seed = config.seed,
        "generated synthetic correlator"
    );

    Ok(correlator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_noise_is_exact_decay() {
        let config = DemoConfig {
            noise: 0.0,
            ..DemoConfig::default()
        };
        let c = generate_correlator(&config).unwrap();
        assert_eq!(c.len(), 24);
        for (t, v) in c.iter().enumerate() {
            assert!((v - (-0.15 * t as f64).exp()).abs() < 1e-15);
        }
    }

    #[test]
    fn same_seed_is_reproducible() {
        let config = DemoConfig::default();
        assert_eq!(generate_correlator(&config).unwrap(), generate_correlator(&config).unwrap());

        let other = DemoConfig { seed: 7, ..config.clone() };
        assert_ne!(generate_correlator(&config).unwrap(), generate_correlator(&other).unwrap());
    }

    #[test]
    fn noise_stays_relative() {
        let config = DemoConfig {
            noise: 0.001,
            ..DemoConfig::default()
        };
        let c = generate_correlator(&config).unwrap();
        for (t, v) in c.iter().enumerate() {
            let exact = (-0.15 * t as f64).exp();
            // 6 sigma
            assert!(((v / exact) - 1.0).abs() < 0.006);
        }
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let bad = [
            DemoConfig { extent: 1, ..DemoConfig::default() },
            DemoConfig { amplitude: 0.0, ..DemoConfig::default() },
            DemoConfig { mass: f64::NAN, ..DemoConfig::default() },
            DemoConfig { noise: -1.0, ..DemoConfig::default() },
        ];
        for config in bad {
            let err = generate_correlator(&config).unwrap_err();
            assert_eq!(err.exit_code(), 2);
        }
    }
}
