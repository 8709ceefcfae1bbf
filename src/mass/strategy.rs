//! Strategy dispatch.

use crate::domain::{EffectiveMassCurve, MassStrategy};
use crate::error::MassError;
use crate::mass::effective_mass_log;

impl MassStrategy {
    /// Compute the effective-mass curve of `correlator` with this strategy.
    pub fn apply(self, correlator: &[f64]) -> EffectiveMassCurve {
        match self {
            MassStrategy::Log => effective_mass_log(correlator),
        }
    }
}

/// Compute the effective-mass curve using the strategy named `strategy`.
///
/// Fails with [`MassError::UnsupportedStrategy`] if the name is not recognised.
pub fn effective_mass(correlator: &[f64], strategy: &str) -> Result<EffectiveMassCurve, MassError> {
    let strategy: MassStrategy = strategy.parse()?;
    Ok(strategy.apply(correlator))
}
