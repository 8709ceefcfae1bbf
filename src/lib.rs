//! `meff` library crate.
//!
//! Effective-mass curves of lattice correlators and constant fits over a
//! plateau window:
//!
//! - [`effective_mass_log`] / [`effective_mass`]: correlator -> effective mass
//! - [`fit_plateau_mass`]: weighted constant fit with covariance
//!
//! The binary (`meff`) is a thin demo wrapper around this library.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod mass;
pub mod math;
pub mod plot;
pub mod report;

pub use domain::{
    CovarianceScaling, EffectiveMassCurve, FitOptions, FitResult, MassPoint, MassStrategy, PlateauWindow,
};
pub use error::{FitError, MassError};
pub use fit::{fit_plateau_mass, fit_plateau_mass_with};
pub use mass::{effective_mass, effective_mass_log};
