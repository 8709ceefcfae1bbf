//! Plateau fitting.
//!
//! The plateau window is chosen by the caller; this module only fits the
//! window to a constant and reports the fitted mass with its covariance.

pub mod plateau;

pub use plateau::*;
