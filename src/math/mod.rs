//! Mathematical utilities: correlator model and weighted least squares.

pub mod decay;
pub mod ols;

pub use decay::*;
pub use ols::*;
