//! Effective-mass transforms.
//!
//! Transforms are implemented as small, pure functions of the correlator so that
//! dispatch (`MassStrategy::apply`) stays a plain match.

pub mod log;
pub mod strategy;

pub use log::*;
pub use strategy::*;
