//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the strategy enum (`MassStrategy`)
//! - effective-mass samples and curves (`MassPoint`, `EffectiveMassCurve`, `PlateauWindow`)
//! - fit inputs/outputs (`FitOptions`, `CovarianceScaling`, `FitResult`)
//! - the demo configuration (`DemoConfig`)

pub mod types;

pub use types::*;
