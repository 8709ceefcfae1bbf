//! Input data for the demo pipeline.

pub mod synthetic;

pub use synthetic::*;
