//! Error types.
//!
//! - `MassError` / `FitError` are returned by the library operations.
//! - `AppError` carries a process exit code for the `meff` binary.

use thiserror::Error;

/// Errors returned by the effective-mass and plateau-fit operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MassError {
    /// The strategy identifier is not one of the supported effective-mass strategies.
    #[error("unsupported effective-mass strategy: {0:?} (supported: \"log\")")]
    UnsupportedStrategy(String),
    /// The plateau fit could not produce a result.
    #[error("plateau fit failed: {0}")]
    Fit(#[from] FitError),
}

/// Diagnostic for a failed plateau fit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("no points to fit")]
    Empty,
    #[error("length mismatch: {values} values but {uncertainties} uncertainties")]
    LengthMismatch { values: usize, uncertainties: usize },
    /// A zero, negative or non-finite uncertainty has no inverse-variance weight.
    #[error("invalid uncertainty {value} at index {index} (must be finite and > 0)")]
    InvalidUncertainty { index: usize, value: f64 },
    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },
    #[error("singular normal matrix, least-squares solution is not unique")]
    Singular,
    /// The fitted mass is finite but chi2 or its variance is not representable.
    #[error("fit statistics out of f64 range: chi2={chi2}, variance={variance}")]
    Overflow { chi2: f64, variance: f64 },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<MassError> for AppError {
    fn from(err: MassError) -> Self {
        let exit_code = match err {
            MassError::UnsupportedStrategy(_) => 2,
            MassError::Fit(_) => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
