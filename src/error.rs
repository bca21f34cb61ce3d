//! Errors for integration methods

use crate::{Float, core::ode::EvalError};

/// Errors returned by the integrators and their helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Step size is zero or not finite.
    InvalidStepSize(Float),
    /// RK(α) parameter is zero or not finite.
    InvalidAlpha(Float),
    /// A sequence does not have the length the operation requires.
    DimensionMismatch { expected: usize, found: usize },
    /// The right-hand side could not be evaluated.
    Evaluation(EvalError),
    /// The adaptive controller shrank the step below machine resolution.
    StepSizeTooSmall { x: Float, h: Float },
    /// The adaptive controller used up its step budget.
    MaxStepsExceeded(usize),
    NMaxMustBePositive(usize),
    URoundOutOfRange(Float),
    /// Step-size scale bounds must satisfy `0 < scale_min <= 1 <= scale_max`.
    ScaleOutOfRange { min: Float, max: Float },
    SafetyFactorOutOfRange(Float),
    BetaTooLarge(Float),
    InvalidTolerance(Float),
    /// The requested operation needs a right-hand side evaluable at any step.
    ContinuousRhsRequired,
    /// A model parameter is outside its valid range.
    InvalidParameter { name: &'static str, value: Float },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidStepSize(v) => write!(f, "step size h must be finite and nonzero (got {})", v),
            Error::InvalidAlpha(v) => write!(f, "alpha must be finite and nonzero (got {})", v),
            Error::DimensionMismatch { expected, found } => {
                write!(f, "sequence length mismatch: expected {}, got {}", expected, found)
            }
            Error::Evaluation(e) => write!(f, "right-hand side evaluation failed: {}", e),
            Error::StepSizeTooSmall { x, h } => write!(f, "step size too small at x = {} (h = {})", x, h),
            Error::MaxStepsExceeded(v) => write!(f, "more than nmax = {} steps are needed", v),
            Error::NMaxMustBePositive(v) => write!(f, "nmax must be positive (got {})", v),
            Error::URoundOutOfRange(v) => write!(f, "uround must be in (1e-35, 1.0) (got {})", v),
            Error::ScaleOutOfRange { min, max } => write!(
                f,
                "scale bounds must satisfy 0 < scale_min <= 1 <= scale_max (got {}, {})",
                min, max
            ),
            Error::SafetyFactorOutOfRange(v) => write!(f, "safety_factor must be in (1e-4, 1.0) (got {})", v),
            Error::BetaTooLarge(v) => write!(f, "beta must be <= 0.2 (got {})", v),
            Error::InvalidTolerance(v) => write!(f, "tolerances must be positive and finite (got {})", v),
            Error::ContinuousRhsRequired => write!(f, "a continuous right-hand side is required"),
            Error::InvalidParameter { name, value } => write!(f, "invalid value for {} (got {})", name, value),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Evaluation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Error::Evaluation(e)
    }
}
