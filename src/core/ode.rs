//! User-supplied right-hand side of a scalar ODE.

use crate::{Error, Float};

/// Scalar right-hand side `g(x, y)` of `dy/dx = g(x, y)`.
///
/// Implement this trait for your problem, or pass a plain closure
/// `Fn(Float, Float) -> Float`, which implements it through a blanket impl.
/// A right-hand side that can fail outside its domain returns an
/// [`EvalError`]; wrap fallible closures in [`Fallible`].
///
/// # Example
///
/// ```ignore
/// struct Logistic { r: f64, k: f64 }
/// impl ODE for Logistic {
///     fn ode(&self, _x: f64, y: f64) -> Result<f64, EvalError> {
///         Ok(self.r * y * (1.0 - y / self.k))
///     }
/// }
/// ```
pub trait ODE {
    fn ode(&self, x: Float, y: Float) -> Result<Float, EvalError>;
}

impl<F> ODE for F
where
    F: Fn(Float, Float) -> Float,
{
    fn ode(&self, x: Float, y: Float) -> Result<Float, EvalError> {
        Ok(self(x, y))
    }
}

/// Adapter for closures that may fail to evaluate.
///
/// ```ignore
/// let g = Fallible(|x: f64, y: f64| {
///     if x == 0.0 {
///         return Err(EvalError::new(x, y, "division by zero"));
///     }
///     Ok((x + y + 1.0) / (2.0 * x))
/// });
/// ```
#[derive(Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F> ODE for Fallible<F>
where
    F: Fn(Float, Float) -> Result<Float, EvalError>,
{
    fn ode(&self, x: Float, y: Float) -> Result<Float, EvalError> {
        (self.0)(x, y)
    }
}

/// Failure reported by a right-hand side evaluated outside its domain.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalError {
    pub x: Float,
    pub y: Float,
    pub message: String,
}

impl EvalError {
    pub fn new(x: Float, y: Float, message: impl Into<String>) -> Self {
        Self {
            x,
            y,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at (x = {}, y = {})", self.message, self.x, self.y)
    }
}

impl std::error::Error for EvalError {}

/// Right-hand side handed to an integrator.
///
/// - `Continuous`: one function evaluable at any `(x, y)`.
/// - `Stepwise`: entry `i` is the right-hand side specialized for grid step
///   `i`; it is evaluated at the perturbed stage points of that step only.
///
/// The variant is fixed when the caller builds the value, so the integrator
/// never has to guess which form it received.
#[derive(Debug)]
pub enum Rhs<'a, F: ODE> {
    Continuous(&'a F),
    Stepwise(&'a [F]),
}

impl<F: ODE> Clone for Rhs<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ODE> Copy for Rhs<'_, F> {}

impl<'a, F: ODE> Rhs<'a, F> {
    /// Check that the right-hand side covers `n` steps.
    ///
    /// A stepwise sequence shorter than `n` is rejected here, before any
    /// stepping starts. Entries past `n` are never evaluated.
    pub fn check(&self, n: usize) -> Result<(), Error> {
        match self {
            Rhs::Continuous(_) => Ok(()),
            Rhs::Stepwise(fs) if fs.len() < n => Err(Error::DimensionMismatch {
                expected: n,
                found: fs.len(),
            }),
            Rhs::Stepwise(_) => Ok(()),
        }
    }

    /// The function to use for every stage of grid step `i`, or `None` if a
    /// stepwise sequence has no entry `i`.
    #[inline]
    pub fn at(&self, i: usize) -> Option<&'a F> {
        match *self {
            Rhs::Continuous(f) => Some(f),
            Rhs::Stepwise(fs) => fs.get(i),
        }
    }

    /// The continuous function, if this is the continuous variant.
    pub fn continuous(&self) -> Option<&'a F> {
        match *self {
            Rhs::Continuous(f) => Some(f),
            Rhs::Stepwise(_) => None,
        }
    }
}
