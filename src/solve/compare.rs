//! Run several methods on one problem and measure them against a reference.

use log::debug;

use crate::{
    Error, Float,
    core::{
        ivp::IVP,
        ode::{ODE, Rhs},
        round::round15,
    },
};

use super::{options::Method, solution::Series, solve_ivp::solve};

/// Result of one method in a [`Comparison`].
#[derive(Debug, Clone)]
pub struct Run {
    pub method: Method,
    pub series: Series,
    /// Pointwise `|y_i - ref_i|`; `None` for the adaptive method, whose
    /// abscissas do not match the grid.
    pub abs_error: Option<Vec<Float>>,
}

impl Run {
    /// Largest pointwise absolute error, if the run is on the grid.
    pub fn max_abs_error(&self) -> Option<Float> {
        self.abs_error
            .as_ref()
            .map(|e| e.iter().copied().fold(0.0, Float::max))
    }

    /// Natural logarithm of the pointwise errors.
    pub fn ln_abs_error(&self) -> Option<Vec<Float>> {
        self.abs_error.as_deref().map(ln_errors)
    }
}

/// All methods applied to the same problem, next to the reference.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub reference: Series,
    pub runs: Vec<Run>,
}

impl Comparison {
    /// Reference first, then each method, as `(x, y, label)` series.
    pub fn series(&self) -> impl Iterator<Item = &Series> + '_ {
        std::iter::once(&self.reference).chain(self.runs.iter().map(|r| &r.series))
    }

    /// Pointwise error series of the fixed-step runs, labelled by method.
    pub fn error_series(&self) -> Vec<Series> {
        self.runs
            .iter()
            .filter_map(|r| {
                let e = r.abs_error.clone()?;
                Some(Series::new(r.series.label.clone(), r.series.x.clone(), e))
            })
            .collect()
    }

    pub fn run(&self, method: &Method) -> Option<&Run> {
        self.runs.iter().find(|r| &r.method == method)
    }
}

/// Solve `ivp` with every method in `methods` and compare each fixed-step
/// result with `reference` (one value per grid point).
///
/// Methods run one after another; each call is independent of the others.
pub fn compare<F>(ivp: &IVP, rhs: Rhs<'_, F>, reference: Vec<Float>, methods: &[Method]) -> Result<Comparison, Error>
where
    F: ODE,
{
    if reference.len() != ivp.n() + 1 {
        return Err(Error::DimensionMismatch {
            expected: ivp.n() + 1,
            found: reference.len(),
        });
    }
    debug!("compare: {} methods, n = {}", methods.len(), ivp.n());

    let mut runs = Vec::with_capacity(methods.len());
    for method in methods {
        let series = solve(ivp, rhs, method)?;
        let abs_error = if method.is_fixed_step() {
            Some(abs_errors(&series.y, &reference)?)
        } else {
            None
        };
        runs.push(Run {
            method: method.clone(),
            series,
            abs_error,
        });
    }

    Ok(Comparison {
        reference: Series::new("Reference", ivp.grid(), reference),
        runs,
    })
}

/// Pointwise absolute error `|approx_i - reference_i|`, rounded.
pub fn abs_errors(approx: &[Float], reference: &[Float]) -> Result<Vec<Float>, Error> {
    if approx.len() != reference.len() {
        return Err(Error::DimensionMismatch {
            expected: reference.len(),
            found: approx.len(),
        });
    }
    Ok(approx
        .iter()
        .zip(reference)
        .map(|(a, r)| round15((a - r).abs()))
        .collect())
}

/// Natural logarithm of each error, rounded; an exact zero maps to `-inf`.
pub fn ln_errors(errors: &[Float]) -> Vec<Float> {
    errors.iter().map(|e| round15(e.ln())).collect()
}
