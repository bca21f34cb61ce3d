// Numerical methods

pub mod dp;
pub mod euler;
pub mod rk;
pub mod settings;

use crate::{
    Error, Float,
    core::{
        ivp::IVP,
        ode::{EvalError, ODE, Rhs},
        round::round15,
    },
};

/// Drive a one-step formula over the grid of `ivp`.
///
/// `step(f, x_i, y_i, h)` returns the unrounded `y_{i+1}`; the result is
/// rounded before it is stored and fed to the next step.
pub(crate) fn march<F, S>(ivp: &IVP, rhs: Rhs<'_, F>, mut step: S) -> Result<Vec<Float>, Error>
where
    F: ODE,
    S: FnMut(&F, Float, Float, Float) -> Result<Float, EvalError>,
{
    let n = ivp.n();
    rhs.check(n)?;

    let h = ivp.h();
    let mut y = Vec::with_capacity(n + 1);
    y.push(ivp.y0());

    for i in 0..n {
        let f = rhs.at(i).ok_or(Error::DimensionMismatch { expected: n, found: i })?;
        let next = step(f, ivp.x(i), y[i], h)?;
        y.push(round15(next));
    }

    Ok(y)
}
