//! Explicit (forward) Euler fixed-step integrator.

use log::debug;

use crate::{
    Error, Float,
    core::{
        ivp::IVP,
        ode::{ODE, Rhs},
    },
    methods::march,
};

/// Forward Euler: `y_{i+1} = y_i + h * g(x_i, y_i)`.
///
/// First order, one right-hand side evaluation per step. Returns the rounded
/// state sequence `y_0 ..= y_n`.
pub fn euler<F>(ivp: &IVP, rhs: Rhs<'_, F>) -> Result<Vec<Float>, Error>
where
    F: ODE,
{
    debug!("euler: n = {}, h = {}", ivp.n(), ivp.h());
    march(ivp, rhs, |f, x, y, h| Ok(y + h * f.ode(x, y)?))
}
