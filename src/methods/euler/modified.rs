//! Modified Euler (midpoint) fixed-step integrator.

use log::debug;

use crate::{
    Error, Float,
    core::{
        ivp::IVP,
        ode::{ODE, Rhs},
    },
    methods::march,
};

/// Modified Euler, the explicit midpoint rule:
/// `y_{i+1} = y_i + h * g(x_i + h/2, y_i + h/2 * g(x_i, y_i))`.
///
/// Second order, two evaluations per step.
pub fn modified_euler<F>(ivp: &IVP, rhs: Rhs<'_, F>) -> Result<Vec<Float>, Error>
where
    F: ODE,
{
    debug!("modified_euler: n = {}, h = {}", ivp.n(), ivp.h());
    march(ivp, rhs, |f, x, y, h| {
        let k1 = f.ode(x, y)?;
        let k2 = f.ode(x + 0.5 * h, y + 0.5 * h * k1)?;
        Ok(y + h * k2)
    })
}
