//! Improved Euler (Heun) fixed-step integrator.

use log::debug;

use crate::{
    Error, Float,
    core::{
        ivp::IVP,
        ode::{ODE, Rhs},
    },
    methods::march,
};

/// Improved Euler, the trapezoidal predictor-corrector:
///
/// ```text
/// k_a     = g(x_i, y_i)
/// y_{i+1} = y_i + h/2 * (k_a + g(x_i + h, y_i + h * k_a))
/// ```
///
/// Second order, two evaluations per step.
pub fn improved_euler<F>(ivp: &IVP, rhs: Rhs<'_, F>) -> Result<Vec<Float>, Error>
where
    F: ODE,
{
    debug!("improved_euler: n = {}, h = {}", ivp.n(), ivp.h());
    march(ivp, rhs, |f, x, y, h| {
        let ka = f.ode(x, y)?;
        let kb = f.ode(x + h, y + h * ka)?;
        Ok(y + h * (0.5 * ka + 0.5 * kb))
    })
}
