//! Reference solutions on the grid of a problem.
//!
//! Either a closed-form solution supplied by the caller is sampled on the
//! grid, or the adaptive Dormand-Prince integrator is run at tight
//! tolerances, stopping exactly on every grid point.

use log::debug;

use crate::{
    Error, Float,
    core::{ivp::IVP, ode::ODE, round::round15},
    methods::{dp::integrate, settings::AdaptiveSettings},
};

/// Sample a closed-form solution `y(x)` on the grid, rounded.
pub fn exact_on_grid<S>(ivp: &IVP, exact: S) -> Vec<Float>
where
    S: Fn(Float) -> Float,
{
    (0..=ivp.n()).map(|i| round15(exact(ivp.x(i)))).collect()
}

/// High-accuracy numerical baseline `y(x_0) ..= y(x_n)`.
///
/// Integrates from one grid point to the next with the adaptive integrator,
/// carrying the unrounded state and the proposed step size across grid
/// points. Stored values are rounded.
pub fn adaptive_on_grid<F>(ivp: &IVP, f: &F, settings: &AdaptiveSettings) -> Result<Vec<Float>, Error>
where
    F: ODE,
{
    settings.validate()?;
    debug!(
        "adaptive reference: n = {}, rtol = {}, atol = {}",
        ivp.n(),
        settings.rtol,
        settings.atol
    );

    let mut out = Vec::with_capacity(ivp.n() + 1);
    out.push(ivp.y0());

    let mut y = ivp.y0();
    let mut h = ivp.h();
    for i in 0..ivp.n() {
        let (y_next, h_next) = integrate(f, ivp.x(i), ivp.x(i + 1), y, h, settings, |_, _| {})?;
        y = y_next;
        h = h_next;
        out.push(round15(y));
    }

    Ok(out)
}
