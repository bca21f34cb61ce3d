//! Fixed-step Dormand-Prince 5(4)
//!
//! Two traces are carried through the grid. The base trace `a` is a plain
//! 5th-order recursion on its own history; the seven stages of step `i` are
//! evaluated once at its state `a_i` and shared by both combinations:
//!
//! ```text
//! k       = stages(g, x_i, a_i, h)
//! a_{i+1} = a_i + h * sum B5_j k_j        (base, a_0 = y0)
//! y_{i+1} = a_i + h * sum B4_j k_j        (returned)
//! ```
//!
//! The returned trace never feeds back into the base trace.

use log::debug;

use crate::{
    Error, Float,
    core::{
        ivp::IVP,
        ode::{ODE, Rhs},
        round::round15,
    },
    methods::dp::tableau::{B4, B5, combine, stages},
};

/// Dormand-Prince 5(4) with a fixed step.
///
/// Seven right-hand side evaluations per step. Returns the rounded trace
/// `y_0 ..= y_n`; the base trace is internal.
pub fn dormand_prince<F>(ivp: &IVP, rhs: Rhs<'_, F>) -> Result<Vec<Float>, Error>
where
    F: ODE,
{
    let n = ivp.n();
    rhs.check(n)?;
    debug!("dormand_prince: n = {}, h = {}", n, ivp.h());

    let h = ivp.h();
    let mut y = Vec::with_capacity(n + 1);
    let mut a = ivp.y0();
    y.push(ivp.y0());

    for i in 0..n {
        let f = rhs.at(i).ok_or(Error::DimensionMismatch { expected: n, found: i })?;
        let k = stages(f, ivp.x(i), a, h)?;
        y.push(round15(a + h * combine(&B4, &k)));
        a = round15(a + h * combine(&B5, &k));
    }

    Ok(y)
}
