//! Single entry point dispatching to every integrator.

use crate::{
    Error,
    core::{
        ivp::IVP,
        ode::{ODE, Rhs},
    },
    methods::{
        dp::{dormand_prince, dormand_prince_adaptive},
        euler::{euler, improved_euler, modified_euler},
        rk::rk2,
    },
};

use super::{options::Method, solution::Series};

/// Solve `ivp` with `method` and return the labelled result.
///
/// Fixed-step methods yield one value per grid point, paired with the rounded
/// grid. The adaptive method yields its own irregular abscissas and needs a
/// continuous right-hand side.
pub fn solve<F>(ivp: &IVP, rhs: Rhs<'_, F>, method: &Method) -> Result<Series, Error>
where
    F: ODE,
{
    let y = match method {
        Method::Euler => euler(ivp, rhs)?,
        Method::ImprovedEuler => improved_euler(ivp, rhs)?,
        Method::ModifiedEuler => modified_euler(ivp, rhs)?,
        Method::RK2 { alpha } => rk2(ivp, rhs, *alpha)?,
        Method::DormandPrince => dormand_prince(ivp, rhs)?,
        Method::DormandPrinceAdaptive(settings) => {
            let f = rhs.continuous().ok_or(Error::ContinuousRhsRequired)?;
            let trace = dormand_prince_adaptive(ivp, f, settings)?;
            return Ok(Series::new(method.label(), trace.x, trace.y));
        }
    };

    Ok(Series::new(method.label(), ivp.grid(), y))
}
