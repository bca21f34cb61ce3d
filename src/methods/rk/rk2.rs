//! Generic two-stage, second-order explicit Runge-Kutta method RK(α).
//!
//! ```text
//!  0 |
//!  α | α
//! ---+----------------------
//!    | 1 - 1/(2α)   1/(2α)
//! ```
//!
//! α = 1 is Heun's method (improved Euler), α = 1/2 the midpoint rule
//! (modified Euler). α = 1/3 and α = 1/4 give non-classical members of the
//! same family.

use log::debug;

use crate::{
    Error, Float,
    core::{
        ivp::IVP,
        ode::{ODE, Rhs},
    },
    methods::march,
};

/// Butcher tableau of RK(α).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RK2Tableau {
    pub alpha: Float,
    pub b1: Float,
    pub b2: Float,
}

impl RK2Tableau {
    pub const ONE_THIRD: Float = 1.0 / 3.0;
    pub const ONE_QUARTER: Float = 0.25;

    /// Build the tableau for `alpha`; zero or non-finite `alpha` is rejected.
    pub fn new(alpha: Float) -> Result<Self, Error> {
        if alpha == 0.0 || !alpha.is_finite() {
            return Err(Error::InvalidAlpha(alpha));
        }
        let b2 = 1.0 / (2.0 * alpha);
        Ok(Self {
            alpha,
            b1: 1.0 - b2,
            b2,
        })
    }
}

/// Integrate with RK(α):
///
/// ```text
/// k1      = g(x_i, y_i)
/// k2      = g(x_i + α h, y_i + α h k1)
/// y_{i+1} = y_i + h (b1 k1 + b2 k2)
/// ```
///
/// Fails with [`Error::InvalidAlpha`] before any evaluation if `alpha` is zero.
pub fn rk2<F>(ivp: &IVP, rhs: Rhs<'_, F>, alpha: Float) -> Result<Vec<Float>, Error>
where
    F: ODE,
{
    let tableau = RK2Tableau::new(alpha)?;
    debug!("rk2: alpha = {}, n = {}, h = {}", alpha, ivp.n(), ivp.h());

    let RK2Tableau { alpha, b1, b2 } = tableau;
    march(ivp, rhs, |f, x, y, h| {
        let k1 = f.ode(x, y)?;
        let k2 = f.ode(x + alpha * h, y + alpha * h * k1)?;
        Ok(y + h * (b1 * k1 + b2 * k2))
    })
}
