//! Dormand-Prince 5(4) Butcher tableau and the stage evaluation shared by the
//! fixed-step and adaptive integrators.
//!
//! Reference
//! - J. R. Dormand and P. J. Prince, "A family of embedded Runge-Kutta
//!   formulae", J. Comput. Appl. Math. 6 (1980), 19-26.
//! - E. Hairer, S. P. Nørsett, and G. Wanner, "Solving Ordinary Differential
//!   Equations I. Nonstiff Problems", 2nd ed., Springer (1993).

use crate::{
    Float,
    core::ode::{EvalError, ODE},
};

/// Number of stages.
pub const STAGES: usize = 7;

/// Stage offsets `c_j`.
pub const C: [Float; STAGES] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0, 1.0];

/// Stage coupling matrix `A`, strictly lower triangular.
pub const A: [[Float; STAGES]; STAGES] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0 / 5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0, 0.0, 0.0, 0.0, 0.0],
    [19372.0 / 6561.0, -25360.0 / 2187.0, 64448.0 / 6561.0, -212.0 / 729.0, 0.0, 0.0, 0.0],
    [9017.0 / 3168.0, -355.0 / 33.0, 46732.0 / 5247.0, 49.0 / 176.0, -5103.0 / 18656.0, 0.0, 0.0],
    [35.0 / 384.0, 0.0, 500.0 / 1113.0, 125.0 / 192.0, -2187.0 / 6784.0, 11.0 / 84.0, 0.0],
];

/// 5th-order weights (equal to the last row of `A`).
pub const B5: [Float; STAGES] = [
    35.0 / 384.0,
    0.0,
    500.0 / 1113.0,
    125.0 / 192.0,
    -2187.0 / 6784.0,
    11.0 / 84.0,
    0.0,
];

/// Embedded 4th-order weights.
pub const B4: [Float; STAGES] = [
    5179.0 / 57600.0,
    0.0,
    7571.0 / 16695.0,
    393.0 / 640.0,
    -92097.0 / 339200.0,
    187.0 / 2100.0,
    1.0 / 40.0,
];

/// Error weights `B5 - B4`.
pub const E: [Float; STAGES] = [
    71.0 / 57600.0,
    0.0,
    -71.0 / 16695.0,
    71.0 / 1920.0,
    -17253.0 / 339200.0,
    22.0 / 525.0,
    -1.0 / 40.0,
];

/// Evaluate the seven stage derivatives of one step from `(x, y)`:
/// `k_j = g(x + c_j h, y + h * sum_{m<j} A[j][m] k_m)`.
///
/// Exactly seven calls to `f`; the result is meant to be shared by every
/// weighted combination formed for the step.
pub fn stages<F>(f: &F, x: Float, y: Float, h: Float) -> Result<[Float; STAGES], EvalError>
where
    F: ODE,
{
    let mut k = [0.0; STAGES];
    for j in 0..STAGES {
        let mut acc = 0.0;
        for m in 0..j {
            acc += A[j][m] * k[m];
        }
        k[j] = f.ode(x + C[j] * h, y + h * acc)?;
    }
    Ok(k)
}

/// Weighted stage sum `sum_j w_j k_j`.
#[inline]
pub fn combine(w: &[Float; STAGES], k: &[Float; STAGES]) -> Float {
    w.iter().zip(k).map(|(w, k)| w * k).sum()
}
