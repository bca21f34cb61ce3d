#![allow(dead_code)]

use std::cell::Cell;

use onestep::prelude::*;

/// dy/dx = -y, exact solution exp(-x) for y(0) = 1.
pub fn decay(_x: f64, y: f64) -> f64 {
    -y
}

/// dy/dx = y (x^2 - 1), exact solution exp(x^3/3 - x) for y(0) = 1.
pub fn cubic(x: f64, y: f64) -> f64 {
    y * (x * x - 1.0)
}

pub fn cubic_exact(x: f64) -> f64 {
    (x * x * x / 3.0 - x).exp()
}

/// dy/dx = (x + y + 1) / (2x), undefined at x = 0.
pub fn rational() -> Fallible<impl Fn(f64, f64) -> Result<f64, EvalError>> {
    Fallible(|x: f64, y: f64| {
        if x == 0.0 {
            return Err(EvalError::new(x, y, "division by zero"));
        }
        Ok((x + y + 1.0) / (2.0 * x))
    })
}

/// Exact solution of `rational` with y(2) = 4.
pub fn rational_exact(x: f64) -> f64 {
    x - 1.0 + 3.0 * (x / 2.0).sqrt()
}

pub fn ivp(y0: f64, x0: f64, h: f64, n: usize) -> IVP {
    IVP::builder().y0(y0).x0(x0).h(h).n(n).build().unwrap()
}

/// Right-hand side wrapper counting its evaluations.
pub struct Counting<F> {
    pub f: F,
    pub calls: Cell<usize>,
}

impl<F> Counting<F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<F: ODE> ODE for Counting<F> {
    fn ode(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        self.calls.set(self.calls.get() + 1);
        self.f.ode(x, y)
    }
}

/// Every fixed-step integrator applied to the same inputs.
pub fn fixed_step_all<F: ODE>(ivp: &IVP, rhs: Rhs<'_, F>) -> Vec<Result<Vec<f64>, Error>> {
    vec![
        euler(ivp, rhs),
        improved_euler(ivp, rhs),
        modified_euler(ivp, rhs),
        rk2(ivp, rhs, RK2Tableau::ONE_THIRD),
        rk2(ivp, rhs, RK2Tableau::ONE_QUARTER),
        dormand_prince(ivp, rhs),
    ]
}
