//! Explicit second-order Runge-Kutta family RK(α)

mod rk2;

pub use rk2::{RK2Tableau, rk2};
