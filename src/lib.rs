//! Explicit one-step integrators for scalar initial value problems
//! `dy/dx = g(x, y)`, `y(x0) = y0`.
//!
//! The crate provides the Euler family, a generic second-order Runge-Kutta
//! method RK(α), and the embedded Dormand-Prince 5(4) pair in fixed-step and
//! adaptive-step forms. Every value a method returns is rounded to 15 decimal
//! digits so that the sequences of different methods can be compared
//! point by point.
//!
//! ```rust
//! use onestep::prelude::*;
//!
//! let ivp = IVP::builder().y0(1.0).x0(0.0).h(0.1).n(10).build().unwrap();
//! let decay = |_x: f64, y: f64| -y;
//! let y = euler(&ivp, Rhs::Continuous(&decay)).unwrap();
//! assert_eq!(y.len(), 11);
//! ```

pub mod core;
pub mod error;
pub mod methods;
pub mod prelude;
pub mod scenario;
pub mod solve;

pub use error::Error;

/// Floating point type used throughout the crate.
pub type Float = f64;
