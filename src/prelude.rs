//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use onestep::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `Rhs`, `Fallible`, `EvalError`, `IVP`, `AdaptiveTrace`.
//! - Integrators: `euler`, `improved_euler`, `modified_euler`, `rk2`,
//!   `dormand_prince`, `dormand_prince_adaptive`, with `AdaptiveSettings`.
//! - High-level API: `solve`, `compare`, `Method`, `Series`, `Comparison`.
//!

pub use crate::Error;
pub use crate::core::{
    ivp::IVP,
    ode::{EvalError, Fallible, ODE, Rhs},
    round::round15,
    trace::AdaptiveTrace,
};
pub use crate::methods::{
    dp::{dormand_prince, dormand_prince_adaptive},
    euler::{euler, improved_euler, modified_euler},
    rk::{RK2Tableau, rk2},
    settings::AdaptiveSettings,
};
pub use crate::solve::{
    Comparison, Method, Run, Series, compare,
    reference::{adaptive_on_grid, exact_on_grid},
    solve,
};
