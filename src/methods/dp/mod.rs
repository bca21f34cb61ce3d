//! Dormand-Prince Runge Kutta methods

mod adaptive;
mod fixed;
pub mod tableau;

pub use adaptive::dormand_prince_adaptive;
pub(crate) use adaptive::integrate;
pub use fixed::dormand_prince;
