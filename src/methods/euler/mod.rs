//! Euler family: explicit, improved (Heun) and modified (midpoint) Euler.

mod explicit;
mod improved;
mod modified;

pub use explicit::euler;
pub use improved::improved_euler;
pub use modified::modified_euler;
