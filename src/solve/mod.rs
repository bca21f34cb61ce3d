//! High-level solve module: method dispatch, reference solutions and
//! comparisons, split into submodules.

pub mod compare;
pub mod options;
pub mod reference;
pub mod solution;
pub mod solve_ivp;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use compare::{Comparison, Run, compare};
pub use options::Method;
pub use solution::Series;
pub use solve_ivp::solve;
