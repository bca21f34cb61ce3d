//! Ready-made problems built on the integrators.

pub mod reservoir;

pub use reservoir::{ConstantRate, Reservoir, ReservoirConfig};
