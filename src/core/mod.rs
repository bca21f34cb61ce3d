//! Core traits and types used throughout the library.

pub mod ivp;
pub mod ode;
pub mod round;
pub mod trace;
