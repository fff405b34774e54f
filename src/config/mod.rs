//! Configuration and parameters
//!
//! Physical constants and solver settings.

pub mod constants;
pub mod solver_params;

pub use constants::*;
pub use solver_params::*;
