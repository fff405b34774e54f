// src/solver/mod.rs
pub mod diagnostics;
pub mod step;

pub use diagnostics::*;
pub use step::*;
