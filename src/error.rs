//! Cloth construction errors
//!
//! Only construction can fail. Stepping a built mesh is infallible.

use crate::math::Real;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClothError {
    #[error("grid of {rows}x{columns} particles is unsupported (need 2x2 up to u32::MAX)")]
    InvalidGrid { rows: usize, columns: usize },

    #[error("cloth mass must be positive, got {0}")]
    NonPositiveMass(Real),

    #[error("cloth extent must be positive, got length={length} width={width}")]
    NonPositiveExtent { length: Real, width: Real },

    #[error("particle handle {index} out of range (count={count})")]
    InvalidParticleHandle { index: usize, count: usize },

    #[error("spring joins particle {a} to itself (b={b})")]
    DegenerateSpring { a: usize, b: usize },

    #[error("invalid solver parameters: {0}")]
    InvalidParams(&'static str),
}
