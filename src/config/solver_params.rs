use bevy::prelude::*;

use crate::config::constants;
use crate::core::GroundPlane;
use crate::error::ClothError;
use crate::math::{Real, Vector};

/// Solver parameters for controlling cloth simulation behavior
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ClothParams {
    /// Duration of one external frame, in seconds
    pub frame_time: Real,

    /// Number of integration sub-steps per frame (oversampling factor)
    /// Stiff springs need more sub-steps to stay stable under explicit Euler
    pub substeps: u32,

    /// Gravitational acceleration applied to every particle
    pub gravity: Vector,

    /// Spring constant shared by every spring-damper in a grid mesh
    pub spring_constant: Real,

    /// Damping constant shared by every spring-damper in a grid mesh
    pub damping_constant: Real,

    /// Density of the surrounding fluid (air)
    pub fluid_density: Real,

    /// Flat-plate drag coefficient of each triangle
    pub drag_coefficient: Real,

    /// Static collision plane
    pub ground: GroundPlane,
}

impl Default for ClothParams {
    fn default() -> Self {
        Self {
            frame_time: constants::FRAME_TIME,
            substeps: constants::SUBSTEPS,
            gravity: constants::GRAVITY,
            spring_constant: constants::SPRING_CONSTANT,
            damping_constant: constants::DAMPING_CONSTANT,
            fluid_density: constants::FLUID_DENSITY,
            drag_coefficient: constants::DRAG_COEFFICIENT,
            ground: GroundPlane::default(),
        }
    }
}

impl ClothParams {
    /// Length of a single integration sub-step
    #[inline]
    pub fn substep_dt(&self) -> Real {
        self.frame_time / self.substeps as Real
    }

    pub fn with_frame_time(mut self, frame_time: Real) -> Self {
        self.frame_time = frame_time;
        self
    }

    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.substeps = substeps;
        self
    }

    pub fn with_gravity(mut self, gravity: Vector) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set spring and damping constants for grid springs
    pub fn with_spring(mut self, spring_constant: Real, damping_constant: Real) -> Self {
        self.spring_constant = spring_constant;
        self.damping_constant = damping_constant;
        self
    }

    /// Set fluid density and drag coefficient for aerodynamic triangles
    pub fn with_aerodynamics(mut self, fluid_density: Real, drag_coefficient: Real) -> Self {
        self.fluid_density = fluid_density;
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn with_ground(mut self, ground: GroundPlane) -> Self {
        self.ground = ground;
        self
    }

    /// Check that every parameter is physically meaningful
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.substeps == 0 {
            return Err(ClothError::InvalidParams("substeps must be at least 1"));
        }
        if !(self.frame_time.is_finite() && self.frame_time > 0.0) {
            return Err(ClothError::InvalidParams("frame time must be positive"));
        }
        if !self.gravity.is_finite() {
            return Err(ClothError::InvalidParams("gravity must be finite"));
        }
        if !(self.spring_constant.is_finite() && self.spring_constant > 0.0) {
            return Err(ClothError::InvalidParams("spring constant must be positive"));
        }
        if !(self.damping_constant.is_finite() && self.damping_constant >= 0.0) {
            return Err(ClothError::InvalidParams("damping constant must be non-negative"));
        }
        if !(self.fluid_density.is_finite() && self.fluid_density >= 0.0) {
            return Err(ClothError::InvalidParams("fluid density must be non-negative"));
        }
        if !(self.drag_coefficient.is_finite() && self.drag_coefficient >= 0.0) {
            return Err(ClothError::InvalidParams("drag coefficient must be non-negative"));
        }
        self.ground.validate()
    }
}
