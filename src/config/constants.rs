// Physical defaults for the cloth simulation (1 unit = 1 m)
use bevy::prelude::*;

use crate::math::Real;

// Global physics
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);

// Oversampling: one external frame is split into SUBSTEPS integration steps
pub const FRAME_TIME: Real = 1.0 / 40.0;
pub const SUBSTEPS: u32 = 100;

// Spring-damper network
pub const SPRING_CONSTANT: Real = 1.0001;
pub const DAMPING_CONSTANT: Real = 0.50001;

// Aerodynamics (air at sea level, flat plate)
pub const FLUID_DENSITY: Real = 1.225;
pub const DRAG_COEFFICIENT: Real = 1.2;

// Ground contact
pub const GROUND_POINT: Vec3 = Vec3::new(0.0, -4.5, 0.0);
pub const GROUND_NORMAL: Vec3 = Vec3::Y;
pub const RESTITUTION: Real = 0.5;
pub const DYNAMIC_FRICTION: Real = 0.75;

// Grid layout: rows grow downwards, columns grow to the right
pub const DOWN: Vec3 = Vec3::NEG_Y;
pub const RIGHT: Vec3 = Vec3::X;
