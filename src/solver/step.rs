//! Frame stepping for a `ClothMesh` resource
//!
//! One call advances the cloth by a whole external frame; sub-stepping happens
//! inside `ClothMesh::update`.

use bevy::prelude::*;

use crate::core::ClothMesh;
use crate::math::{Vector, zero_vector};

/// Wind velocity seen by every aerodynamic facet.
///
/// Written by whatever drives the scene (UI, scripted gusts) between frames
/// and passed to the mesh explicitly on each step.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Wind(pub Vector);

impl Default for Wind {
    fn default() -> Self {
        Self(zero_vector())
    }
}

pub fn step_cloth(wind: Res<Wind>, mut cloth: ResMut<ClothMesh>) {
    cloth.update(wind.0);
}
