use std::time::Duration;

use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod solver;

// Public re-exports for clean API
pub use crate::config::{ClothParams, GRAVITY};
pub use crate::core::{
    AeroTriangle, ClothDescriptor, ClothMesh, GroundPlane, Particle, ParticleId, SpringDamper,
};
pub use crate::error::ClothError;
pub use crate::solver::Wind;

use crate::config::constants;
use crate::solver::{log_cloth_stats, step_cloth};

/// Simulates one cloth on the `FixedUpdate` schedule, one external frame per tick.
#[derive(Default)]
pub struct ClothPlugin {
    pub descriptor: ClothDescriptor,
    pub params: ClothParams,
}

impl ClothPlugin {
    pub fn new(descriptor: ClothDescriptor, params: ClothParams) -> Self {
        Self { descriptor, params }
    }
}

impl Plugin for ClothPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Wind::default());
        app.insert_resource(self.params.clone());

        match ClothMesh::new(&self.descriptor, self.params.clone()) {
            Ok(mesh) => {
                // Validated frame times are positive but may still overflow a Duration
                let frame = Duration::try_from_secs_f32(self.params.frame_time)
                    .unwrap_or(Duration::from_secs_f32(constants::FRAME_TIME));
                app.insert_resource(Time::<Fixed>::from_duration(frame));
                app.insert_resource(mesh);
            }
            Err(err) => {
                error!("Cloth construction failed: {err}");
            }
        }

        app.add_systems(
            FixedUpdate,
            (step_cloth, log_cloth_stats)
                .chain()
                .run_if(resource_exists::<ClothMesh>),
        );
    }
}
