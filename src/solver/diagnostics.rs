use bevy::prelude::*;

use crate::core::ClothMesh;

const SAMPLE_PERIOD: u32 = 30;

/// Periodic summary of the cloth state at debug level
pub fn log_cloth_stats(cloth: Res<ClothMesh>, mut frame: Local<u32>) {
    if *frame % SAMPLE_PERIOD == 0 {
        let lowest = cloth.lowest_point().unwrap_or_default();
        debug!(
            "[frame {:04}] lowest=({:.3},{:.3},{:.3}) max_speed={:.3} kinetic={:.5}",
            *frame,
            lowest.x,
            lowest.y,
            lowest.z,
            cloth.max_speed(),
            cloth.kinetic_energy()
        );
    }

    *frame = frame.wrapping_add(1);
}
