// Headless cloth run: gusty wind stands in for an interactive control panel.
use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use cloth3d::{ClothDescriptor, ClothMesh, ClothParams, ClothPlugin, Wind};
use rand::Rng;

const FRAME_LIMIT: u32 = 400;
const GUST_PERIOD: u32 = 40;

fn gust_wind(mut wind: ResMut<Wind>, mut frame: Local<u32>) {
    if *frame % GUST_PERIOD == 0 {
        let mut rand = rand::rng();
        wind.0 = Vec3::new(
            rand.random_range(-1.0..=1.0),
            0.0,
            rand.random_range(0.0..=3.0),
        );
        info!("Wind gust: ({:.2}, {:.2}, {:.2})", wind.0.x, wind.0.y, wind.0.z);
    }
    *frame = frame.wrapping_add(1);
}

fn report_and_exit(
    cloth: Option<Res<ClothMesh>>,
    mut frame: Local<u32>,
    mut exit: MessageWriter<AppExit>,
) {
    *frame += 1;
    let Some(cloth) = cloth else {
        exit.write(AppExit::error());
        return;
    };

    if *frame >= FRAME_LIMIT {
        let lowest = cloth.lowest_point().unwrap_or_default();
        info!(
            "Finished {} frames: lowest y={:.3}, kinetic energy={:.5}",
            *frame,
            lowest.y,
            cloth.kinetic_energy()
        );
        exit.write(AppExit::Success);
    }
}

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 40.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(ClothPlugin::new(
            ClothDescriptor::default(),
            ClothParams::default(),
        ))
        .add_systems(FixedUpdate, gust_wind.before(cloth3d::solver::step_cloth))
        .add_systems(Update, report_and_exit)
        .run();
}
