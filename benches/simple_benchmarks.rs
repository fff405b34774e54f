/// Simple custom benchmarking without criterion
/// Avoids Windows MSVC linker issues with rayon/criterion
use std::time::Instant;
use bevy::prelude::*;
use cloth3d::{ClothDescriptor, ClothMesh, ClothParams};

fn time_it<F: FnMut()>(name: &str, iterations: usize, mut f: F) {
    // Warmup
    for _ in 0..5 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();

    let avg_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
    println!("{}: {:.3}ms avg ({} iterations)", name, avg_ms, iterations);
}

fn create_test_cloth(side: usize) -> ClothMesh {
    let descriptor = ClothDescriptor::new(1.0, 1.0, side, side, Vec3::new(-0.5, 2.0, 0.0), 1.0);
    match ClothMesh::new(&descriptor, ClothParams::default()) {
        Ok(mesh) => mesh,
        Err(err) => panic!("benchmark cloth {side}x{side} failed to build: {err}"),
    }
}

fn main() {
    println!("\n=== Cloth3D Benchmarks ===\n");

    println!("--- Construction ---");
    for &side in &[10, 21, 41, 81] {
        time_it(&format!("construct (n={}x{})", side, side), 20, || {
            let _ = create_test_cloth(side);
        });
    }

    println!("\n--- Force Accumulation ---");
    for &side in &[10, 21, 41, 81] {
        let mut cloth = create_test_cloth(side);
        let wind = Vec3::new(0.5, 0.0, 1.5);

        time_it(&format!("compute_forces (n={}x{})", side, side), 200, || {
            cloth.compute_forces(wind);
            cloth.integrate(cloth.params().substep_dt());
        });
    }

    println!("\n--- Full Frame (100 sub-steps) ---");
    for &side in &[10, 21, 41] {
        let mut cloth = create_test_cloth(side);
        let wind = Vec3::new(0.5, 0.0, 1.5);

        time_it(&format!("update (n={}x{})", side, side), 10, || {
            cloth.update(wind);
        });
    }

    println!("\n=== Benchmark Complete ===\n");
}
