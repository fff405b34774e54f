use bevy::log::{debug, info};
use bevy::prelude::*;

use crate::config::{ClothParams, constants};
use crate::error::ClothError;
use crate::math::{Point, Real, Vector};

use super::particle::{Particle, ParticleId};
use super::spring::SpringDamper;
use super::triangle::AeroTriangle;

/// Construction inputs for a rectangular cloth hanging from its top row.
#[derive(Clone, Debug, PartialEq)]
pub struct ClothDescriptor {
    /// Physical extent along the rows (downwards)
    pub length: Real,
    /// Physical extent along the columns (to the right)
    pub width: Real,
    pub rows: usize,
    pub columns: usize,
    /// Position of the top-left particle
    pub anchor: Point,
    pub total_mass: Real,
    /// Reserved for randomized initial positions; currently has no effect.
    pub jitter: Real,
}

impl Default for ClothDescriptor {
    fn default() -> Self {
        Self {
            length: 1.0,
            width: 1.0,
            rows: 21,
            columns: 21,
            anchor: Vec3::new(-0.5, 2.0, 0.0),
            total_mass: 1.0,
            jitter: 0.0,
        }
    }
}

impl ClothDescriptor {
    pub fn new(
        length: Real,
        width: Real,
        rows: usize,
        columns: usize,
        anchor: Point,
        total_mass: Real,
    ) -> Self {
        Self {
            length,
            width,
            rows,
            columns,
            anchor,
            total_mass,
            jitter: 0.0,
        }
    }

    pub fn with_jitter(mut self, jitter: Real) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn particle_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        // Particle handles and renderer indices are u32
        let fits_u32 = self
            .rows
            .checked_mul(self.columns)
            .is_some_and(|count| count <= u32::MAX as usize);
        if self.rows < 2 || self.columns < 2 || !fits_u32 {
            return Err(ClothError::InvalidGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if !(self.total_mass.is_finite() && self.total_mass > 0.0) {
            return Err(ClothError::NonPositiveMass(self.total_mass));
        }
        let extent_ok = |e: Real| e.is_finite() && e > 0.0;
        if !extent_ok(self.length) || !extent_ok(self.width) {
            return Err(ClothError::NonPositiveExtent {
                length: self.length,
                width: self.width,
            });
        }
        if !self.anchor.is_finite() {
            return Err(ClothError::InvalidParams("anchor must be finite"));
        }
        Ok(())
    }

    /// Rest position of the particle at `(row, column)`
    #[inline]
    pub fn grid_position(&self, row: usize, column: usize) -> Point {
        let row_spacing = self.length / self.rows as Real;
        let column_spacing = self.width / self.columns as Real;
        self.anchor
            + row as Real * row_spacing * constants::DOWN
            + column as Real * column_spacing * constants::RIGHT
    }
}

/// A spring-mass cloth: particles, the springs and facets referencing them by
/// index, and the buffers handed to a renderer.
#[derive(Resource, Clone, Debug)]
pub struct ClothMesh {
    rows: usize,
    columns: usize,
    particles: Vec<Particle>,
    springs: Vec<SpringDamper>,
    triangles: Vec<AeroTriangle>,
    indices: Vec<u32>,
    positions: Vec<Point>,
    normals: Vec<Vector>,
    params: ClothParams,
}

impl ClothMesh {
    /// Build a cloth grid. Fails on grids smaller than 2x2 or non-positive
    /// mass/extent; `jitter` is accepted but ignored.
    pub fn construct(
        length: Real,
        width: Real,
        rows: usize,
        columns: usize,
        anchor: Point,
        total_mass: Real,
        jitter: Real,
    ) -> Result<Self, ClothError> {
        let descriptor = ClothDescriptor::new(length, width, rows, columns, anchor, total_mass)
            .with_jitter(jitter);
        Self::new(&descriptor, ClothParams::default())
    }

    pub fn new(descriptor: &ClothDescriptor, params: ClothParams) -> Result<Self, ClothError> {
        descriptor.validate()?;
        params.validate()?;

        let rows = descriptor.rows;
        let columns = descriptor.columns;
        let particle_mass = descriptor.total_mass / descriptor.particle_count() as Real;

        let mut particles = Vec::with_capacity(descriptor.particle_count());
        for row in 0..rows {
            for column in 0..columns {
                let index = row * columns + column;
                let particle = Particle::new(
                    index,
                    descriptor.grid_position(row, column),
                    particle_mass,
                );
                particles.push(if row == 0 { particle.fixed() } else { particle });
            }
        }

        let id = |row: usize, column: usize| ParticleId::from(row * columns + column);

        let mut springs = Vec::with_capacity(4 * particles.len());
        for row in 0..rows {
            for column in 0..columns {
                let here = id(row, column);
                let below = row + 1 < rows;
                let right = column + 1 < columns;

                let mut neighbors = Vec::with_capacity(4);
                if below {
                    neighbors.push(id(row + 1, column));
                }
                if below && right {
                    neighbors.push(id(row + 1, column + 1));
                }
                if right {
                    neighbors.push(id(row, column + 1));
                }
                if row > 0 && right {
                    neighbors.push(id(row - 1, column + 1));
                }

                springs.extend(neighbors.into_iter().map(|other| {
                    SpringDamper::at_rest(
                        &particles,
                        here,
                        other,
                        params.spring_constant,
                        params.damping_constant,
                    )
                }));
            }
        }

        let cells = (rows - 1) * (columns - 1);
        let mut triangles = Vec::with_capacity(2 * cells);
        let mut indices = Vec::with_capacity(6 * cells);
        for row in 0..rows - 1 {
            for column in 0..columns - 1 {
                let top_left = id(row, column);
                let bottom_left = id(row + 1, column);
                let bottom_right = id(row + 1, column + 1);
                let top_right = id(row, column + 1);

                for vertices in [
                    [top_left, bottom_left, bottom_right],
                    [top_left, bottom_right, top_right],
                ] {
                    triangles.push(AeroTriangle::new(
                        vertices,
                        params.fluid_density,
                        params.drag_coefficient,
                    ));
                    indices.extend(vertices.map(|v| v.0));
                }
            }
        }

        let mut mesh = Self {
            rows,
            columns,
            positions: Vec::with_capacity(particles.len()),
            normals: Vec::with_capacity(particles.len()),
            particles,
            springs,
            triangles,
            indices,
            params,
        };
        mesh.recompute_normals();

        info!(
            "Built {}x{} cloth: {} particles, {} springs, {} triangles",
            rows,
            columns,
            mesh.particles.len(),
            mesh.springs.len(),
            mesh.triangles.len()
        );

        Ok(mesh)
    }

    /// Assemble a mesh from an arbitrary particle/spring/facet graph.
    ///
    /// Particles are re-indexed to their position in `particles`. The result is
    /// laid out as a single row.
    pub fn from_parts(
        particles: Vec<Particle>,
        springs: Vec<SpringDamper>,
        triangles: Vec<AeroTriangle>,
        params: ClothParams,
    ) -> Result<Self, ClothError> {
        params.validate()?;

        let count = particles.len();
        for particle in &particles {
            if !(particle.mass().is_finite() && particle.mass() > 0.0) {
                return Err(ClothError::NonPositiveMass(particle.mass()));
            }
        }

        let check = |id: ParticleId| {
            if id.index() < count {
                Ok(())
            } else {
                Err(ClothError::InvalidParticleHandle {
                    index: id.index(),
                    count,
                })
            }
        };

        for spring in &springs {
            check(spring.a)?;
            check(spring.b)?;
            if spring.a == spring.b {
                return Err(ClothError::DegenerateSpring {
                    a: spring.a.index(),
                    b: spring.b.index(),
                });
            }
        }

        let mut indices = Vec::with_capacity(3 * triangles.len());
        for triangle in &triangles {
            for id in triangle.vertices {
                check(id)?;
                indices.push(id.0);
            }
        }

        let particles: Vec<Particle> = particles
            .into_iter()
            .enumerate()
            .map(|(index, particle)| {
                let mut reindexed = Particle::new(index, particle.position, particle.mass())
                    .with_velocity(particle.velocity);
                if particle.is_fixed() {
                    reindexed.fixate();
                }
                reindexed
            })
            .collect();

        let mut mesh = Self {
            rows: 1,
            columns: count,
            positions: Vec::with_capacity(count),
            normals: Vec::with_capacity(count),
            particles,
            springs,
            triangles,
            indices,
            params,
        };
        mesh.recompute_normals();
        Ok(mesh)
    }

    /// Advance one external frame with the given wind velocity.
    ///
    /// Runs `params.substeps` rounds of force accumulation and integration,
    /// then rebuilds vertex normals and the renderer buffers.
    pub fn update(&mut self, wind: Vector) {
        let dt = self.params.substep_dt();
        for _ in 0..self.params.substeps {
            self.compute_forces(wind);
            self.integrate(dt);
        }
        self.recompute_normals();
    }

    /// Accumulate gravity, spring-damper and drag forces for one sub-step
    pub fn compute_forces(&mut self, wind: Vector) {
        let gravity = self.params.gravity;
        for particle in self.particles.iter_mut() {
            let weight = gravity * particle.mass();
            particle.apply_force(weight);
        }

        for spring in &self.springs {
            spring.apply(&mut self.particles);
        }

        for triangle in &self.triangles {
            triangle.apply(&mut self.particles, wind);
        }
    }

    /// Integrate every particle by `dt`, resolving ground contact and draining
    /// the force accumulators.
    pub fn integrate(&mut self, dt: Real) {
        let ground = self.params.ground;
        for particle in self.particles.iter_mut() {
            particle.integrate(dt, &ground);
        }
    }

    /// Average adjacent facet normals into per-vertex normals and refresh the
    /// position/normal buffers.
    pub fn recompute_normals(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.reset_normal();
        }
        for triangle in &self.triangles {
            triangle.accumulate_normal(&mut self.particles);
        }

        self.positions.clear();
        self.normals.clear();
        for particle in self.particles.iter_mut() {
            particle.normalize_normal();
            self.positions.push(particle.position);
            self.normals.push(particle.normal());
        }
    }

    /// Move every pinned particle by `offset`
    pub fn translate_fixed(&mut self, offset: Vector) {
        for particle in self.particles.iter_mut() {
            particle.translate_fixed(offset);
        }
        self.recompute_normals();
        debug!("Moved pinned particles by {:?}", offset);
    }

    /// Particle positions, index-aligned with construction order
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Vertex normals, index-aligned with `positions`
    pub fn normals(&self) -> &[Vector] {
        &self.normals
    }

    /// Triangle list for the renderer, three particle indices per facet
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.index())
    }

    pub fn springs(&self) -> &[SpringDamper] {
        &self.springs
    }

    pub fn triangles(&self) -> &[AeroTriangle] {
        &self.triangles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn params(&self) -> &ClothParams {
        &self.params
    }

    pub fn kinetic_energy(&self) -> Real {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Fastest particle speed
    pub fn max_speed(&self) -> Real {
        self.particles
            .iter()
            .map(|particle| particle.velocity.length())
            .fold(0.0, Real::max)
    }

    /// Position of the particle closest to the ground (smallest height along
    /// the ground normal)
    pub fn lowest_point(&self) -> Option<Point> {
        let ground = &self.params.ground;
        self.particles
            .iter()
            .map(|particle| particle.position)
            .min_by(|a, b| ground.signed_distance(*a).total_cmp(&ground.signed_distance(*b)))
    }
}
