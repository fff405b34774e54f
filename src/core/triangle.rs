//! Triangular facets: flat-plate aerodynamic drag and vertex normals
//!
//! Winding `(p1, p2, p3)` fixes the face normal as `(p2 - p1) x (p3 - p1)`.
//! Grid triangles are all emitted with the same winding so normals agree
//! across the mesh.

use crate::core::particle::{Particle, ParticleId};
use crate::math::{Real, Vector, triangle_area_normal};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AeroTriangle {
    pub vertices: [ParticleId; 3],
    pub fluid_density: Real,
    pub drag_coefficient: Real,
}

impl AeroTriangle {
    pub fn new(
        vertices: [ParticleId; 3],
        fluid_density: Real,
        drag_coefficient: Real,
    ) -> Self {
        Self {
            vertices,
            fluid_density,
            drag_coefficient,
        }
    }

    /// Area and unit face normal from current positions
    #[inline]
    pub fn area_normal(&self, particles: &[Particle]) -> (Real, Vector) {
        let [p1, p2, p3] = self.vertices.map(|id| particles[id.index()].position);
        triangle_area_normal(p1, p2, p3)
    }

    #[inline]
    pub fn normal(&self, particles: &[Particle]) -> Vector {
        self.area_normal(particles).1
    }

    /// Mean velocity of the three corners
    #[inline]
    pub fn surface_velocity(&self, particles: &[Particle]) -> Vector {
        self.vertices
            .iter()
            .map(|id| particles[id.index()].velocity)
            .sum::<Vector>()
            / 3.0
    }

    /// Drag force acting on the whole facet for the given wind velocity.
    ///
    /// The sign of `v_rel . n` carries through the cross-sectional area, so the
    /// force flips when the flow passes through the other side of the facet.
    pub fn drag_force(&self, particles: &[Particle], wind: Vector) -> Vector {
        let relative_velocity = self.surface_velocity(particles) - wind;
        let (area, normal) = self.area_normal(particles);
        let cross_area = area * relative_velocity.dot(normal);

        -0.5 * self.fluid_density
            * relative_velocity.length_squared()
            * self.drag_coefficient
            * cross_area
            * normal
    }

    /// Compute aerodynamic drag and split it evenly over the three corners
    pub fn apply(&self, particles: &mut [Particle], wind: Vector) {
        let share = self.drag_force(particles, wind) / 3.0;
        for id in self.vertices {
            particles[id.index()].apply_force(share);
        }
    }

    /// Add this facet's normal into its corners' accumulators
    pub fn accumulate_normal(&self, particles: &mut [Particle]) {
        let normal = self.normal(particles);
        for id in self.vertices {
            particles[id.index()].add_normal(normal);
        }
    }
}
