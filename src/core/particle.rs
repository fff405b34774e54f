//! Point masses of the cloth grid
//!
//! Particles carry position, velocity, mass and the per-step accumulators.

use crate::core::plane::GroundPlane;
use crate::math::{Point, Real, Vector, inv_exact, safe_normalize, zero_vector};

/// Index-based handle into a mesh's particle storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

impl ParticleId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for ParticleId {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    index: u32,
    mass: Real,
    pub position: Point,
    pub velocity: Vector,
    acceleration: Vector,
    force: Vector,
    normal: Vector,
    fixed: bool,
}

impl Particle {
    pub fn new(index: usize, position: Point, mass: Real) -> Self {
        Self {
            index: index as u32,
            mass,
            position,
            velocity: zero_vector(),
            acceleration: zero_vector(),
            force: zero_vector(),
            normal: zero_vector(),
            fixed: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    #[inline(always)]
    pub fn id(&self) -> ParticleId {
        ParticleId(self.index)
    }

    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index as usize
    }

    #[inline(always)]
    pub fn mass(&self) -> Real {
        self.mass
    }

    #[inline(always)]
    pub fn acceleration(&self) -> Vector {
        self.acceleration
    }

    /// Force accumulated since the last integration step
    #[inline(always)]
    pub fn force(&self) -> Vector {
        self.force
    }

    #[inline(always)]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    #[inline(always)]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Pin this particle in place. Pinned particles ignore forces and integration.
    pub fn fixate(&mut self) {
        self.fixed = true;
        self.force = zero_vector();
        self.acceleration = zero_vector();
        self.velocity = zero_vector();
    }

    #[inline(always)]
    pub fn apply_force(&mut self, force: Vector) {
        if !self.fixed {
            self.force += force;
        }
    }

    /// Advance one semi-implicit Euler step, then resolve ground contact.
    pub fn integrate(&mut self, dt: Real, ground: &GroundPlane) {
        if self.fixed {
            return;
        }

        self.acceleration = self.force * inv_exact(self.mass);
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;

        if let Some(velocity) = ground.resolve(self.position, self.velocity, self.mass) {
            self.velocity = velocity;
        }

        self.force = zero_vector();
    }

    /// Move a pinned particle by `offset`. Free particles are left to the solver.
    pub fn translate_fixed(&mut self, offset: Vector) {
        if self.fixed {
            self.position += offset;
        }
    }

    #[inline(always)]
    pub fn reset_normal(&mut self) {
        self.normal = zero_vector();
    }

    #[inline(always)]
    pub fn add_normal(&mut self, normal: Vector) {
        self.normal += normal;
    }

    #[inline(always)]
    pub fn normalize_normal(&mut self) {
        self.normal = safe_normalize(self.normal);
    }

    #[inline(always)]
    pub fn kinetic_energy(&self) -> Real {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;

    fn far_ground() -> GroundPlane {
        GroundPlane::new(Vec3::new(0.0, -1.0e6, 0.0), Vec3::Y, 0.5, 0.75)
    }

    #[test]
    fn fixed_particle_discards_force() {
        let mut particle = Particle::new(0, Vec3::ONE, 1.0).fixed();
        particle.apply_force(Vec3::new(0.0, -100.0, 0.0));
        particle.integrate(0.01, &far_ground());

        assert_eq!(particle.position, Vec3::ONE);
        assert_eq!(particle.velocity, Vec3::ZERO);
        assert_eq!(particle.force(), Vec3::ZERO);
    }

    #[test]
    fn integrate_updates_velocity_before_position() {
        let mut particle = Particle::new(0, Vec3::ZERO, 2.0);
        particle.apply_force(Vec3::new(4.0, 0.0, 0.0));
        particle.integrate(0.5, &far_ground());

        assert_eq!(particle.acceleration(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(particle.velocity, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(particle.position, Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(particle.force(), Vec3::ZERO);
    }

    #[test]
    fn gravity_accumulates_linearly() {
        let ground = far_ground();
        let gravity = Vec3::new(0.0, -9.8, 0.0);
        let dt = 1.0 / 4000.0;
        let mut particle = Particle::new(0, Vec3::ZERO, 0.25);

        for _ in 0..100 {
            particle.apply_force(gravity * particle.mass());
            particle.integrate(dt, &ground);
        }

        let expected = gravity * dt * 100.0;
        assert!((particle.velocity - expected).length() < 1e-5);
    }

    #[test]
    fn translate_fixed_only_moves_pinned() {
        let mut pinned = Particle::new(0, Vec3::ZERO, 1.0).fixed();
        let mut free = Particle::new(1, Vec3::ZERO, 1.0);
        pinned.translate_fixed(Vec3::X);
        free.translate_fixed(Vec3::X);

        assert_eq!(pinned.position, Vec3::X);
        assert_eq!(free.position, Vec3::ZERO);
    }

    #[test]
    fn normal_accumulates_and_normalizes() {
        let mut particle = Particle::new(0, Vec3::ZERO, 1.0);
        particle.add_normal(Vec3::Z);
        particle.add_normal(Vec3::Z);
        particle.normalize_normal();
        assert_eq!(particle.normal(), Vec3::Z);

        particle.reset_normal();
        particle.normalize_normal();
        assert_eq!(particle.normal(), Vec3::ZERO);
    }
}
