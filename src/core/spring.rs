//! Damped linear springs between particle pairs

use crate::core::particle::{Particle, ParticleId};
use crate::math::{Real, Vector, safe_normalize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringDamper {
    pub a: ParticleId,
    pub b: ParticleId,
    pub spring_constant: Real,
    pub damping_constant: Real,
    rest_length: Real,
}

impl SpringDamper {
    pub fn new(
        a: ParticleId,
        b: ParticleId,
        spring_constant: Real,
        damping_constant: Real,
        rest_length: Real,
    ) -> Self {
        Self {
            a,
            b,
            spring_constant,
            damping_constant,
            rest_length,
        }
    }

    /// Build a spring whose rest length is the current distance between its ends
    pub fn at_rest(
        particles: &[Particle],
        a: ParticleId,
        b: ParticleId,
        spring_constant: Real,
        damping_constant: Real,
    ) -> Self {
        let rest_length = particles[a.index()]
            .position
            .distance(particles[b.index()].position);
        Self::new(a, b, spring_constant, damping_constant, rest_length)
    }

    #[inline(always)]
    pub fn rest_length(&self) -> Real {
        self.rest_length
    }

    /// Signed force magnitude along the unit axis from `b` to `a`.
    #[inline]
    pub fn force_magnitude(&self, particles: &[Particle]) -> (Real, Vector) {
        let p1 = &particles[self.a.index()];
        let p2 = &particles[self.b.index()];

        let delta = p1.position - p2.position;
        let length = delta.length();
        let axis = safe_normalize(delta);

        let closing_velocity = (p1.velocity - p2.velocity).dot(axis);
        let magnitude = -self.spring_constant * (length - self.rest_length)
            - self.damping_constant * closing_velocity;
        (magnitude, axis)
    }

    /// Compute the spring-damper force and apply it to both ends
    pub fn apply(&self, particles: &mut [Particle]) {
        let (magnitude, axis) = self.force_magnitude(particles);
        let force = magnitude * axis;
        particles[self.a.index()].apply_force(force);
        particles[self.b.index()].apply_force(-force);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;

    fn pair(distance: f32) -> Vec<Particle> {
        vec![
            Particle::new(0, Vec3::ZERO, 1.0),
            Particle::new(1, Vec3::new(distance, 0.0, 0.0), 1.0),
        ]
    }

    #[test]
    fn rest_length_matches_initial_distance() {
        let particles = pair(0.25);
        let spring = SpringDamper::at_rest(&particles, ParticleId(0), ParticleId(1), 5.0, 0.1);
        assert!((spring.rest_length() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn stretched_spring_pulls_ends_together() {
        let mut particles = pair(2.0);
        let spring = SpringDamper::new(ParticleId(0), ParticleId(1), 10.0, 0.0, 1.0);
        spring.apply(&mut particles);

        // Axis points from particle 1 to particle 0 (-X), stretch 1.0 -> |F| = 10
        assert!((particles[0].force() - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-5);
        assert!((particles[1].force() - Vec3::new(-10.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn damping_opposes_closing_velocity() {
        let mut particles = pair(1.0);
        particles[1].velocity = Vec3::new(-1.0, 0.0, 0.0);
        let spring = SpringDamper::new(ParticleId(0), ParticleId(1), 10.0, 2.0, 1.0);
        spring.apply(&mut particles);

        // Ends approach each other, damping pushes them apart
        assert!(particles[0].force().x < 0.0);
        assert!(particles[1].force().x > 0.0);
        assert!((particles[0].force() + particles[1].force()).length() < 1e-6);
    }

    #[test]
    fn coincident_ends_produce_no_nan() {
        let mut particles = pair(0.0);
        let spring = SpringDamper::new(ParticleId(0), ParticleId(1), 10.0, 1.0, 0.5);
        spring.apply(&mut particles);
        assert!(particles[0].force().is_finite());
        assert!(particles[1].force().is_finite());
    }
}
