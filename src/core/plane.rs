//! Static ground plane with restitution and Coulomb friction

use crate::config::constants;
use crate::error::ClothError;
use crate::math::{Point, Real, Vector, decompose, safe_normalize};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPlane {
    point: Point,
    normal: Vector,
    /// Fraction of normal speed kept after a bounce (0 = inelastic)
    pub restitution: Real,
    /// Dynamic friction coefficient scaling the normal impulse
    pub friction: Real,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self::new(
            constants::GROUND_POINT,
            constants::GROUND_NORMAL,
            constants::RESTITUTION,
            constants::DYNAMIC_FRICTION,
        )
    }
}

impl GroundPlane {
    /// `normal` is normalized here; a zero normal is caught by `validate`.
    pub fn new(point: Point, normal: Vector, restitution: Real, friction: Real) -> Self {
        Self {
            point,
            normal: safe_normalize(normal),
            restitution,
            friction,
        }
    }

    #[inline(always)]
    pub fn point(&self) -> Point {
        self.point
    }

    #[inline(always)]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if !self.point.is_finite() {
            return Err(ClothError::InvalidParams("ground plane point must be finite"));
        }
        if self.normal == Vector::ZERO {
            return Err(ClothError::InvalidParams("ground plane needs a non-zero normal"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ClothError::InvalidParams("restitution must lie in [0, 1]"));
        }
        if !(self.friction.is_finite() && self.friction >= 0.0) {
            return Err(ClothError::InvalidParams("friction must be non-negative"));
        }
        Ok(())
    }

    /// Signed distance from the plane, negative below it
    #[inline(always)]
    pub fn signed_distance(&self, position: Point) -> Real {
        (position - self.point).dot(self.normal)
    }

    /// Post-contact velocity for a particle at `position`, or `None` when there is
    /// no contact to resolve.
    ///
    /// Only particles below the plane and still moving into it receive an impulse.
    /// Position is never corrected, so a particle may rest slightly below the plane.
    pub fn resolve(&self, position: Point, velocity: Vector, mass: Real) -> Option<Vector> {
        if self.signed_distance(position) >= 0.0 {
            return None;
        }

        let (normal_velocity, tangent_velocity) = decompose(velocity, self.normal);
        let approach = velocity.dot(self.normal);
        if approach >= 0.0 {
            return None;
        }

        let normal_impulse = -(1.0 + self.restitution) * mass * approach;
        let mut impulse = normal_impulse * self.normal;

        let tangent_speed = tangent_velocity.length();
        if tangent_speed > 0.0 {
            // Coulomb: friction impulse bounded by what stops the sliding outright
            let friction_impulse = (self.friction * normal_impulse).min(mass * tangent_speed);
            impulse -= tangent_velocity / tangent_speed * friction_impulse;
        }

        let momentum = mass * (normal_velocity + tangent_velocity) + impulse;
        Some(momentum / mass)
    }
}
