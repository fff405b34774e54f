pub mod cloth_mesh;
pub mod particle;
pub mod plane;
pub mod spring;
pub mod triangle;

pub use cloth_mesh::{ClothDescriptor, ClothMesh};
pub use particle::{Particle, ParticleId};
pub use plane::GroundPlane;
pub use spring::SpringDamper;
pub use triangle::AeroTriangle;
