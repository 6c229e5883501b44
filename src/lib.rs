//! Impulse-based 2D physics: circle and box colliders, an adaptive spatial
//! grid for the broad phase, a warm-started sequential-impulse solver and
//! enter/stay/exit contact events.

pub mod collision;
pub mod config;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{CollisionInfo, AABB};
pub use config::PhysicsConfig;
pub use error::{PhysicsError, Result};
pub use math::vec2::Vec2;
pub use objects::{Entity, RigidBody};
pub use shapes::{BoxShape, Circle, Collider, Shape};
pub use world::{CollisionListener, EntityId, EntitySet, Phase, Physics, PhysicsEvent};
