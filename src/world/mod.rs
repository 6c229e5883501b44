pub mod entities;
pub mod events;
pub mod physics;
pub mod solver;

pub use entities::{EntityId, EntitySet};
pub use events::{CollisionListener, Phase, PhysicsEvent};
pub use physics::Physics;
