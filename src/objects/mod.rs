pub mod entity;
pub mod rigid_body;

pub use entity::Entity;
pub use rigid_body::RigidBody;
