//! Error type shared by the physics core.

use crate::world::EntityId;
use thiserror::Error;

/// Configuration errors. Runtime geometry never produces these; they point at
/// a body or collider that was set up with values the engine cannot simulate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("entity {entity}: unsupported collider shape ({reason})")]
    InvalidShape { entity: EntityId, reason: String },

    #[error("invalid mass {0}: must be positive or +infinity")]
    InvalidMass(f64),

    #[error("invalid inertia {0}: must be positive or +infinity")]
    InvalidInertia(f64),

    #[error("invalid time step {0}: must be finite and positive")]
    InvalidTimeStep(f64),

    #[error("invalid config: {field} = {value} is out of range")]
    InvalidConfig { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, PhysicsError>;
