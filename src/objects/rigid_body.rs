use crate::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;

/// Dynamics state of a single entity.
///
/// `mass` and `inertia` are either finite and positive or `f64::INFINITY`
/// (immovable). Forces and torque accumulate between steps and are cleared by
/// the force integration of every step.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub velocity: Vec2,
    pub angular_velocity: f64, // Radians per second

    pub mass: f64,
    pub inertia: f64,

    // Accumulators for forces/torques applied during a time step
    pub force: Vec2,
    pub torque: f64,

    /// Bounciness in `0..=1`.
    pub restitution: f64,

    /// Linear and angular speed below which the body counts as at rest.
    /// A threshold of zero disables sleeping.
    pub sleep_threshold: f64,
    /// Seconds a body has to stay at rest before it falls asleep.
    pub sleep_time_threshold: f64,
    pub is_sleeping: bool,
    pub sleep_timer: f64,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            mass: 1.0,
            inertia: 1.0,
            force: Vec2::ZERO,
            torque: 0.0,
            restitution: 0.0,
            sleep_threshold: 1.0,
            sleep_time_threshold: 0.5,
            is_sleeping: false,
            sleep_timer: 0.0,
        }
    }
}

impl RigidBody {
    /// Creates a dynamic body with the given mass and unit inertia.
    pub fn new(mass: f64) -> Result<Self> {
        Ok(Self {
            mass: validate_mass(mass)?,
            ..Self::default()
        })
    }

    /// Creates a body that no impulse or force can move.
    pub fn immovable() -> Self {
        Self {
            mass: f64::INFINITY,
            inertia: f64::INFINITY,
            ..Self::default()
        }
    }

    pub fn with_inertia(mut self, inertia: f64) -> Result<Self> {
        self.inertia = validate_inertia(inertia)?;
        Ok(self)
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Restitution is clamped to `0..=1`.
    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }

    pub fn with_sleep_threshold(mut self, speed: f64, seconds: f64) -> Self {
        self.sleep_threshold = speed;
        self.sleep_time_threshold = seconds;
        self
    }

    /// Checks the mass/inertia invariant on a body whose fields were written directly.
    pub fn validate(&self) -> Result<()> {
        validate_mass(self.mass)?;
        validate_inertia(self.inertia)?;
        Ok(())
    }

    /// 1 / mass, or 0 for an immovable body.
    pub fn inv_mass(&self) -> f64 {
        inverse(self.mass)
    }

    /// 1 / inertia, or 0 for a body that can't be rotated.
    pub fn inv_inertia(&self) -> f64 {
        inverse(self.inertia)
    }

    /// Finite mass: impulses and gravity move this body.
    pub fn is_dynamic(&self) -> bool {
        self.mass.is_finite()
    }

    pub fn is_awake(&self) -> bool {
        !self.is_sleeping
    }

    pub fn wake(&mut self) {
        self.is_sleeping = false;
        self.sleep_timer = 0.0;
    }

    /// Puts the body to sleep and stops it.
    pub fn sleep(&mut self) {
        self.is_sleeping = true;
        self.velocity = Vec2::ZERO;
        self.angular_velocity = 0.0;
    }

    /// Applies a force at the center of mass.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn apply_torque(&mut self, torque: f64) {
        self.torque += torque;
    }

    /// Applies a force at a world-space point of a body whose center of mass is `center`.
    /// This generates both linear force and torque.
    pub fn apply_force_at_point(&mut self, force: Vec2, point: Vec2, center: Vec2) {
        self.force += force;
        self.torque += (point - center).cross(force);
    }

    pub fn has_pending_force(&self) -> bool {
        !self.force.is_zero() || self.torque != 0.0
    }

    /// Should typically be called after integration in each simulation step.
    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.torque = 0.0;
    }
}

fn inverse(value: f64) -> f64 {
    if value.is_finite() {
        1.0 / value
    } else {
        0.0
    }
}

fn validate_mass(mass: f64) -> Result<f64> {
    if mass > 0.0 {
        Ok(mass)
    } else {
        Err(PhysicsError::InvalidMass(mass))
    }
}

fn validate_inertia(inertia: f64) -> Result<f64> {
    if inertia > 0.0 {
        Ok(inertia)
    } else {
        Err(PhysicsError::InvalidInertia(inertia))
    }
}
