//! Tunable parameters of the physics step.

use crate::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// Solver and broad-phase parameters.
///
/// Every field has a default, so a partial JSON/TOML document only needs to
/// name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Acceleration applied to every awake dynamic body each step.
    pub gravity: Vec2,
    /// Sequential-impulse passes over the contact list per step.
    pub solver_iterations: usize,
    /// Approach speeds below this are resolved without bounce.
    pub restitution_slop: f64,
    /// Penetration depth tolerated before the position bias kicks in.
    pub penetration_slop: f64,
    /// Fraction of the remaining penetration corrected per step.
    pub baumgarte: f64,
    /// Grid cell size used until the first adaptation.
    pub initial_cell_size: f64,
    /// Cell size as a multiple of the sampled collider extent.
    pub cell_size_factor: f64,
    /// Which collider extent (0..1 quantile) the cell size is derived from.
    pub cell_size_percentile: f64,
    /// Apply angular impulses for circle-circle contacts.
    pub angular_response: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::ZERO,
            solver_iterations: 6,
            restitution_slop: 0.5,
            penetration_slop: 0.01,
            baumgarte: 0.2,
            initial_cell_size: 100.0,
            cell_size_factor: 2.5,
            cell_size_percentile: 0.75,
            angular_response: false,
        }
    }
}

impl PhysicsConfig {
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Rejects values the step can't run with. Deserialized configs can hold
    /// anything, so `Physics::with_config` calls this first.
    pub fn validate(&self) -> Result<()> {
        if self.solver_iterations == 0 {
            return Err(PhysicsError::InvalidConfig {
                field: "solver_iterations",
                value: 0.0,
            });
        }
        check("gravity.x", self.gravity.x, f64::is_finite)?;
        check("gravity.y", self.gravity.y, f64::is_finite)?;
        check("initial_cell_size", self.initial_cell_size, positive)?;
        check("cell_size_factor", self.cell_size_factor, positive)?;
        check("cell_size_percentile", self.cell_size_percentile, |p| (0.0..=1.0).contains(&p))?;
        check("restitution_slop", self.restitution_slop, non_negative)?;
        check("penetration_slop", self.penetration_slop, non_negative)?;
        check("baumgarte", self.baumgarte, non_negative)?;
        Ok(())
    }
}

fn check(field: &'static str, value: f64, valid: impl Fn(f64) -> bool) -> Result<()> {
    if valid(value) {
        Ok(())
    } else {
        Err(PhysicsError::InvalidConfig { field, value })
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
