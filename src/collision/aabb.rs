// Defines an Axis-Aligned Bounding Box

use crate::error::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use crate::shapes::Collider;
use crate::world::EntityId;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        // Ensure min coordinates are <= max coordinates
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        AABB::new(center - half_extents, center + half_extents)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The larger of width and height; the sample used for grid sizing.
    pub fn largest_extent(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// World-space bounds of `collider` on an entity at `position`, offset included.
///
/// Fails for shapes with zero, negative or non-finite dimensions: those are
/// setup mistakes the grid can't index.
pub fn collider_bounds(id: EntityId, position: Vec2, collider: &Collider) -> Result<AABB> {
    collider
        .shape
        .validate()
        .map_err(|reason| PhysicsError::InvalidShape { entity: id, reason })?;
    Ok(AABB::from_center(
        collider.center(position),
        collider.shape.half_extents(),
    ))
}
