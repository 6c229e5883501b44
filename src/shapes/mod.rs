pub mod circle;
pub mod rect;

pub use circle::Circle;
pub use rect::BoxShape;

use crate::math::vec2::Vec2;

/// Geometric shape of a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Box(BoxShape),
}

impl Shape {
    /// Half width and half height of the shape's axis-aligned bounds.
    pub fn half_extents(&self) -> Vec2 {
        match self {
            Shape::Circle(circle) => Vec2::new(circle.radius, circle.radius),
            Shape::Box(rect) => rect.half_extents(),
        }
    }

    /// Describes why the shape cannot be simulated, if it can't.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Shape::Circle(circle) if !circle.is_valid() => {
                Err(format!("circle radius {} must be finite and positive", circle.radius))
            }
            Shape::Box(rect) if !rect.is_valid() => Err(format!(
                "box size {}x{} must be finite and positive",
                rect.width, rect.height
            )),
            _ => Ok(()),
        }
    }
}

/// Layer bit every collider belongs to unless told otherwise.
pub const DEFAULT_LAYER: u32 = 1;
/// Mask that interacts with every layer.
pub const ALL_LAYERS: u32 = u32::MAX;

/// Shape plus filtering data attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub shape: Shape,
    /// Offset from the owning entity's position. Not rotated with the entity.
    pub offset: Vec2,
    /// Triggers report overlaps but are never resolved by the solver.
    pub is_trigger: bool,
    /// Layers this collider belongs to.
    pub layer: u32,
    /// Layers this collider interacts with.
    pub mask: u32,
}

impl Collider {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            offset: Vec2::ZERO,
            is_trigger: false,
            layer: DEFAULT_LAYER,
            mask: ALL_LAYERS,
        }
    }

    pub fn circle(radius: f64) -> Self {
        Self::new(Shape::Circle(Circle::new(radius)))
    }

    pub fn rect(width: f64, height: f64) -> Self {
        Self::new(Shape::Box(BoxShape::new(width, height)))
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    pub fn with_layer(mut self, layer: u32) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_mask(mut self, mask: u32) -> Self {
        self.mask = mask;
        self
    }

    /// Both masks have to accept the other collider's layer.
    pub fn interacts_with(&self, other: &Collider) -> bool {
        (self.mask & other.layer) != 0 && (other.mask & self.layer) != 0
    }

    /// World-space centre of the shape for an entity at `position`.
    pub fn center(&self, position: Vec2) -> Vec2 {
        position + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: u32 = 1 << 1;
    const ENEMY: u32 = 1 << 2;

    #[test]
    fn test_collider_defaults() {
        let collider = Collider::circle(2.0);
        assert_eq!(collider.shape, Shape::Circle(Circle::new(2.0)));
        assert_eq!(collider.offset, Vec2::ZERO);
        assert!(!collider.is_trigger);
        assert_eq!(collider.layer, DEFAULT_LAYER);
        assert_eq!(collider.mask, ALL_LAYERS);
    }

    #[test]
    fn test_interacts_with_requires_both_masks() {
        let player = Collider::circle(1.0).with_layer(PLAYER).with_mask(ENEMY);
        let enemy = Collider::circle(1.0).with_layer(ENEMY).with_mask(PLAYER);
        let ghost = Collider::circle(1.0).with_layer(ENEMY).with_mask(0);

        assert!(player.interacts_with(&enemy));
        assert!(enemy.interacts_with(&player));
        // The ghost's mask rejects the player even though the player accepts enemies.
        assert!(!player.interacts_with(&ghost));
        assert!(!ghost.interacts_with(&player));
    }

    #[test]
    fn test_half_extents_and_center() {
        let circle = Collider::circle(3.0).with_offset(Vec2::new(1.0, -1.0));
        assert_eq!(circle.shape.half_extents(), Vec2::new(3.0, 3.0));
        assert_eq!(circle.center(Vec2::new(10.0, 10.0)), Vec2::new(11.0, 9.0));

        let rect = Collider::rect(4.0, 2.0).as_trigger();
        assert!(rect.is_trigger);
        assert_eq!(rect.shape.half_extents(), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_validate() {
        assert!(Collider::circle(1.0).shape.validate().is_ok());
        assert!(Collider::circle(0.0).shape.validate().is_err());
        assert!(Collider::rect(1.0, f64::NAN).shape.validate().is_err());
    }
}
