use crate::math::vec2::Vec2;

/// Axis-aligned box, centred on its collider's origin. Never rotated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub width: f64,
    pub height: f64,
}

impl BoxShape {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_half_extents() {
        let b = BoxShape::new(600.0, 80.0);
        assert_eq!(b.half_extents(), Vec2::new(300.0, 40.0));
        assert!(b.is_valid());
    }

    #[test]
    fn test_box_degenerate_dimensions() {
        assert!(!BoxShape::new(0.0, 1.0).is_valid());
        assert!(!BoxShape::new(1.0, -2.0).is_valid());
        assert!(!BoxShape::new(f64::INFINITY, 1.0).is_valid());
    }
}
