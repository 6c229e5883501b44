use crate::math::vec2::Vec2;

/// Stores information about a contact between two colliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Unit collision normal, pointing from the first entity towards the second.
    pub normal: Vec2,
    /// How deep the shapes overlap along the normal. Never negative.
    pub penetration: f64,
    /// Contact point in world coordinates.
    pub contact: Vec2,
    /// Normal impulse accumulated by the solver, carried across steps for
    /// warm starting. Never negative.
    pub accumulated_normal_impulse: f64,
}

impl CollisionInfo {
    /// The same contact seen from the second entity.
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            ..self
        }
    }
}

/// Narrow-phase result for an ordered pair of entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Either collider is a trigger: report the overlap, don't resolve it.
    pub is_trigger: bool,
    pub info: CollisionInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flipped_negates_only_normal() {
        let info = CollisionInfo {
            normal: Vec2::new(0.0, 1.0),
            penetration: 0.5,
            contact: Vec2::new(3.0, 4.0),
            accumulated_normal_impulse: 2.0,
        };
        let flipped = info.flipped();
        assert_eq!(flipped.normal, Vec2::new(0.0, -1.0));
        assert_eq!(flipped.penetration, 0.5);
        assert_eq!(flipped.contact, info.contact);
        assert_eq!(flipped.accumulated_normal_impulse, 2.0);
        assert_eq!(flipped.flipped(), info);
    }
}
