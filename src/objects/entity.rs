use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use crate::shapes::Collider;

/// A simulation object as seen by the physics core.
///
/// Without a body the entity is immovable geometry; without a collider it is
/// never part of collision detection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    pub position: Vec2,
    pub rotation: f64, // Radians
    pub body: Option<RigidBody>,
    pub collider: Option<Collider>,
}

impl Entity {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_body(mut self, body: RigidBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    /// 1 / mass of the body, 0 when there is no body or it is immovable.
    pub fn inv_mass(&self) -> f64 {
        self.body.as_ref().map_or(0.0, RigidBody::inv_mass)
    }

    pub fn inv_inertia(&self) -> f64 {
        self.body.as_ref().map_or(0.0, RigidBody::inv_inertia)
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.as_ref().map_or(Vec2::ZERO, |body| body.velocity)
    }

    pub fn restitution(&self) -> f64 {
        self.body.as_ref().map_or(0.0, |body| body.restitution)
    }

    /// Has a body that is currently simulated, whatever its mass. Body-less
    /// geometry is never awake.
    pub fn is_awake(&self) -> bool {
        self.body.as_ref().is_some_and(RigidBody::is_awake)
    }

    pub fn is_trigger(&self) -> bool {
        self.collider.as_ref().is_some_and(|collider| collider.is_trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_builder() {
        let entity = Entity::new(Vec2::new(1.0, 2.0))
            .with_rotation(0.5)
            .with_body(RigidBody::default())
            .with_collider(Collider::circle(1.0));
        assert_eq!(entity.position, Vec2::new(1.0, 2.0));
        assert_eq!(entity.rotation, 0.5);
        assert!(entity.body.is_some());
        assert!(entity.collider.is_some());
    }

    #[test]
    fn test_bodyless_entity_is_immovable() {
        let wall = Entity::new(Vec2::ZERO).with_collider(Collider::rect(10.0, 1.0));
        assert_eq!(wall.inv_mass(), 0.0);
        assert_eq!(wall.inv_inertia(), 0.0);
        assert_eq!(wall.velocity(), Vec2::ZERO);
        assert_eq!(wall.restitution(), 0.0);
        assert!(!wall.is_awake());
        assert!(!wall.is_trigger());
    }

    #[test]
    fn test_is_awake() {
        let mut ball = Entity::new(Vec2::ZERO).with_body(RigidBody::default());
        assert!(ball.is_awake());
        if let Some(body) = ball.body.as_mut() {
            body.sleep();
        }
        assert!(!ball.is_awake());

        // A moving platform is awake even though nothing can push it.
        let platform = Entity::new(Vec2::ZERO)
            .with_body(RigidBody::immovable().with_velocity(Vec2::new(0.0, -60.0)));
        assert!(platform.is_awake());
    }
}
