//! Sequential-impulse contact solver.

use crate::collision::{CollisionInfo, PairKey};
use crate::config::PhysicsConfig;
use crate::objects::Entity;
use crate::world::entities::EntitySet;

/// A solid contact queued for resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactConstraint {
    pub key: PairKey,
    /// Positions of the two entities in the entity set's iteration order.
    pub index_a: usize,
    pub index_b: usize,
    /// Oriented from A to B. Its accumulated impulse is updated in place.
    pub info: CollisionInfo,
    /// Both colliders are circles, so angular response may apply.
    pub circles: bool,
}

/// Runs `config.solver_iterations` Gauss-Seidel passes over `contacts`.
/// No early exit: every pass visits every contact.
pub fn solve_contacts(
    entities: &mut EntitySet,
    contacts: &mut [ContactConstraint],
    config: &PhysicsConfig,
    dt: f64,
) {
    for _ in 0..config.solver_iterations {
        for contact in contacts.iter_mut() {
            let (entity_a, entity_b) = entities.pair_mut(contact.index_a, contact.index_b);
            apply_contact_impulse(entity_a, entity_b, contact, config, dt);
        }
    }
}

/// One impulse iteration for a single contact.
fn apply_contact_impulse(
    entity_a: &mut Entity,
    entity_b: &mut Entity,
    contact: &mut ContactConstraint,
    config: &PhysicsConfig,
    dt: f64,
) {
    let inv_mass_a = entity_a.inv_mass();
    let inv_mass_b = entity_b.inv_mass();
    let inv_mass_sum = inv_mass_a + inv_mass_b;
    if inv_mass_sum == 0.0 {
        return;
    }

    let normal = contact.info.normal;
    let velocity_along_normal = (entity_b.velocity() - entity_a.velocity()).dot(normal);

    // If objects are already moving apart, no impulse needed
    if velocity_along_normal >= 0.0 {
        return;
    }

    let mut restitution = entity_a.restitution().max(entity_b.restitution());
    if velocity_along_normal.abs() < config.restitution_slop {
        restitution = 0.0;
    }

    // Baumgarte: fold part of the remaining penetration into the target velocity.
    let bias = if restitution == 0.0 {
        (contact.info.penetration - config.penetration_slop).max(0.0) * config.baumgarte / dt
    } else {
        0.0
    };

    let jn = (-(1.0 + restitution) * velocity_along_normal + bias) / inv_mass_sum;

    // Clamp the running total, apply only the change.
    let previous = contact.info.accumulated_normal_impulse;
    let accumulated = (previous + jn).max(0.0);
    contact.info.accumulated_normal_impulse = accumulated;
    let impulse = normal * (accumulated - previous);

    let angular = config.angular_response && contact.circles;
    let point = contact.info.contact;

    if let Some(body_a) = entity_a.body.as_mut() {
        body_a.velocity -= impulse * inv_mass_a;
        if angular {
            let r_a = point - entity_a.position;
            body_a.angular_velocity -= r_a.cross(impulse) * body_a.inv_inertia();
        }
    }
    if let Some(body_b) = entity_b.body.as_mut() {
        body_b.velocity += impulse * inv_mass_b;
        if angular {
            let r_b = point - entity_b.position;
            body_b.angular_velocity += r_b.cross(impulse) * body_b.inv_inertia();
        }
    }
}
