use crate::math::vec2::Vec2;
use crate::objects::{Entity, RigidBody};

/// Velocity half of the semi-implicit Euler step, run before collision detection.
///
/// A pending force or torque wakes a sleeping body; bodies that stay asleep
/// are skipped. Gravity only accelerates dynamic bodies. The force and torque
/// accumulators are cleared afterwards: forces are re-applied every frame by
/// whoever owns the body.
pub fn integrate_forces(body: &mut RigidBody, gravity: Vec2, dt: f64) {
    if body.has_pending_force() && body.is_sleeping {
        body.wake();
    }
    if body.is_sleeping {
        return;
    }

    // --- Linear Motion --- //
    let mut acceleration = body.force * body.inv_mass();
    if body.is_dynamic() {
        acceleration += gravity;
    }
    body.velocity += acceleration * dt;

    // --- Angular Motion --- //
    body.angular_velocity += body.torque * body.inv_inertia() * dt;

    body.clear_accumulators();
}

/// Position half of the step, run after the contact solver. Also advances
/// the entity's sleep timer.
pub fn integrate_position(entity: &mut Entity, dt: f64) {
    let Some(body) = entity.body.as_mut() else {
        return;
    };
    if body.is_sleeping {
        return;
    }

    entity.position += body.velocity * dt;
    entity.rotation += body.angular_velocity * dt;

    update_sleep(body, dt);
}

/// A body that keeps both its linear and angular speed under its sleep
/// threshold for longer than its sleep time falls asleep with zeroed velocity.
pub fn update_sleep(body: &mut RigidBody, dt: f64) {
    let at_rest = body.velocity.magnitude() < body.sleep_threshold
        && body.angular_velocity.abs() < body.sleep_threshold;

    if at_rest {
        body.sleep_timer += dt;
        if body.sleep_timer > body.sleep_time_threshold {
            body.sleep();
        }
    } else {
        body.sleep_timer = 0.0;
    }
}
