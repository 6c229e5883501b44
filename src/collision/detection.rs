use crate::math::vec2::Vec2;
use crate::objects::Entity;
use crate::shapes::{BoxShape, Circle, Shape};
use super::manifold::{CollisionInfo, Contact};

/// Narrow-phase test between two entities.
///
/// Returns `None` when either entity has no collider, when the layer masks
/// exclude each other, or when the shapes don't overlap. The returned normal
/// points from `entity_a` towards `entity_b`, and the accumulated impulse
/// starts at `warm_impulse` (the pair's value from the previous step).
pub fn check_collision(entity_a: &Entity, entity_b: &Entity, warm_impulse: f64) -> Option<Contact> {
    let collider_a = entity_a.collider.as_ref()?;
    let collider_b = entity_b.collider.as_ref()?;

    if !collider_a.interacts_with(collider_b) {
        return None;
    }
    let is_trigger = collider_a.is_trigger || collider_b.is_trigger;

    let center_a = collider_a.center(entity_a.position);
    let center_b = collider_b.center(entity_b.position);

    let info = match (&collider_a.shape, &collider_b.shape) {
        (Shape::Circle(circle_a), Shape::Circle(circle_b)) => {
            check_circle_circle(center_a, circle_a, center_b, circle_b)
        }
        (Shape::Box(box_a), Shape::Box(box_b)) => check_box_box(center_a, box_a, center_b, box_b),
        (Shape::Circle(circle), Shape::Box(rect)) => check_circle_box(center_a, circle, center_b, rect),
        (Shape::Box(rect), Shape::Circle(circle)) => {
            check_circle_box(center_b, circle, center_a, rect).map(CollisionInfo::flipped)
        }
    }?;

    Some(Contact {
        is_trigger,
        info: CollisionInfo {
            accumulated_normal_impulse: warm_impulse,
            ..info
        },
    })
}

/// Checks for collision between two circles given their world-space centres.
pub fn check_circle_circle(
    center_a: Vec2,
    circle_a: &Circle,
    center_b: Vec2,
    circle_b: &Circle,
) -> Option<CollisionInfo> {
    let dist_vec = center_b - center_a;
    let distance = dist_vec.magnitude();
    let radii_sum = circle_a.radius + circle_b.radius;

    if distance >= radii_sum {
        return None;
    }

    let normal = if distance > 0.0 {
        dist_vec / distance
    } else {
        // Circles are exactly on top of each other, choose an arbitrary normal
        Vec2::RIGHT
    };

    Some(CollisionInfo {
        normal,
        penetration: radii_sum - distance,
        contact: center_a + normal * circle_a.radius,
        accumulated_normal_impulse: 0.0,
    })
}

/// Checks for overlap between two axis-aligned boxes.
///
/// The axis with the smaller overlap separates them; equal overlaps resolve
/// along Y.
pub fn check_box_box(
    center_a: Vec2,
    box_a: &BoxShape,
    center_b: Vec2,
    box_b: &BoxShape,
) -> Option<CollisionInfo> {
    let half_a = box_a.half_extents();
    let half_b = box_b.half_extents();
    let delta = center_b - center_a;

    let overlap_x = half_a.x + half_b.x - delta.x.abs();
    let overlap_y = half_a.y + half_b.y - delta.y.abs();
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return None;
    }

    // Centre of the region both boxes cover. On the non-separating axis this
    // point never lies on the far side of A's centre from B.
    let contact = Vec2::new(
        overlap_center(center_a.x, half_a.x, center_b.x, half_b.x),
        overlap_center(center_a.y, half_a.y, center_b.y, half_b.y),
    );

    let (normal, penetration) = if overlap_x < overlap_y {
        (Vec2::new(axis_sign(delta.x), 0.0), overlap_x)
    } else {
        (Vec2::new(0.0, axis_sign(delta.y)), overlap_y)
    };

    Some(CollisionInfo {
        normal,
        penetration,
        contact,
        accumulated_normal_impulse: 0.0,
    })
}

/// Checks for collision between a circle and an axis-aligned box.
/// The normal points from the circle towards the box.
pub fn check_circle_box(
    circle_center: Vec2,
    circle: &Circle,
    box_center: Vec2,
    rect: &BoxShape,
) -> Option<CollisionInfo> {
    let half = rect.half_extents();
    let delta = circle_center - box_center;

    if delta.x.abs() <= half.x && delta.y.abs() <= half.y {
        // Centre inside the box: push out through the nearest face.
        let margin_x = half.x - delta.x.abs();
        let margin_y = half.y - delta.y.abs();
        let (outward, margin, contact) = if margin_x < margin_y {
            let sign = axis_sign(delta.x);
            (
                Vec2::new(sign, 0.0),
                margin_x,
                Vec2::new(box_center.x + sign * half.x, circle_center.y),
            )
        } else {
            let sign = axis_sign(delta.y);
            (
                Vec2::new(0.0, sign),
                margin_y,
                Vec2::new(circle_center.x, box_center.y + sign * half.y),
            )
        };
        return Some(CollisionInfo {
            normal: -outward,
            penetration: circle.radius + margin,
            contact,
            accumulated_normal_impulse: 0.0,
        });
    }

    let closest = Vec2::new(
        circle_center.x.clamp(box_center.x - half.x, box_center.x + half.x),
        circle_center.y.clamp(box_center.y - half.y, box_center.y + half.y),
    );
    let offset = circle_center - closest;
    let dist_sq = offset.magnitude_squared();
    if dist_sq >= circle.radius * circle.radius {
        return None;
    }

    // The centre is outside the box, so the closest point is strictly apart from it.
    let distance = dist_sq.sqrt();
    Some(CollisionInfo {
        normal: -(offset / distance),
        penetration: circle.radius - distance,
        contact: closest,
        accumulated_normal_impulse: 0.0,
    })
}

/// +1 for non-negative deltas, -1 otherwise. Coincident centres resolve
/// towards the positive axis.
fn axis_sign(delta: f64) -> f64 {
    if delta < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn overlap_center(center_a: f64, half_a: f64, center_b: f64, half_b: f64) -> f64 {
    let low = (center_a - half_a).max(center_b - half_b);
    let high = (center_a + half_a).min(center_b + half_b);
    (low + high) * 0.5
}
