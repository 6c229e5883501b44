//! Collision and trigger lifecycle events.
//!
//! The step records events into a queue instead of calling back into game
//! code. The owner drains the queue after `update` returns, either by hand or
//! through a [`CollisionListener`].

use crate::collision::CollisionInfo;
use crate::world::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// First step the pair touches.
    Enter,
    /// The pair touched in the previous step as well.
    Stay,
    /// The pair touched in the previous step but not in this one.
    Exit,
}

/// One side of a pair event, addressed to `entity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsEvent {
    /// Solid contact. `info.normal` points away from `entity`, towards `other`.
    Collision {
        phase: Phase,
        entity: EntityId,
        other: EntityId,
        info: CollisionInfo,
    },
    /// Overlap involving at least one trigger collider.
    Trigger {
        phase: Phase,
        entity: EntityId,
        other: EntityId,
    },
}

impl PhysicsEvent {
    pub fn phase(&self) -> Phase {
        match *self {
            PhysicsEvent::Collision { phase, .. } | PhysicsEvent::Trigger { phase, .. } => phase,
        }
    }

    /// The entity this event is addressed to.
    pub fn entity(&self) -> EntityId {
        match *self {
            PhysicsEvent::Collision { entity, .. } | PhysicsEvent::Trigger { entity, .. } => entity,
        }
    }

    pub fn other(&self) -> EntityId {
        match *self {
            PhysicsEvent::Collision { other, .. } | PhysicsEvent::Trigger { other, .. } => other,
        }
    }

    pub fn is_trigger(&self) -> bool {
        matches!(self, PhysicsEvent::Trigger { .. })
    }
}

/// Pushes the events for both sides of a pair. `info` is oriented from `a`
/// to `b`; `b` receives it with the normal negated.
pub(crate) fn push_pair_events(
    queue: &mut Vec<PhysicsEvent>,
    phase: Phase,
    a: EntityId,
    b: EntityId,
    is_trigger: bool,
    info: CollisionInfo,
) {
    if is_trigger {
        queue.push(PhysicsEvent::Trigger { phase, entity: a, other: b });
        queue.push(PhysicsEvent::Trigger { phase, entity: b, other: a });
    } else {
        queue.push(PhysicsEvent::Collision { phase, entity: a, other: b, info });
        queue.push(PhysicsEvent::Collision {
            phase,
            entity: b,
            other: a,
            info: info.flipped(),
        });
    }
}

/// Handler table for lifecycle events. Every method defaults to doing
/// nothing, so implementors only write the slots they care about.
pub trait CollisionListener {
    fn on_collision_enter(&mut self, _entity: EntityId, _other: EntityId, _info: &CollisionInfo) {}
    fn on_collision_stay(&mut self, _entity: EntityId, _other: EntityId, _info: &CollisionInfo) {}
    fn on_collision_exit(&mut self, _entity: EntityId, _other: EntityId, _info: &CollisionInfo) {}
    fn on_trigger_enter(&mut self, _entity: EntityId, _other: EntityId) {}
    fn on_trigger_stay(&mut self, _entity: EntityId, _other: EntityId) {}
    fn on_trigger_exit(&mut self, _entity: EntityId, _other: EntityId) {}
}

/// Routes each event to the matching listener slot, in queue order.
pub fn dispatch<'a, L>(events: impl IntoIterator<Item = &'a PhysicsEvent>, listener: &mut L)
where
    L: CollisionListener + ?Sized,
{
    for event in events {
        match *event {
            PhysicsEvent::Collision { phase, entity, other, ref info } => match phase {
                Phase::Enter => listener.on_collision_enter(entity, other, info),
                Phase::Stay => listener.on_collision_stay(entity, other, info),
                Phase::Exit => listener.on_collision_exit(entity, other, info),
            },
            PhysicsEvent::Trigger { phase, entity, other } => match phase {
                Phase::Enter => listener.on_trigger_enter(entity, other),
                Phase::Stay => listener.on_trigger_stay(entity, other),
                Phase::Exit => listener.on_trigger_exit(entity, other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::objects::Entity;
    use crate::world::EntitySet;

    fn info() -> CollisionInfo {
        CollisionInfo {
            normal: Vec2::RIGHT,
            penetration: 0.5,
            contact: Vec2::ZERO,
            accumulated_normal_impulse: 0.0,
        }
    }

    fn two_ids() -> (EntityId, EntityId) {
        let mut set = EntitySet::new();
        (set.insert(Entity::default()), set.insert(Entity::default()))
    }

    #[derive(Debug, PartialEq)]
    enum Call {
        Enter(EntityId, Vec2),
        TriggerExit(EntityId, EntityId),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl CollisionListener for Recorder {
        fn on_collision_enter(&mut self, entity: EntityId, _other: EntityId, info: &CollisionInfo) {
            self.calls.push(Call::Enter(entity, info.normal));
        }

        fn on_trigger_exit(&mut self, entity: EntityId, other: EntityId) {
            self.calls.push(Call::TriggerExit(entity, other));
        }
    }

    #[test]
    fn test_pair_events_negate_normal_for_second_side() {
        let (a, b) = two_ids();
        let mut queue = Vec::new();
        push_pair_events(&mut queue, Phase::Enter, a, b, false, info());

        assert_eq!(queue.len(), 2);
        match queue[1] {
            PhysicsEvent::Collision { entity, other, info, .. } => {
                assert_eq!(entity, b);
                assert_eq!(other, a);
                assert_eq!(info.normal, Vec2::LEFT);
            }
            PhysicsEvent::Trigger { .. } => panic!("expected a collision event"),
        }
        assert_eq!(queue[0].entity(), a);
        assert_eq!(queue[0].phase(), Phase::Enter);
    }

    #[test]
    fn test_trigger_pair_events_carry_no_geometry() {
        let (a, b) = two_ids();
        let mut queue = Vec::new();
        push_pair_events(&mut queue, Phase::Stay, a, b, true, info());
        assert!(queue.iter().all(PhysicsEvent::is_trigger));
        assert_eq!(queue[1].entity(), b);
        assert_eq!(queue[1].other(), a);
    }

    #[test]
    fn test_dispatch_calls_only_matching_slots() {
        let (a, b) = two_ids();
        let mut queue = Vec::new();
        push_pair_events(&mut queue, Phase::Enter, a, b, false, info());
        push_pair_events(&mut queue, Phase::Stay, a, b, false, info());
        push_pair_events(&mut queue, Phase::Exit, a, b, true, info());

        let mut recorder = Recorder::default();
        dispatch(&queue, &mut recorder);
        // The flipped normal is (-1, -0); -0.0 == 0.0, so value comparison holds.
        assert_eq!(
            recorder.calls,
            vec![
                Call::Enter(a, Vec2::RIGHT),
                Call::Enter(b, Vec2::LEFT),
                Call::TriggerExit(a, b),
                Call::TriggerExit(b, a),
            ]
        );
    }
}
