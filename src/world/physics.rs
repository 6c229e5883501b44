use std::collections::HashSet;

use crate::collision::{
    check_collision, collider_bounds, CollisionInfo, ContactLedger, PairKey, SpatialGrid, AABB,
};
use crate::config::PhysicsConfig;
use crate::error::{PhysicsError, Result};
use crate::integration::{integrate_forces, integrate_position};
use crate::shapes::Shape;
use crate::world::entities::{EntityId, EntitySet};
use crate::world::events::{dispatch, push_pair_events, CollisionListener, Phase, PhysicsEvent};
use crate::world::solver::{solve_contacts, ContactConstraint};

/// Steps a set of entities: broad phase, narrow phase, contact lifecycle,
/// impulse solve and integration.
///
/// The entities themselves belong to the caller. `Physics` keeps what has to
/// survive between steps: the contact ledger used for enter/stay/exit
/// detection and warm starting, the spatial grid, and the events of the last
/// step.
#[derive(Debug)]
pub struct Physics {
    config: PhysicsConfig,
    grid: SpatialGrid,
    ledger: ContactLedger,
    events: Vec<PhysicsEvent>,
    // Collider count the grid was last sized for.
    sized_for: Option<usize>,
}

impl Default for Physics {
    fn default() -> Self {
        Self::new()
    }
}

impl Physics {
    pub fn new() -> Self {
        Self::build(PhysicsConfig::default())
    }

    /// Fails with `InvalidConfig` when a field is out of range.
    pub fn with_config(config: PhysicsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PhysicsConfig) -> Self {
        let grid = SpatialGrid::new(
            config.initial_cell_size,
            config.cell_size_factor,
            config.cell_size_percentile,
        );
        Self {
            config,
            grid,
            ledger: ContactLedger::new(),
            events: Vec::new(),
            sized_for: None,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Current broad-phase cell size.
    pub fn cell_size(&self) -> f64 {
        self.grid.cell_size()
    }

    /// Contact between `a` and `b` found by the last step, normal pointing
    /// from `a` to `b`. Works for either argument order.
    pub fn contact(&self, a: EntityId, b: EntityId) -> Option<CollisionInfo> {
        self.ledger.get(a, b)
    }

    /// Number of touching pairs (solid and trigger) after the last step.
    pub fn contact_count(&self) -> usize {
        self.ledger.len()
    }

    /// Events produced by the last step, in the order they were raised.
    pub fn events(&self) -> &[PhysicsEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<PhysicsEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hands the queued events to `listener` and empties the queue.
    pub fn dispatch_events<L: CollisionListener + ?Sized>(&mut self, listener: &mut L) {
        let events = self.drain_events();
        dispatch(&events, listener);
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Everything that can fail is checked up front: on error neither the
    /// entities nor the engine state have been touched. Events from the
    /// previous step that were not drained are discarded.
    pub fn update(&mut self, entities: &mut EntitySet, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }
        let colliders = Self::validate(entities)?;

        self.events.clear();

        let purged = self
            .ledger
            .retain(|key| entities.contains(key.first()) && entities.contains(key.second()));
        if purged > 0 {
            log::debug!("dropped {} contact(s) of removed entities", purged);
        }

        for (_, entity) in entities.iter_mut() {
            if let Some(body) = entity.body.as_mut() {
                integrate_forces(body, self.config.gravity, dt);
            }
        }

        self.rebuild_grid(&colliders);

        let (mut current, mut contacts, candidates) = self.detect(entities, &colliders);

        solve_contacts(entities, &mut contacts, &self.config, dt);

        for contact in &contacts {
            current.set_impulse(contact.key, contact.info.accumulated_normal_impulse);
        }

        self.raise_exits(entities, &current);
        self.ledger = current;

        for (_, entity) in entities.iter_mut() {
            integrate_position(entity, dt);
        }

        log::trace!(
            "step dt={:.4}: {} collider(s) in {} cell(s), {} candidate pair(s), {} contact(s), {} solved, {} event(s)",
            dt,
            colliders.len(),
            self.grid.occupied_cells(),
            candidates,
            self.ledger.len(),
            contacts.len(),
            self.events.len()
        );
        Ok(())
    }

    /// Checks every body and collider and returns the bounds of each collider
    /// entity as `(index, id, bounds)`, in entity order.
    fn validate(entities: &EntitySet) -> Result<Vec<(usize, EntityId, AABB)>> {
        let mut colliders = Vec::new();
        for (index, (id, entity)) in entities.iter().enumerate() {
            if let Some(body) = entity.body.as_ref() {
                body.validate()?;
            }
            if let Some(collider) = entity.collider.as_ref() {
                colliders.push((index, id, collider_bounds(id, entity.position, collider)?));
            }
        }
        Ok(colliders)
    }

    fn rebuild_grid(&mut self, colliders: &[(usize, EntityId, AABB)]) {
        if self.sized_for != Some(colliders.len()) {
            self.grid
                .adapt_cell_size(colliders.iter().map(|(_, _, bounds)| bounds.largest_extent()));
            self.sized_for = Some(colliders.len());
        }

        self.grid.clear();
        for (_, id, bounds) in colliders {
            self.grid.insert(*id, bounds);
        }
    }

    /// Narrow phase over the broad-phase candidates. Builds the new ledger,
    /// raises enter/stay events and returns the solid contacts to solve.
    fn detect(
        &mut self,
        entities: &mut EntitySet,
        colliders: &[(usize, EntityId, AABB)],
    ) -> (ContactLedger, Vec<ContactConstraint>, usize) {
        let mut current = ContactLedger::new();
        let mut processed = HashSet::new();
        let mut contacts = Vec::new();

        for &(index_a, id_a, ref bounds_a) in colliders {
            for id_b in self.grid.nearby(bounds_a) {
                if id_b == id_a || !processed.insert(PairKey::new(id_a, id_b)) {
                    continue;
                }
                let Some(index_b) = entities.index_of(id_b) else {
                    continue;
                };

                let warm_impulse = self.ledger.warm_impulse(id_a, id_b);
                let Some(contact) =
                    check_collision(entities.at(index_a), entities.at(index_b), warm_impulse)
                else {
                    continue;
                };

                wake_pair(entities, index_a, index_b);

                let key = current.insert(id_a, id_b, contact);
                let phase = if self.ledger.contains_key(&key) {
                    Phase::Stay
                } else {
                    Phase::Enter
                };
                push_pair_events(&mut self.events, phase, id_a, id_b, contact.is_trigger, contact.info);

                if !contact.is_trigger {
                    contacts.push(ContactConstraint {
                        key,
                        index_a,
                        index_b,
                        info: contact.info,
                        circles: both_circles(entities, index_a, index_b),
                    });
                }
            }
        }

        (current, contacts, processed.len())
    }

    /// Exit events for every pair that touched last step but not this one.
    fn raise_exits(&mut self, entities: &EntitySet, current: &ContactLedger) {
        for (key, record) in self.ledger.iter() {
            if current.contains_key(key) {
                continue;
            }
            let first = entities.get(key.first()).and_then(|e| e.collider.as_ref());
            let second = entities.get(key.second()).and_then(|e| e.collider.as_ref());
            let is_trigger = match (first, second) {
                (Some(a), Some(b)) => a.is_trigger || b.is_trigger,
                _ => record.is_trigger,
            };
            push_pair_events(
                &mut self.events,
                Phase::Exit,
                key.first(),
                key.second(),
                is_trigger,
                record.info,
            );
        }
    }
}

/// If either side has an awake body, of any mass, sleeping dynamic
/// participants wake up. Sleeping immovable bodies are left asleep: no
/// contact impulse can move them.
fn wake_pair(entities: &mut EntitySet, index_a: usize, index_b: usize) {
    let (a, b) = entities.pair_mut(index_a, index_b);
    if !a.is_awake() && !b.is_awake() {
        return;
    }
    for body in [a.body.as_mut(), b.body.as_mut()].into_iter().flatten() {
        if body.is_sleeping && body.is_dynamic() {
            body.wake();
        }
    }
}

fn both_circles(entities: &EntitySet, index_a: usize, index_b: usize) -> bool {
    let is_circle = |index: usize| {
        entities
            .at(index)
            .collider
            .as_ref()
            .is_some_and(|collider| matches!(collider.shape, Shape::Circle(_)))
    };
    is_circle(index_a) && is_circle(index_b)
}
