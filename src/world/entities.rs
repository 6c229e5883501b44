//! Arena of simulation objects addressed by stable handles.

use crate::objects::entity::Entity;
use std::fmt;

/// Stable handle of an entity. Handles are never reused, so a removed
/// entity's id can't alias a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered collection of entities. Iteration follows insertion order, which
/// is also the order the physics step visits entities in.
#[derive(Debug, Default)]
pub struct EntitySet {
    // Ids are handed out increasingly and removal keeps order, so this stays sorted by id.
    slots: Vec<(EntityId, Entity)>,
    next_id: u64,
}

impl EntitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity and returns its handle.
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, entity));
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        Some(self.slots.remove(index).1)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|index| &self.slots[index].1)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let index = self.index_of(id)?;
        Some(&mut self.slots[index].1)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots.iter().map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots.iter().map(|(id, entity)| (*id, entity))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Entity)> {
        self.slots.iter_mut().map(|(id, entity)| (*id, entity))
    }

    /// Position of `id` in iteration order.
    pub(crate) fn index_of(&self, id: EntityId) -> Option<usize> {
        self.slots.binary_search_by_key(&id, |(slot_id, _)| *slot_id).ok()
    }

    pub(crate) fn at(&self, index: usize) -> &Entity {
        &self.slots[index].1
    }

    /// Mutable references to two different entities.
    /// Panics if the indices are equal or out of bounds.
    pub(crate) fn pair_mut(&mut self, idx_a: usize, idx_b: usize) -> (&mut Entity, &mut Entity) {
        assert_ne!(idx_a, idx_b, "an entity can't be paired with itself");
        if idx_a < idx_b {
            let (slice_a, slice_b) = self.slots.split_at_mut(idx_b);
            (&mut slice_a[idx_a].1, &mut slice_b[0].1)
        } else {
            let (slice_b, slice_a) = self.slots.split_at_mut(idx_a);
            (&mut slice_a[0].1, &mut slice_b[idx_b].1)
        }
    }
}
