//! Per-pair contact state carried from one step to the next.

use std::collections::BTreeMap;
use crate::collision::manifold::{CollisionInfo, Contact};
use crate::world::EntityId;

/// Canonical key of an unordered entity pair: the smaller id comes first, so
/// `(a, b)` and `(b, a)` land in the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    first: EntityId,
    second: EntityId,
}

impl PairKey {
    pub fn new(a: EntityId, b: EntityId) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> EntityId {
        self.first
    }

    pub fn second(&self) -> EntityId {
        self.second
    }
}

/// What the ledger remembers about a touching pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairRecord {
    /// Oriented from `PairKey::first` to `PairKey::second`.
    pub info: CollisionInfo,
    pub is_trigger: bool,
}

/// Contacts of one step, keyed by unordered pair. Ordered by key so that
/// walking it (for exit events) is deterministic.
#[derive(Debug, Default, Clone)]
pub struct ContactLedger {
    pairs: BTreeMap<PairKey, PairRecord>,
}

impl ContactLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the contact `a -> b`. Returns the pair's key.
    pub fn insert(&mut self, a: EntityId, b: EntityId, contact: Contact) -> PairKey {
        let key = PairKey::new(a, b);
        let info = if key.first() == a {
            contact.info
        } else {
            contact.info.flipped()
        };
        self.pairs.insert(
            key,
            PairRecord {
                info,
                is_trigger: contact.is_trigger,
            },
        );
        key
    }

    pub fn contains(&self, a: EntityId, b: EntityId) -> bool {
        self.pairs.contains_key(&PairKey::new(a, b))
    }

    /// The contact between `a` and `b`, with the normal pointing from `a` to `b`.
    pub fn get(&self, a: EntityId, b: EntityId) -> Option<CollisionInfo> {
        let key = PairKey::new(a, b);
        let record = self.pairs.get(&key)?;
        Some(if key.first() == a {
            record.info
        } else {
            record.info.flipped()
        })
    }

    /// Accumulated impulse to start this pair's solve from; 0 for new pairs.
    pub fn warm_impulse(&self, a: EntityId, b: EntityId) -> f64 {
        self.pairs
            .get(&PairKey::new(a, b))
            .map_or(0.0, |record| record.info.accumulated_normal_impulse)
    }

    pub fn set_impulse(&mut self, key: PairKey, impulse: f64) {
        if let Some(record) = self.pairs.get_mut(&key) {
            record.info.accumulated_normal_impulse = impulse;
        }
    }

    pub fn contains_key(&self, key: &PairKey) -> bool {
        self.pairs.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &PairRecord)> {
        self.pairs.iter()
    }

    /// Drops every pair `keep` rejects and returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&PairKey) -> bool) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|key, _| keep(key));
        before - self.pairs.len()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::objects::Entity;
    use crate::world::EntitySet;

    fn two_ids() -> (EntityId, EntityId) {
        let mut set = EntitySet::new();
        (set.insert(Entity::default()), set.insert(Entity::default()))
    }

    fn contact(normal: Vec2, impulse: f64) -> Contact {
        Contact {
            is_trigger: false,
            info: CollisionInfo {
                normal,
                penetration: 1.0,
                contact: Vec2::ZERO,
                accumulated_normal_impulse: impulse,
            },
        }
    }

    #[test]
    fn test_pair_key_is_unordered() {
        let (a, b) = two_ids();
        assert_eq!(PairKey::new(a, b), PairKey::new(b, a));
        let key = PairKey::new(b, a);
        assert_eq!(key.first(), a);
        assert_eq!(key.second(), b);
    }

    #[test]
    fn test_get_orients_normal_for_either_query_order() {
        let (a, b) = two_ids();
        let mut ledger = ContactLedger::new();
        // Recorded from b's point of view.
        ledger.insert(b, a, contact(Vec2::RIGHT, 3.0));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(b, a).map(|i| i.normal), Some(Vec2::RIGHT));
        assert_eq!(ledger.get(a, b).map(|i| i.normal), Some(Vec2::LEFT));
        assert_eq!(ledger.warm_impulse(a, b), 3.0);
        assert_eq!(ledger.warm_impulse(b, a), 3.0);
        assert!(ledger.contains(a, b));
    }

    #[test]
    fn test_set_impulse_and_retain() {
        let (a, b) = two_ids();
        let mut ledger = ContactLedger::new();
        let key = ledger.insert(a, b, contact(Vec2::DOWN, 0.0));
        ledger.set_impulse(key, 7.5);
        assert_eq!(ledger.warm_impulse(b, a), 7.5);

        assert_eq!(ledger.retain(|key| key.second() != b), 1);
        assert!(ledger.is_empty());
        assert_eq!(ledger.warm_impulse(a, b), 0.0);
    }
}
