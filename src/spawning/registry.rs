//! Spawn registry: external bookkeeping for boss-spawned hostiles.

use bevy::prelude::*;
use std::collections::HashSet;

/// Tracks auxiliary hostile entities the boss has spawned so wave/kill
/// bookkeeping outside the core stays consistent.
#[derive(Resource, Debug, Default)]
pub struct SpawnRegistry {
    tracked: HashSet<Entity>,
}

impl SpawnRegistry {
    pub fn register(&mut self, entity: Entity) {
        self.tracked.insert(entity);
    }

    pub fn unregister(&mut self, entity: Entity) {
        self.tracked.remove(&entity);
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.tracked.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}
