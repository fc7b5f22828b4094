//! Spawning domain: minion pack spawning and cleanup.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::boss::SpawnMinionsEvent;
use crate::combat::{BossTuning, Health, Minion};
use crate::spawning::registry::SpawnRegistry;

/// Radius of the ring minions appear on around the boss.
const SPAWN_RING_RADIUS: f32 = 80.0;

/// Spawn a minion pack for each area-spawn request and register the new
/// entities for external bookkeeping.
pub(crate) fn handle_minion_spawns(
    mut commands: Commands,
    mut requests: MessageReader<SpawnMinionsEvent>,
    tuning: Res<BossTuning>,
    mut registry: ResMut<SpawnRegistry>,
) {
    for request in requests.read() {
        for i in 0..tuning.minion_count {
            let angle = TAU * i as f32 / tuning.minion_count.max(1) as f32;
            let offset = Vec2::new(angle.cos(), angle.sin()) * SPAWN_RING_RADIUS;
            let position = request.origin + offset;

            let entity = commands
                .spawn((
                    Minion,
                    Health::new(tuning.minion_health),
                    Transform::from_xyz(position.x, position.y, 0.0),
                ))
                .id();
            registry.register(entity);
        }
        info!(
            "boss {:?} spawned {} minions",
            request.boss, tuning.minion_count
        );
    }
}

/// Despawn dead minions and drop them from the registry.
pub(crate) fn cleanup_dead_minions(
    mut commands: Commands,
    mut registry: ResMut<SpawnRegistry>,
    query: Query<(Entity, &Health), With<Minion>>,
) {
    for (entity, health) in &query {
        if health.is_dead() {
            registry.unregister(entity);
            commands.entity(entity).despawn();
        }
    }
}
