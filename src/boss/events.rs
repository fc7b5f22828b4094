//! Boss domain: state machine lifecycle messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::boss::machine::CombatStateKind;

/// Emitted whenever the machine enters a state (including the initial Appear).
#[derive(Debug)]
pub struct BossPhaseChangedEvent {
    pub boss: Entity,
    pub kind: CombatStateKind,
}

impl Message for BossPhaseChangedEvent {}

/// External signal forcing the boss into Disappear from any state.
#[derive(Debug)]
pub struct ForceDisappearEvent {
    pub boss: Entity,
}

impl Message for ForceDisappearEvent {}

/// Request from the area-spawn attack for a minion pack around `origin`.
#[derive(Debug)]
pub struct SpawnMinionsEvent {
    pub boss: Entity,
    pub origin: Vec2,
}

impl Message for SpawnMinionsEvent {}

/// The boss finished its disappear state and left the world.
#[derive(Debug)]
pub struct BossDespawnedEvent {
    pub boss: Entity,
}

impl Message for BossDespawnedEvent {}
