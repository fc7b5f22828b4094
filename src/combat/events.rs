//! Combat domain: damage and lifecycle messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::stage::BossStage;

/// An incoming hit against the boss. `part` indexes into `BodyParts`;
/// `None` means the hit bypasses the body-part model entirely.
#[derive(Debug)]
pub struct BossHitEvent {
    pub boss: Entity,
    pub part: Option<usize>,
    pub raw_damage: f32,
}

impl Message for BossHitEvent {}

/// Emitted after a hit actually removed health from the boss.
#[derive(Debug)]
pub struct BossDamagedEvent {
    pub boss: Entity,
    pub amount: f32,
}

impl Message for BossDamagedEvent {}

/// One-time notification that a destructible body part was destroyed.
#[derive(Debug)]
pub struct PartDestroyedEvent {
    pub boss: Entity,
    pub part: usize,
    pub name: String,
}

impl Message for PartDestroyedEvent {}

#[derive(Debug)]
pub struct BossDiedEvent {
    pub boss: Entity,
}

impl Message for BossDiedEvent {}

#[derive(Debug)]
pub struct BossStageChangedEvent {
    pub boss: Entity,
    pub stage: BossStage,
}

impl Message for BossStageChangedEvent {}

/// Why the player sink is taking damage from a boss mechanic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerDamageReason {
    AreaDenialTick,
    ReflexFailure,
}

/// Damage directed at the player-equivalent sink.
#[derive(Debug)]
pub struct PlayerDamageEvent {
    pub amount: f32,
    pub reason: PlayerDamageReason,
}

impl Message for PlayerDamageEvent {}
