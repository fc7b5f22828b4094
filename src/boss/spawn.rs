//! Boss domain: encounter spawn helper.

use bevy::prelude::*;

use crate::boss::machine::BossMachine;
use crate::combat::{BodyParts, Boss, BossStage, BossTuning, Health};
use crate::cues::CueChannel;

/// Spawn the boss entity with full health, stage one, its body-part roster,
/// and a fresh state machine starting in Appear.
pub fn spawn_boss(commands: &mut Commands, tuning: &BossTuning, position: Vec2) -> Entity {
    commands
        .spawn((
            Boss,
            BossMachine::new(),
            BossStage::One,
            Health::new(tuning.max_health),
            BodyParts::from_defs(&tuning.parts),
            CueChannel::default(),
            Transform::from_xyz(position.x, position.y, 0.0),
        ))
        .id()
}
