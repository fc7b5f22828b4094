//! Combat domain: entity facade, body-part damage model, stage policy.

mod components;
mod events;
mod resources;
mod stage;
mod systems;


pub use components::{ArmorClass, BodyPart, BodyParts, Boss, Health, Minion, Player};
pub use events::{
    BossDamagedEvent, BossDiedEvent, BossHitEvent, BossStageChangedEvent, PartDestroyedEvent,
    PlayerDamageEvent, PlayerDamageReason,
};
pub use resources::{
    AimTarget, AreaDenialTuning, BodyPartDef, BossRng, BossTuning, ReflexTuning, TuningLoadError,
    load_tuning, parse_tuning,
};
pub use stage::{BossStage, STAGE_THREE_THRESHOLD, STAGE_TWO_THRESHOLD};

use bevy::prelude::*;

use crate::combat::resources::load_boss_tuning;
use crate::combat::systems::{apply_boss_hits, apply_player_damage};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BossTuning>()
            .init_resource::<BossRng>()
            .init_resource::<AimTarget>()
            .add_message::<BossHitEvent>()
            .add_message::<BossDamagedEvent>()
            .add_message::<PartDestroyedEvent>()
            .add_message::<BossDiedEvent>()
            .add_message::<BossStageChangedEvent>()
            .add_message::<PlayerDamageEvent>()
            .add_systems(Startup, load_boss_tuning)
            .add_systems(Update, (apply_boss_hits, apply_player_damage).chain());
    }
}
