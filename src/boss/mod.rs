//! Boss domain: state machine plugin wiring and public exports.

mod area_denial;
mod events;
mod machine;
mod reflex;
mod spawn;
mod systems;


pub use area_denial::{
    AreaDenialRound, FALLBACK_SECTOR, SAFE_ARC_LEN, SECTOR_COUNT, SafeArc, aim_sector,
};
pub use events::{BossDespawnedEvent, BossPhaseChangedEvent, ForceDisappearEvent, SpawnMinionsEvent};
pub use machine::{BossMachine, CombatState, CombatStateKind, MachineCtx, MachineOutput};
pub use reflex::ReflexSession;
pub use spawn::spawn_boss;

use bevy::prelude::*;

use crate::boss::systems::{handle_boss_interrupts, update_boss_machines};
use crate::minigame::ReflexResolvedEvent;

pub struct BossPlugin;

impl Plugin for BossPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BossPhaseChangedEvent>()
            .add_message::<ForceDisappearEvent>()
            .add_message::<SpawnMinionsEvent>()
            .add_message::<BossDespawnedEvent>()
            .add_message::<ReflexResolvedEvent>()
            .add_systems(Update, (update_boss_machines, handle_boss_interrupts).chain());
    }
}
