//! Boss domain: ECS glue around the state machine.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::boss::events::{
    BossDespawnedEvent, BossPhaseChangedEvent, ForceDisappearEvent, SpawnMinionsEvent,
};
use crate::boss::machine::{BossMachine, MachineCtx, MachineOutput};
use crate::combat::{
    AimTarget, Boss, BossHitEvent, BossRng, BossStage, BossStageChangedEvent, BossTuning, Health,
    PlayerDamageEvent,
};
use crate::cues::CueChannel;
use crate::minigame::{ReflexMinigame, ReflexResolvedEvent};

/// Run one machine tick per boss and translate the requested side effects
/// into messages and commands.
#[allow(clippy::too_many_arguments)]
pub(crate) fn update_boss_machines(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<BossTuning>,
    aim: Res<AimTarget>,
    mut rng: ResMut<BossRng>,
    mut minigame: ResMut<ReflexMinigame>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Health,
            &mut BossMachine,
            &mut BossStage,
            &mut CueChannel,
        ),
        With<Boss>,
    >,
    mut player_damage: MessageWriter<PlayerDamageEvent>,
    mut boss_hits: MessageWriter<BossHitEvent>,
    mut stage_changes: MessageWriter<BossStageChangedEvent>,
    mut phase_changes: MessageWriter<BossPhaseChangedEvent>,
    mut minion_spawns: MessageWriter<SpawnMinionsEvent>,
    mut reflex_resolutions: MessageWriter<ReflexResolvedEvent>,
    mut despawns: MessageWriter<BossDespawnedEvent>,
) {
    let dt = time.delta_secs();

    for (entity, transform, health, mut machine, mut stage, mut cue) in &mut query {
        let boss_pos = transform.translation.truncate();
        let mut out = MachineOutput::default();
        let mut ctx = MachineCtx {
            dt,
            health_percent: health.percent(),
            boss_pos,
            aim: aim.0,
            stage: &mut stage,
            cue: &mut cue,
            minigame: &mut minigame,
            tuning: &tuning,
            rng: &mut rng.0,
        };
        machine.update(&mut ctx, &mut out);

        for (amount, reason) in out.player_damage {
            player_damage.write(PlayerDamageEvent { amount, reason });
        }
        if out.boss_damage > 0.0 {
            // Lump-sum self damage (reflex success) goes through the normal
            // damage pipeline with no body part attached.
            boss_hits.write(BossHitEvent {
                boss: entity,
                part: None,
                raw_damage: out.boss_damage,
            });
        }
        if let Some(new_stage) = out.stage_changed {
            info!("boss {:?} escalated to {:?}", entity, new_stage);
            stage_changes.write(BossStageChangedEvent {
                boss: entity,
                stage: new_stage,
            });
        }
        if let Some(kind) = out.entered {
            phase_changes.write(BossPhaseChangedEvent { boss: entity, kind });
        }
        if out.spawn_minions {
            minion_spawns.write(SpawnMinionsEvent {
                boss: entity,
                origin: boss_pos,
            });
        }
        if let Some(outcome) = out.reflex_resolved {
            reflex_resolutions.write(ReflexResolvedEvent {
                boss: entity,
                outcome,
            });
        }
        if out.despawn {
            info!("boss {:?} despawned", entity);
            despawns.write(BossDespawnedEvent { boss: entity });
            commands.entity(entity).despawn();
        }
    }
}

/// Route external interrupts (death, forced teardown) into the machine.
pub(crate) fn handle_boss_interrupts(
    mut forced: MessageReader<ForceDisappearEvent>,
    mut deaths: MessageReader<crate::combat::BossDiedEvent>,
    mut query: Query<&mut BossMachine, With<Boss>>,
) {
    for event in forced.read() {
        if let Ok(mut machine) = query.get_mut(event.boss) {
            machine.request_disappear();
        }
    }
    for event in deaths.read() {
        if let Ok(mut machine) = query.get_mut(event.boss) {
            machine.request_disappear();
        }
    }
}
