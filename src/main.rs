//! Headless scripted boss fight for manual inspection. Advances a virtual
//! clock in fixed steps and narrates state transitions until the boss falls.

use std::time::Duration;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use colossus_core::combat::{
    AimTarget, BossDamagedEvent, BossRng, BossStageChangedEvent, BossTuning, Health,
    PartDestroyedEvent, Player,
};
use colossus_core::{
    BossDespawnedEvent, BossPhaseChangedEvent, BossPlugin, CombatPlugin, CuesPlugin, MinigamePlugin,
    ReflexResolvedEvent, SpawningPlugin, spawn_boss,
};

const STEP: Duration = Duration::from_millis(50);
const MAX_FRAMES: u32 = 6000;

#[derive(Resource, Default)]
struct DemoState {
    elapsed: f32,
    done: bool,
}

fn main() {
    let mut app = App::new();
    app.add_plugins(bevy::log::LogPlugin::default());
    app.add_plugins((
        CombatPlugin,
        CuesPlugin,
        MinigamePlugin,
        SpawningPlugin,
        BossPlugin,
    ));
    app.insert_resource(BossRng::seeded(0xC0_10_55));
    app.insert_resource(Time::<()>::default());
    app.init_resource::<DemoState>();
    app.add_systems(Startup, setup_fight);
    app.add_systems(Update, (sweep_aim, narrate, finish_when_boss_gone));
    #[cfg(feature = "dev-tools")]
    app.add_systems(Update, scripted_damage);

    for _ in 0..MAX_FRAMES {
        app.world_mut().resource_mut::<Time>().advance_by(STEP);
        app.update();
        if app.world().resource::<DemoState>().done {
            break;
        }
    }
}

fn setup_fight(mut commands: Commands, tuning: Res<BossTuning>) {
    commands.spawn((Player, Health::new(100.0)));
    let boss = spawn_boss(&mut commands, &tuning, Vec2::ZERO);
    info!("spawned boss {:?} with {} health", boss, tuning.max_health);
}

/// Swing the crosshair slowly around the boss so the area-denial phases see
/// both safe and unsafe sectors.
fn sweep_aim(time: Res<Time>, mut demo: ResMut<DemoState>, mut aim: ResMut<AimTarget>) {
    demo.elapsed += time.delta_secs();
    let angle = demo.elapsed * 0.9;
    aim.0 = Some(Vec2::new(angle.cos(), angle.sin()) * 150.0);
}

/// Scripted offense: periodic hits rotating across body parts, plus reflex
/// minigame participation so both resolution branches can show up.
#[cfg(feature = "dev-tools")]
fn scripted_damage(
    demo: Res<DemoState>,
    mut last_hit: Local<f32>,
    mut minigame: ResMut<colossus_core::ReflexMinigame>,
    mut hits: bevy::ecs::message::MessageWriter<colossus_core::combat::BossHitEvent>,
    query: Query<Entity, With<colossus_core::combat::Boss>>,
) {
    let Some(boss) = query.iter().next() else {
        return;
    };

    if demo.elapsed - *last_hit >= 0.4 {
        *last_hit = demo.elapsed;
        let part = (demo.elapsed as usize) % 4;
        hits.write(colossus_core::combat::BossHitEvent {
            boss,
            part: Some(part),
            raw_damage: 6.0,
        });
        if minigame.is_running() {
            minigame.record_hit();
        }
    }
}

fn narrate(
    mut phases: MessageReader<BossPhaseChangedEvent>,
    mut stages: MessageReader<BossStageChangedEvent>,
    mut parts: MessageReader<PartDestroyedEvent>,
    mut reflex: MessageReader<ReflexResolvedEvent>,
    mut damage: MessageReader<BossDamagedEvent>,
    mut total: Local<f32>,
) {
    for event in phases.read() {
        info!("boss entered {:?}", event.kind);
    }
    for event in stages.read() {
        info!("boss stage is now {:?}", event.stage);
    }
    for event in parts.read() {
        info!("destroyed part '{}'", event.name);
    }
    for event in reflex.read() {
        info!("reflex minigame resolved: {:?}", event.outcome);
    }
    for event in damage.read() {
        *total += event.amount;
        debug!("boss damaged {} (total {})", event.amount, *total);
    }
}

fn finish_when_boss_gone(
    mut despawns: MessageReader<BossDespawnedEvent>,
    mut demo: ResMut<DemoState>,
) {
    for _ in despawns.read() {
        info!("fight over after {:.1}s", demo.elapsed);
        demo.done = true;
    }
}
