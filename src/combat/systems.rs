//! Combat domain: hit scoring and damage application.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{BodyParts, Boss, Health, Player};
use crate::combat::events::{
    BossDamagedEvent, BossDiedEvent, BossHitEvent, PartDestroyedEvent, PlayerDamageEvent,
};

/// Score incoming hits against the body-part model and apply the result to
/// the boss's overall health. Hits against an already-dead boss are dropped.
pub(crate) fn apply_boss_hits(
    mut hits: MessageReader<BossHitEvent>,
    mut damaged: MessageWriter<BossDamagedEvent>,
    mut destroyed: MessageWriter<PartDestroyedEvent>,
    mut deaths: MessageWriter<BossDiedEvent>,
    mut query: Query<(&mut Health, &mut BodyParts), With<Boss>>,
) {
    for hit in hits.read() {
        let Ok((mut health, mut parts)) = query.get_mut(hit.boss) else {
            continue;
        };
        if health.is_dead() {
            continue;
        }

        let final_damage = match hit.part {
            None => hit.raw_damage,
            Some(index) => {
                let Some(part) = parts.0.get_mut(index) else {
                    warn!("hit referenced unknown body part index {}", index);
                    continue;
                };
                let scored = part.score(hit.raw_damage);
                if scored <= 0.0 {
                    // Unattackable or destroyed: no health mutation at all.
                    continue;
                }
                if part.absorb(scored) {
                    info!("body part '{}' destroyed", part.name);
                    destroyed.write(PartDestroyedEvent {
                        boss: hit.boss,
                        part: index,
                        name: part.name.clone(),
                    });
                }
                scored
            }
        };

        if final_damage <= 0.0 {
            continue;
        }

        let actual = health.take_damage(final_damage);
        damaged.write(BossDamagedEvent {
            boss: hit.boss,
            amount: actual,
        });
        if health.is_dead() {
            deaths.write(BossDiedEvent { boss: hit.boss });
        }
    }
}

/// Drain player-directed damage from boss mechanics into the player sink.
pub(crate) fn apply_player_damage(
    mut events: MessageReader<PlayerDamageEvent>,
    mut query: Query<&mut Health, With<Player>>,
) {
    for event in events.read() {
        for mut health in &mut query {
            health.take_damage(event.amount);
            debug!("player took {} ({:?})", event.amount, event.reason);
        }
    }
}
