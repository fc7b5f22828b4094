//! Minigame domain: session timer tick.

use bevy::prelude::*;

use crate::minigame::session::ReflexMinigame;

pub(crate) fn tick_reflex_minigame(time: Res<Time>, mut minigame: ResMut<ReflexMinigame>) {
    minigame.tick(time.delta_secs());
}
