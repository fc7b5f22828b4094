//! Reflex minigame collaborator: controller resource and resolution event.

mod session;
mod systems;

#[cfg(test)]
mod tests;

pub use session::{ReflexMinigame, ReflexOutcome, ReflexResolvedEvent};

use bevy::prelude::*;

use crate::minigame::systems::tick_reflex_minigame;

pub struct MinigamePlugin;

impl Plugin for MinigamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ReflexMinigame>()
            .add_message::<ReflexResolvedEvent>()
            .add_systems(Update, tick_reflex_minigame);
    }
}
