//! Spawning collaborator: registry and minion pack handling.

mod registry;
mod systems;


pub use registry::SpawnRegistry;

use bevy::prelude::*;

use crate::boss::SpawnMinionsEvent;
use crate::spawning::systems::{cleanup_dead_minions, handle_minion_spawns};

pub struct SpawningPlugin;

impl Plugin for SpawningPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnRegistry>()
            .add_message::<SpawnMinionsEvent>()
            .add_systems(Update, (handle_minion_spawns, cleanup_dead_minions).chain());
    }
}
