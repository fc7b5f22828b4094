//! Animation cue collaborator: playback channel and the headless driver.

mod channel;

pub use channel::{BossCue, CueChannel, CueDurations};

use bevy::prelude::*;

use crate::cues::channel::drive_cue_playback;

pub struct CuesPlugin;

impl Plugin for CuesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CueDurations>()
            .add_systems(Update, drive_cue_playback);
    }
}
