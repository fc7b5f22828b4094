//! Animation-cue facade: the machine plays cues and polls for completion.

use bevy::prelude::*;

/// Cue identifiers, one per combat state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BossCue {
    Appear,
    Idle,
    AreaDenial,
    Reflex,
    AreaSpawn,
    Barrage,
    AimLag,
    Disappear,
}

/// Per-boss cue playback channel. The core only calls `play` and polls
/// `is_playing`; whoever drives playback (the built-in nominal-duration
/// driver or a presentation layer) flips it off.
#[derive(Component, Debug, Default)]
pub struct CueChannel {
    current: Option<BossCue>,
    remaining: f32,
    playing: bool,
    fresh: bool,
}

impl CueChannel {
    pub fn play(&mut self, cue: BossCue) {
        self.current = Some(cue);
        self.remaining = 0.0;
        self.playing = true;
        self.fresh = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current(&self) -> Option<BossCue> {
        self.current
    }

    /// Mark the current cue finished. External playback drivers call this.
    pub fn finish(&mut self) {
        self.playing = false;
        self.fresh = false;
    }

    pub(crate) fn tick(&mut self, dt: f32, durations: &CueDurations) {
        let Some(cue) = self.current else {
            return;
        };
        if self.fresh {
            self.remaining = durations.for_cue(cue);
            self.fresh = false;
        }
        if self.playing {
            self.remaining -= dt;
            if self.remaining <= 0.0 {
                self.playing = false;
            }
        }
    }
}

/// Nominal cue lengths used by the headless playback driver.
#[derive(Resource, Debug, Clone)]
pub struct CueDurations {
    pub appear: f32,
    pub idle: f32,
    pub area_denial: f32,
    pub reflex: f32,
    pub area_spawn: f32,
    pub barrage: f32,
    pub aim_lag: f32,
    pub disappear: f32,
}

impl Default for CueDurations {
    fn default() -> Self {
        Self {
            appear: 2.0,
            idle: 2.5,
            area_denial: 9.5,
            reflex: 8.5,
            area_spawn: 2.0,
            barrage: 2.5,
            aim_lag: 1.8,
            disappear: 2.0,
        }
    }
}

impl CueDurations {
    pub fn for_cue(&self, cue: BossCue) -> f32 {
        match cue {
            BossCue::Appear => self.appear,
            BossCue::Idle => self.idle,
            BossCue::AreaDenial => self.area_denial,
            BossCue::Reflex => self.reflex,
            BossCue::AreaSpawn => self.area_spawn,
            BossCue::Barrage => self.barrage,
            BossCue::AimLag => self.aim_lag,
            BossCue::Disappear => self.disappear,
        }
    }
}

/// Tick nominal playback for every cue channel.
pub(crate) fn drive_cue_playback(
    time: Res<Time>,
    durations: Res<CueDurations>,
    mut query: Query<&mut CueChannel>,
) {
    let dt = time.delta_secs();
    for mut channel in &mut query {
        channel.tick(dt, &durations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_finishes_after_nominal_duration() {
        let durations = CueDurations::default();
        let mut channel = CueChannel::default();
        channel.play(BossCue::Barrage);
        assert!(channel.is_playing());

        channel.tick(2.0, &durations);
        assert!(channel.is_playing());
        channel.tick(0.6, &durations);
        assert!(!channel.is_playing());
    }

    #[test]
    fn test_replay_restarts_clock() {
        let durations = CueDurations::default();
        let mut channel = CueChannel::default();
        channel.play(BossCue::AimLag);
        channel.tick(5.0, &durations);
        assert!(!channel.is_playing());

        channel.play(BossCue::AimLag);
        channel.tick(0.1, &durations);
        assert!(channel.is_playing());
    }

    #[test]
    fn test_external_finish() {
        let mut channel = CueChannel::default();
        channel.play(BossCue::Appear);
        channel.finish();
        assert!(!channel.is_playing());
        assert_eq!(channel.current(), Some(BossCue::Appear));
    }
}
