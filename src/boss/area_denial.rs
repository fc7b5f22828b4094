//! Area-denial mechanic: rotating safe arc over 8 directional sectors.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::boss::machine::MachineOutput;
use crate::combat::{AreaDenialTuning, PlayerDamageReason};

/// Fixed 45-degree directional sectors around the boss.
pub const SECTOR_COUNT: u8 = 8;
/// A safe arc always covers 4 contiguous sectors.
pub const SAFE_ARC_LEN: u8 = 4;
/// Sector assumed when the aim source is unavailable.
pub const FALLBACK_SECTOR: u8 = 0;

/// Map an aim position to a sector index. Sector k is centered on 45°·k with
/// boundaries at 22.5° + 45°·k, measured from the boss position.
pub fn aim_sector(origin: Vec2, aim: Vec2) -> u8 {
    let v = aim - origin;
    if v == Vec2::ZERO {
        return FALLBACK_SECTOR;
    }
    let degrees = v.y.atan2(v.x).to_degrees();
    (((degrees + 22.5).rem_euclid(360.0)) / 45.0) as u8 % SECTOR_COUNT
}

/// A contiguous run of 4 safe sectors, identified by its start index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeArc {
    pub start: u8,
}

impl SafeArc {
    pub fn roll(rng: &mut ChaCha8Rng) -> Self {
        Self {
            start: rng.random_range(0..SECTOR_COUNT),
        }
    }

    pub fn contains(&self, sector: u8) -> bool {
        (sector + SECTOR_COUNT - self.start) % SECTOR_COUNT < SAFE_ARC_LEN
    }

    pub fn sectors(&self) -> [u8; SAFE_ARC_LEN as usize] {
        [
            self.start,
            (self.start + 1) % SECTOR_COUNT,
            (self.start + 2) % SECTOR_COUNT,
            (self.start + 3) % SECTOR_COUNT,
        ]
    }
}

/// Transient state of one area-denial attack: three sequential phases, each
/// with its own safe-arc roll, a phase timer, and a damage-tick timer.
#[derive(Debug, Clone)]
pub struct AreaDenialRound {
    pub phase: u8,
    pub safe: SafeArc,
    pub phase_timer: f32,
    pub tick_timer: f32,
    pub phases_done: bool,
}

impl AreaDenialRound {
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        Self {
            phase: 0,
            safe: SafeArc::roll(rng),
            phase_timer: 0.0,
            tick_timer: 0.0,
            phases_done: false,
        }
    }

    /// Advance timers for one tick. While the aim sector sits outside the
    /// safe arc, a damage tick goes to the player sink every tick interval;
    /// inside the arc the tick timer resets without damaging.
    pub fn update(
        &mut self,
        dt: f32,
        sector: u8,
        tuning: &AreaDenialTuning,
        rng: &mut ChaCha8Rng,
        out: &mut MachineOutput,
    ) {
        if self.phases_done {
            return;
        }

        self.phase_timer += dt;

        if self.safe.contains(sector) {
            self.tick_timer = 0.0;
        } else {
            self.tick_timer += dt;
            while self.tick_timer >= tuning.tick_interval {
                self.tick_timer -= tuning.tick_interval;
                out.player_damage
                    .push((tuning.tick_damage, PlayerDamageReason::AreaDenialTick));
            }
        }

        if self.phase_timer >= tuning.phase_duration {
            self.phase += 1;
            self.phase_timer = 0.0;
            self.tick_timer = 0.0;
            if self.phase >= tuning.phase_count {
                self.phases_done = true;
            } else {
                self.safe = SafeArc::roll(rng);
                debug!(
                    "area denial phase {} safe arc {:?}",
                    self.phase,
                    self.safe.sectors()
                );
            }
        }
    }
}
