//! Reflex minigame controller: session state the boss core polls.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Result of a reflex minigame session. A session that has not resolved yet
/// has no outcome at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflexOutcome {
    Success,
    Failure,
}

/// External reflex-minigame controller. The boss's Attack2 state starts a
/// session with a timer-based exit condition and a target hit count, then
/// polls `is_completed` and `is_running` as a double guard. The presentation
/// layer reports player hits through `record_hit`.
#[derive(Resource, Debug, Default, Clone)]
pub struct ReflexMinigame {
    running: bool,
    time_left: f32,
    target_count: u32,
    hits: u32,
    completed: bool,
}

impl ReflexMinigame {
    /// Begin a fresh session, discarding any previous one.
    pub fn start(&mut self, duration: f32, target_count: u32) {
        *self = Self {
            running: true,
            time_left: duration,
            target_count,
            hits: 0,
            completed: false,
        };
    }

    /// Stop the session. Safe to call on a stopped session.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn target_reached(&self) -> bool {
        self.target_count > 0 && self.hits >= self.target_count
    }

    /// Report one successful reflex hit. Reaching the target completes the
    /// session early.
    pub fn record_hit(&mut self) {
        if !self.running {
            return;
        }
        self.hits += 1;
        if self.target_reached() {
            self.completed = true;
            self.running = false;
        }
    }

    /// Advance the exit-condition timer; expiry completes the session with
    /// whatever hit count was reached.
    pub fn tick(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        self.time_left -= dt;
        if self.time_left <= 0.0 {
            self.time_left = 0.0;
            self.completed = true;
            self.running = false;
        }
    }
}

/// Emitted once per session when the boss core resolves the outcome.
#[derive(Debug)]
pub struct ReflexResolvedEvent {
    pub boss: Entity,
    pub outcome: ReflexOutcome,
}

impl Message for ReflexResolvedEvent {}
