//! Combat domain: boss stage escalation policy.

use bevy::prelude::*;

/// Health fraction below which the boss escalates to stage two.
pub const STAGE_TWO_THRESHOLD: f32 = 2.0 / 3.0;
/// Health fraction below which the boss escalates to stage three.
pub const STAGE_THREE_THRESHOLD: f32 = 1.0 / 3.0;

/// Irreversible escalation level of the boss. Gates which attacks are
/// available; never regresses over the entity's lifetime.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum BossStage {
    #[default]
    One,
    Two,
    Three,
}

impl BossStage {
    /// The stage this health fraction calls for, ignoring the current stage.
    pub fn required_for(health_percent: f32) -> Self {
        if health_percent < STAGE_THREE_THRESHOLD {
            BossStage::Three
        } else if health_percent < STAGE_TWO_THRESHOLD {
            BossStage::Two
        } else {
            BossStage::One
        }
    }

    /// Attempt an escalation. Returns true if the stage actually advanced.
    /// Downgrades and same-stage writes are rejected as no-ops, so re-checking
    /// an already escalated stage at a checkpoint is safe.
    pub fn try_escalate(&mut self, next: BossStage) -> bool {
        if next <= *self {
            if next < *self {
                warn!("rejected stage downgrade {:?} -> {:?}", self, next);
            }
            return false;
        }
        *self = next;
        true
    }
}
