//! The boss combat state machine: one enum variant per state, transient
//! sub-mechanic data owned by the variant, push-style transitions.

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::boss::area_denial::{AreaDenialRound, FALLBACK_SECTOR, aim_sector};
use crate::boss::reflex::ReflexSession;
use crate::combat::{BossStage, BossTuning, PlayerDamageReason};
use crate::cues::{BossCue, CueChannel};
use crate::minigame::{ReflexMinigame, ReflexOutcome};

/// Active combat state. Each variant's payload exists only while the variant
/// is active and is discarded on exit; nothing persists across re-entry.
#[derive(Debug, Clone)]
pub enum CombatState {
    Appear,
    /// Idle behavior is driven by the stage context captured at entry; the
    /// escalation guards always read the live stage component.
    Idle { stage: BossStage },
    /// Attack1: rotating safe-arc area denial.
    AreaDenial(AreaDenialRound),
    /// Attack2: reflex-minigame bridge.
    ReflexMinigame(ReflexSession),
    /// Attack3: timed cue that spawns a minion pack once.
    AreaSpawn { spawned: bool },
    /// Attack4: projectile barrage cue.
    Barrage,
    /// Attack5: aim-lag cue.
    AimLag,
    Disappear,
}

/// Fieldless mirror of `CombatState`, for events and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatStateKind {
    Appear,
    Idle,
    AreaDenial,
    ReflexMinigame,
    AreaSpawn,
    Barrage,
    AimLag,
    Disappear,
}

impl CombatState {
    pub fn kind(&self) -> CombatStateKind {
        match self {
            CombatState::Appear => CombatStateKind::Appear,
            CombatState::Idle { .. } => CombatStateKind::Idle,
            CombatState::AreaDenial(_) => CombatStateKind::AreaDenial,
            CombatState::ReflexMinigame(_) => CombatStateKind::ReflexMinigame,
            CombatState::AreaSpawn { .. } => CombatStateKind::AreaSpawn,
            CombatState::Barrage => CombatStateKind::Barrage,
            CombatState::AimLag => CombatStateKind::AimLag,
            CombatState::Disappear => CombatStateKind::Disappear,
        }
    }

    fn cue(&self) -> BossCue {
        match self {
            CombatState::Appear => BossCue::Appear,
            CombatState::Idle { .. } => BossCue::Idle,
            CombatState::AreaDenial(_) => BossCue::AreaDenial,
            CombatState::ReflexMinigame(_) => BossCue::Reflex,
            CombatState::AreaSpawn { .. } => BossCue::AreaSpawn,
            CombatState::Barrage => BossCue::Barrage,
            CombatState::AimLag => BossCue::AimLag,
            CombatState::Disappear => BossCue::Disappear,
        }
    }
}

/// Everything one machine tick reads and writes. The machine never holds
/// engine handles; collaborators are borrowed in per tick.
pub struct MachineCtx<'a> {
    pub dt: f32,
    pub health_percent: f32,
    pub boss_pos: Vec2,
    pub aim: Option<Vec2>,
    pub stage: &'a mut BossStage,
    pub cue: &'a mut CueChannel,
    pub minigame: &'a mut ReflexMinigame,
    pub tuning: &'a BossTuning,
    pub rng: &'a mut ChaCha8Rng,
}

/// Side effects requested by one machine tick, drained by the owning system
/// into messages and commands.
#[derive(Debug, Default)]
pub struct MachineOutput {
    pub player_damage: Vec<(f32, PlayerDamageReason)>,
    pub boss_damage: f32,
    pub stage_changed: Option<BossStage>,
    pub entered: Option<CombatStateKind>,
    pub spawn_minions: bool,
    pub reflex_resolved: Option<ReflexOutcome>,
    pub despawn: bool,
}

/// Orchestrator component. Exclusively owns the active state; all mutation
/// goes through `update` and the internal `change_state`.
#[derive(Component, Debug)]
pub struct BossMachine {
    state: CombatState,
    state_timer: f32,
    /// Completion latch so terminal signals fire exactly once.
    finished: bool,
    entered: bool,
    disappear_requested: bool,
}

impl Default for BossMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl BossMachine {
    pub fn new() -> Self {
        Self {
            state: CombatState::Appear,
            state_timer: 0.0,
            finished: false,
            entered: false,
            disappear_requested: false,
        }
    }

    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn state_kind(&self) -> CombatStateKind {
        self.state.kind()
    }

    pub fn state_timer(&self) -> f32 {
        self.state_timer
    }

    pub fn is_disappearing(&self) -> bool {
        matches!(self.state, CombatState::Disappear)
    }

    /// External interrupt (death, arena teardown). Processed at the top of
    /// the next `update`; repeated requests are no-ops once disappearing.
    pub fn request_disappear(&mut self) {
        self.disappear_requested = true;
    }

    /// Force a specific state. Test/debug hook; runs no enter actions.
    #[cfg(any(test, feature = "dev-tools"))]
    pub fn force_state(&mut self, state: CombatState) {
        self.state = state;
        self.state_timer = 0.0;
        self.finished = false;
        self.entered = true;
    }

    /// One cooperative tick. Timers advance before conditions are read, and
    /// a requested transition takes effect within this same call.
    pub fn update(&mut self, ctx: &mut MachineCtx, out: &mut MachineOutput) {
        if !self.entered {
            self.entered = true;
            self.enter_current(ctx, out);
        }

        if self.disappear_requested {
            self.disappear_requested = false;
            if !self.is_disappearing() {
                self.change_state(CombatState::Disappear, ctx, out);
            }
        }

        self.state_timer += ctx.dt;
        let t = self.state_timer;
        let tuning = ctx.tuning;

        let next = match &mut self.state {
            CombatState::Appear => {
                (t >= tuning.appear_duration).then(|| CombatState::Idle { stage: *ctx.stage })
            }

            CombatState::Idle { stage } => match *stage {
                BossStage::One => {
                    if BossStage::required_for(ctx.health_percent) >= BossStage::Two
                        && *ctx.stage < BossStage::Two
                    {
                        if ctx.stage.try_escalate(BossStage::Two) {
                            out.stage_changed = Some(BossStage::Two);
                        }
                        Some(CombatState::Idle {
                            stage: BossStage::Two,
                        })
                    } else if t >= tuning.idle_duration {
                        if ctx.rng.random_bool(0.5) {
                            Some(CombatState::AreaDenial(AreaDenialRound::new(ctx.rng)))
                        } else {
                            Some(CombatState::ReflexMinigame(ReflexSession::default()))
                        }
                    } else {
                        None
                    }
                }
                BossStage::Two => {
                    if BossStage::required_for(ctx.health_percent) >= BossStage::Three
                        && *ctx.stage < BossStage::Three
                    {
                        if ctx.stage.try_escalate(BossStage::Three) {
                            out.stage_changed = Some(BossStage::Three);
                        }
                        Some(CombatState::AimLag)
                    } else if t >= tuning.idle_duration {
                        Some(CombatState::AreaSpawn { spawned: false })
                    } else {
                        None
                    }
                }
                BossStage::Three => {
                    (t >= tuning.idle_duration).then_some(CombatState::AimLag)
                }
            },

            CombatState::AreaDenial(round) => {
                let sector = match ctx.aim {
                    Some(aim) => aim_sector(ctx.boss_pos, aim),
                    None => FALLBACK_SECTOR,
                };
                let phase_before = round.phase;
                round.update(ctx.dt, sector, &tuning.area_denial, ctx.rng, out);
                // Repeat the degraded-aim warning once per phase, so a source
                // that drops out mid-attack does not degrade silently.
                if round.phase != phase_before && !round.phases_done && ctx.aim.is_none() {
                    warn!("aim source unavailable, area denial falls back to sector 0");
                }

                let total = tuning.area_denial.phase_count as f32 * tuning.area_denial.phase_duration;
                let timed_out = t >= total + tuning.grace_timeout;
                let done = round.phases_done && !ctx.cue.is_playing();
                (done || timed_out)
                    .then(|| CombatState::ReflexMinigame(ReflexSession::default()))
            }

            CombatState::ReflexMinigame(session) => {
                let watchdog_fired = t >= tuning.reflex.duration + tuning.reflex.watchdog_grace;
                if let Some(outcome) = session.try_resolve(ctx.minigame, watchdog_fired) {
                    match outcome {
                        ReflexOutcome::Success => out.boss_damage += tuning.reflex.success_boss_damage,
                        ReflexOutcome::Failure => {
                            out.player_damage.push((
                                tuning.reflex.failure_player_damage,
                                PlayerDamageReason::ReflexFailure,
                            ));
                        }
                    }
                    out.reflex_resolved = Some(outcome);
                    ctx.minigame.stop();
                }

                // Minigame resolution and cue completion are independent
                // gates; the watchdog satisfies both to guarantee progress.
                let done = session.is_resolved() && !ctx.cue.is_playing();
                (done || watchdog_fired).then(|| CombatState::Idle {
                    stage: if *ctx.stage == BossStage::Three {
                        BossStage::Three
                    } else {
                        BossStage::One
                    },
                })
            }

            CombatState::AreaSpawn { spawned } => {
                if !*spawned {
                    *spawned = true;
                    out.spawn_minions = true;
                }
                let done = t >= tuning.area_spawn_duration && !ctx.cue.is_playing();
                let timed_out = t >= tuning.area_spawn_duration + tuning.grace_timeout;
                (done || timed_out).then_some(CombatState::Barrage)
            }

            CombatState::Barrage => {
                let timed_out = t >= tuning.barrage_duration + tuning.grace_timeout;
                if !ctx.cue.is_playing() || timed_out {
                    if BossStage::required_for(ctx.health_percent) >= BossStage::Three {
                        if ctx.stage.try_escalate(BossStage::Three) {
                            out.stage_changed = Some(BossStage::Three);
                        }
                        Some(CombatState::AimLag)
                    } else {
                        Some(CombatState::Idle {
                            stage: BossStage::Two,
                        })
                    }
                } else {
                    None
                }
            }

            CombatState::AimLag => {
                let timed_out = t >= tuning.aim_lag_duration + tuning.grace_timeout;
                (!ctx.cue.is_playing() || timed_out)
                    .then(|| CombatState::AreaDenial(AreaDenialRound::new(ctx.rng)))
            }

            CombatState::Disappear => {
                let timed_out = t >= tuning.disappear_duration + tuning.grace_timeout;
                if !self.finished && (!ctx.cue.is_playing() || timed_out) {
                    self.finished = true;
                    out.despawn = true;
                }
                None
            }
        };

        if let Some(next) = next {
            self.change_state(next, ctx, out);
        }
    }

    /// Exit the current state, swap, and enter the next. Exit bookkeeping is
    /// idempotent and safe even if the state was never fully entered.
    fn change_state(&mut self, next: CombatState, ctx: &mut MachineCtx, out: &mut MachineOutput) {
        self.exit_current(ctx);
        debug!(
            "boss state {:?} -> {:?} after {:.2}s",
            self.state.kind(),
            next.kind(),
            self.state_timer
        );
        self.state = next;
        self.state_timer = 0.0;
        self.finished = false;
        self.entered = true;
        self.enter_current(ctx, out);
    }

    fn exit_current(&mut self, ctx: &mut MachineCtx) {
        // Tear down transient collaborator sessions; dropping the variant
        // discards the rest.
        if let CombatState::ReflexMinigame(_) = self.state {
            ctx.minigame.stop();
        }
    }

    fn enter_current(&mut self, ctx: &mut MachineCtx, out: &mut MachineOutput) {
        ctx.cue.play(self.state.cue());
        out.entered = Some(self.state.kind());

        match &self.state {
            CombatState::ReflexMinigame(_) => {
                ctx.minigame
                    .start(ctx.tuning.reflex.duration, ctx.tuning.reflex.target_count);
            }
            CombatState::AreaDenial(_) => {
                if ctx.aim.is_none() {
                    warn!("aim source unavailable, area denial falls back to sector 0");
                }
            }
            _ => {}
        }
    }
}
