//! Headless combat core for a multi-phase boss encounter.
//!
//! The crate owns decision-making only: which combat state is active, when it
//! changes, what a hit is worth against the boss's body parts, and when
//! sub-mechanics (area denial, the reflex minigame, minion spawning) start and
//! stop. Presentation concerns live in external collaborators expressed as
//! resources, components, and messages.

pub mod boss;
pub mod combat;
pub mod cues;
pub mod minigame;
pub mod spawning;

pub use boss::{
    BossDespawnedEvent, BossMachine, BossPhaseChangedEvent, BossPlugin, CombatState,
    CombatStateKind, ForceDisappearEvent, spawn_boss,
};
pub use combat::{
    AimTarget, ArmorClass, BodyPart, BodyParts, Boss, BossRng, BossStage, BossTuning, CombatPlugin,
    Health, Minion, Player,
};
pub use cues::{BossCue, CueChannel, CuesPlugin};
pub use minigame::{MinigamePlugin, ReflexMinigame, ReflexOutcome, ReflexResolvedEvent};
pub use spawning::{SpawnRegistry, SpawningPlugin};
