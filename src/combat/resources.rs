//! Combat domain: tuning data, RNG, and the crosshair source.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::combat::components::ArmorClass;

/// Crosshair/aim world position supplied by the presentation layer.
/// `None` means the source is unavailable; mechanics degrade to a fallback.
#[derive(Resource, Debug, Default)]
pub struct AimTarget(pub Option<Vec2>);

/// Seedable RNG behind the boss's random decisions (safe-arc rolls, the
/// idle 50/50 attack pick). Seed it for deterministic runs.
#[derive(Resource)]
pub struct BossRng(pub ChaCha8Rng);

impl BossRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for BossRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_os_rng())
    }
}

/// Definition of a body part, configuration data for spawn.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BodyPartDef {
    pub name: String,
    pub armor: ArmorClass,
    pub damage_multiplier: f32,
    pub health: f32,
    pub destructible: bool,
}

/// Tuning for the area-denial attack.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AreaDenialTuning {
    pub phase_count: u8,
    pub phase_duration: f32,
    pub tick_interval: f32,
    pub tick_damage: f32,
}

impl Default for AreaDenialTuning {
    fn default() -> Self {
        Self {
            phase_count: 3,
            phase_duration: 3.0,
            tick_interval: 0.1,
            tick_damage: 4.0,
        }
    }
}

/// Tuning for the reflex-minigame attack. The lump-sum damage amounts are
/// deliberately configuration data, not derived values.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReflexTuning {
    pub duration: f32,
    pub target_count: u32,
    /// Hard watchdog slack past `duration` before the session is force-failed.
    pub watchdog_grace: f32,
    pub success_boss_damage: f32,
    pub failure_player_damage: f32,
}

impl Default for ReflexTuning {
    fn default() -> Self {
        Self {
            duration: 8.0,
            target_count: 5,
            watchdog_grace: 5.0,
            success_boss_damage: 60.0,
            failure_player_damage: 25.0,
        }
    }
}

/// All boss encounter tuning. Loaded from RON when present, otherwise these
/// defaults apply.
#[derive(Resource, Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BossTuning {
    pub max_health: f32,
    pub appear_duration: f32,
    pub idle_duration: f32,
    /// Slack past a state's primary duration before it is force-finished.
    pub grace_timeout: f32,
    pub area_denial: AreaDenialTuning,
    pub reflex: ReflexTuning,
    pub area_spawn_duration: f32,
    pub barrage_duration: f32,
    pub aim_lag_duration: f32,
    pub disappear_duration: f32,
    pub minion_count: u32,
    pub minion_health: f32,
    pub parts: Vec<BodyPartDef>,
}

impl Default for BossTuning {
    fn default() -> Self {
        Self {
            max_health: 300.0,
            appear_duration: 2.0,
            idle_duration: 2.5,
            grace_timeout: 2.0,
            area_denial: AreaDenialTuning::default(),
            reflex: ReflexTuning::default(),
            area_spawn_duration: 2.0,
            barrage_duration: 2.5,
            aim_lag_duration: 1.8,
            disappear_duration: 2.0,
            minion_count: 3,
            minion_health: 40.0,
            parts: vec![
                BodyPartDef {
                    name: "crown".to_string(),
                    armor: ArmorClass::WeakPoint,
                    damage_multiplier: 1.0,
                    health: 60.0,
                    destructible: true,
                },
                BodyPartDef {
                    name: "left_claw".to_string(),
                    armor: ArmorClass::Medium,
                    damage_multiplier: 1.0,
                    health: 80.0,
                    destructible: true,
                },
                BodyPartDef {
                    name: "right_claw".to_string(),
                    armor: ArmorClass::Medium,
                    damage_multiplier: 1.0,
                    health: 80.0,
                    destructible: true,
                },
                BodyPartDef {
                    name: "vents".to_string(),
                    armor: ArmorClass::Light,
                    damage_multiplier: 1.2,
                    health: 90.0,
                    destructible: true,
                },
                BodyPartDef {
                    name: "carapace".to_string(),
                    armor: ArmorClass::Heavy,
                    damage_multiplier: 1.0,
                    health: 120.0,
                    destructible: false,
                },
                BodyPartDef {
                    name: "anchor".to_string(),
                    armor: ArmorClass::Unattackable,
                    damage_multiplier: 1.0,
                    health: 1.0,
                    destructible: false,
                },
            ],
        }
    }
}

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text.
pub fn parse_tuning(contents: &str) -> Result<BossTuning, TuningLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: "<inline>".to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load tuning from a RON file.
pub fn load_tuning(path: &Path) -> Result<BossTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;
    ron_options()
        .from_str(&contents)
        .map_err(|e| TuningLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Startup: replace the default tuning with `assets/data/boss_tuning.ron`
/// when the file exists and parses; otherwise keep defaults.
pub(crate) fn load_boss_tuning(mut tuning: ResMut<BossTuning>) {
    let path = Path::new("assets/data/boss_tuning.ron");
    if !path.exists() {
        debug!("no boss tuning file at {}, using defaults", path.display());
        return;
    }
    match load_tuning(path) {
        Ok(loaded) => {
            info!("loaded boss tuning from {}", path.display());
            *tuning = loaded;
        }
        Err(e) => warn!("{}; keeping default tuning", e),
    }
}
