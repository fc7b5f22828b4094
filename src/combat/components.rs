//! Combat domain: health, body parts, and entity markers.

use bevy::prelude::*;

use crate::combat::resources::BodyPartDef;

/// Marks the boss entity.
#[derive(Component, Debug)]
pub struct Boss;

/// Marks the player-equivalent entity (the damage sink for boss mechanics).
#[derive(Component, Debug)]
pub struct Player;

/// Marks auxiliary hostile entities spawned by the boss.
#[derive(Component, Debug)]
pub struct Minion;

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, clamped so health never goes below zero.
    /// Returns the amount actually removed.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

/// Armor category of a body part. Controls a fixed damage multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ArmorClass {
    WeakPoint,
    Light,
    Medium,
    Heavy,
    Unattackable,
}

impl ArmorClass {
    /// Fixed multiplier table; not tunable.
    pub fn multiplier(&self) -> f32 {
        match self {
            ArmorClass::WeakPoint => 1.5,
            ArmorClass::Light => 1.0,
            ArmorClass::Medium => 0.8,
            ArmorClass::Heavy => 0.5,
            ArmorClass::Unattackable => 0.0,
        }
    }
}

/// A single targetable sub-component of the boss.
#[derive(Debug, Clone)]
pub struct BodyPart {
    pub name: String,
    pub armor: ArmorClass,
    pub damage_multiplier: f32,
    pub health: f32,
    pub max_health: f32,
    pub destructible: bool,
    /// One-shot latch; a destroyed part scores zero forever after.
    pub destroyed: bool,
}

impl BodyPart {
    pub fn from_def(def: &BodyPartDef) -> Self {
        Self {
            name: def.name.clone(),
            armor: def.armor,
            damage_multiplier: def.damage_multiplier,
            health: def.health,
            max_health: def.health,
            destructible: def.destructible,
            destroyed: false,
        }
    }

    /// Final damage a raw hit against this part is worth. Destroyed parts
    /// behave as unattackable.
    pub fn score(&self, raw_damage: f32) -> f32 {
        if self.destroyed {
            return 0.0;
        }
        raw_damage * self.armor.multiplier() * self.damage_multiplier
    }

    /// Sink scored damage into the part's own health pool, if destructible.
    /// Returns true exactly once, on the tick the part crosses zero.
    pub fn absorb(&mut self, damage: f32) -> bool {
        if !self.destructible || self.destroyed {
            return false;
        }
        self.health -= damage;
        if self.health <= 0.0 {
            self.health = 0.0;
            self.destroyed = true;
            true
        } else {
            false
        }
    }
}

/// Ordered body parts owned by the boss; created at spawn, indexed by hits.
#[derive(Component, Debug, Clone)]
pub struct BodyParts(pub Vec<BodyPart>);

impl BodyParts {
    pub fn from_defs(defs: &[BodyPartDef]) -> Self {
        Self(defs.iter().map(BodyPart::from_def).collect())
    }
}
