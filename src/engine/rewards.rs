//! Victory rewards: the experience formula and the loot collaborator seam.

use crate::combatant::enemy::Enemy;
use crate::core::constants::{
    GOLD_PER_ENEMY_LEVEL, GOLD_VARIANCE_PER_LEVEL, TRINKET_DROP_CHANCE, XP_REWARD_PER_LEVEL,
};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Experience for defeating a roster, using each enemy's level at the
/// moment the encounter terminated. The multiplier is applied before the
/// single floor.
pub fn experience_reward(defeated: &[Enemy], xp_multiplier: f64) -> u64 {
    debug_assert!(!defeated.is_empty(), "reward computed for an empty roster");
    let count = defeated.len() as f64;
    let average_level = defeated.iter().map(|e| e.level as f64).sum::<f64>() / count;
    (XP_REWARD_PER_LEVEL * average_level * count * xp_multiplier).floor() as u64
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootBundle {
    pub gold: u32,
    pub items: Vec<String>,
}

/// Item generation lives outside this crate; the engine only asks a
/// generator for a bundle, seeded with the defeated roster. Implementations
/// must not mutate the roster (they receive it by shared reference).
pub trait LootGenerator {
    fn generate(&mut self, defeated: &[Enemy], rng: &mut dyn RngCore) -> LootBundle;
}

/// Built-in stand-in: gold scaled by defeated levels plus an occasional
/// trinket. Callers with a real item system inject their own generator.
#[derive(Debug, Clone, Default)]
pub struct BasicLootTable;

const TRINKETS: &[&str] = &[
    "Cracked Fang",
    "Tarnished Ring",
    "Ragged Banner",
    "Chipped Scale",
    "Hollow Idol",
    "Waxed Cord",
];

impl LootGenerator for BasicLootTable {
    fn generate(&mut self, defeated: &[Enemy], rng: &mut dyn RngCore) -> LootBundle {
        let mut bundle = LootBundle::default();
        for enemy in defeated {
            bundle.gold += enemy.level * GOLD_PER_ENEMY_LEVEL
                + rng.gen_range(0..=enemy.level * GOLD_VARIANCE_PER_LEVEL);
            if rng.gen_bool(TRINKET_DROP_CHANCE) {
                let trinket = TRINKETS[rng.gen_range(0..TRINKETS.len())];
                bundle.items.push(trinket.to_string());
            }
        }
        bundle
    }
}

/// Everything a victory paid out, kept for reading after termination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSummary {
    pub experience: u64,
    pub loot: LootBundle,
}
