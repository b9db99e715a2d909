//! Shared combat math for the encounter engine and simulator.
//!
//! These pure functions calculate combat outcomes without side effects.
//! Every randomized roll takes the caller's rng so battles replay exactly
//! under a seeded generator.

use crate::core::constants::*;
use rand::Rng;

/// Chance to hit, in percent, from attacker accuracy vs defender evasion.
///
/// # Arguments
/// * `accuracy` - Attacker's accuracy stat
/// * `evasion` - Defender's evasion stat
///
/// # Returns
/// Percentage clamped to [HIT_CHANCE_MIN, HIT_CHANCE_MAX]
pub fn hit_chance(accuracy: u32, evasion: u32) -> u32 {
    let spread = (accuracy as i32 - evasion as i32) / ACCURACY_SPREAD_DIVISOR;
    (HIT_CHANCE_BASE + spread).clamp(HIT_CHANCE_MIN, HIT_CHANCE_MAX) as u32
}

/// Roll to hit. A uniform draw in [0,100) below the chance is a hit.
pub fn roll_hit(accuracy: u32, evasion: u32, rng: &mut impl Rng) -> bool {
    let roll = rng.gen_range(0..100);
    roll < hit_chance(accuracy, evasion)
}

/// Roll for critical hit.
///
/// # Arguments
/// * `crit_chance_percent` - Chance to crit (0-100+)
/// * `rng` - Random number generator
///
/// # Returns
/// true if crit, false otherwise
pub fn roll_crit(crit_chance_percent: u32, rng: &mut impl Rng) -> bool {
    let roll = rng.gen_range(0..100);
    roll < crit_chance_percent
}

/// Scale a damage figure by a multiplier, flooring the result.
pub fn scale_damage(base: u32, multiplier: f64) -> u32 {
    (base as f64 * multiplier).floor() as u32
}

/// Reduce incoming damage by defense: max(1, base - defense/2).
///
/// Applied before elemental adjustment. Crit multipliers act on the
/// pre-mitigation base, never here.
pub fn mitigate_damage(base: u32, defense: u32) -> u32 {
    base.saturating_sub(defense / DEFENSE_MITIGATION_DIVISOR)
        .max(MINIMUM_DAMAGE)
}

/// Combo damage multiplier for a streak standing going into an attack.
///
/// The raw streak counter is unbounded; only the multiplier caps.
pub fn combo_multiplier(streak: u32) -> f64 {
    1.0 + COMBO_DAMAGE_STEP * streak.min(COMBO_STREAK_CAP) as f64
}

/// Initiative for one turn cycle: speed plus a uniform roll.
pub fn initiative_roll(speed: u32, rng: &mut impl Rng) -> u32 {
    speed + rng.gen_range(0..=INITIATIVE_DIE)
}
