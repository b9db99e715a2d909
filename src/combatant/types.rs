//! The combatant union: heroes and enemies behind one capability set.

use crate::combatant::elements::{Element, ElementalProfile};
use crate::combatant::enemy::Enemy;
use crate::combatant::hero::Hero;
use crate::combatant::stats::{CombatStats, StatKind};
use crate::combatant::status::{self, StatusEffect};
use crate::core::combat_math::{mitigate_damage, scale_damage};
use crate::skills::types::SkillSpec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Heroes,
    Enemies,
}

/// What `take_damage` actually did to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Health removed, after every adjustment and the hp floor at zero.
    pub applied: u32,
    /// The target was immune and took nothing.
    pub immune: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Combatant {
    Hero(Hero),
    Enemy(Enemy),
}

impl Combatant {
    pub fn id(&self) -> &str {
        match self {
            Combatant::Hero(hero) => &hero.id,
            Combatant::Enemy(enemy) => &enemy.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Combatant::Hero(hero) => &hero.name,
            Combatant::Enemy(enemy) => &enemy.name,
        }
    }

    pub fn level(&self) -> u32 {
        match self {
            Combatant::Hero(hero) => hero.level,
            Combatant::Enemy(enemy) => enemy.level,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            Combatant::Hero(_) => Side::Heroes,
            Combatant::Enemy(_) => Side::Enemies,
        }
    }

    pub fn as_hero(&self) -> Option<&Hero> {
        match self {
            Combatant::Hero(hero) => Some(hero),
            Combatant::Enemy(_) => None,
        }
    }

    pub fn as_hero_mut(&mut self) -> Option<&mut Hero> {
        match self {
            Combatant::Hero(hero) => Some(hero),
            Combatant::Enemy(_) => None,
        }
    }

    pub fn as_enemy(&self) -> Option<&Enemy> {
        match self {
            Combatant::Hero(_) => None,
            Combatant::Enemy(enemy) => Some(enemy),
        }
    }

    pub fn max_hp(&self) -> u32 {
        match self {
            Combatant::Hero(hero) => hero.max_hp,
            Combatant::Enemy(enemy) => enemy.max_hp,
        }
    }

    pub fn current_hp(&self) -> u32 {
        match self {
            Combatant::Hero(hero) => hero.current_hp,
            Combatant::Enemy(enemy) => enemy.current_hp,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp() > 0
    }

    pub fn is_stunned(&self) -> bool {
        status::is_stunned(self.status_effects())
    }

    pub fn is_immune(&self) -> bool {
        status::is_immune(self.status_effects())
    }

    pub fn status_effects(&self) -> &[StatusEffect] {
        match self {
            Combatant::Hero(hero) => &hero.status_effects,
            Combatant::Enemy(enemy) => &enemy.status_effects,
        }
    }

    pub fn add_status(&mut self, effect: StatusEffect) {
        match self {
            Combatant::Hero(hero) => hero.status_effects.push(effect),
            Combatant::Enemy(enemy) => enemy.status_effects.push(effect),
        }
    }

    /// Per-cycle status decrement. Returns the names of expired effects.
    pub fn tick_statuses(&mut self) -> Vec<String> {
        match self {
            Combatant::Hero(hero) => status::tick_statuses(&mut hero.status_effects),
            Combatant::Enemy(enemy) => status::tick_statuses(&mut enemy.status_effects),
        }
    }

    /// Base stats plus every additive stat modifier currently active.
    pub fn effective_stats(&self) -> CombatStats {
        let (base, effects) = match self {
            Combatant::Hero(hero) => (hero.stats, hero.status_effects.as_slice()),
            Combatant::Enemy(enemy) => (enemy.stats, enemy.status_effects.as_slice()),
        };
        let mut stats = base;
        for kind in StatKind::all() {
            let bonus = status::stat_bonus(effects, kind);
            if bonus != 0 {
                stats.apply_modifier(kind, bonus);
            }
        }
        stats
    }

    pub fn elements(&self) -> &ElementalProfile {
        match self {
            Combatant::Hero(hero) => &hero.elements,
            Combatant::Enemy(enemy) => &enemy.elements,
        }
    }

    pub fn skills(&self) -> &'static [SkillSpec] {
        match self {
            Combatant::Hero(hero) => hero.skills(),
            Combatant::Enemy(enemy) => enemy.skills(),
        }
    }

    pub fn cooldowns(&self) -> &[u32] {
        match self {
            Combatant::Hero(hero) => &hero.cooldowns,
            Combatant::Enemy(enemy) => &enemy.cooldowns,
        }
    }

    pub fn skill_ready(&self, index: usize) -> bool {
        self.cooldowns().get(index) == Some(&0)
    }

    pub fn set_cooldown(&mut self, index: usize, turns: u32) {
        let cooldowns = match self {
            Combatant::Hero(hero) => &mut hero.cooldowns,
            Combatant::Enemy(enemy) => &mut enemy.cooldowns,
        };
        if let Some(slot) = cooldowns.get_mut(index) {
            *slot = turns;
        }
    }

    /// Per-cycle cooldown decrement.
    pub fn tick_cooldowns(&mut self) {
        let cooldowns = match self {
            Combatant::Hero(hero) => &mut hero.cooldowns,
            Combatant::Enemy(enemy) => &mut enemy.cooldowns,
        };
        for cooldown in cooldowns {
            *cooldown = cooldown.saturating_sub(1);
        }
    }

    /// The one damage pipeline. `base_damage` arrives with any crit or combo
    /// multiplier already applied; from here the order is fixed: immunity,
    /// incoming-damage reduction, defense mitigation, elemental adjustment,
    /// then the hp floor at zero.
    pub fn take_damage(&mut self, base_damage: u32, element: Element) -> DamageOutcome {
        if self.is_immune() {
            return DamageOutcome {
                applied: 0,
                immune: true,
            };
        }
        let reduction = status::damage_reduction_percent(self.status_effects());
        let defense = self.effective_stats().defense;
        let reduced = scale_damage(base_damage, 1.0 - reduction as f64 / 100.0);
        let mitigated = mitigate_damage(reduced, defense);
        let adjusted = self.elements().adjust_damage(mitigated, element);

        let hp = match self {
            Combatant::Hero(hero) => &mut hero.current_hp,
            Combatant::Enemy(enemy) => &mut enemy.current_hp,
        };
        let before = *hp;
        *hp = hp.saturating_sub(adjusted);
        DamageOutcome {
            applied: before - *hp,
            immune: false,
        }
    }

    /// Restore health, clamped at max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let max = self.max_hp();
        let hp = match self {
            Combatant::Hero(hero) => &mut hero.current_hp,
            Combatant::Enemy(enemy) => &mut enemy.current_hp,
        };
        let before = *hp;
        *hp = (*hp + amount).min(max);
        *hp - before
    }
}
