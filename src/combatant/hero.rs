//! Player characters: classes, leveling, and the per-encounter combat reset.

use crate::combatant::elements::ElementalProfile;
use crate::combatant::stats::CombatStats;
use crate::combatant::status::StatusEffect;
use crate::core::constants::{XP_CURVE_BASE, XP_CURVE_EXPONENT};
use crate::skills::catalog::class_skills;
use crate::skills::types::SkillSpec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    Warrior,
    Mage,
    Cleric,
    Rogue,
}

impl HeroClass {
    pub fn all() -> [HeroClass; 4] {
        [
            HeroClass::Warrior,
            HeroClass::Mage,
            HeroClass::Cleric,
            HeroClass::Rogue,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Mage => "Mage",
            HeroClass::Cleric => "Cleric",
            HeroClass::Rogue => "Rogue",
        }
    }

    /// Healer classes are the only ones whose auto-battle AI picks heals.
    pub fn is_healer(&self) -> bool {
        matches!(self, HeroClass::Cleric)
    }

    /// Level 1 stat block and max health.
    fn base_kit(&self) -> (CombatStats, u32) {
        match self {
            HeroClass::Warrior => (
                CombatStats {
                    attack: 12,
                    defense: 10,
                    speed: 8,
                    crit_chance: 10,
                    accuracy: 50,
                    evasion: 10,
                },
                120,
            ),
            HeroClass::Mage => (
                CombatStats {
                    attack: 14,
                    defense: 4,
                    speed: 9,
                    crit_chance: 15,
                    accuracy: 55,
                    evasion: 12,
                },
                80,
            ),
            HeroClass::Cleric => (
                CombatStats {
                    attack: 10,
                    defense: 8,
                    speed: 7,
                    crit_chance: 5,
                    accuracy: 50,
                    evasion: 10,
                },
                100,
            ),
            HeroClass::Rogue => (
                CombatStats {
                    attack: 13,
                    defense: 5,
                    speed: 14,
                    crit_chance: 25,
                    accuracy: 60,
                    evasion: 25,
                },
                90,
            ),
        }
    }

    /// Per-level gains: (attack, defense, speed, max hp).
    fn growth(&self) -> (u32, u32, u32, u32) {
        match self {
            HeroClass::Warrior => (3, 2, 1, 12),
            HeroClass::Mage => (4, 1, 1, 7),
            HeroClass::Cleric => (2, 2, 1, 10),
            HeroClass::Rogue => (3, 1, 2, 8),
        }
    }
}

/// One level gained from an experience award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub new_level: u32,
}

/// XP required to go from `level` to `level + 1`.
pub fn xp_for_next_level(level: u32) -> u64 {
    (XP_CURVE_BASE * (level as f64).powf(XP_CURVE_EXPONENT)) as u64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub class: HeroClass,
    pub level: u32,
    /// Progress into the current level, not a lifetime total.
    pub experience: u64,
    pub stats: CombatStats,
    pub max_hp: u32,
    pub current_hp: u32,
    pub elements: ElementalProfile,
    #[serde(default)]
    pub status_effects: Vec<StatusEffect>,
    #[serde(default)]
    pub cooldowns: Vec<u32>,
}

impl Hero {
    pub fn new(name: &str, class: HeroClass) -> Self {
        let (stats, max_hp) = class.base_kit();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            class,
            level: 1,
            experience: 0,
            stats,
            max_hp,
            current_hp: max_hp,
            elements: ElementalProfile::neutral(),
            status_effects: Vec::new(),
            cooldowns: vec![0; class_skills(class).len()],
        }
    }

    /// A hero pre-leveled for tests and the simulator, at full health.
    pub fn with_level(name: &str, class: HeroClass, level: u32) -> Self {
        let mut hero = Self::new(name, class);
        while hero.level < level {
            hero.level += 1;
            hero.apply_growth();
        }
        hero.current_hp = hero.max_hp;
        hero
    }

    pub fn skills(&self) -> &'static [SkillSpec] {
        class_skills(self.class)
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Award experience and resolve any level-ups it pays for.
    pub fn gain_experience(&mut self, amount: u64) -> Vec<LevelUp> {
        self.experience += amount;
        let mut level_ups = Vec::new();
        let mut needed = xp_for_next_level(self.level);
        while self.experience >= needed {
            self.experience -= needed;
            self.level += 1;
            self.apply_growth();
            level_ups.push(LevelUp {
                new_level: self.level,
            });
            needed = xp_for_next_level(self.level);
        }
        level_ups
    }

    fn apply_growth(&mut self) {
        let (attack, defense, speed, hp) = self.class.growth();
        self.stats.attack += attack;
        self.stats.defense += defense;
        self.stats.speed += speed;
        self.max_hp += hp;
        // Leveling toughens, it does not heal
        self.current_hp = (self.current_hp + hp).min(self.max_hp);
    }

    /// Clear per-encounter transient state. Level, experience, and health
    /// carry over between encounters untouched.
    pub fn reset_combat_state(&mut self) {
        self.status_effects.clear();
        for cooldown in &mut self.cooldowns {
            *cooldown = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_curve_matches_formula() {
        assert_eq!(xp_for_next_level(1), 100);
        assert_eq!(xp_for_next_level(4), 800);
        // 100 * 9^1.5 = 2700
        assert_eq!(xp_for_next_level(9), 2700);
    }

    #[test]
    fn test_gain_experience_levels_up() {
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        let ups = hero.gain_experience(99);
        assert!(ups.is_empty());
        assert_eq!(hero.level, 1);

        let ups = hero.gain_experience(1);
        assert_eq!(ups.len(), 1);
        assert_eq!(ups[0].new_level, 2);
        assert_eq!(hero.experience, 0, "level cost is deducted");
    }

    #[test]
    fn test_gain_experience_multiple_levels() {
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        // 100 (1->2) + 282 (2->3) = 382, leaving 18 toward level 4
        let ups = hero.gain_experience(400);
        assert_eq!(ups.len(), 2);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.experience, 18);
    }

    #[test]
    fn test_growth_applies_per_level() {
        let base = Hero::new("Brand", HeroClass::Warrior);
        let grown = Hero::with_level("Brand", HeroClass::Warrior, 3);
        assert_eq!(grown.stats.attack, base.stats.attack + 6);
        assert_eq!(grown.stats.defense, base.stats.defense + 4);
        assert_eq!(grown.max_hp, base.max_hp + 24);
        assert_eq!(grown.current_hp, grown.max_hp);
    }

    #[test]
    fn test_level_up_does_not_full_heal() {
        let mut hero = Hero::new("Brand", HeroClass::Warrior);
        hero.current_hp = 10;
        hero.gain_experience(100);
        let (_, _, _, hp_gain) = HeroClass::Warrior.growth();
        assert_eq!(hero.current_hp, 10 + hp_gain);
        assert!(hero.current_hp < hero.max_hp);
    }

    #[test]
    fn test_reset_combat_state_touches_only_transients() {
        let mut hero = Hero::with_level("Brand", HeroClass::Warrior, 5);
        hero.experience = 77;
        hero.current_hp = 42;
        hero.cooldowns[0] = 3;
        hero.status_effects.push(StatusEffect::new(
            "War Cry",
            2,
            crate::combatant::status::StatusCategory::Buff,
            crate::combatant::status::StatusPayload::StatModifier {
                stat: crate::combatant::stats::StatKind::Attack,
                amount: 8,
            },
        ));

        hero.reset_combat_state();

        assert_eq!(hero.level, 5);
        assert_eq!(hero.experience, 77);
        assert_eq!(hero.current_hp, 42, "health persists between encounters");
        assert!(hero.status_effects.is_empty());
        assert!(hero.cooldowns.iter().all(|cd| *cd == 0));
    }

    #[test]
    fn test_cooldown_slots_match_skill_list() {
        for class in HeroClass::all() {
            let hero = Hero::new("Test", class);
            assert_eq!(hero.cooldowns.len(), hero.skills().len());
        }
    }
}
