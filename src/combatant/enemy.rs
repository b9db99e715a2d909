//! Hostile combatants: species tables, level scaling, and attack policy.

use crate::combatant::elements::{Element, ElementalProfile};
use crate::combatant::stats::CombatStats;
use crate::combatant::status::StatusEffect;
use crate::core::constants::ENEMY_SKILL_CHANCE;
use crate::skills::catalog::species_skills;
use crate::skills::types::SkillSpec;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Goblin,
    OrcBrute,
    Skeleton,
    FlameImp,
    Wraith,
    DragonWhelp,
}

impl Species {
    pub fn all() -> [Species; 6] {
        [
            Species::Goblin,
            Species::OrcBrute,
            Species::Skeleton,
            Species::FlameImp,
            Species::Wraith,
            Species::DragonWhelp,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Goblin => "Goblin",
            Species::OrcBrute => "Orc Brute",
            Species::Skeleton => "Skeleton",
            Species::FlameImp => "Flame Imp",
            Species::Wraith => "Wraith",
            Species::DragonWhelp => "Dragon Whelp",
        }
    }

    /// Level 1 stat block and max health.
    fn base_kit(&self) -> (CombatStats, u32) {
        match self {
            Species::Goblin => (
                CombatStats {
                    attack: 8,
                    defense: 3,
                    speed: 10,
                    crit_chance: 5,
                    accuracy: 45,
                    evasion: 15,
                },
                40,
            ),
            Species::OrcBrute => (
                CombatStats {
                    attack: 12,
                    defense: 8,
                    speed: 6,
                    crit_chance: 5,
                    accuracy: 40,
                    evasion: 5,
                },
                70,
            ),
            Species::Skeleton => (
                CombatStats {
                    attack: 9,
                    defense: 5,
                    speed: 8,
                    crit_chance: 10,
                    accuracy: 45,
                    evasion: 10,
                },
                50,
            ),
            Species::FlameImp => (
                CombatStats {
                    attack: 11,
                    defense: 3,
                    speed: 12,
                    crit_chance: 15,
                    accuracy: 50,
                    evasion: 20,
                },
                45,
            ),
            Species::Wraith => (
                CombatStats {
                    attack: 10,
                    defense: 4,
                    speed: 11,
                    crit_chance: 10,
                    accuracy: 55,
                    evasion: 25,
                },
                55,
            ),
            Species::DragonWhelp => (
                CombatStats {
                    attack: 14,
                    defense: 10,
                    speed: 9,
                    crit_chance: 10,
                    accuracy: 50,
                    evasion: 10,
                },
                110,
            ),
        }
    }

    /// Per-level gains above level 1: (attack, defense, max hp).
    fn growth(&self) -> (u32, u32, u32) {
        match self {
            Species::Goblin => (2, 1, 8),
            Species::OrcBrute => (3, 2, 12),
            Species::Skeleton => (2, 2, 9),
            Species::FlameImp => (3, 1, 8),
            Species::Wraith => (3, 1, 9),
            Species::DragonWhelp => (4, 3, 16),
        }
    }

    fn elements(&self) -> ElementalProfile {
        match self {
            Species::Goblin => ElementalProfile::neutral().weak_to(Element::Fire),
            Species::OrcBrute => ElementalProfile::neutral()
                .resist(Element::Physical, 20)
                .weak_to(Element::Frost),
            Species::Skeleton => ElementalProfile::neutral()
                .resist(Element::Frost, 30)
                .resist(Element::Shadow, 40)
                .weak_to(Element::Holy)
                .weak_to(Element::Fire),
            Species::FlameImp => ElementalProfile::neutral()
                .resist(Element::Fire, 60)
                .weak_to(Element::Frost),
            Species::Wraith => ElementalProfile::neutral()
                .resist(Element::Physical, 50)
                .weak_to(Element::Holy),
            Species::DragonWhelp => ElementalProfile::neutral()
                .resist(Element::Fire, 40)
                .resist(Element::Physical, 10)
                .weak_to(Element::Frost),
        }
    }
}

/// What an enemy decided to do with its turn. Indices address the shared
/// encounter roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyChoice {
    Attack { target: usize },
    Skill { index: usize, target: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub level: u32,
    pub stats: CombatStats,
    pub max_hp: u32,
    pub current_hp: u32,
    pub elements: ElementalProfile,
    #[serde(default)]
    pub status_effects: Vec<StatusEffect>,
    #[serde(default)]
    pub cooldowns: Vec<u32>,
}

impl Enemy {
    pub fn spawn(species: Species, level: u32) -> Self {
        let (mut stats, mut max_hp) = species.base_kit();
        let (attack, defense, hp) = species.growth();
        let steps = level.saturating_sub(1);
        stats.attack += attack * steps;
        stats.defense += defense * steps;
        max_hp += hp * steps;
        Self {
            id: Uuid::new_v4().to_string(),
            name: species.name().to_string(),
            species,
            level: level.max(1),
            stats,
            max_hp,
            current_hp: max_hp,
            elements: species.elements(),
            status_effects: Vec::new(),
            cooldowns: vec![0; species_skills(species).len()],
        }
    }

    pub fn skills(&self) -> &'static [SkillSpec] {
        species_skills(self.species)
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Restore to a fresh spawn state at encounter start.
    pub fn full_reset(&mut self) {
        self.current_hp = self.max_hp;
        self.status_effects.clear();
        for cooldown in &mut self.cooldowns {
            *cooldown = 0;
        }
    }

    /// Built-in attack policy: favor the first ready ability, otherwise a
    /// basic attack, against a uniformly random living target.
    pub fn choose_action(&self, living_targets: &[usize], rng: &mut impl Rng) -> EnemyChoice {
        debug_assert!(
            !living_targets.is_empty(),
            "enemy AI asked to act with no living targets"
        );
        let target = living_targets[rng.gen_range(0..living_targets.len())];
        let ready = self.cooldowns.iter().position(|cd| *cd == 0);
        if let Some(index) = ready {
            if rng.gen_bool(ENEMY_SKILL_CHANCE) {
                return EnemyChoice::Skill { index, target };
            }
        }
        EnemyChoice::Attack { target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_scales_with_level() {
        let runt = Enemy::spawn(Species::Goblin, 1);
        let veteran = Enemy::spawn(Species::Goblin, 4);
        assert_eq!(veteran.stats.attack, runt.stats.attack + 6);
        assert_eq!(veteran.stats.defense, runt.stats.defense + 3);
        assert_eq!(veteran.max_hp, runt.max_hp + 24);
        assert_eq!(veteran.current_hp, veteran.max_hp);
    }

    #[test]
    fn test_full_reset_restores_spawn_state() {
        let mut enemy = Enemy::spawn(Species::OrcBrute, 2);
        enemy.current_hp = 5;
        enemy.cooldowns[0] = 3;
        enemy.status_effects.push(StatusEffect::new(
            "Crippling Dart",
            2,
            crate::combatant::status::StatusCategory::Debuff,
            crate::combatant::status::StatusPayload::StatModifier {
                stat: crate::combatant::stats::StatKind::Speed,
                amount: -8,
            },
        ));

        enemy.full_reset();

        assert_eq!(enemy.current_hp, enemy.max_hp);
        assert!(enemy.status_effects.is_empty());
        assert!(enemy.cooldowns.iter().all(|cd| *cd == 0));
    }

    #[test]
    fn test_choose_action_targets_living_only() {
        let enemy = Enemy::spawn(Species::Goblin, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let living = vec![2usize, 3];
        for _ in 0..50 {
            let choice = enemy.choose_action(&living, &mut rng);
            let target = match choice {
                EnemyChoice::Attack { target } => target,
                EnemyChoice::Skill { target, .. } => target,
            };
            assert!(living.contains(&target));
        }
    }

    #[test]
    fn test_choose_action_skips_cooled_down_skills() {
        let mut enemy = Enemy::spawn(Species::Wraith, 1);
        for cooldown in &mut enemy.cooldowns {
            *cooldown = 2;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..50 {
            let choice = enemy.choose_action(&[0], &mut rng);
            assert!(
                matches!(choice, EnemyChoice::Attack { .. }),
                "no skill should be usable while on cooldown"
            );
        }
    }

    #[test]
    fn test_choose_action_uses_ready_skill_sometimes() {
        let enemy = Enemy::spawn(Species::Wraith, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let used_skill = (0..100).any(|_| {
            matches!(
                enemy.choose_action(&[0], &mut rng),
                EnemyChoice::Skill { .. }
            )
        });
        assert!(used_skill, "a ready skill should be chosen at the usual rate");
    }
}
