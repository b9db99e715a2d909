//! Combat stat blocks shared by heroes and enemies.

use serde::{Deserialize, Serialize};

/// The six combat stats every combatant carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    CritChance,
    Accuracy,
    Evasion,
}

impl StatKind {
    /// All stats in display order.
    pub fn all() -> [StatKind; 6] {
        [
            StatKind::Attack,
            StatKind::Defense,
            StatKind::Speed,
            StatKind::CritChance,
            StatKind::Accuracy,
            StatKind::Evasion,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::Speed => "Speed",
            StatKind::CritChance => "Crit Chance",
            StatKind::Accuracy => "Accuracy",
            StatKind::Evasion => "Evasion",
        }
    }

    /// Short label for log lines and reports.
    pub fn abbrev(&self) -> &'static str {
        match self {
            StatKind::Attack => "ATK",
            StatKind::Defense => "DEF",
            StatKind::Speed => "SPD",
            StatKind::CritChance => "CRIT",
            StatKind::Accuracy => "ACC",
            StatKind::Evasion => "EVA",
        }
    }
}

/// A full stat block. Crit chance is a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CombatStats {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub crit_chance: u32,
    pub accuracy: u32,
    pub evasion: u32,
}

impl CombatStats {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::CritChance => self.crit_chance,
            StatKind::Accuracy => self.accuracy,
            StatKind::Evasion => self.evasion,
        }
    }

    /// Apply a signed modifier to one stat, flooring at zero.
    pub fn apply_modifier(&mut self, kind: StatKind, amount: i32) {
        let value = (self.get(kind) as i64 + amount as i64).max(0) as u32;
        match kind {
            StatKind::Attack => self.attack = value,
            StatKind::Defense => self.defense = value,
            StatKind::Speed => self.speed = value,
            StatKind::CritChance => self.crit_chance = value,
            StatKind::Accuracy => self.accuracy = value,
            StatKind::Evasion => self.evasion = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_modifier_adds_and_subtracts() {
        let mut stats = CombatStats {
            attack: 10,
            ..Default::default()
        };
        stats.apply_modifier(StatKind::Attack, 5);
        assert_eq!(stats.attack, 15);
        stats.apply_modifier(StatKind::Attack, -8);
        assert_eq!(stats.attack, 7);
    }

    #[test]
    fn test_apply_modifier_floors_at_zero() {
        let mut stats = CombatStats {
            speed: 4,
            ..Default::default()
        };
        stats.apply_modifier(StatKind::Speed, -100);
        assert_eq!(stats.speed, 0, "debuffs cannot push a stat negative");
    }

    #[test]
    fn test_get_matches_fields() {
        let stats = CombatStats {
            attack: 1,
            defense: 2,
            speed: 3,
            crit_chance: 4,
            accuracy: 5,
            evasion: 6,
        };
        for (kind, expected) in StatKind::all().iter().zip(1u32..=6) {
            assert_eq!(stats.get(*kind), expected, "{} mismatch", kind.name());
        }
    }
}
