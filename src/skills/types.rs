//! Ability specs: a closed set of effects with static per-archetype lists.

use crate::combatant::elements::Element;
use crate::combatant::stats::StatKind;
use serde::{Deserialize, Serialize};

/// Everything an ability can do. Power values multiply the caster's attack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SkillEffect {
    /// Single-target damage. `sure_hit` skips the accuracy roll.
    Damage {
        power: f64,
        element: Element,
        sure_hit: bool,
    },
    /// Single-target damage that heals the caster for a fraction of the
    /// damage actually dealt.
    DrainDamage {
        power: f64,
        element: Element,
        heal_fraction: f64,
    },
    /// Damage to every living opponent, rolled per target.
    AreaDamage { power: f64, element: Element },
    /// Restore health to one ally.
    Heal { power: f64 },
    /// Restore health to the whole living party.
    GroupHeal { power: f64 },
    /// Party-wide additive stat buff.
    Buff {
        stat: StatKind,
        amount: i32,
        duration: u32,
    },
    /// Single-target damage that applies a stat debuff on a hit.
    Debuff {
        power: f64,
        element: Element,
        stat: StatKind,
        amount: i32,
        duration: u32,
    },
    /// Single-target damage that stuns on a hit.
    StunStrike {
        power: f64,
        element: Element,
        duration: u32,
    },
    /// Party-wide incoming-damage reduction.
    Shield { reduction_percent: u32, duration: u32 },
    /// Party-wide immunity to damage.
    Sanctuary { duration: u32 },
}

/// Who an ability can be aimed at. Derived from the effect variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRule {
    OneEnemy,
    AllEnemies,
    OneAlly,
    WholeParty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Turns before the ability is usable again after a cast.
    pub cooldown: u32,
    pub effect: SkillEffect,
}

impl SkillSpec {
    pub fn target_rule(&self) -> TargetRule {
        match self.effect {
            SkillEffect::Damage { .. }
            | SkillEffect::DrainDamage { .. }
            | SkillEffect::Debuff { .. }
            | SkillEffect::StunStrike { .. } => TargetRule::OneEnemy,
            SkillEffect::AreaDamage { .. } => TargetRule::AllEnemies,
            SkillEffect::Heal { .. } => TargetRule::OneAlly,
            SkillEffect::GroupHeal { .. }
            | SkillEffect::Buff { .. }
            | SkillEffect::Shield { .. }
            | SkillEffect::Sanctuary { .. } => TargetRule::WholeParty,
        }
    }

    /// Abilities the auto-battler treats as offense.
    pub fn is_damaging(&self) -> bool {
        matches!(
            self.effect,
            SkillEffect::Damage { .. }
                | SkillEffect::DrainDamage { .. }
                | SkillEffect::AreaDamage { .. }
                | SkillEffect::Debuff { .. }
                | SkillEffect::StunStrike { .. }
        )
    }

    pub fn is_heal(&self) -> bool {
        matches!(
            self.effect,
            SkillEffect::Heal { .. } | SkillEffect::GroupHeal { .. }
        )
    }

    /// Abilities the auto-battler casts on the party when no offense is up.
    pub fn is_buff(&self) -> bool {
        matches!(
            self.effect,
            SkillEffect::Buff { .. } | SkillEffect::Shield { .. } | SkillEffect::Sanctuary { .. }
        )
    }
}
