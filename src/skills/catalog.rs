//! Static ability lists per hero class and enemy species.
//!
//! Combatants store only cooldown counters, parallel to these lists by
//! index. The lists themselves never change at runtime.

use super::types::{SkillEffect, SkillSpec};
use crate::combatant::elements::Element;
use crate::combatant::enemy::Species;
use crate::combatant::hero::HeroClass;
use crate::combatant::stats::StatKind;

pub fn class_skills(class: HeroClass) -> &'static [SkillSpec] {
    match class {
        HeroClass::Warrior => WARRIOR_SKILLS,
        HeroClass::Mage => MAGE_SKILLS,
        HeroClass::Cleric => CLERIC_SKILLS,
        HeroClass::Rogue => ROGUE_SKILLS,
    }
}

pub fn species_skills(species: Species) -> &'static [SkillSpec] {
    match species {
        Species::Goblin => GOBLIN_SKILLS,
        Species::OrcBrute => ORC_BRUTE_SKILLS,
        Species::Skeleton => SKELETON_SKILLS,
        Species::FlameImp => FLAME_IMP_SKILLS,
        Species::Wraith => WRAITH_SKILLS,
        Species::DragonWhelp => DRAGON_WHELP_SKILLS,
    }
}

const WARRIOR_SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Power Strike",
        description: "A heavy overhead blow.",
        cooldown: 2,
        effect: SkillEffect::Damage {
            power: 1.8,
            element: Element::Physical,
            sure_hit: false,
        },
    },
    SkillSpec {
        name: "War Cry",
        description: "Rallies the party, raising attack.",
        cooldown: 5,
        effect: SkillEffect::Buff {
            stat: StatKind::Attack,
            amount: 8,
            duration: 3,
        },
    },
    SkillSpec {
        name: "Shield Wall",
        description: "The party braces behind raised shields.",
        cooldown: 6,
        effect: SkillEffect::Shield {
            reduction_percent: 30,
            duration: 2,
        },
    },
];

const MAGE_SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Fireball",
        description: "Hurls a blazing orb at one foe.",
        cooldown: 2,
        effect: SkillEffect::Damage {
            power: 2.0,
            element: Element::Fire,
            sure_hit: false,
        },
    },
    SkillSpec {
        name: "Blizzard",
        description: "Freezing winds batter every foe.",
        cooldown: 4,
        effect: SkillEffect::AreaDamage {
            power: 1.2,
            element: Element::Frost,
        },
    },
    SkillSpec {
        name: "Thunder Snap",
        description: "A crack of lightning that dazes the target through its next turn.",
        cooldown: 5,
        effect: SkillEffect::StunStrike {
            power: 1.0,
            element: Element::Lightning,
            duration: 2,
        },
    },
];

const CLERIC_SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Mend Wounds",
        description: "Closes an ally's wounds.",
        cooldown: 2,
        effect: SkillEffect::Heal { power: 2.0 },
    },
    SkillSpec {
        name: "Smite",
        description: "Unerring holy light. Never misses.",
        cooldown: 3,
        effect: SkillEffect::Damage {
            power: 1.6,
            element: Element::Holy,
            sure_hit: true,
        },
    },
    SkillSpec {
        name: "Prayer of Light",
        description: "A warm glow mends the whole party.",
        cooldown: 5,
        effect: SkillEffect::GroupHeal { power: 1.2 },
    },
    SkillSpec {
        name: "Sanctuary",
        description: "A ward of faith. The party takes no damage for a turn.",
        cooldown: 8,
        effect: SkillEffect::Sanctuary { duration: 1 },
    },
];

const ROGUE_SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Backstab",
        description: "A vicious strike from behind.",
        cooldown: 3,
        effect: SkillEffect::Damage {
            power: 2.2,
            element: Element::Physical,
            sure_hit: false,
        },
    },
    SkillSpec {
        name: "Crippling Dart",
        description: "Pierces a leg joint, slowing the target.",
        cooldown: 4,
        effect: SkillEffect::Debuff {
            power: 1.2,
            element: Element::Physical,
            stat: StatKind::Speed,
            amount: -8,
            duration: 3,
        },
    },
    SkillSpec {
        name: "Smoke Veil",
        description: "A smoke cloud hides the party.",
        cooldown: 5,
        effect: SkillEffect::Buff {
            stat: StatKind::Evasion,
            amount: 25,
            duration: 2,
        },
    },
];

const GOBLIN_SKILLS: &[SkillSpec] = &[SkillSpec {
    name: "Frenzied Jab",
    description: "A flurry of wild stabs.",
    cooldown: 3,
    effect: SkillEffect::Damage {
        power: 1.4,
        element: Element::Physical,
        sure_hit: false,
    },
}];

const ORC_BRUTE_SKILLS: &[SkillSpec] = &[SkillSpec {
    name: "Crushing Blow",
    description: "A club swing that flattens armor.",
    cooldown: 4,
    effect: SkillEffect::Damage {
        power: 1.8,
        element: Element::Physical,
        sure_hit: false,
    },
}];

const SKELETON_SKILLS: &[SkillSpec] = &[SkillSpec {
    name: "Bone Rattle",
    description: "An unnerving clatter that saps strength.",
    cooldown: 4,
    effect: SkillEffect::Debuff {
        power: 1.0,
        element: Element::Shadow,
        stat: StatKind::Attack,
        amount: -5,
        duration: 2,
    },
}];

const FLAME_IMP_SKILLS: &[SkillSpec] = &[SkillSpec {
    name: "Cinder Bolt",
    description: "Spits a searing mote of flame.",
    cooldown: 3,
    effect: SkillEffect::Damage {
        power: 1.6,
        element: Element::Fire,
        sure_hit: false,
    },
}];

const WRAITH_SKILLS: &[SkillSpec] = &[SkillSpec {
    name: "Life Drain",
    description: "Siphons the victim's vitality into the wraith.",
    cooldown: 3,
    effect: SkillEffect::DrainDamage {
        power: 1.5,
        element: Element::Shadow,
        heal_fraction: 0.5,
    },
}];

const DRAGON_WHELP_SKILLS: &[SkillSpec] = &[
    SkillSpec {
        name: "Ember Breath",
        description: "A cone of fire washes over the party.",
        cooldown: 4,
        effect: SkillEffect::AreaDamage {
            power: 1.3,
            element: Element::Fire,
        },
    },
    SkillSpec {
        name: "Tail Sweep",
        description: "A sweeping tail strike that leaves the victim reeling.",
        cooldown: 5,
        effect: SkillEffect::StunStrike {
            power: 1.1,
            element: Element::Physical,
            duration: 2,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn every_list() -> Vec<&'static [SkillSpec]> {
        let mut lists: Vec<&'static [SkillSpec]> = HeroClass::all()
            .iter()
            .map(|class| class_skills(*class))
            .collect();
        lists.extend(Species::all().iter().map(|species| species_skills(*species)));
        lists
    }

    #[test]
    fn test_every_archetype_has_skills() {
        for list in every_list() {
            assert!(!list.is_empty());
        }
    }

    #[test]
    fn test_skill_names_unique_within_list() {
        for list in every_list() {
            for (i, a) in list.iter().enumerate() {
                for b in &list[i + 1..] {
                    assert_ne!(a.name, b.name, "duplicate skill name {}", a.name);
                }
            }
        }
    }

    #[test]
    fn test_cooldowns_are_nonzero() {
        // A zero cooldown would let the auto-battler spam one ability forever
        for list in every_list() {
            for spec in list {
                assert!(spec.cooldown > 0, "{} has no cooldown", spec.name);
            }
        }
    }

    #[test]
    fn test_healer_class_owns_the_heals() {
        for class in HeroClass::all() {
            let has_heal = class_skills(class).iter().any(|spec| spec.is_heal());
            assert_eq!(
                has_heal,
                class.is_healer(),
                "{} heal kit mismatch",
                class.name()
            );
        }
    }

    #[test]
    fn test_target_rules_follow_effects() {
        let smite = &CLERIC_SKILLS[1];
        assert_eq!(smite.target_rule(), crate::skills::types::TargetRule::OneEnemy);
        let prayer = &CLERIC_SKILLS[2];
        assert_eq!(
            prayer.target_rule(),
            crate::skills::types::TargetRule::WholeParty
        );
        let mend = &CLERIC_SKILLS[0];
        assert_eq!(mend.target_rule(), crate::skills::types::TargetRule::OneAlly);
    }
}
