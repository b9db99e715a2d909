//! Action executors: basic attacks, every skill effect, and both sides'
//! automatic decision ladders.
//!
//! Executors mutate the roster and return a structured outcome; the
//! encounter turns outcomes into log lines, events, and termination checks.

use crate::combatant::elements::Element;
use crate::combatant::enemy::EnemyChoice;
use crate::combatant::stats::CombatStats;
use crate::combatant::status::{StatusCategory, StatusEffect, StatusPayload};
use crate::combatant::types::{Combatant, Side};
use crate::core::combat_math::{roll_crit, roll_hit, scale_damage};
use crate::core::constants::{
    ATTACK_CRIT_MULTIPLIER, HEAL_THRESHOLD_PERCENT, SKILL_CRIT_MULTIPLIER,
};
use crate::engine::combo::ComboTracker;
use crate::engine::types::DebugOptions;
use crate::skills::types::{SkillEffect, SkillSpec, TargetRule};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    BasicAttack,
    Skill(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitReport {
    pub target: usize,
    pub damage: u32,
    pub critical: bool,
    pub missed: bool,
    pub immune: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealReport {
    pub target: usize,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub target: usize,
    pub detail: String,
    pub category: StatusCategory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub actor: usize,
    pub kind: ActionKind,
    pub hits: Vec<HitReport>,
    pub heals: Vec<HealReport>,
    pub statuses: Vec<StatusReport>,
    pub deaths: Vec<usize>,
}

impl ActionOutcome {
    fn new(actor: usize, kind: ActionKind) -> Self {
        Self {
            actor,
            kind,
            hits: Vec::new(),
            heals: Vec::new(),
            statuses: Vec::new(),
            deaths: Vec::new(),
        }
    }
}

/// Lowest health ratio among the candidates; first wins ties.
pub fn most_wounded(roster: &[Combatant], candidates: &[usize]) -> Option<usize> {
    candidates.iter().copied().min_by_key(|&index| {
        let combatant = &roster[index];
        combatant.current_hp() as u64 * 1000 / combatant.max_hp().max(1) as u64
    })
}

fn random_pick(candidates: &[usize], rng: &mut impl Rng) -> usize {
    debug_assert!(!candidates.is_empty(), "target pick from an empty list");
    candidates[rng.gen_range(0..candidates.len())]
}

fn first_ready(roster: &[Combatant], who: usize, wanted: fn(&SkillSpec) -> bool) -> Option<usize> {
    roster[who]
        .skills()
        .iter()
        .enumerate()
        .find(|(index, spec)| wanted(spec) && roster[who].skill_ready(*index))
        .map(|(index, _)| index)
}

fn needs_healing(roster: &[Combatant], allies: &[usize]) -> bool {
    allies.iter().any(|&index| {
        let combatant = &roster[index];
        combatant.current_hp() * 100 < combatant.max_hp() * HEAL_THRESHOLD_PERCENT
    })
}

/// One basic attack. Hero attacks feed the combo tracker and take its
/// multiplier; enemy attacks use neither.
pub fn perform_basic_attack(
    roster: &mut [Combatant],
    attacker: usize,
    target: usize,
    combo: &mut ComboTracker,
    debug: &DebugOptions,
    rng: &mut impl Rng,
) -> ActionOutcome {
    debug_assert!(roster[target].is_alive(), "basic attack on a dead target");
    let mut outcome = ActionOutcome::new(attacker, ActionKind::BasicAttack);
    let attacker_is_hero = roster[attacker].side() == Side::Heroes;
    let stats = roster[attacker].effective_stats();
    let evasion = roster[target].effective_stats().evasion;

    let hit = debug.force_hits || roll_hit(stats.accuracy, evasion, rng);
    if !hit {
        if attacker_is_hero {
            combo.register_miss();
        }
        outcome.hits.push(HitReport {
            target,
            damage: 0,
            critical: false,
            missed: true,
            immune: false,
        });
        return outcome;
    }

    let critical = debug.force_crits || roll_crit(stats.crit_chance, rng);
    let mut multiplier = 1.0;
    if attacker_is_hero {
        multiplier *= combo.multiplier(attacker, target) * debug.hero_damage_multiplier;
    }
    if critical {
        multiplier *= ATTACK_CRIT_MULTIPLIER;
    }
    let base = scale_damage(stats.attack, multiplier);
    let dealt = roster[target].take_damage(base, Element::Physical);
    if attacker_is_hero {
        combo.register_hit(attacker, target);
    }
    outcome.hits.push(HitReport {
        target,
        damage: dealt.applied,
        critical,
        missed: false,
        immune: dealt.immune,
    });
    if !roster[target].is_alive() {
        outcome.deaths.push(target);
    }
    outcome
}

fn skill_hit(
    roster: &mut [Combatant],
    stats: &CombatStats,
    target: usize,
    power: f64,
    element: Element,
    sure_hit: bool,
    damage_scale: f64,
    debug: &DebugOptions,
    rng: &mut impl Rng,
) -> HitReport {
    let evasion = roster[target].effective_stats().evasion;
    let hit = sure_hit || debug.force_hits || roll_hit(stats.accuracy, evasion, rng);
    if !hit {
        return HitReport {
            target,
            damage: 0,
            critical: false,
            missed: true,
            immune: false,
        };
    }
    let critical = debug.force_crits || roll_crit(stats.crit_chance, rng);
    let mut multiplier = power * damage_scale;
    if critical {
        multiplier *= SKILL_CRIT_MULTIPLIER;
    }
    let base = scale_damage(stats.attack, multiplier);
    let dealt = roster[target].take_damage(base, element);
    HitReport {
        target,
        damage: dealt.applied,
        critical,
        missed: false,
        immune: dealt.immune,
    }
}

/// Cast one ability. Ally/foe index lists are relative to the caster and
/// must contain only living combatants.
pub fn perform_skill(
    roster: &mut [Combatant],
    caster: usize,
    skill_index: usize,
    chosen_target: Option<usize>,
    living_allies: &[usize],
    living_foes: &[usize],
    debug: &DebugOptions,
    rng: &mut impl Rng,
) -> ActionOutcome {
    let spec = &roster[caster].skills()[skill_index];
    let mut outcome = ActionOutcome::new(caster, ActionKind::Skill(spec.name));
    let caster_is_hero = roster[caster].side() == Side::Heroes;
    let stats = roster[caster].effective_stats();
    let damage_scale = if caster_is_hero {
        debug.hero_damage_multiplier
    } else {
        1.0
    };

    roster[caster].set_cooldown(skill_index, spec.cooldown);

    match spec.effect {
        SkillEffect::Damage {
            power,
            element,
            sure_hit,
        } => {
            let Some(target) = chosen_target else {
                debug_assert!(false, "{} cast without a target", spec.name);
                return outcome;
            };
            let report = skill_hit(
                roster, &stats, target, power, element, sure_hit, damage_scale, debug, rng,
            );
            outcome.hits.push(report);
            if !roster[target].is_alive() {
                outcome.deaths.push(target);
            }
        }
        SkillEffect::DrainDamage {
            power,
            element,
            heal_fraction,
        } => {
            let Some(target) = chosen_target else {
                debug_assert!(false, "{} cast without a target", spec.name);
                return outcome;
            };
            let report = skill_hit(
                roster, &stats, target, power, element, false, damage_scale, debug, rng,
            );
            if report.damage > 0 {
                let healed = roster[caster].heal(scale_damage(report.damage, heal_fraction));
                if healed > 0 {
                    outcome.heals.push(HealReport {
                        target: caster,
                        amount: healed,
                    });
                }
            }
            outcome.hits.push(report);
            if !roster[target].is_alive() {
                outcome.deaths.push(target);
            }
        }
        SkillEffect::AreaDamage { power, element } => {
            debug_assert!(!living_foes.is_empty(), "area damage with no targets");
            for &target in living_foes {
                let report = skill_hit(
                    roster, &stats, target, power, element, false, damage_scale, debug, rng,
                );
                outcome.hits.push(report);
                if !roster[target].is_alive() {
                    outcome.deaths.push(target);
                }
            }
        }
        SkillEffect::Heal { power } => {
            let target = chosen_target.or_else(|| most_wounded(roster, living_allies));
            let Some(target) = target else {
                debug_assert!(false, "{} cast with no allies", spec.name);
                return outcome;
            };
            let healed = roster[target].heal(scale_damage(stats.attack, power));
            outcome.heals.push(HealReport {
                target,
                amount: healed,
            });
        }
        SkillEffect::GroupHeal { power } => {
            debug_assert!(!living_allies.is_empty(), "group heal with no allies");
            let amount = scale_damage(stats.attack, power);
            for &target in living_allies {
                let healed = roster[target].heal(amount);
                outcome.heals.push(HealReport {
                    target,
                    amount: healed,
                });
            }
        }
        SkillEffect::Buff {
            stat,
            amount,
            duration,
        } => {
            for &target in living_allies {
                roster[target].add_status(StatusEffect::new(
                    spec.name,
                    duration,
                    StatusCategory::Buff,
                    StatusPayload::StatModifier { stat, amount },
                ));
            }
            outcome.statuses.push(StatusReport {
                target: caster,
                detail: format!(
                    "The party's {} rises by {} for {} turns.",
                    stat.name(),
                    amount,
                    duration
                ),
                category: StatusCategory::Buff,
            });
        }
        SkillEffect::Debuff {
            power,
            element,
            stat,
            amount,
            duration,
        } => {
            let Some(target) = chosen_target else {
                debug_assert!(false, "{} cast without a target", spec.name);
                return outcome;
            };
            let report = skill_hit(
                roster, &stats, target, power, element, false, damage_scale, debug, rng,
            );
            if !report.missed && roster[target].is_alive() {
                let victim = roster[target].name().to_string();
                roster[target].add_status(StatusEffect::new(
                    spec.name,
                    duration,
                    StatusCategory::Debuff,
                    StatusPayload::StatModifier { stat, amount },
                ));
                outcome.statuses.push(StatusReport {
                    target,
                    detail: format!(
                        "{}'s {} falls by {} for {} turns.",
                        victim,
                        stat.name(),
                        amount.abs(),
                        duration
                    ),
                    category: StatusCategory::Debuff,
                });
            }
            outcome.hits.push(report);
            if !roster[target].is_alive() {
                outcome.deaths.push(target);
            }
        }
        SkillEffect::StunStrike {
            power,
            element,
            duration,
        } => {
            let Some(target) = chosen_target else {
                debug_assert!(false, "{} cast without a target", spec.name);
                return outcome;
            };
            let report = skill_hit(
                roster, &stats, target, power, element, false, damage_scale, debug, rng,
            );
            if !report.missed && roster[target].is_alive() {
                let victim = roster[target].name().to_string();
                roster[target].add_status(StatusEffect::new(
                    spec.name,
                    duration,
                    StatusCategory::Debuff,
                    StatusPayload::Stun,
                ));
                outcome.statuses.push(StatusReport {
                    target,
                    detail: format!("{} is stunned!", victim),
                    category: StatusCategory::Debuff,
                });
            }
            outcome.hits.push(report);
            if !roster[target].is_alive() {
                outcome.deaths.push(target);
            }
        }
        SkillEffect::Shield {
            reduction_percent,
            duration,
        } => {
            for &target in living_allies {
                roster[target].add_status(StatusEffect::new(
                    spec.name,
                    duration,
                    StatusCategory::Buff,
                    StatusPayload::DamageReduction {
                        percent: reduction_percent,
                    },
                ));
            }
            outcome.statuses.push(StatusReport {
                target: caster,
                detail: format!(
                    "The party is shielded: incoming damage down {}% for {} turns.",
                    reduction_percent, duration
                ),
                category: StatusCategory::Buff,
            });
        }
        SkillEffect::Sanctuary { duration } => {
            for &target in living_allies {
                roster[target].add_status(StatusEffect::new(
                    spec.name,
                    duration,
                    StatusCategory::Buff,
                    StatusPayload::Immunity,
                ));
            }
            outcome.statuses.push(StatusReport {
                target: caster,
                detail: format!("A ward renders the party untouchable for {} turn(s).", duration),
                category: StatusCategory::Buff,
            });
        }
    }

    outcome
}

/// The hero auto-battler. Priority: triage heal (healer classes only),
/// then the first ready damaging ability, then the first ready buff, then
/// a basic attack. Declaration order breaks ties at every step.
pub fn hero_auto_action(
    roster: &mut [Combatant],
    hero: usize,
    living_allies: &[usize],
    living_foes: &[usize],
    combo: &mut ComboTracker,
    debug: &DebugOptions,
    rng: &mut impl Rng,
) -> ActionOutcome {
    debug_assert!(!living_foes.is_empty(), "hero turn with no living foes");
    let is_healer = roster[hero]
        .as_hero()
        .map(|h| h.class.is_healer())
        .unwrap_or(false);

    if is_healer && needs_healing(roster, living_allies) {
        if let Some(index) = first_ready(roster, hero, SkillSpec::is_heal) {
            let target = match roster[hero].skills()[index].target_rule() {
                TargetRule::OneAlly => most_wounded(roster, living_allies),
                _ => None,
            };
            return perform_skill(
                roster,
                hero,
                index,
                target,
                living_allies,
                living_foes,
                debug,
                rng,
            );
        }
    }

    if let Some(index) = first_ready(roster, hero, SkillSpec::is_damaging) {
        let target = match roster[hero].skills()[index].target_rule() {
            TargetRule::OneEnemy => Some(random_pick(living_foes, rng)),
            _ => None,
        };
        return perform_skill(
            roster,
            hero,
            index,
            target,
            living_allies,
            living_foes,
            debug,
            rng,
        );
    }

    if let Some(index) = first_ready(roster, hero, SkillSpec::is_buff) {
        return perform_skill(
            roster,
            hero,
            index,
            None,
            living_allies,
            living_foes,
            debug,
            rng,
        );
    }

    let target = random_pick(living_foes, rng);
    perform_basic_attack(roster, hero, target, combo, debug, rng)
}

/// Resolve an enemy's turn through its own attack policy.
pub fn enemy_action(
    roster: &mut [Combatant],
    enemy: usize,
    living_allies: &[usize],
    living_foes: &[usize],
    combo: &mut ComboTracker,
    debug: &DebugOptions,
    rng: &mut impl Rng,
) -> ActionOutcome {
    let Some(enemy_ref) = roster[enemy].as_enemy() else {
        debug_assert!(false, "enemy action requested for a hero");
        return ActionOutcome::new(enemy, ActionKind::BasicAttack);
    };
    match enemy_ref.choose_action(living_foes, rng) {
        EnemyChoice::Attack { target } => {
            perform_basic_attack(roster, enemy, target, combo, debug, rng)
        }
        EnemyChoice::Skill { index, target } => perform_skill(
            roster,
            enemy,
            index,
            Some(target),
            living_allies,
            living_foes,
            debug,
            rng,
        ),
    }
}
