//! Timed status effects: stat modifiers, stuns, immunity, damage shields.

use crate::combatant::stats::StatKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCategory {
    Buff,
    Debuff,
}

/// Exactly one payload per effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StatusPayload {
    /// Additive stat delta; multiple instances stack.
    StatModifier { stat: StatKind, amount: i32 },
    /// The bearer skips its turns.
    Stun,
    /// Incoming damage is nullified.
    Immunity,
    /// Scales incoming damage down before defense mitigation.
    DamageReduction { percent: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub name: String,
    pub remaining_turns: u32,
    pub category: StatusCategory,
    pub payload: StatusPayload,
}

impl StatusEffect {
    pub fn new(
        name: &str,
        remaining_turns: u32,
        category: StatusCategory,
        payload: StatusPayload,
    ) -> Self {
        Self {
            name: name.to_string(),
            remaining_turns,
            category,
            payload,
        }
    }
}

/// Decrement every effect once and drop the expired. Returns expired names.
///
/// Called exactly once per turn cycle for each living combatant.
pub fn tick_statuses(effects: &mut Vec<StatusEffect>) -> Vec<String> {
    let mut expired = Vec::new();
    for effect in effects.iter_mut() {
        effect.remaining_turns = effect.remaining_turns.saturating_sub(1);
        if effect.remaining_turns == 0 {
            expired.push(effect.name.clone());
        }
    }
    effects.retain(|effect| effect.remaining_turns > 0);
    expired
}

/// Sum of additive modifiers for one stat across all active effects.
pub fn stat_bonus(effects: &[StatusEffect], kind: StatKind) -> i32 {
    effects
        .iter()
        .filter_map(|effect| match effect.payload {
            StatusPayload::StatModifier { stat, amount } if stat == kind => Some(amount),
            _ => None,
        })
        .sum()
}

pub fn is_stunned(effects: &[StatusEffect]) -> bool {
    effects
        .iter()
        .any(|effect| effect.payload == StatusPayload::Stun)
}

pub fn is_immune(effects: &[StatusEffect]) -> bool {
    effects
        .iter()
        .any(|effect| effect.payload == StatusPayload::Immunity)
}

/// Combined incoming-damage reduction, additive across effects, capped at 100.
pub fn damage_reduction_percent(effects: &[StatusEffect]) -> u32 {
    effects
        .iter()
        .filter_map(|effect| match effect.payload {
            StatusPayload::DamageReduction { percent } => Some(percent),
            _ => None,
        })
        .sum::<u32>()
        .min(100)
}
