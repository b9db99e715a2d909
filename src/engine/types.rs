//! Engine state machine values and the manual-action command surface.

use serde::{Deserialize, Serialize};

/// Encounter lifecycle. AwaitingInput only occurs in manual mode, on a
/// hero's turn; it is expressed as a return to the caller, never a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatPhase {
    Idle,
    Running,
    AwaitingInput,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatResult {
    Victory,
    Defeat,
}

/// A command for the paused hero. Targets are encounter roster indices.
///
/// The engine executes the command itself, rolling its own dice, so a
/// seeded rng replays manual battles exactly like automatic ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack { target: usize },
    /// `target` is required when the skill aims at one enemy; for a
    /// single-ally heal it may be omitted to pick the most wounded ally.
    UseSkill { skill: usize, target: Option<usize> },
}

/// Injectable test/dev switches, passed to the engine constructor.
/// Everything defaults to off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugOptions {
    /// Skip every accuracy roll.
    pub force_hits: bool,
    /// Treat every damage roll as a critical.
    pub force_crits: bool,
    /// Scales hero basic attack and skill damage before resolution.
    pub hero_damage_multiplier: f64,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            force_hits: false,
            force_crits: false,
            hero_damage_multiplier: 1.0,
        }
    }
}
