//! The categorized, append-only combat log.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogCategory {
    Info,
    Attack,
    Skill,
    Heal,
    Death,
    Turn,
    Victory,
    Defeat,
    Debuff,
    LevelUp,
}

impl LogCategory {
    /// Lowercase tag for renderers and reports.
    pub fn tag(&self) -> &'static str {
        match self {
            LogCategory::Info => "info",
            LogCategory::Attack => "attack",
            LogCategory::Skill => "skill",
            LogCategory::Heal => "heal",
            LogCategory::Death => "death",
            LogCategory::Turn => "turn",
            LogCategory::Victory => "victory",
            LogCategory::Defeat => "defeat",
            LogCategory::Debuff => "debuff",
            LogCategory::LevelUp => "level-up",
        }
    }
}

/// One immutable log line, stamped with the turn cycle it happened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    pub message: String,
    pub category: LogCategory,
    pub turn: u32,
}

/// Entries only ever accumulate during an encounter; `clear` runs at
/// encounter initialization and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatLog {
    entries: Vec<CombatLogEntry>,
}

impl CombatLog {
    pub fn record(&mut self, category: LogCategory, turn: u32, message: impl Into<String>) {
        self.entries.push(CombatLogEntry {
            message: message.into(),
            category,
            turn,
        });
    }

    pub fn entries(&self) -> &[CombatLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&CombatLogEntry> {
        self.entries.last()
    }

    pub fn count_category(&self, category: LogCategory) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
