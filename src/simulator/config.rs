//! Simulation configuration.

/// Configuration for a batch of simulated battles.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of battles to run
    pub num_battles: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Level of every hero in the standard party
    pub party_level: u32,

    /// Level of every spawned enemy
    pub enemy_level: u32,

    /// Enemies per battle
    pub enemy_count: usize,

    /// Turn-cycle cap per battle before it counts as a timeout
    pub max_turns_per_battle: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per battle)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_battles: 1000,
            seed: None,
            party_level: 3,
            enemy_level: 3,
            enemy_count: 3,
            max_turns_per_battle: 200,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance sanity check
    pub fn quick_check() -> Self {
        Self {
            num_battles: 100,
            ..Default::default()
        }
    }

    /// Pit the standard party against a specific enemy tier
    pub fn matchup(party_level: u32, enemy_level: u32) -> Self {
        Self {
            party_level,
            enemy_level,
            ..Default::default()
        }
    }

    /// Larger packs to probe area damage and healer triage
    pub fn horde_check(enemy_count: usize) -> Self {
        Self {
            num_battles: 200,
            enemy_count,
            ..Default::default()
        }
    }
}
