//! Main simulation runner.
//!
//! Every battle goes through the real `Encounter` state machine, so the
//! numbers here match what actual play would produce. Statistics are read
//! back from the encounter after termination.

use super::config::SimConfig;
use super::report::SimReport;
use crate::combatant::enemy::{Enemy, Species};
use crate::combatant::hero::{Hero, HeroClass};
use crate::engine::encounter::Encounter;
use crate::engine::log::LogCategory;
use crate::engine::types::CombatResult;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One battle's worth of results.
#[derive(Debug, Clone)]
pub struct BattleStats {
    pub victory: bool,
    pub timed_out: bool,
    pub turns: u32,
    pub experience: u64,
    pub gold: u64,
    pub items_dropped: u32,
    pub level_ups: u32,
    pub surviving_heroes: u32,
}

/// Run the full batch and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_battles as usize);

    for battle_idx in 0..config.num_battles {
        // Per-battle RNG keeps every battle reproducible on its own
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + battle_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_battle(config, &mut rng);

        if config.verbosity >= 2 {
            let outcome = if stats.victory {
                "victory"
            } else if stats.timed_out {
                "timeout"
            } else {
                "defeat"
            };
            println!(
                "Battle {}/{} - {}, {} turns, {} xp, {} gold, {} heroes standing",
                battle_idx + 1,
                config.num_battles,
                outcome,
                stats.turns,
                stats.experience,
                stats.gold,
                stats.surviving_heroes
            );
        }

        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// The standard four-class party at the configured level.
fn standard_party(level: u32) -> Vec<Hero> {
    vec![
        Hero::with_level("Brand", HeroClass::Warrior, level),
        Hero::with_level("Sable", HeroClass::Mage, level),
        Hero::with_level("Lyra", HeroClass::Cleric, level),
        Hero::with_level("Vex", HeroClass::Rogue, level),
    ]
}

fn random_pack(count: usize, level: u32, rng: &mut impl Rng) -> Vec<Enemy> {
    let species = Species::all();
    (0..count)
        .map(|_| Enemy::spawn(species[rng.gen_range(0..species.len())], level))
        .collect()
}

/// Play one battle to its end, or to the turn cap.
fn simulate_single_battle(config: &SimConfig, rng: &mut ChaCha8Rng) -> BattleStats {
    let mut encounter = Encounter::new(
        standard_party(config.party_level),
        random_pack(config.enemy_count, config.enemy_level, rng),
    );
    encounter.initialize();

    while encounter.is_active() && encounter.turn() < config.max_turns_per_battle {
        encounter.execute_turn(rng);
    }
    let timed_out = encounter.is_active();

    let victory = encounter.result() == Some(CombatResult::Victory);
    let (experience, gold, items_dropped) = match encounter.rewards() {
        Some(summary) => (
            summary.experience,
            summary.loot.gold,
            summary.loot.items.len() as u32,
        ),
        None => (0, 0, 0),
    };
    let level_ups = encounter
        .combat_log()
        .iter()
        .filter(|entry| entry.category == LogCategory::LevelUp)
        .count() as u32;

    BattleStats {
        victory,
        timed_out,
        turns: encounter.turn(),
        experience,
        gold: gold.into(),
        items_dropped,
        level_ups,
        surviving_heroes: encounter.living_heroes().len() as u32,
    }
}
