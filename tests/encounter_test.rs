//! Integration test: full encounter resolution
//!
//! Drives complete battles through the public Encounter API: automatic
//! resolution to termination, seeded reproducibility, reward payouts on
//! victory and defeat, experience multipliers, dead-hero exclusion from
//! payouts, and mid-battle snapshot restore through serde.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skirmish::combatant::enemy::{Enemy, Species};
use skirmish::combatant::hero::{Hero, HeroClass};
use skirmish::engine::encounter::Encounter;
use skirmish::engine::types::{CombatPhase, CombatResult, DebugOptions, PlayerAction};

/// The reference four-hero lineup used across these tests.
fn standard_party(level: u32) -> Vec<Hero> {
    vec![
        Hero::with_level("Brand", HeroClass::Warrior, level),
        Hero::with_level("Sable", HeroClass::Mage, level),
        Hero::with_level("Lyra", HeroClass::Cleric, level),
        Hero::with_level("Vex", HeroClass::Rogue, level),
    ]
}

fn goblin_pack(count: usize, level: u32) -> Vec<Enemy> {
    (0..count).map(|_| Enemy::spawn(Species::Goblin, level)).collect()
}

/// Debug switches that let the party flatten anything in one or two
/// cycles, for tests that need a guaranteed victory.
fn overwhelming() -> DebugOptions {
    DebugOptions {
        force_hits: true,
        force_crits: false,
        hero_damage_multiplier: 1000.0,
    }
}

/// Advance an active encounter until it terminates. The cap bounds the
/// number of engine calls so a stalled battle fails loudly instead of
/// hanging the test.
fn run_to_end(encounter: &mut Encounter, rng: &mut ChaCha8Rng, cap: u32) {
    let mut calls = 0;
    while encounter.is_active() {
        encounter.execute_turn(rng);
        calls += 1;
        assert!(
            calls < cap,
            "battle failed to terminate within {} engine calls",
            cap
        );
    }
}

fn log_messages(encounter: &Encounter) -> Vec<String> {
    encounter
        .combat_log()
        .iter()
        .map(|entry| entry.message.clone())
        .collect()
}

// =============================================================================
// Automatic resolution
// =============================================================================

#[test]
fn test_auto_battle_runs_to_termination() {
    let mut encounter = Encounter::new(standard_party(5), goblin_pack(3, 2));
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    encounter.initialize();
    assert_eq!(encounter.phase(), CombatPhase::Running);

    run_to_end(&mut encounter, &mut rng, 5000);

    assert_eq!(encounter.phase(), CombatPhase::Terminated);
    assert!(encounter.result().is_some(), "a finished battle has a result");
    assert!(encounter.turn() >= 1, "at least one cycle must have started");
    assert!(!encounter.is_active());

    // Health never overshoots its ceiling, on either side.
    for combatant in encounter.combatants() {
        assert!(
            combatant.current_hp() <= combatant.max_hp(),
            "{} ended with {} hp over a max of {}",
            combatant.name(),
            combatant.current_hp(),
            combatant.max_hp()
        );
    }

    let messages = log_messages(&encounter);
    assert_eq!(messages[0], "Battle begins!");
    assert!(
        messages.iter().any(|m| m.contains("Victory!") || m.contains("Defeat")),
        "transcript should record how the battle ended"
    );
}

#[test]
fn test_terminated_encounter_ignores_further_calls() {
    let mut encounter = Encounter::new(standard_party(5), goblin_pack(2, 1));
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    encounter.initialize();
    run_to_end(&mut encounter, &mut rng, 5000);

    let frozen = log_messages(&encounter);
    for _ in 0..10 {
        encounter.execute_turn(&mut rng);
        encounter.execute_manual_action(PlayerAction::Attack { target: 4 }, &mut rng);
    }
    assert_eq!(
        log_messages(&encounter),
        frozen,
        "a terminated battle must not produce new transcript lines"
    );
}

// =============================================================================
// Seeded reproducibility
// =============================================================================

#[test]
fn test_same_seed_reproduces_identical_transcript() {
    let mut first = Encounter::new(standard_party(4), goblin_pack(3, 3));
    let mut second = Encounter::new(standard_party(4), goblin_pack(3, 3));

    let mut rng_a = ChaCha8Rng::seed_from_u64(42);
    let mut rng_b = ChaCha8Rng::seed_from_u64(42);

    first.initialize();
    second.initialize();
    run_to_end(&mut first, &mut rng_a, 10_000);
    run_to_end(&mut second, &mut rng_b, 10_000);

    assert_eq!(first.result(), second.result());
    assert_eq!(first.turn(), second.turn());
    assert_eq!(
        log_messages(&first),
        log_messages(&second),
        "identical seeds must replay the battle line for line"
    );
}

// =============================================================================
// Rewards
// =============================================================================

#[test]
fn test_victory_pays_formula_experience_and_loot() {
    // Two level-3 goblins: 50.0 * 3 * 2 = 300 experience.
    let mut encounter =
        Encounter::with_debug(standard_party(5), goblin_pack(2, 3), overwhelming());
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    encounter.initialize();
    run_to_end(&mut encounter, &mut rng, 1000);

    assert_eq!(encounter.result(), Some(CombatResult::Victory));
    let rewards = encounter.rewards().expect("victory must pay out");
    assert_eq!(rewards.experience, 300);
    assert!(
        rewards.loot.gold >= 72,
        "gold floor for two level-3 kills is 72, got {}",
        rewards.loot.gold
    );
    assert!(encounter.loot_reward().is_some());

    // Every surviving hero banks the full amount, not a split share.
    // Level 5 needs 1118 xp for the next level, so none of them level.
    let (heroes, enemies) = encounter.into_parties();
    for hero in &heroes {
        assert!(hero.is_alive(), "{} should survive a one-sided rout", hero.name);
        assert_eq!(hero.level, 5);
        assert_eq!(hero.experience, 300, "{} got the wrong payout", hero.name);
    }
    assert!(enemies.iter().all(|e| !e.is_alive()));
}

#[test]
fn test_defeat_pays_nothing() {
    let whelps: Vec<Enemy> = (0..3)
        .map(|_| Enemy::spawn(Species::DragonWhelp, 12))
        .collect();
    let mut encounter = Encounter::new(standard_party(1), whelps);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    encounter.initialize();
    run_to_end(&mut encounter, &mut rng, 10_000);

    assert_eq!(encounter.result(), Some(CombatResult::Defeat));
    assert!(encounter.rewards().is_none(), "defeat never pays");
    assert!(encounter.loot_reward().is_none());

    let (heroes, _) = encounter.into_parties();
    for hero in &heroes {
        assert!(!hero.is_alive());
        assert_eq!(hero.experience, 0, "no experience on a wipe");
        assert_eq!(hero.level, 1);
    }
}

#[test]
fn test_experience_multiplier_scales_payout() {
    let mut encounter =
        Encounter::with_debug(standard_party(5), goblin_pack(2, 3), overwhelming());
    encounter.set_xp_multiplier(2.5);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    encounter.initialize();
    run_to_end(&mut encounter, &mut rng, 1000);

    assert_eq!(encounter.result(), Some(CombatResult::Victory));
    assert_eq!(
        encounter.rewards().expect("victory must pay out").experience,
        750,
        "2.5x multiplier on a 300 xp battle"
    );
}

#[test]
fn test_dead_hero_receives_no_experience() {
    let mut party = standard_party(5);
    // Lyra enters the battle already down; wounds persist between
    // encounters and a downed hero stays down.
    party[2].current_hp = 0;

    let mut encounter = Encounter::with_debug(party, goblin_pack(2, 3), overwhelming());
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    encounter.initialize();
    run_to_end(&mut encounter, &mut rng, 1000);

    assert_eq!(encounter.result(), Some(CombatResult::Victory));

    let (heroes, _) = encounter.into_parties();
    assert_eq!(heroes[2].experience, 0, "the fallen share nothing");
    assert!(!heroes[2].is_alive());
    for hero in [&heroes[0], &heroes[1], &heroes[3]] {
        assert_eq!(hero.experience, 300, "{} fought and gets paid", hero.name);
    }
}

// =============================================================================
// Snapshot and restore
// =============================================================================

#[test]
fn test_snapshot_restore_resumes_mid_battle() {
    let mut encounter = Encounter::new(standard_party(5), goblin_pack(2, 2));
    encounter.set_manual_mode(true);
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    encounter.initialize();
    let mut calls = 0;
    while encounter.phase() != CombatPhase::AwaitingInput {
        encounter.execute_turn(&mut rng);
        calls += 1;
        assert!(calls < 100, "manual mode never paused on a hero");
    }

    let snapshot = serde_json::to_string(&encounter).expect("encounter serializes");

    let mut restored: Encounter =
        serde_json::from_str(&snapshot).expect("encounter deserializes");
    assert_eq!(restored.phase(), CombatPhase::AwaitingInput);
    assert_eq!(restored.turn(), encounter.turn());
    assert!(restored.manual_mode());
    assert_eq!(log_messages(&restored), log_messages(&encounter));
    assert_eq!(
        serde_json::to_string(&restored).expect("round trip"),
        snapshot,
        "re-serializing a restored battle must be lossless"
    );

    // The restored battle accepts commands and plays out to the end. The
    // loot generator is rebuilt as the default table, so victory still
    // pays gold.
    let paused_before = log_messages(&restored).len();
    let mut calls = 0;
    while restored.is_active() {
        if restored.phase() == CombatPhase::AwaitingInput {
            let target = restored.living_enemies()[0];
            restored.execute_manual_action(PlayerAction::Attack { target }, &mut rng);
        } else {
            restored.execute_turn(&mut rng);
        }
        calls += 1;
        assert!(calls < 5000, "restored battle failed to terminate");
    }

    assert!(log_messages(&restored).len() > paused_before);
    assert_eq!(restored.phase(), CombatPhase::Terminated);
    assert_eq!(restored.result(), Some(CombatResult::Victory));
    assert!(
        restored.rewards().expect("victory pays").loot.gold > 0,
        "default loot table restored after deserialization"
    );
}
