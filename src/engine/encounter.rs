//! The encounter state machine.
//!
//! An `Encounter` owns both parties for the duration of one battle and
//! drives it through `Idle -> Running -> (AwaitingInput) -> Terminated`.
//! The caller supplies the random source, so two encounters fed the same
//! seed and the same commands play out identically.

use std::collections::VecDeque;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combatant::enemy::Enemy;
use crate::combatant::hero::Hero;
use crate::combatant::status::StatusCategory;
use crate::combatant::types::Combatant;
use crate::core::combat_math::initiative_roll;
use crate::engine::actions::{
    enemy_action, hero_auto_action, perform_basic_attack, perform_skill, ActionKind, ActionOutcome,
};
use crate::engine::combo::ComboTracker;
use crate::engine::events::{EncounterEvent, EventObservers};
use crate::engine::log::{CombatLog, CombatLogEntry, LogCategory};
use crate::engine::rewards::{
    experience_reward, BasicLootTable, LootBundle, LootGenerator, RewardSummary,
};
use crate::engine::types::{CombatPhase, CombatResult, DebugOptions, PlayerAction};
use crate::skills::types::TargetRule;

fn default_loot_generator() -> Box<dyn LootGenerator> {
    Box::new(BasicLootTable)
}

fn default_xp_multiplier() -> f64 {
    1.0
}

/// One battle between a hero party and an enemy pack.
///
/// Heroes occupy roster indices `0..hero_count`, enemies the rest. All
/// public target indices refer to this roster.
#[derive(Serialize, Deserialize)]
pub struct Encounter {
    combatants: Vec<Combatant>,
    hero_count: usize,
    turn: u32,
    phase: CombatPhase,
    result: Option<CombatResult>,
    queue: VecDeque<usize>,
    pending: Option<usize>,
    manual_mode: bool,
    combo: ComboTracker,
    log: CombatLog,
    #[serde(default = "default_xp_multiplier")]
    xp_multiplier: f64,
    rewards: Option<RewardSummary>,
    debug: DebugOptions,
    #[serde(skip)]
    observers: EventObservers,
    #[serde(skip, default = "default_loot_generator")]
    loot_generator: Box<dyn LootGenerator>,
}

impl fmt::Debug for Encounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encounter")
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("combatants", &self.combatants.len())
            .field("hero_count", &self.hero_count)
            .field("pending", &self.pending)
            .field("manual_mode", &self.manual_mode)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl Encounter {
    pub fn new(heroes: Vec<Hero>, enemies: Vec<Enemy>) -> Self {
        let hero_count = heroes.len();
        let combatants = heroes
            .into_iter()
            .map(Combatant::Hero)
            .chain(enemies.into_iter().map(Combatant::Enemy))
            .collect();
        Self {
            combatants,
            hero_count,
            turn: 0,
            phase: CombatPhase::Idle,
            result: None,
            queue: VecDeque::new(),
            pending: None,
            manual_mode: false,
            combo: ComboTracker::default(),
            log: CombatLog::default(),
            xp_multiplier: 1.0,
            rewards: None,
            debug: DebugOptions::default(),
            observers: EventObservers::default(),
            loot_generator: default_loot_generator(),
        }
    }

    pub fn with_debug(heroes: Vec<Hero>, enemies: Vec<Enemy>, debug: DebugOptions) -> Self {
        let mut encounter = Self::new(heroes, enemies);
        encounter.debug = debug;
        encounter
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Register a listener for battle events. Listeners are notify-only;
    /// nothing they do feeds back into resolution.
    pub fn on_event(&mut self, listener: impl FnMut(&EncounterEvent) + 'static) {
        self.observers.subscribe(listener);
    }

    pub fn set_loot_generator(&mut self, generator: Box<dyn LootGenerator>) {
        self.loot_generator = generator;
    }

    pub fn set_xp_multiplier(&mut self, multiplier: f64) {
        debug_assert!(multiplier >= 0.0, "negative experience multiplier");
        self.xp_multiplier = multiplier;
    }

    /// Toggle manual control of hero turns.
    ///
    /// Switching manual off while a hero is waiting for input returns that
    /// hero to the head of the order, so the next `execute_turn` plays the
    /// turn out automatically instead of leaving it swallowed.
    pub fn set_manual_mode(&mut self, manual: bool) {
        if self.manual_mode == manual {
            return;
        }
        self.manual_mode = manual;
        if !manual && self.phase == CombatPhase::AwaitingInput {
            if let Some(index) = self.pending.take() {
                self.queue.push_front(index);
            }
            self.set_phase(CombatPhase::Running);
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Ready both parties and open the battle.
    ///
    /// Heroes keep their level, experience, and wounds; only their transient
    /// combat state (cooldowns, statuses) is cleared. Enemies are restored
    /// to full. The log starts fresh here and nowhere else.
    pub fn initialize(&mut self) {
        debug_assert!(self.hero_count > 0, "encounter with no heroes");
        debug_assert!(
            self.hero_count < self.combatants.len(),
            "encounter with no enemies"
        );

        for combatant in &mut self.combatants {
            match combatant {
                Combatant::Hero(hero) => hero.reset_combat_state(),
                Combatant::Enemy(enemy) => enemy.full_reset(),
            }
        }
        self.turn = 0;
        self.result = None;
        self.rewards = None;
        self.pending = None;
        self.queue.clear();
        self.combo.reset();
        self.log.clear();
        self.set_phase(CombatPhase::Running);
        self.log.record(LogCategory::Info, self.turn, "Battle begins!");
    }

    /// Advance the battle by one combatant action.
    ///
    /// Starts a fresh initiative cycle whenever the previous one is spent.
    /// Outside the `Running` phase this is a silent no-op.
    pub fn execute_turn(&mut self, rng: &mut impl Rng) {
        if self.phase != CombatPhase::Running {
            return;
        }
        self.advance(rng, true);
    }

    /// Resolve the command the paused hero was waiting on.
    ///
    /// Outside `AwaitingInput`, or given an invalid target or an unready
    /// skill, nothing happens and the pause holds. After a valid command
    /// the rest of the cycle plays out automatically until the next hero
    /// pause, the cycle runs dry, or the battle ends.
    pub fn execute_manual_action(&mut self, action: PlayerAction, rng: &mut impl Rng) {
        if self.phase != CombatPhase::AwaitingInput {
            return;
        }
        let Some(actor) = self.pending else {
            return;
        };

        let allies = self.living_heroes();
        let foes = self.living_enemies();

        let outcome = match action {
            PlayerAction::Attack { target } => {
                if !self.is_living_enemy(target) {
                    return;
                }
                perform_basic_attack(
                    &mut self.combatants,
                    actor,
                    target,
                    &mut self.combo,
                    &self.debug,
                    rng,
                )
            }
            PlayerAction::UseSkill { skill, target } => {
                let specs = self.combatants[actor].skills();
                if skill >= specs.len() || !self.combatants[actor].skill_ready(skill) {
                    return;
                }
                let chosen = match specs[skill].target_rule() {
                    TargetRule::OneEnemy => {
                        let Some(target) = target else {
                            return;
                        };
                        if !self.is_living_enemy(target) {
                            return;
                        }
                        Some(target)
                    }
                    TargetRule::OneAlly => match target {
                        Some(target) if !self.is_living_hero(target) => return,
                        chosen => chosen,
                    },
                    TargetRule::AllEnemies | TargetRule::WholeParty => None,
                };
                perform_skill(
                    &mut self.combatants,
                    actor,
                    skill,
                    chosen,
                    &allies,
                    &foes,
                    &self.debug,
                    rng,
                )
            }
        };

        self.pending = None;
        self.set_phase(CombatPhase::Running);
        self.process_outcome(&outcome);
        self.check_termination(rng);

        // Play out the remaining slots of this cycle without pausing
        while self.phase == CombatPhase::Running && !self.queue.is_empty() {
            self.advance(rng, false);
        }
    }

    // =========================================================================
    // Turn resolution
    // =========================================================================

    fn advance(&mut self, rng: &mut impl Rng, may_start_cycle: bool) {
        loop {
            if self.phase != CombatPhase::Running {
                return;
            }
            if self.queue.is_empty() {
                if !may_start_cycle {
                    return;
                }
                self.begin_cycle(rng);
            }
            let Some(index) = self.queue.pop_front() else {
                return;
            };
            if !self.combatants[index].is_alive() {
                continue;
            }

            let id = self.combatants[index].id().to_string();
            self.observers
                .emit(&EncounterEvent::TurnStarted { combatant: id.clone() });

            if self.combatants[index].is_stunned() {
                self.log.record(
                    LogCategory::Info,
                    self.turn,
                    format!(
                        "{} is stunned and skips the turn.",
                        self.combatants[index].name()
                    ),
                );
                continue;
            }

            if self.manual_mode && index < self.hero_count {
                self.pending = Some(index);
                self.set_phase(CombatPhase::AwaitingInput);
                self.observers
                    .emit(&EncounterEvent::WaitingForInput { combatant: id });
                return;
            }

            let outcome = self.resolve_auto_action(index, rng);
            self.process_outcome(&outcome);
            self.check_termination(rng);
            return;
        }
    }

    /// Open a new initiative cycle: bump the turn counter, tick every living
    /// combatant's cooldowns and statuses exactly once, then roll the order.
    fn begin_cycle(&mut self, rng: &mut impl Rng) {
        self.turn += 1;
        self.log.record(
            LogCategory::Turn,
            self.turn,
            format!("--- Turn {} ---", self.turn),
        );

        let mut expirations: Vec<(usize, Vec<String>)> = Vec::new();
        for (index, combatant) in self.combatants.iter_mut().enumerate() {
            if !combatant.is_alive() {
                continue;
            }
            combatant.tick_cooldowns();
            let expired = combatant.tick_statuses();
            if !expired.is_empty() {
                expirations.push((index, expired));
            }
        }
        for (index, names) in expirations {
            for name in names {
                self.log.record(
                    LogCategory::Info,
                    self.turn,
                    format!("{}'s {} wears off.", self.combatants[index].name(), name),
                );
            }
        }

        // Speed plus a flat die; the sort is stable, so equal totals keep
        // roster order
        let mut order: Vec<(usize, u32)> = Vec::new();
        for (index, combatant) in self.combatants.iter().enumerate() {
            if combatant.is_alive() {
                order.push((index, initiative_roll(combatant.effective_stats().speed, rng)));
            }
        }
        order.sort_by(|a, b| b.1.cmp(&a.1));
        self.queue = order.into_iter().map(|(index, _)| index).collect();
    }

    fn resolve_auto_action(&mut self, index: usize, rng: &mut impl Rng) -> ActionOutcome {
        if index < self.hero_count {
            let allies = self.living_heroes();
            let foes = self.living_enemies();
            hero_auto_action(
                &mut self.combatants,
                index,
                &allies,
                &foes,
                &mut self.combo,
                &self.debug,
                rng,
            )
        } else {
            let allies = self.living_enemies();
            let foes = self.living_heroes();
            enemy_action(
                &mut self.combatants,
                index,
                &allies,
                &foes,
                &mut self.combo,
                &self.debug,
                rng,
            )
        }
    }

    /// Render an outcome into log lines and observer events.
    ///
    /// Messages use display names, never ids, so transcripts from equal
    /// seeds compare equal across runs.
    fn process_outcome(&mut self, outcome: &ActionOutcome) {
        let actor_id = self.combatants[outcome.actor].id().to_string();
        let actor_name = self.combatants[outcome.actor].name().to_string();

        match outcome.kind {
            ActionKind::BasicAttack => {
                self.observers.emit(&EncounterEvent::AttackAnimation {
                    attacker: actor_id.clone(),
                });
            }
            ActionKind::Skill(name) => {
                self.observers.emit(&EncounterEvent::AbilityUsed {
                    caster: actor_id.clone(),
                    ability: name.to_string(),
                });
                self.log.record(
                    LogCategory::Skill,
                    self.turn,
                    format!("{} uses {}!", actor_name, name),
                );
            }
        }

        for hit in &outcome.hits {
            let target_name = self.combatants[hit.target].name().to_string();
            if hit.missed {
                self.log.record(
                    LogCategory::Attack,
                    self.turn,
                    format!("{}'s attack misses {}.", actor_name, target_name),
                );
                continue;
            }
            if hit.immune {
                self.log.record(
                    LogCategory::Info,
                    self.turn,
                    format!("{} is untouched behind the ward.", target_name),
                );
                continue;
            }
            let category = match outcome.kind {
                ActionKind::BasicAttack => LogCategory::Attack,
                ActionKind::Skill(_) => LogCategory::Skill,
            };
            if hit.critical {
                self.log.record(
                    category,
                    self.turn,
                    format!(
                        "{} lands a critical hit on {} for {} damage!",
                        actor_name, target_name, hit.damage
                    ),
                );
            } else {
                self.log.record(
                    category,
                    self.turn,
                    format!(
                        "{} hits {} for {} damage.",
                        actor_name, target_name, hit.damage
                    ),
                );
            }
            self.observers.emit(&EncounterEvent::DamageDealt {
                target: self.combatants[hit.target].id().to_string(),
                amount: hit.damage,
                critical: hit.critical,
            });
        }

        for heal in &outcome.heals {
            let message = if heal.target == outcome.actor {
                format!("{} recovers {} health.", actor_name, heal.amount)
            } else {
                format!(
                    "{} restores {} health to {}.",
                    actor_name,
                    heal.amount,
                    self.combatants[heal.target].name()
                )
            };
            self.log.record(LogCategory::Heal, self.turn, message);
            self.observers.emit(&EncounterEvent::HealApplied {
                target: self.combatants[heal.target].id().to_string(),
                amount: heal.amount,
            });
        }

        for status in &outcome.statuses {
            let category = match status.category {
                StatusCategory::Buff => LogCategory::Skill,
                StatusCategory::Debuff => LogCategory::Debuff,
            };
            self.log.record(category, self.turn, status.detail.clone());
        }

        for &death in &outcome.deaths {
            self.log.record(
                LogCategory::Death,
                self.turn,
                format!("{} falls!", self.combatants[death].name()),
            );
        }

        let description = match outcome.kind {
            ActionKind::BasicAttack => format!("{} attacks", actor_name),
            ActionKind::Skill(name) => format!("{} uses {}", actor_name, name),
        };
        self.observers.emit(&EncounterEvent::ActionPerformed {
            combatant: actor_id,
            description,
        });
    }

    // =========================================================================
    // Termination and rewards
    // =========================================================================

    /// Victory is checked before defeat, so wiping both parties on the same
    /// action still counts as a win.
    fn check_termination(&mut self, rng: &mut impl Rng) {
        if self.living_enemies().is_empty() {
            self.finish(CombatResult::Victory, rng);
        } else if self.living_heroes().is_empty() {
            self.finish(CombatResult::Defeat, rng);
        }
    }

    fn finish(&mut self, result: CombatResult, rng: &mut impl Rng) {
        self.queue.clear();
        self.pending = None;
        self.result = Some(result);

        match result {
            CombatResult::Victory => {
                self.log.record(
                    LogCategory::Victory,
                    self.turn,
                    "Victory! The enemy party is defeated.",
                );
                self.grant_rewards(rng);
            }
            CombatResult::Defeat => {
                self.log.record(
                    LogCategory::Defeat,
                    self.turn,
                    "Defeat... the party has fallen.",
                );
            }
        }

        self.set_phase(CombatPhase::Terminated);
        self.observers.emit(&EncounterEvent::CombatEnded { result });
    }

    /// Experience goes to every hero still standing, unsplit. Loot comes
    /// from whatever generator the encounter carries.
    fn grant_rewards(&mut self, rng: &mut impl Rng) {
        let defeated: Vec<Enemy> = self.combatants[self.hero_count..]
            .iter()
            .filter_map(|combatant| combatant.as_enemy().cloned())
            .collect();
        debug_assert!(!defeated.is_empty(), "victory without enemies");

        let experience = experience_reward(&defeated, self.xp_multiplier);
        let loot = self.loot_generator.generate(&defeated, rng);

        self.log.record(
            LogCategory::Info,
            self.turn,
            format!("The party earns {} experience.", experience),
        );
        if loot.gold > 0 {
            self.log.record(
                LogCategory::Info,
                self.turn,
                format!("Spoils: {} gold.", loot.gold),
            );
        }
        for item in &loot.items {
            self.log.record(
                LogCategory::Info,
                self.turn,
                format!("Loot found: {}.", item),
            );
        }

        let mut level_ups: Vec<(usize, u32)> = Vec::new();
        for index in self.living_heroes() {
            if let Some(hero) = self.combatants[index].as_hero_mut() {
                for level_up in hero.gain_experience(experience) {
                    level_ups.push((index, level_up.new_level));
                }
            }
        }
        for (index, new_level) in level_ups {
            self.log.record(
                LogCategory::LevelUp,
                self.turn,
                format!("{} reaches level {}!", self.combatants[index].name(), new_level),
            );
        }

        self.rewards = Some(RewardSummary { experience, loot });
    }

    fn set_phase(&mut self, phase: CombatPhase) {
        if self.phase == phase {
            return;
        }
        self.phase = phase;
        self.observers.emit(&EncounterEvent::StateChanged { phase });
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn result(&self) -> Option<CombatResult> {
        self.result
    }

    /// True while the battle still accepts `execute_turn` or a manual command.
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            CombatPhase::Running | CombatPhase::AwaitingInput
        )
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Roster indices still waiting to act this cycle.
    pub fn turn_order(&self) -> &VecDeque<usize> {
        &self.queue
    }

    /// The hero whose command the battle is paused on, if any.
    pub fn current_combatant(&self) -> Option<&Combatant> {
        self.pending.map(|index| &self.combatants[index])
    }

    pub fn combat_log(&self) -> &[CombatLogEntry] {
        self.log.entries()
    }

    pub fn rewards(&self) -> Option<&RewardSummary> {
        self.rewards.as_ref()
    }

    pub fn loot_reward(&self) -> Option<&LootBundle> {
        self.rewards.as_ref().map(|summary| &summary.loot)
    }

    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn hero_count(&self) -> usize {
        self.hero_count
    }

    pub fn combo(&self) -> &ComboTracker {
        &self.combo
    }

    pub fn manual_mode(&self) -> bool {
        self.manual_mode
    }

    pub fn living_heroes(&self) -> Vec<usize> {
        (0..self.hero_count)
            .filter(|&index| self.combatants[index].is_alive())
            .collect()
    }

    pub fn living_enemies(&self) -> Vec<usize> {
        (self.hero_count..self.combatants.len())
            .filter(|&index| self.combatants[index].is_alive())
            .collect()
    }

    fn is_living_hero(&self, index: usize) -> bool {
        index < self.hero_count && self.combatants[index].is_alive()
    }

    fn is_living_enemy(&self, index: usize) -> bool {
        index >= self.hero_count
            && index < self.combatants.len()
            && self.combatants[index].is_alive()
    }

    /// Tear the encounter down and hand the parties back, battle scars and
    /// earned levels included.
    pub fn into_parties(self) -> (Vec<Hero>, Vec<Enemy>) {
        let mut heroes = Vec::new();
        let mut enemies = Vec::new();
        for combatant in self.combatants {
            match combatant {
                Combatant::Hero(hero) => heroes.push(hero),
                Combatant::Enemy(enemy) => enemies.push(enemy),
            }
        }
        (heroes, enemies)
    }
}
