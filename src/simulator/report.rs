//! Simulation report generation.

use super::runner::BattleStats;
use std::collections::HashMap;

/// Aggregated results from a batch of simulated battles.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_battles: u32,
    pub victories: u32,
    pub defeats: u32,
    pub timeouts: u32,

    // Aggregated stats
    pub win_rate: f64,
    pub avg_turns: f64,
    /// Average payout per victory, not per battle
    pub avg_experience: f64,
    pub avg_gold: f64,
    pub avg_surviving_heroes: f64,
    pub total_level_ups: u64,
    pub total_items_dropped: u64,

    // Distribution data
    pub turn_distribution: HashMap<u32, u32>,

    // Individual battle stats for detailed analysis
    pub battle_stats: Vec<BattleStats>,
}

impl SimReport {
    /// Create a new report from completed battle stats.
    pub fn from_runs(runs: Vec<BattleStats>) -> Self {
        let num_battles = runs.len() as u32;
        let victories = runs.iter().filter(|r| r.victory).count() as u32;
        let timeouts = runs.iter().filter(|r| r.timed_out).count() as u32;
        let defeats = num_battles - victories - timeouts;

        let win_rate = victories as f64 / num_battles.max(1) as f64;
        let avg_turns =
            runs.iter().map(|r| r.turns as f64).sum::<f64>() / num_battles.max(1) as f64;
        let avg_experience = runs
            .iter()
            .filter(|r| r.victory)
            .map(|r| r.experience as f64)
            .sum::<f64>()
            / victories.max(1) as f64;
        let avg_gold = runs
            .iter()
            .filter(|r| r.victory)
            .map(|r| r.gold as f64)
            .sum::<f64>()
            / victories.max(1) as f64;
        let avg_surviving_heroes = runs
            .iter()
            .map(|r| r.surviving_heroes as f64)
            .sum::<f64>()
            / num_battles.max(1) as f64;
        let total_level_ups = runs.iter().map(|r| r.level_ups as u64).sum();
        let total_items_dropped = runs.iter().map(|r| r.items_dropped as u64).sum();

        let mut turn_distribution = HashMap::new();
        for run in &runs {
            *turn_distribution.entry(run.turns).or_insert(0) += 1;
        }

        Self {
            num_battles,
            victories,
            defeats,
            timeouts,
            win_rate,
            avg_turns,
            avg_experience,
            avg_gold,
            avg_surviving_heroes,
            total_level_ups,
            total_items_dropped,
            turn_distribution,
            battle_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 SKIRMISH SIMULATION REPORT\n");
        report.push_str("             (Using the Real Encounter Engine)\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Battles: {} total, {} won, {} lost, {} timed out\n\n",
            self.num_battles, self.victories, self.defeats, self.timeouts
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Win Rate:            {:.1}%\n",
            self.win_rate * 100.0
        ));
        report.push_str(&format!("  Avg Turns:           {:.1}\n", self.avg_turns));
        report.push_str(&format!(
            "  Avg Heroes Standing: {:.2}\n\n",
            self.avg_surviving_heroes
        ));

        report.push_str("── REWARDS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg XP per Victory:  {:.0}\n",
            self.avg_experience
        ));
        report.push_str(&format!("  Avg Gold per Victory: {:.0}\n", self.avg_gold));
        report.push_str(&format!("  Total Level-ups:     {}\n", self.total_level_ups));
        report.push_str(&format!(
            "  Total Items Dropped: {}\n\n",
            self.total_items_dropped
        ));

        report.push_str("── FIGHT LENGTH ─────────────────────────────────────────────────\n");
        let max_turns = self.turn_distribution.keys().copied().max().unwrap_or(0);
        let mut band_start = 1;
        while band_start <= max_turns {
            let band_end = band_start + 4;
            let count: u32 = self
                .turn_distribution
                .iter()
                .filter(|(turns, _)| **turns >= band_start && **turns <= band_end)
                .map(|(_, count)| *count)
                .sum();
            if count > 0 {
                let pct = (count as f64 / self.num_battles.max(1) as f64) * 100.0;
                let bar: String = "█".repeat((pct / 5.0) as usize);
                report.push_str(&format!(
                    "  {:3}-{:3} turns: {:>5.1}% {}\n",
                    band_start, band_end, pct, bar
                ));
            }
            band_start = band_end + 1;
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if self.win_rate < 0.35 {
            "TOO HARD - The party loses most fights"
        } else if self.win_rate < 0.65 {
            "CONTESTED - Could go either way"
        } else if self.win_rate < 0.90 {
            "GOOD - Favored but not guaranteed"
        } else {
            "TOO EASY - Heroes rarely lose"
        };
        report.push_str(&format!("  Rating: {}\n", rating));

        if self.timeouts > 0 {
            report.push_str(&format!(
                "  ⚠️  {} battles hit the turn cap - stalemate loop?\n",
                self.timeouts
            ));
        }
        if self.avg_turns > 40.0 {
            report.push_str("  ⚠️  Fights drag on - damage numbers too low?\n");
        }
        if self.win_rate > 0.0 && self.avg_surviving_heroes < 1.5 {
            report.push_str("  ⚠️  Wins are pyrrhic - healing can't keep up?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// JSON output carries the aggregates only; per-battle stats and the
// turn distribution map stay internal.
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 11)?;
        state.serialize_field("num_battles", &self.num_battles)?;
        state.serialize_field("victories", &self.victories)?;
        state.serialize_field("defeats", &self.defeats)?;
        state.serialize_field("timeouts", &self.timeouts)?;
        state.serialize_field("win_rate", &self.win_rate)?;
        state.serialize_field("avg_turns", &self.avg_turns)?;
        state.serialize_field("avg_experience", &self.avg_experience)?;
        state.serialize_field("avg_gold", &self.avg_gold)?;
        state.serialize_field("avg_surviving_heroes", &self.avg_surviving_heroes)?;
        state.serialize_field("total_level_ups", &self.total_level_ups)?;
        state.serialize_field("total_items_dropped", &self.total_items_dropped)?;
        state.end()
    }
}
