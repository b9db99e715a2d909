//! Consecutive-hit tracking for hero basic attacks.
//!
//! One tracker per encounter: it follows a single attacker/target pair.
//! A different hero hitting (or the same hero switching targets) starts a
//! fresh streak; any hero miss breaks it entirely.

use crate::core::combat_math::combo_multiplier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboTracker {
    pair: Option<(usize, usize)>,
    streak: u32,
    best: u32,
}

impl ComboTracker {
    /// Damage multiplier for an attack about to resolve. Uses the streak
    /// standing going into the attack, so the first hit of a pair is 1.0.
    pub fn multiplier(&self, attacker: usize, target: usize) -> f64 {
        match self.pair {
            Some(pair) if pair == (attacker, target) => combo_multiplier(self.streak),
            _ => combo_multiplier(0),
        }
    }

    pub fn register_hit(&mut self, attacker: usize, target: usize) {
        if self.pair == Some((attacker, target)) {
            self.streak += 1;
        } else {
            self.pair = Some((attacker, target));
            self.streak = 1;
        }
        self.best = self.best.max(self.streak);
    }

    pub fn register_miss(&mut self) {
        self.pair = None;
        self.streak = 0;
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Longest streak seen this encounter. Unbounded, unlike the
    /// multiplier cap.
    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn reset(&mut self) {
        self.pair = None;
        self.streak = 0;
        self.best = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_builds_on_same_pair() {
        let mut combo = ComboTracker::default();
        assert_eq!(combo.multiplier(0, 4), 1.0);
        combo.register_hit(0, 4);
        assert_eq!(combo.streak(), 1);
        assert_eq!(combo.multiplier(0, 4), 1.1);
        combo.register_hit(0, 4);
        assert_eq!(combo.multiplier(0, 4), 1.2);
    }

    #[test]
    fn test_new_pair_restarts_streak() {
        let mut combo = ComboTracker::default();
        combo.register_hit(0, 4);
        combo.register_hit(0, 4);
        combo.register_hit(1, 4); // different attacker
        assert_eq!(combo.streak(), 1);
        assert_eq!(combo.multiplier(1, 4), 1.1);
        assert_eq!(combo.multiplier(0, 4), 1.0, "old pair no longer combos");
    }

    #[test]
    fn test_miss_clears_everything() {
        let mut combo = ComboTracker::default();
        combo.register_hit(0, 4);
        combo.register_hit(0, 4);
        combo.register_miss();
        assert_eq!(combo.streak(), 0);
        assert_eq!(combo.multiplier(0, 4), 1.0);
        assert_eq!(combo.best(), 2, "best streak survives the miss");
    }

    #[test]
    fn test_multiplier_caps_while_streak_climbs() {
        let mut combo = ComboTracker::default();
        for _ in 0..50 {
            combo.register_hit(2, 5);
        }
        assert_eq!(combo.streak(), 50);
        assert_eq!(combo.best(), 50);
        assert_eq!(combo.multiplier(2, 5), 1.5);

        let mut five = ComboTracker::default();
        for _ in 0..5 {
            five.register_hit(2, 5);
        }
        assert_eq!(five.multiplier(2, 5), combo.multiplier(2, 5));
    }

    #[test]
    fn test_reset_for_new_encounter() {
        let mut combo = ComboTracker::default();
        combo.register_hit(0, 4);
        combo.reset();
        assert_eq!(combo.streak(), 0);
        assert_eq!(combo.best(), 0);
    }
}
