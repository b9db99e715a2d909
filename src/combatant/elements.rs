//! Damage elements and per-combatant elemental profiles.

use crate::core::constants::{MINIMUM_DAMAGE, WEAKNESS_MULTIPLIER};
use serde::{Deserialize, Serialize};

pub const NUM_ELEMENTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Physical,
    Fire,
    Frost,
    Lightning,
    Shadow,
    Holy,
}

impl Element {
    pub fn all() -> [Element; NUM_ELEMENTS] {
        [
            Element::Physical,
            Element::Fire,
            Element::Frost,
            Element::Lightning,
            Element::Shadow,
            Element::Holy,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Element::Physical => "Physical",
            Element::Fire => "Fire",
            Element::Frost => "Frost",
            Element::Lightning => "Lightning",
            Element::Shadow => "Shadow",
            Element::Holy => "Holy",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Element::Physical => 0,
            Element::Fire => 1,
            Element::Frost => 2,
            Element::Lightning => 3,
            Element::Shadow => 4,
            Element::Holy => 5,
        }
    }
}

/// Resistances (percent, negative amplifies) and weakness flags per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementalProfile {
    resistances: [i32; NUM_ELEMENTS],
    weaknesses: [bool; NUM_ELEMENTS],
}

impl ElementalProfile {
    /// No resistances, no weaknesses.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Builder: set a resistance percentage for one element.
    pub fn resist(mut self, element: Element, percent: i32) -> Self {
        self.resistances[element.index()] = percent;
        self
    }

    /// Builder: flag a weakness to one element.
    pub fn weak_to(mut self, element: Element) -> Self {
        self.weaknesses[element.index()] = true;
        self
    }

    pub fn resistance(&self, element: Element) -> i32 {
        self.resistances[element.index()]
    }

    pub fn is_weak_to(&self, element: Element) -> bool {
        self.weaknesses[element.index()]
    }

    /// Elemental step of damage resolution: weakness lands first (x1.5,
    /// floored), then resistance scaling, floored again. Never returns
    /// less than MINIMUM_DAMAGE. Negative resistance amplifies.
    pub fn adjust_damage(&self, damage: u32, element: Element) -> u32 {
        let mut adjusted = damage as f64;
        if self.is_weak_to(element) {
            adjusted = (adjusted * WEAKNESS_MULTIPLIER).floor();
        }
        let resistance = self.resistance(element);
        adjusted = (adjusted * (1.0 - resistance as f64 / 100.0)).floor();
        adjusted.max(MINIMUM_DAMAGE as f64) as u32
    }
}
