// Hit resolution
pub const HIT_CHANCE_BASE: i32 = 100;
pub const HIT_CHANCE_MIN: i32 = 5;
pub const HIT_CHANCE_MAX: i32 = 95;
pub const ACCURACY_SPREAD_DIVISOR: i32 = 10;

// Critical hits
pub const ATTACK_CRIT_MULTIPLIER: f64 = 2.0;
pub const SKILL_CRIT_MULTIPLIER: f64 = 1.5;

// Damage mitigation
pub const DEFENSE_MITIGATION_DIVISOR: u32 = 2;
pub const MINIMUM_DAMAGE: u32 = 1;

// Elemental adjustment
pub const WEAKNESS_MULTIPLIER: f64 = 1.5;

// Initiative: speed plus a uniform roll in 0..=INITIATIVE_DIE
pub const INITIATIVE_DIE: u32 = 20;

// Combo streaks
pub const COMBO_DAMAGE_STEP: f64 = 0.1;
pub const COMBO_STREAK_CAP: u32 = 5;

// Victory experience: XP_REWARD_PER_LEVEL * avg enemy level * enemy count
pub const XP_REWARD_PER_LEVEL: f64 = 50.0;

// XP curve: next level costs XP_CURVE_BASE * level^XP_CURVE_EXPONENT
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.5;

// Auto-battle AI
pub const HEAL_THRESHOLD_PERCENT: u32 = 60;
pub const ENEMY_SKILL_CHANCE: f64 = 0.6;

// Built-in loot table
pub const GOLD_PER_ENEMY_LEVEL: u32 = 12;
pub const GOLD_VARIANCE_PER_LEVEL: u32 = 4;
pub const TRINKET_DROP_CHANCE: f64 = 0.25;
