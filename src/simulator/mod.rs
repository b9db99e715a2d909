//! Monte Carlo battle simulation for balance analysis.
//!
//! Run thousands of simulated battles to analyze:
//! - Win rates for a party against each enemy tier
//! - Fight length and stalemate risk
//! - Reward and level-up pacing
//!
//! Every battle runs through the real `Encounter` state machine
//! (src/engine/encounter.rs), so results match actual play.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, BattleStats};
