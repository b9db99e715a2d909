//! Combatants: stat blocks, elements, statuses, heroes, and enemies.

#![allow(unused_imports)]

pub mod elements;
pub mod enemy;
pub mod hero;
pub mod stats;
pub mod status;
pub mod types;

pub use elements::*;
pub use enemy::*;
pub use hero::*;
pub use stats::*;
pub use status::*;
pub use types::*;
