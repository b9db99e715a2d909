//! Skirmish - Turn-Based Combat Resolution Library
//!
//! This module exposes the battle engine for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod combatant;
pub mod core;
pub mod engine;
pub mod simulator;
pub mod skills;
