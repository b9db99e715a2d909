//! Battle resolution: the encounter state machine and everything it drives.

#![allow(unused_imports)]

pub mod actions;
pub mod combo;
pub mod encounter;
pub mod events;
pub mod log;
pub mod rewards;
pub mod types;

pub use actions::*;
pub use combo::*;
pub use encounter::*;
pub use events::*;
pub use log::*;
pub use rewards::*;
pub use types::*;
