//! The closed ability catalog and its effect types.

#![allow(unused_imports)]

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
