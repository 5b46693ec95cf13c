//! Character domain logic: record validation, ability modifiers, the fixed
//! catalog of races/classes and the random character generator.
//!
//! Nothing in this crate performs I/O.

pub mod abilities;
pub mod catalog;
pub mod character;
pub mod error;
pub mod generator;
pub mod types;
