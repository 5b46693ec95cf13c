//! Row models.

pub mod character;
