//! Alphabet arithmetic and reflector wire helpers.

pub mod alphabet;
pub mod pairs;
