//! Scenario tests for combat round resolution
//!
//! - Dice: primitives driven by scripted draws
//! - Initiative: individual and group rolls
//! - Surprise: race and circumstance adjustments
//! - Turn order: full rounds between a party and monsters
//! - CLI: the osric-round binary against seeded library runs

pub mod dice;
pub mod initiative;
pub mod surprise;
