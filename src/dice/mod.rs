//! Dice rolling primitives
//!
//! All rolls draw from an injected [`RandomSource`]. A die with `sides` faces
//! maps a uniform draw `u` to `floor(u * sides) + 1`, so a fixed sequence of
//! draws always produces the same faces.
//!
//! - Single and multiple dice, with modifiers
//! - Notation like "3d8+5" (see [`DiceNotation`])
//! - Pools, exploding dice, keep-highest/lowest
//! - Advantage, disadvantage and contested rolls

mod notation;
mod pool;

pub use notation::{roll_expression, roll_from_notation, DiceError, DiceNotation, NotationRoll};
pub use pool::{
    contested_roll, roll_exploding, roll_keep_highest, roll_keep_lowest, roll_pool,
    roll_with_advantage, roll_with_disadvantage, AdvantageRoll, ContestRoll, ContestWinner,
    ContestedRoll, DicePoolResult,
};

use serde::Serialize;
use tracing::trace;

use crate::rng::RandomSource;

/// Faces on the conventional initiative die
pub const DEFAULT_INITIATIVE_SIDES: u32 = 6;

/// Dice at or below this value count as botches unless told otherwise
pub const DEFAULT_BOTCH_THRESHOLD: i32 = 1;

/// Cap on how many times a single exploding die may reroll
pub const DEFAULT_MAX_EXPLODES: u32 = 10;

/// Largest die the crate rolls; every face must fit in an `i32`
pub const MAX_SIDES: u32 = i32::MAX as u32;

/// Faces actually rolled for a `sides`-sided die
pub(crate) fn effective_sides(sides: u32) -> u32 {
    sides.clamp(1, MAX_SIDES)
}

/// Roll one die and add `modifier`.
///
/// The result lies in `[1 + modifier, sides + modifier]`. A die with zero
/// sides behaves like a one-sided die, and dice larger than [`MAX_SIDES`]
/// roll as a [`MAX_SIDES`] die.
pub fn roll<R: RandomSource + ?Sized>(rng: &mut R, sides: u32, modifier: i32) -> i32 {
    let sides = effective_sides(sides);
    let draw = rng.next_unit();
    // `as` saturates, so a negative draw lands on 0 and the min() guards 1.0
    let face = ((draw * f64::from(sides)).floor() as u32).min(sides - 1) + 1;
    trace!("d{} rolled {}", sides, face);
    i32::try_from(face).unwrap_or(i32::MAX).saturating_add(modifier)
}

/// Roll `count` dice. A non-zero `modifier` is added to the last die only.
pub fn roll_multiple<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: u32,
    sides: u32,
    modifier: i32,
) -> Vec<i32> {
    let mut results = Vec::with_capacity(count as usize);
    for _ in 0..count {
        results.push(roll(rng, sides, 0));
    }

    if modifier != 0 {
        if let Some(last) = results.last_mut() {
            *last = last.saturating_add(modifier);
        }
    }

    results
}

/// Sum a set of die results (empty sums to 0)
pub fn sum_dice(results: &[i32]) -> i32 {
    results.iter().sum()
}

/// Summary of a plain `count`d`sides` roll with a flat modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiceResult {
    /// Number of dice rolled
    pub count: u32,
    /// Sides per die
    pub sides: u32,
    /// Modifier added once to the sum
    pub modifier: i32,
    /// Sum of the dice plus the modifier
    pub result: i32,
}

/// Roll `count` dice and add `modifier` once to their sum
pub fn roll_dice<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: u32,
    sides: u32,
    modifier: i32,
) -> DiceResult {
    let results = roll_multiple(rng, count, sides, 0);
    DiceResult {
        count,
        sides,
        modifier,
        result: sum_dice(&results).saturating_add(modifier),
    }
}

/// Roll a generic initiative die (lower is better).
///
/// Most callers want [`DEFAULT_INITIATIVE_SIDES`]; combat rounds use the
/// group and individual rolls in [`crate::combat`] instead.
pub fn roll_initiative<R: RandomSource + ?Sized>(rng: &mut R, sides: u32, modifier: i32) -> i32 {
    roll(rng, sides, modifier)
}

/// Ability score modifier from the OSRIC table.
///
/// Scores outside 3-18 clamp to the table ends.
pub fn get_ability_modifier(score: i32) -> i32 {
    match score {
        i32::MIN..=3 => -3,
        4..=5 => -2,
        6..=8 => -1,
        9..=12 => 0,
        13..=15 => 1,
        16..=17 => 2,
        _ => 3,
    }
}
