//! Pools, exploding dice, keep-N and head-to-head rolls

use std::cmp::Ordering;

use serde::Serialize;
use tracing::trace;

use super::{effective_sides, roll, roll_multiple, sum_dice};
use crate::rng::RandomSource;

/// Outcome of a dice pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DicePoolResult {
    /// Individual dice in roll order
    pub results: Vec<i32>,
    /// Dice at or above the target
    pub successes: usize,
    /// Dice at or below the botch threshold
    pub botches: usize,
    /// Sum of all dice
    pub total: i32,
}

/// Roll `count` dice and count successes (`>= target`) and botches
/// (`<= botch_threshold`).
pub fn roll_pool<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: u32,
    sides: u32,
    target: i32,
    botch_threshold: i32,
) -> DicePoolResult {
    let results = roll_multiple(rng, count, sides, 0);
    let successes = results.iter().filter(|&&r| r >= target).count();
    let botches = results.iter().filter(|&&r| r <= botch_threshold).count();
    let total = sum_dice(&results);

    DicePoolResult {
        results,
        successes,
        botches,
        total,
    }
}

/// Roll `count` exploding dice.
///
/// Whenever the most recent roll of a die is at least `explode_on` (default:
/// `sides`) it is rolled again and added to that die's total, up to
/// `max_explodes` extra rolls. Each die contributes one entry, so the result
/// always has `count` entries.
pub fn roll_exploding<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: u32,
    sides: u32,
    explode_on: Option<i32>,
    max_explodes: u32,
) -> Vec<i32> {
    let explode_on =
        explode_on.unwrap_or_else(|| i32::try_from(effective_sides(sides)).unwrap_or(i32::MAX));
    let mut results = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let mut last = roll(rng, sides, 0);
        let mut total = last;
        let mut explosions = 0;

        while last >= explode_on && explosions < max_explodes {
            last = roll(rng, sides, 0);
            total = total.saturating_add(last);
            explosions += 1;
        }

        if explosions > 0 {
            trace!("die exploded {} times for {}", explosions, total);
        }
        results.push(total);
    }

    results
}

/// Roll `count` dice and keep the `keep` highest, sorted descending
pub fn roll_keep_highest<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: u32,
    sides: u32,
    keep: u32,
) -> Vec<i32> {
    let mut results = roll_multiple(rng, count, sides, 0);
    results.sort_unstable_by(|a, b| b.cmp(a));
    results.truncate(keep.min(count) as usize);
    results
}

/// Roll `count` dice and keep the `keep` lowest, sorted ascending
pub fn roll_keep_lowest<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: u32,
    sides: u32,
    keep: u32,
) -> Vec<i32> {
    let mut results = roll_multiple(rng, count, sides, 0);
    results.sort_unstable();
    results.truncate(keep.min(count) as usize);
    results
}

/// Two dice and the one that counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvantageRoll {
    /// Both dice, in roll order
    pub rolls: [i32; 2],
    /// The kept die plus the modifier
    pub result: i32,
}

/// Roll twice and keep the higher die
pub fn roll_with_advantage<R: RandomSource + ?Sized>(
    rng: &mut R,
    sides: u32,
    modifier: i32,
) -> AdvantageRoll {
    let rolls = [roll(rng, sides, 0), roll(rng, sides, 0)];
    AdvantageRoll {
        rolls,
        result: rolls[0].max(rolls[1]).saturating_add(modifier),
    }
}

/// Roll twice and keep the lower die
pub fn roll_with_disadvantage<R: RandomSource + ?Sized>(
    rng: &mut R,
    sides: u32,
    modifier: i32,
) -> AdvantageRoll {
    let rolls = [roll(rng, sides, 0), roll(rng, sides, 0)];
    AdvantageRoll {
        rolls,
        result: rolls[0].min(rolls[1]).saturating_add(modifier),
    }
}

/// One side of a contested roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContestRoll {
    /// The natural die
    pub roll: i32,
    /// Die plus modifier
    pub total: i32,
}

/// Who won a contested roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContestWinner {
    Tie,
    Challenger1,
    Challenger2,
}

impl ContestWinner {
    /// Numeric code: 0 for a tie, otherwise the winning challenger
    pub fn code(self) -> u8 {
        match self {
            ContestWinner::Tie => 0,
            ContestWinner::Challenger1 => 1,
            ContestWinner::Challenger2 => 2,
        }
    }
}

/// Outcome of a contested roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContestedRoll {
    pub challenger1: ContestRoll,
    pub challenger2: ContestRoll,
    pub winner: ContestWinner,
}

/// Roll one die for each challenger; the higher total wins
pub fn contested_roll<R: RandomSource + ?Sized>(
    rng: &mut R,
    sides: u32,
    challenger1_modifier: i32,
    challenger2_modifier: i32,
) -> ContestedRoll {
    let roll1 = roll(rng, sides, 0);
    let roll2 = roll(rng, sides, 0);

    let challenger1 = ContestRoll {
        roll: roll1,
        total: roll1.saturating_add(challenger1_modifier),
    };
    let challenger2 = ContestRoll {
        roll: roll2,
        total: roll2.saturating_add(challenger2_modifier),
    };

    let winner = match challenger1.total.cmp(&challenger2.total) {
        Ordering::Greater => ContestWinner::Challenger1,
        Ordering::Less => ContestWinner::Challenger2,
        Ordering::Equal => ContestWinner::Tie,
    };

    ContestedRoll {
        challenger1,
        challenger2,
        winner,
    }
}
