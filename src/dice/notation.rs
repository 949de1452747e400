//! Dice notation
//!
//! Parses strings of the exact shape `<count>d<sides>[+|-<modifier>]`, e.g.
//! "2d6", "1d20-2", "3d8+5". The count is required, the `d` is lowercase and
//! no whitespace is allowed.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{effective_sides, roll_multiple, sum_dice, MAX_SIDES};
use crate::rng::RandomSource;

/// Errors from dice operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("invalid dice notation: {0}")]
    InvalidNotation(String),
}

static NOTATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)d([0-9]+)([+-][0-9]+)?$").unwrap());

/// A parsed dice expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceNotation {
    /// Number of dice
    pub count: u32,
    /// Sides per die
    pub sides: u32,
    /// Modifier, applied to the last die when rolled
    pub modifier: i32,
}

impl DiceNotation {
    pub fn new(count: u32, sides: u32, modifier: i32) -> Self {
        Self {
            count,
            sides,
            modifier,
        }
    }

    /// Roll and return each die, the modifier folded into the last one
    pub fn roll_each<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<i32> {
        roll_multiple(rng, self.count, self.sides, self.modifier)
    }

    /// Roll and return the sum
    pub fn roll_total<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i32 {
        sum_dice(&self.roll_each(rng))
    }

    /// Roll and keep the expression, each die and the sum together
    pub fn roll_report<R: RandomSource + ?Sized>(&self, rng: &mut R) -> NotationRoll {
        let results = self.roll_each(rng);
        let total = sum_dice(&results);
        NotationRoll {
            notation: *self,
            results,
            total,
        }
    }

    /// Lowest possible sum
    pub fn min(&self) -> i64 {
        if self.count == 0 {
            return 0;
        }
        i64::from(self.count) + i64::from(self.modifier)
    }

    /// Highest possible sum
    pub fn max(&self) -> i64 {
        if self.count == 0 {
            return 0;
        }
        i64::from(self.count) * i64::from(effective_sides(self.sides)) + i64::from(self.modifier)
    }

    /// Expected sum
    pub fn average(&self) -> f64 {
        (self.min() + self.max()) as f64 / 2.0
    }
}

/// A rolled expression, displayed as `3d8+5: [5, 5, 10] = 20`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotationRoll {
    pub notation: DiceNotation,
    /// Each die, the modifier folded into the last one
    pub results: Vec<i32>,
    pub total: i32,
}

impl fmt::Display for NotationRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} = {}", self.notation, self.results, self.total)
    }
}

impl FromStr for DiceNotation {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiceError::InvalidNotation(s.to_string());

        let caps = NOTATION_REGEX.captures(s).ok_or_else(invalid)?;
        let count = caps[1].parse::<u32>().map_err(|_| invalid())?;
        let sides = caps[2]
            .parse::<u32>()
            .ok()
            .filter(|&sides| sides <= MAX_SIDES)
            .ok_or_else(invalid)?;
        let modifier = match caps.get(3) {
            Some(m) => m.as_str().parse::<i32>().map_err(|_| invalid())?,
            None => 0,
        };

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }
}

impl fmt::Display for DiceNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.modifier {
            0 => write!(f, "{}d{}", self.count, self.sides),
            m if m > 0 => write!(f, "{}d{}+{}", self.count, self.sides, m),
            m => write!(f, "{}d{}{}", self.count, self.sides, m),
        }
    }
}

/// Parse `notation` and roll it, returning each die.
///
/// Equivalent to [`roll_multiple`] with the parsed count, sides and modifier.
pub fn roll_from_notation<R: RandomSource + ?Sized>(
    rng: &mut R,
    notation: &str,
) -> Result<Vec<i32>, DiceError> {
    let parsed: DiceNotation = notation.parse()?;
    Ok(parsed.roll_each(rng))
}

/// Parse `notation`, roll it, and return the sum
pub fn roll_expression<R: RandomSource + ?Sized>(
    rng: &mut R,
    notation: &str,
) -> Result<i32, DiceError> {
    let parsed: DiceNotation = notation.parse()?;
    Ok(parsed.roll_total(rng))
}
