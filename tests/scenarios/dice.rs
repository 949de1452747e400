//! Dice scenarios
//!
//! Primitives driven by exact draws, plus equivalences between operations.

use osric_combat::dice::{
    roll, roll_exploding, roll_from_notation, roll_keep_highest, roll_multiple, roll_pool,
    sum_dice, DiceError, DEFAULT_BOTCH_THRESHOLD, DEFAULT_MAX_EXPLODES,
};
use osric_combat::rng::{ScriptedRandom, SeededRandom};

/// Test: a draw of 0.5 lands mid-die
#[test]
fn test_midpoint_draw() {
    let mut rng = ScriptedRandom::new(vec![0.5]);
    assert_eq!(roll(&mut rng, 6, 0), 4);
    assert_eq!(roll(&mut rng, 20, 0), 11);
}

/// Test: pool of three d6 against a target of 4
#[test]
fn test_pool_scenario() {
    let mut rng = ScriptedRandom::new(vec![0.0, 0.5, 0.83]);
    let pool = roll_pool(&mut rng, 3, 6, 4, DEFAULT_BOTCH_THRESHOLD);

    assert_eq!(pool.results, vec![1, 4, 5]);
    assert_eq!(pool.successes, 2);
    assert_eq!(pool.botches, 1);
    assert_eq!(pool.total, 10);
}

/// Test: a six explodes into a four
#[test]
fn test_exploding_scenario() {
    let mut rng = ScriptedRandom::new(vec![0.99, 0.5]);
    assert_eq!(
        roll_exploding(&mut rng, 1, 6, None, DEFAULT_MAX_EXPLODES),
        vec![10]
    );
}

/// Test: notation rolls exactly like the equivalent multi-die roll
#[test]
fn test_notation_matches_roll_multiple() {
    for (notation, count, sides, modifier) in [
        ("3d8+5", 3, 8, 5),
        ("2d10-3", 2, 10, -3),
        ("4d6", 4, 6, 0),
        ("0d6+2", 0, 6, 2),
    ] {
        let mut parsed_rng = SeededRandom::from_seed(11);
        let mut direct_rng = SeededRandom::from_seed(11);

        let parsed = roll_from_notation(&mut parsed_rng, notation).unwrap();
        let direct = roll_multiple(&mut direct_rng, count, sides, modifier);
        assert_eq!(parsed, direct, "{} diverged", notation);
    }
}

/// Test: malformed notation names the input and rolls nothing
#[test]
fn test_malformed_notation() {
    let mut rng = ScriptedRandom::constant(0.5);
    for bad in ["invalid", "2d", "d20", "3d6*2"] {
        assert_eq!(
            roll_from_notation(&mut rng, bad),
            Err(DiceError::InvalidNotation(bad.to_string()))
        );
    }
    assert_eq!(rng.consumed(), 0);
}

/// Test: kept dice are the top of the full roll
#[test]
fn test_keep_highest_is_top_of_full_roll() {
    let mut kept_rng = SeededRandom::from_seed(5);
    let mut full_rng = SeededRandom::from_seed(5);

    let kept = roll_keep_highest(&mut kept_rng, 6, 12, 3);
    let mut full = roll_multiple(&mut full_rng, 6, 12, 0);
    full.sort_unstable_by(|a, b| b.cmp(a));

    assert_eq!(kept, full[..3].to_vec());
}

/// Test: average of many d6 rolls sits near 3.5
#[test]
fn test_distribution_mean() {
    let mut rng = SeededRandom::from_seed(1);
    let rolls: Vec<i32> = (0..1000).map(|_| roll(&mut rng, 6, 0)).collect();

    assert!(rolls.iter().all(|r| (1..=6).contains(r)));
    let mean = f64::from(sum_dice(&rolls)) / 1000.0;
    assert!((3.0..=4.0).contains(&mean), "mean {} out of range", mean);
}
