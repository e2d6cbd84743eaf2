// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Random jitter for node placement.

New nodes all spawn around the same default anchor; without jitter they
would stack exactly on top of each other and hide one another. The jitter
magnitude is drawn from `[-JITTER_MAX, -JITTER_MIN] ∪ [JITTER_MIN, JITTER_MAX]`:
the near-zero band is excluded so two sequentially created nodes are always
visually distinguishable. The bounds are tunable constants, not a protocol
requirement.
*/

use rand::Rng;

/// Smallest jitter magnitude, exclusive lower band bound.
pub const JITTER_MIN: i32 = 10;
/// Largest jitter magnitude.
pub const JITTER_MAX: i32 = 50;

/// Returns a random integer in the closed interval `[min, max]`.
pub fn random_in_interval(min: i32, max: i32) -> i32 {
    rand::thread_rng().gen_range(min..=max)
}

/// Returns a jitter offset in `[-JITTER_MAX, -JITTER_MIN] ∪ [JITTER_MIN, JITTER_MAX]`,
/// either sign with equal probability.
pub fn random_jitter() -> f64 {
    let magnitude = random_in_interval(JITTER_MIN, JITTER_MAX);
    if rand::thread_rng().gen_bool(0.5) {
        -magnitude as f64
    } else {
        magnitude as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_in_interval_bounds() {
        for _ in 0..100 {
            let val = random_in_interval(10, 50);
            assert!((10..=50).contains(&val), "out of range: {}", val);
        }
    }

    #[test]
    fn test_random_jitter_excludes_near_zero_band() {
        for _ in 0..200 {
            let val = random_jitter();
            let magnitude = val.abs();
            assert!(
                magnitude >= JITTER_MIN as f64 && magnitude <= JITTER_MAX as f64,
                "jitter out of band: {}",
                val
            );
        }
    }

    #[test]
    fn test_random_jitter_produces_both_signs() {
        let mut negatives = 0;
        let mut positives = 0;
        for _ in 0..200 {
            if random_jitter() < 0.0 {
                negatives += 1;
            } else {
                positives += 1;
            }
        }
        // With 200 draws at p=0.5 each, seeing zero of either sign is
        // effectively impossible.
        assert!(negatives > 0, "no negative jitter in 200 draws");
        assert!(positives > 0, "no positive jitter in 200 draws");
    }
}
