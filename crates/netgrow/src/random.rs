//! Random draws used by the growth engine and degree sampling.
//!
//! Every helper takes the generator explicitly so a run is reproducible from
//! its seed and testable with a fixed generator.
use std::f32::consts::TAU;

use rand::RngCore;

/// Generate a random float in the range [0, 1].
///
/// The upper bound is reachable: the highest `next_u32` words round to exactly
/// `1.0` in `f32`. Use [`rand_angle`] where a half-open range matters.
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Uniform float in `[lo, hi]`. Collapses to `lo` for an empty or inverted range.
#[inline]
pub fn rand_range(rng: &mut dyn RngCore, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return lo;
    }
    (lo + rand01(rng) * (hi - lo)).min(hi)
}

/// Uniform angle in `[0, 2π)` radians.
#[inline]
pub fn rand_angle(rng: &mut dyn RngCore) -> f32 {
    let angle = rand01(rng) * TAU;
    if angle < TAU {
        angle
    } else {
        0.0
    }
}

/// Bernoulli draw that succeeds with probability `p`.
///
/// `p <= 0` never succeeds and `p >= 1` always does, but a value is still
/// drawn so the generator advances the same way regardless of `p`.
#[inline]
pub fn chance(rng: &mut dyn RngCore, p: f32) -> bool {
    let roll = rand01(rng);
    p >= 1.0 || roll < p
}

/// Uniform index in `0..len`. `len` must be non-zero.
#[inline]
pub fn rand_index(rng: &mut dyn RngCore, len: usize) -> usize {
    debug_assert!(len > 0, "rand_index needs a non-empty range");
    ((rng.next_u64() % len as u64) as usize).min(len - 1)
}


#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::test_rng::FixedRng;
    use super::*;

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_in_unit_range() {
        for value in [0, 1, 1000, u32::MAX / 2, u32::MAX - 1, u32::MAX] {
            let mut rng = FixedRng { value };
            let result = rand01(&mut rng);
            assert!(
                (0.0..=1.0).contains(&result),
                "rand01({value}) = {result} is out of range"
            );
        }
    }

    #[test]
    fn rand_range_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1000 {
            let v = rand_range(&mut rng, 100.0, 250.0);
            assert!((100.0..=250.0).contains(&v));
        }
    }

    #[test]
    fn rand_range_collapses_degenerate_interval() {
        let mut rng = FixedRng::at(0.7);
        assert_eq!(rand_range(&mut rng, 5.0, 5.0), 5.0);
        assert_eq!(rand_range(&mut rng, 5.0, 1.0), 5.0);
    }

    #[test]
    fn rand_angle_never_reaches_a_full_turn() {
        for value in [0, u32::MAX / 2, u32::MAX - 64, u32::MAX - 1, u32::MAX] {
            let mut rng = FixedRng { value };
            let angle = rand_angle(&mut rng);
            assert!(
                (0.0..TAU).contains(&angle),
                "rand_angle({value}) = {angle} is outside [0, TAU)"
            );
        }
        let mut top = FixedRng { value: u32::MAX };
        assert_eq!(rand01(&mut top), 1.0);
        assert_eq!(rand_angle(&mut top), 0.0);
    }

    #[test]
    fn chance_handles_extremes() {
        let mut low = FixedRng { value: 0 };
        let mut high = FixedRng { value: u32::MAX };
        assert!(!chance(&mut low, 0.0));
        assert!(chance(&mut high, 1.0));
        assert!(chance(&mut low, 0.01));
        assert!(!chance(&mut high, 0.99));
    }

    #[test]
    fn rand_index_covers_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[rand_index(&mut rng, 5)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
