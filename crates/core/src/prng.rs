//! Deterministic PRNG based on the SplitMix64 algorithm.
//!
//! Provides a fast, seedable pseudo-random number generator for reproducible
//! simulations. Same seed always produces the same sequence of values across
//! all platforms (pure integer arithmetic, no floating point in the core
//! algorithm).

use serde::{Deserialize, Serialize};

/// SplitMix64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard increment and finalizer constants. Unlike xorshift-style
/// generators, SplitMix64 has no fixed point at zero, so every seed value
/// (including 0) yields a full-quality sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Golden-ratio increment added to the state before each output.
    const INCREMENT: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` divided by 2^53 for
    /// full mantissa precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed usize in [0, max).
    ///
    /// Uses simple modulo reduction. For non-power-of-two `max` values,
    /// this introduces negligible bias at 64-bit state width.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0 (division by zero in modulo).
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Golden values --

    #[test]
    fn next_u64_produces_known_golden_values_for_seed_42() {
        // Golden values for splitmix64(seed=42). If this test breaks, the
        // PRNG algorithm changed and all scene files using this seed are
        // invalidated.
        let mut rng = SplitMix64::new(42);
        assert_eq!(rng.next_u64(), 13_679_457_532_755_275_413);
        assert_eq!(rng.next_u64(), 2_949_826_092_126_892_291);
    }

    #[test]
    fn seed_zero_is_a_valid_seed() {
        // SplitMix64 has no all-zeros fixed point; seed 0 must produce a
        // normal sequence.
        let mut rng = SplitMix64::new(0);
        assert_eq!(rng.next_u64(), 16_294_208_416_658_607_535);
        assert_ne!(rng.next_u64(), 0);
    }

    // -- Determinism --

    #[test]
    fn two_instances_with_same_seed_produce_identical_sequences() {
        let mut rng_a = SplitMix64::new(42);
        let mut rng_b = SplitMix64::new(42);
        for i in 0..1000 {
            assert_eq!(
                rng_a.next_u64(),
                rng_b.next_u64(),
                "sequences diverged at index {i}"
            );
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut rng_a = SplitMix64::new(1);
        let mut rng_b = SplitMix64::new(2);
        let same = (0..100).filter(|_| rng_a.next_u64() == rng_b.next_u64()).count();
        assert_eq!(same, 0, "{same} collisions between different seeds");
    }

    // -- Range guarantees --

    #[test]
    fn next_f64_always_in_unit_interval() {
        let mut rng = SplitMix64::new(12345);
        for i in 0..10_000 {
            let v = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&v),
                "next_f64() = {v} out of [0, 1) at iteration {i}"
            );
        }
    }

    #[test]
    fn next_range_stays_within_specified_bounds() {
        let mut rng = SplitMix64::new(9999);
        for i in 0..10_000 {
            let v = rng.next_range(20.0, 25.0);
            assert!(
                (20.0..25.0).contains(&v),
                "next_range(20, 25) = {v} out of bounds at iteration {i}"
            );
        }
    }

    #[test]
    fn next_usize_always_less_than_max() {
        let mut rng = SplitMix64::new(7777);
        for i in 0..10_000 {
            let v = rng.next_usize(4);
            assert!(v < 4, "next_usize(4) = {v} >= 4 at iteration {i}");
        }
    }

    // -- Serialization roundtrip --

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = SplitMix64::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: SplitMix64 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(
                rng.next_u64(),
                restored.next_u64(),
                "sequences diverged after deserialization at index {i}"
            );
        }
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = SplitMix64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!(
                        (0.0..1.0).contains(&v),
                        "next_f64() = {v} out of [0, 1) for seed {seed}"
                    );
                }
            }

            #[test]
            fn next_range_in_bounds_for_any_seed_and_range(
                seed: u64,
                min in -1e6_f64..1e6,
                max in -1e6_f64..1e6,
            ) {
                prop_assume!(min < max);
                let mut rng = SplitMix64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_range(min, max);
                    prop_assert!(
                        v >= min && v < max,
                        "next_range({min}, {max}) = {v} out of bounds for seed {seed}"
                    );
                }
            }

            #[test]
            fn next_usize_in_bounds_for_any_seed_and_max(
                seed: u64,
                max in 1_usize..10_000,
            ) {
                let mut rng = SplitMix64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_usize(max);
                    prop_assert!(
                        v < max,
                        "next_usize({max}) = {v} >= max for seed {seed}"
                    );
                }
            }

            #[test]
            fn next_usize_4_hits_every_edge(seed: u64) {
                // The projectile launcher picks one of 4 viewport edges with
                // next_usize(4); all four must be reachable from any stream.
                let mut rng = SplitMix64::new(seed);
                let mut seen = [false; 4];
                for _ in 0..1000 {
                    seen[rng.next_usize(4)] = true;
                }
                prop_assert!(seen.iter().all(|&s| s), "edges hit: {seen:?} for seed {seed}");
            }
        }
    }
}
