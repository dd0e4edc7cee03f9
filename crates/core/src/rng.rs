//! RNG module - injectable randomness for spawns
//!
//! The engine never reaches for an ambient random source. Sessions are generic over
//! [`RandomSource`], so the terminal runner can seed from the clock while tests
//! and replays pass a fixed seed or a scripted source.

/// Source of randomness consumed by the spawn policy.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, bound)`. Returns 0 when `bound` is 0.
    ///
    /// Uses the high bits (multiply-shift) since LCG low bits have short periods.
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state (reseeding with it continues the sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_below_in_range() {
        let mut rng = SimpleRng::new(7);
        for bound in 1..=16 {
            for _ in 0..50 {
                assert!(rng.next_below(bound) < bound);
            }
        }
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn test_next_below_covers_small_ranges() {
        // Low-bit cycling would pin this to alternating values.
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.next_below(4) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_next_unit_bounds() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..1000 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SimpleRng::new(5);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut a = SimpleRng::new(11);
        let mut b = SimpleRng::new(11);
        let r = &mut a;
        fn draw(mut src: impl RandomSource) -> u32 {
            src.next_u32()
        }
        assert_eq!(draw(r), b.next_u32());
    }
}
