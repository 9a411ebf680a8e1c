//! RNG module - seeded randomness for board generation
//!
//! A small LCG keeps generation deterministic: the same seed always yields the
//! same layout and player start, which is what the tests and the `DUNGEON_SEED`
//! override rely on.

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max). Returns 0 when `max == 0`.
    ///
    /// Scales by multiply-shift so the result comes from the high bits. The low
    /// bits of a power-of-two LCG cycle with a short period (bit 0 simply
    /// alternates), which would tie consecutive small-range draws together.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
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
    fn test_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in [1u32, 2, 3, 4, 35] {
            for _ in 0..500 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_two_slot_draws_cover_all_pairs() {
        // Consecutive (x, y) draws over two slots must reach every combination.
        let mut rng = SimpleRng::new(1);
        let mut seen = [[false; 2]; 2];
        for _ in 0..200 {
            let x = rng.next_range(2) as usize;
            let y = rng.next_range(2) as usize;
            seen[y][x] = true;
        }
        assert!(seen.iter().flatten().all(|s| *s), "{:?}", seen);
    }
}
