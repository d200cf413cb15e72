//! Deterministic random choice for strategies that want variety.
//!
//! Strategies must give the same answer for the same snapshot, so randomness
//! is a pure function of a seed derived from the turn and the hero rather
//! than a generator carried between calls.

/// PCG-XSH-RR generator evaluated as a pure function of its seed.
///
/// - **Deterministic**: same seed always produces same output
/// - **Stateless**: nothing is stored between calls
/// - **Small**: one multiply, one xorshift, one rotate
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }

    /// Picks one element of `choices`, or `None` when it is empty.
    pub fn choose<T: Copy>(&self, seed: u64, choices: &[T]) -> Option<T> {
        if choices.is_empty() {
            return None;
        }
        let index = self.next_u32(seed) as usize % choices.len();
        Some(choices[index])
    }
}

/// Mixes the turn number and hero id into a single seed.
///
/// Use different `context` values when one decision needs several
/// independent draws.
pub fn compute_seed(turn: u32, hero_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = (turn as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (hero_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
