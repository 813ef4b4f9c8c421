//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic and fast, so tests can replay a placement exactly.

/// Anything that can hand out uniform integers in `[0, upper_bound)`.
///
/// The generator only ever draws through this trait, which lets tests
/// script the exact sequence of directions and start cells.
pub trait RandomSource {
    fn next_int(&mut self, upper_bound: u32) -> u32;
}

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    /// Generate a random number in [0, upper_bound).
    fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }
}
