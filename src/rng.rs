use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::GridInt;

/// The only source of non-determinism in the game. Seedable so that whole
/// sessions can be reproduced.
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        GameRng {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn gen_range(&mut self, range: std::ops::Range<GridInt>) -> GridInt {
        self.rng.gen_range(range)
    }
}
