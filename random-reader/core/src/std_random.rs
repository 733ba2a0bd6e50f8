// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{RandomSource, DEFAULT_SEED, RAND_MAX};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for StdRandom {
    fn next_value(&mut self) -> i32 {
        self.rng.random_range(0..=RAND_MAX)
    }
    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
