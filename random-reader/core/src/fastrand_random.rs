// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{RandomSource, DEFAULT_SEED, RAND_MAX};

pub struct FastrandRandom {
    rng: fastrand::Rng,
}

impl FastrandRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastrandRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for FastrandRandom {
    fn next_value(&mut self) -> i32 {
        self.rng.i32(0..=RAND_MAX)
    }
    fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }
}
