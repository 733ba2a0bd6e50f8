// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Largest value a reading can take, matching the C library default range.
pub const RAND_MAX: i32 = i32::MAX;

/// Trait for abstracting the pseudo-random generator behind a reader
/// Each implementation owns its generator state
pub trait RandomSource: Send {
    /// Next pseudo-random value in `0..=RAND_MAX`
    fn next_value(&mut self) -> i32;

    /// Restart the sequence from `seed`. Equal seeds yield equal sequences.
    fn reseed(&mut self, seed: u64);
}

impl RandomSource for Box<dyn RandomSource> {
    fn next_value(&mut self) -> i32 {
        (**self).next_value()
    }
    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }
}
