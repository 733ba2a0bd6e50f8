// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ReaderError;

/// Seed the C library applies when `srand` was never called.
pub const DEFAULT_SEED: u64 = 1;

/// How a reader seeds its generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Seed once with [`DEFAULT_SEED`]; the first reading of a fresh reader is deterministic
    #[default]
    ProcessDefault,
    /// Reseed from the wall clock before every reading
    Time,
    /// Seed once with the given value
    Fixed(u64),
    /// Seed once from the OS entropy source
    Entropy,
}

impl SeedPolicy {
    /// Decode the policy code used at the C boundary.
    ///
    /// | code | policy           |
    /// |------|------------------|
    /// | 0    | process default  |
    /// | 1    | time             |
    /// | 2    | fixed (`seed`)   |
    /// | 3    | entropy          |
    pub fn from_code(code: u32, seed: u64) -> Result<Self, ReaderError> {
        match code {
            0 => Ok(SeedPolicy::ProcessDefault),
            1 => Ok(SeedPolicy::Time),
            2 => Ok(SeedPolicy::Fixed(seed)),
            3 => Ok(SeedPolicy::Entropy),
            other => Err(ReaderError::UnknownPolicy(other)),
        }
    }

    /// Whether the generator is reseeded on every read
    pub fn reseeds_per_read(&self) -> bool {
        matches!(self, SeedPolicy::Time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_known_codes() {
        assert_eq!(SeedPolicy::from_code(0, 9), Ok(SeedPolicy::ProcessDefault));
        assert_eq!(SeedPolicy::from_code(1, 9), Ok(SeedPolicy::Time));
        assert_eq!(SeedPolicy::from_code(2, 9), Ok(SeedPolicy::Fixed(9)));
        assert_eq!(SeedPolicy::from_code(3, 9), Ok(SeedPolicy::Entropy));
    }

    #[test]
    fn rejects_unknown_code() {
        assert_eq!(
            SeedPolicy::from_code(7, 0),
            Err(ReaderError::UnknownPolicy(7))
        );
    }
}
