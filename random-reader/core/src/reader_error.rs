// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderError {
    /// System clock reports a time before 1970-01-01
    #[error("system clock is set before the Unix epoch")]
    ClockBeforeEpoch,

    /// OS entropy source could not produce a seed
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    #[error("fixed seed policy requires 'fixed_seed'")]
    MissingFixedSeed,

    /// Policy code passed across the C boundary is not recognised
    #[error("unknown seed policy code {0}")]
    UnknownPolicy(u32),

    #[error("invalid reader configuration: {0}")]
    Config(String),
}
