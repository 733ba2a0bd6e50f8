// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::ReaderError;

/// Trait for abstracting where seeds come from
/// Lets tests substitute a frozen or broken clock
pub trait SeedSource {
    /// Seed derived from the current wall-clock time, in whole seconds
    fn time_seed(&self) -> Result<u64, ReaderError>;

    /// Seed drawn from the operating system's entropy source
    fn entropy_seed(&self) -> Result<u64, ReaderError>;
}
