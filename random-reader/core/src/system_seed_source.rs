// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ReaderError, SeedSource};
use rand::rngs::OsRng;
use rand::TryRngCore;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSeedSource;

impl SeedSource for SystemSeedSource {
    fn time_seed(&self) -> Result<u64, ReaderError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| ReaderError::ClockBeforeEpoch)?;
        Ok(elapsed.as_secs())
    }

    fn entropy_seed(&self) -> Result<u64, ReaderError> {
        OsRng
            .try_next_u64()
            .map_err(|e| ReaderError::Entropy(e.to_string()))
    }
}
