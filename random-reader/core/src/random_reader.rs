// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{
    Backend, FastrandRandom, RandomSource, ReaderConfig, ReaderError, SeedPolicy, SeedSource,
    StdRandom, SystemSeedSource, DEFAULT_SEED,
};
use tracing::{debug, trace, warn};

/// Reader built from a [`ReaderConfig`], backend chosen at runtime
pub type DynReader = RandomReader<Box<dyn RandomSource>, SystemSeedSource>;

/// Produces one pseudo-random reading per call.
///
/// The generator is owned by the reader, so concurrent callers each need their
/// own reader or go through a [`crate::SharedReader`] / [`crate::ProcessReader`].
pub struct RandomReader<R, S> {
    source: R,
    seeds: S,
    policy: SeedPolicy,
}

impl<R: RandomSource, S: SeedSource> RandomReader<R, S> {
    pub fn new(mut source: R, seeds: S, policy: SeedPolicy) -> Self {
        let seed = initial_seed(&seeds, policy);
        debug!(?policy, seed, "Seeding reader");
        source.reseed(seed);
        Self {
            source,
            seeds,
            policy,
        }
    }

    pub fn policy(&self) -> SeedPolicy {
        self.policy
    }

    /// Return a value in `0..=RAND_MAX`.
    ///
    /// `device_id` and `model_name` do not influence the result. Under
    /// [`SeedPolicy::Time`] two reads within the same second return the same value.
    pub fn read(&mut self, device_id: i32, model_name: Option<&str>) -> i32 {
        trace!(device_id, model = model_name.unwrap_or("<none>"), "Read");
        if self.policy.reseeds_per_read() {
            let seed = time_seed_or_default(&self.seeds);
            self.source.reseed(seed);
        }
        self.source.next_value()
    }
}

impl DynReader {
    pub fn from_config(config: &ReaderConfig) -> Result<Self, ReaderError> {
        let policy = config.seed_policy()?;
        let source: Box<dyn RandomSource> = match config.backend {
            Backend::Std => Box::new(StdRandom::default()),
            Backend::Fast => Box::new(FastrandRandom::default()),
        };
        Ok(RandomReader::new(source, SystemSeedSource, policy))
    }
}

fn initial_seed<S: SeedSource>(seeds: &S, policy: SeedPolicy) -> u64 {
    match policy {
        SeedPolicy::ProcessDefault => DEFAULT_SEED,
        SeedPolicy::Fixed(seed) => seed,
        SeedPolicy::Time => time_seed_or_default(seeds),
        SeedPolicy::Entropy => seeds.entropy_seed().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default seed");
            DEFAULT_SEED
        }),
    }
}

fn time_seed_or_default<S: SeedSource>(seeds: &S) -> u64 {
    seeds.time_seed().unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to default seed");
        DEFAULT_SEED
    })
}
