// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod reader_error;
pub use reader_error::ReaderError;

pub mod random_source;
pub use random_source::{RandomSource, RAND_MAX};

pub mod std_random;
pub use std_random::StdRandom;

pub mod fastrand_random;
pub use fastrand_random::FastrandRandom;

pub mod seed_source;
pub use seed_source::SeedSource;

pub mod system_seed_source;
pub use system_seed_source::SystemSeedSource;

mod seed_policy;
pub use seed_policy::{SeedPolicy, DEFAULT_SEED};

mod reader_config;
pub use reader_config::{Backend, PolicyKind, ReaderConfig};

mod random_reader;
pub use random_reader::{DynReader, RandomReader};

mod shared_reader;
pub use shared_reader::SharedReader;

mod process_reader;
pub use process_reader::{process_read, ProcessReader};
