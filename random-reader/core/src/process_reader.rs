// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{RandomReader, SeedPolicy, StdRandom, SystemSeedSource};
use std::sync::Mutex;

type ProcessLocalReader = RandomReader<StdRandom, SystemSeedSource>;

static PROCESS_READER: ProcessReader = ProcessReader::new();

/// One generator for the whole process, built lazily on first read.
///
/// Under [`SeedPolicy::ProcessDefault`] only the first reading of the process
/// is deterministic; every later caller, on any thread, continues the same
/// sequence.
pub struct ProcessReader {
    inner: Mutex<Option<ProcessLocalReader>>,
}

impl ProcessReader {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// The reader is rebuilt when `policy` differs from the one it was built with.
    pub fn read(&self, policy: SeedPolicy, device_id: i32, model_name: Option<&str>) -> i32 {
        // A panicking holder cannot leave the generator half-updated.
        let mut slot = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        if slot.as_ref().is_some_and(|reader| reader.policy() != policy) {
            *slot = None;
        }
        slot.get_or_insert_with(|| {
            RandomReader::new(StdRandom::default(), SystemSeedSource, policy)
        })
        .read(device_id, model_name)
    }
}

impl Default for ProcessReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read from the process-wide reader.
pub fn process_read(policy: SeedPolicy, device_id: i32, model_name: Option<&str>) -> i32 {
    PROCESS_READER.read(policy, device_id, model_name)
}
