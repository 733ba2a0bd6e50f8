// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{RandomReader, RandomSource, SeedSource};
use std::sync::Mutex;

/// A reader shared between threads, serialising access to one generator
pub struct SharedReader<R, S> {
    inner: Mutex<RandomReader<R, S>>,
}

impl<R: RandomSource, S: SeedSource> SharedReader<R, S> {
    pub fn new(reader: RandomReader<R, S>) -> Self {
        Self {
            inner: Mutex::new(reader),
        }
    }

    pub fn read(&self, device_id: i32, model_name: Option<&str>) -> i32 {
        // A panicking holder cannot leave the generator half-updated.
        let mut reader = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        reader.read(device_id, model_name)
    }
}
