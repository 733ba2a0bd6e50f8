// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! C ABI surface of the random reader plugin.
//!
//! `Read` serves host runtimes that call a bare function and expect the
//! generator to live inside the plugin, one per process. The `random_reader_*` functions let a
//! host own one reader per handle instead.

use random_reader_core::{process_read, RandomReader, SeedPolicy, StdRandom, SystemSeedSource};
use std::ffi::{c_char, c_int, CStr};
use std::ptr;
use tracing::warn;

/// Returned by [`random_reader_read`] for a null handle. Never a valid reading.
pub const READ_ERROR: c_int = -1;

#[cfg(not(feature = "time-seeded"))]
const EXPORT_POLICY: SeedPolicy = SeedPolicy::ProcessDefault;
#[cfg(feature = "time-seeded")]
const EXPORT_POLICY: SeedPolicy = SeedPolicy::Time;

/// Caller-owned reader behind an opaque pointer.
pub struct RandomReaderHandle {
    reader: RandomReader<StdRandom, SystemSeedSource>,
}

/// # Safety
///
/// `model` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
unsafe fn model_name<'a>(model: *const c_char) -> Option<&'a str> {
    if model.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(model) }.to_str().ok()
}

/// Read a pseudo-random integer for `device`/`model`.
///
/// All callers share one process-wide generator, so only the first reading of
/// the process is deterministic. `model` may be null.
///
/// # Safety
///
/// `model` must be null or a valid NUL-terminated string.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn Read(device: c_int, model: *const c_char) -> c_int {
    let model = unsafe { model_name(model) };
    process_read(EXPORT_POLICY, device, model)
}

/// Allocate a reader. Returns null for an unknown `policy` code.
///
/// Policy codes: 0 process default, 1 time, 2 fixed (`seed`), 3 entropy.
/// Release the handle with [`random_reader_free`].
#[no_mangle]
pub extern "C" fn random_reader_new(policy: u32, seed: u64) -> *mut RandomReaderHandle {
    match SeedPolicy::from_code(policy, seed) {
        Ok(policy) => {
            let reader = RandomReader::new(StdRandom::default(), SystemSeedSource, policy);
            Box::into_raw(Box::new(RandomReaderHandle { reader }))
        }
        Err(e) => {
            warn!(error = %e, "Rejecting reader allocation");
            ptr::null_mut()
        }
    }
}

/// Read from a handle returned by [`random_reader_new`].
///
/// # Safety
///
/// `handle` must be null or a live handle not used concurrently from another
/// thread. `model` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn random_reader_read(
    handle: *mut RandomReaderHandle,
    device: c_int,
    model: *const c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        return READ_ERROR;
    };
    let model = unsafe { model_name(model) };
    handle.reader.read(device, model)
}

/// Release a handle. Null is ignored.
///
/// # Safety
///
/// `handle` must be null or a handle from [`random_reader_new`] that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn random_reader_free(handle: *mut RandomReaderHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}
