// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use random_reader_core::{FastrandRandom, RandomSource, StdRandom, RAND_MAX};

fn sequence<R: RandomSource>(source: &mut R, len: usize) -> Vec<i32> {
    (0..len).map(|_| source.next_value()).collect()
}

#[test]
fn test_std_same_seed_same_sequence() {
    let mut a = StdRandom::new(2024);
    let mut b = StdRandom::new(2024);
    assert_eq!(sequence(&mut a, 32), sequence(&mut b, 32));
}

#[test]
fn test_fastrand_same_seed_same_sequence() {
    let mut a = FastrandRandom::new(2024);
    let mut b = FastrandRandom::new(2024);
    assert_eq!(sequence(&mut a, 32), sequence(&mut b, 32));
}

#[test]
fn test_reseed_restarts_sequence() {
    let mut std_source = StdRandom::new(5);
    let first = sequence(&mut std_source, 8);
    std_source.reseed(5);
    assert_eq!(sequence(&mut std_source, 8), first);

    let mut fast_source = FastrandRandom::new(5);
    let first = sequence(&mut fast_source, 8);
    fast_source.reseed(5);
    assert_eq!(sequence(&mut fast_source, 8), first);
}

#[test]
fn test_values_stay_in_c_range() {
    let mut boxed: Vec<Box<dyn RandomSource>> =
        vec![Box::new(StdRandom::new(0)), Box::new(FastrandRandom::new(0))];
    for source in boxed.iter_mut() {
        for value in sequence(source, 1000) {
            assert!((0..=RAND_MAX).contains(&value));
        }
    }
}
