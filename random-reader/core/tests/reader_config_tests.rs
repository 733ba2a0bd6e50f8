// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use random_reader_core::{Backend, PolicyKind, ReaderConfig, ReaderError, SeedPolicy};
use std::fs;

#[test]
fn test_empty_object_uses_defaults() {
    let config = ReaderConfig::from_json("{}").unwrap();

    assert_eq!(config, ReaderConfig::default());
    assert_eq!(config.seed_policy().unwrap(), SeedPolicy::ProcessDefault);
    assert_eq!(config.backend, Backend::Std);
}

#[test]
fn test_parses_every_policy() {
    let cases = [
        (r#"{"seed_policy": "process_default"}"#, SeedPolicy::ProcessDefault),
        (r#"{"seed_policy": "time"}"#, SeedPolicy::Time),
        (r#"{"seed_policy": "fixed", "fixed_seed": 3}"#, SeedPolicy::Fixed(3)),
        (r#"{"seed_policy": "entropy"}"#, SeedPolicy::Entropy),
    ];
    for (json, expected) in cases {
        let config = ReaderConfig::from_json(json).unwrap();
        assert_eq!(config.seed_policy().unwrap(), expected, "{json}");
    }
}

#[test]
fn test_fixed_without_seed_is_rejected() {
    assert_eq!(
        ReaderConfig::from_json(r#"{"seed_policy": "fixed"}"#),
        Err(ReaderError::MissingFixedSeed)
    );
}

#[test]
fn test_unknown_policy_and_fields_are_rejected() {
    assert!(matches!(
        ReaderConfig::from_json(r#"{"seed_policy": "lunar"}"#),
        Err(ReaderError::Config(_))
    ));
    assert!(matches!(
        ReaderConfig::from_json(r#"{"device": 1}"#),
        Err(ReaderError::Config(_))
    ));
}

#[test]
fn test_load_reads_file() {
    let path = std::env::temp_dir().join(format!(
        "random-reader-config-{}.json",
        std::process::id()
    ));
    fs::write(&path, r#"{"seed_policy": "time", "backend": "fast"}"#).unwrap();

    let config = ReaderConfig::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.seed_policy, PolicyKind::Time);
    assert_eq!(config.backend, Backend::Fast);
}

#[test]
fn test_load_missing_file_is_config_error() {
    let path = std::env::temp_dir().join("random-reader-config-does-not-exist.json");

    assert!(matches!(ReaderConfig::load(&path), Err(ReaderError::Config(_))));
}
