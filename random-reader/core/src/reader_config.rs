// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ReaderError, SeedPolicy};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    ProcessDefault,
    Time,
    Fixed,
    Entropy,
}

/// Generator backing the reader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// `rand::rngs::StdRng`
    #[default]
    Std,
    /// `fastrand::Rng`
    Fast,
}

/// Reader configuration as read from JSON, e.g.
///
/// ```json
/// { "seed_policy": "fixed", "fixed_seed": 42, "backend": "fast" }
/// ```
///
/// Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    pub seed_policy: PolicyKind,
    pub fixed_seed: Option<u64>,
    pub backend: Backend,
}

impl ReaderConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReaderError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ReaderError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ReaderError> {
        let config: ReaderConfig =
            serde_json::from_str(contents).map_err(|e| ReaderError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ReaderError> {
        self.seed_policy().map(|_| ())
    }

    pub fn seed_policy(&self) -> Result<SeedPolicy, ReaderError> {
        match self.seed_policy {
            PolicyKind::ProcessDefault => Ok(SeedPolicy::ProcessDefault),
            PolicyKind::Time => Ok(SeedPolicy::Time),
            PolicyKind::Fixed => self
                .fixed_seed
                .map(SeedPolicy::Fixed)
                .ok_or(ReaderError::MissingFixedSeed),
            PolicyKind::Entropy => Ok(SeedPolicy::Entropy),
        }
    }
}
