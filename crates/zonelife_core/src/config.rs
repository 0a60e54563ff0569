//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures mapping to `config.toml`. Every field has a
//! default, so a file only needs the values it overrides.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [grid]
//! width = 95
//! height = 53
//!
//! [rules]
//! revival_probability = 0.003
//! max_damage_counter = 5
//!
//! [run]
//! generation_limit = 500   # omit for unbounded
//! tick_interval_ms = 750
//! seed = 42
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::controller::GenerationLimit;
use crate::error::{Result, SimError};
use crate::revival::DEFAULT_REVIVAL_PROBABILITY;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 95,
            height: 53,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RuleConfig {
    pub revival_probability: f64,
    pub max_damage_counter: i32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            revival_probability: DEFAULT_REVIVAL_PROBABILITY,
            max_damage_counter: 5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    /// `None` runs until paused.
    pub generation_limit: Option<u64>,
    pub tick_interval_ms: u64,
    /// `None` seeds the engine RNG from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generation_limit: None,
            tick_interval_ms: 750,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn limit(&self) -> Result<GenerationLimit> {
        GenerationLimit::from_option(self.generation_limit)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub rules: RuleConfig,
    pub run: RunConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        ensure(self.grid.width > 0, "Grid width must be positive")?;
        ensure(self.grid.height > 0, "Grid height must be positive")?;
        ensure(
            (0.0..=1.0).contains(&self.rules.revival_probability),
            "Revival probability must be in [0.0, 1.0]",
        )?;
        ensure(
            self.rules.max_damage_counter >= 1,
            "Max damage counter must be at least 1",
        )?;
        ensure(
            self.run.generation_limit != Some(0),
            "Generation limit must be at least 1",
        )?;
        ensure(
            self.run.tick_interval_ms > 0,
            "Tick interval must be positive",
        )?;
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("loading {}", path.display()))
    }

    /// Hex digest of every setting that changes simulation outcomes.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.grid).as_bytes());
        hasher.update(format!("{:?}", self.rules).as_bytes());
        hasher.update(format!("{:?}", self.run.seed).as_bytes());
        hex::encode(hasher.finalize())
    }
}

fn ensure(condition: bool, msg: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(SimError::invalid_config(msg))
    }
}
