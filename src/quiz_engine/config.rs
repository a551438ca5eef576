//! Wheel and session configuration.
//!
//! Defaults reproduce the reference eight-sector wheel. A TOML file can
//! override any field; missing fields keep their default.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::{error::ConfigError, models::Sector};

/// Fewest full turns a spin makes.
pub const DEFAULT_MIN_SPINS: u32 = 5;
/// Most full turns a spin makes.
pub const DEFAULT_MAX_SPINS: u32 = 8;
/// Matches the wheel animation length.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub min_spins: u32,
    pub max_spins: u32,
    pub reveal_delay_ms: u64,
    /// Sector 0 first, in the wheel's angular order.
    pub sectors: Vec<Sector>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            min_spins: DEFAULT_MIN_SPINS,
            max_spins: DEFAULT_MAX_SPINS,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            sectors: default_sectors(),
        }
    }
}

impl WheelConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sectors.is_empty() {
            return Err(ConfigError::NoSectors);
        }
        if self.max_spins == 0 {
            return Err(ConfigError::ZeroSpins);
        }
        if self.min_spins > self.max_spins {
            return Err(ConfigError::SpinRange { min: self.min_spins, max: self.max_spins });
        }
        Ok(())
    }
}

fn default_sectors() -> Vec<Sector> {
    vec![
        Sector::normal("ma conso"),
        Sector::normal("bon plan"),
        Sector::respin("et ça repart !"),
        Sector::normal("j'agis !!"),
        Sector::random("mystère !!"),
        Sector::normal("ça va où ?"),
        Sector::normal("challenge !!!"),
        Sector::respin("et ça repart !"),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub wheel: WheelConfig,
    /// `Some(seed)` makes every draw reproducible; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(s)?;
        config.wheel.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(
            "Using wheel config from {}: {} sectors",
            path.display(),
            config.wheel.sectors.len()
        );
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}
