use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::rng::os_random_seed;

pub const DEFAULT_VERTICES: usize = 500;
pub const DEFAULT_ATTEMPTS: usize = 100_000;
pub const DEFAULT_WEIGHT_RANGE: (u64, u64) = (0, 2000);

pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> Result<CorrectType, ConfigError>;
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("weight range ({min}, {max}) is empty")]
    InvalidWeightRange { min: u64, max: u64 },
    #[error("{0} vertices do not fit into a dense adjacency matrix")]
    TooManyVertices(usize),
    #[error("could not read config file {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("could not draw a seed from the operating system: {0}")]
    Entropy(getrandom::Error),
}

fn default_vertices() -> usize {
    DEFAULT_VERTICES
}

fn default_attempts() -> usize {
    DEFAULT_ATTEMPTS
}

fn default_weight_range() -> (u64, u64) {
    DEFAULT_WEIGHT_RANGE
}

/// Parameters of a single generated graph.
#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub seed: u64,
    #[serde(default = "default_vertices")]
    pub vertices: usize,
    #[serde(default = "default_attempts")]
    pub attempts: usize,
    #[serde(default = "default_weight_range")]
    pub weight_range: (u64, u64),
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = self.weight_range;
        if min > max {
            return Err(ConfigError::InvalidWeightRange { min, max });
        }
        if self.vertices.checked_mul(self.vertices).is_none() {
            return Err(ConfigError::TooManyVertices(self.vertices));
        }

        Ok(())
    }

}

/// The most edges a graph can hold, `min(attempts, vertices² - vertices)`.
pub fn edge_cap(vertices: usize, attempts: usize) -> usize {
    vertices
        .saturating_mul(vertices.saturating_sub(1))
        .min(attempts)
}

/// Values given on the command line. Each one replaces the config file's value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub vertices: Option<usize>,
    pub attempts: Option<usize>,
    pub min_weight: Option<u64>,
    pub max_weight: Option<u64>,
}

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct UnseededGeneratorConfig {
    pub vertices: usize,
    pub attempts: usize,
    pub weight_range: (u64, u64),
}

impl Default for UnseededGeneratorConfig {
    fn default() -> Self {
        UnseededGeneratorConfig {
            vertices: DEFAULT_VERTICES,
            attempts: DEFAULT_ATTEMPTS,
            weight_range: DEFAULT_WEIGHT_RANGE,
        }
    }
}

impl UnseededGeneratorConfig {
    pub fn seeded(&self, seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            seed,
            vertices: self.vertices,
            attempts: self.attempts,
            weight_range: self.weight_range,
        }
    }
}

impl Fix<GeneratorConfig> for UnseededGeneratorConfig {
    fn to_fixed(&self) -> Result<GeneratorConfig, ConfigError> {
        let seed = os_random_seed().map_err(ConfigError::Entropy)?;
        Ok(self.seeded((seed >> 64) as u64))
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum GraphCreationConfig {
    Seeded(GeneratorConfig),
    Unseeded(UnseededGeneratorConfig),
}

impl Default for GraphCreationConfig {
    fn default() -> Self {
        Self::Unseeded(UnseededGeneratorConfig::default())
    }
}

impl GraphCreationConfig {
    /// Loads a config from a YAML file. An empty file yields the defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if text.trim().is_empty() {
            debug!(path = %path.display(), "empty config file, using defaults");
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), ?config, "loaded config file");
        Ok(config)
    }

    /// Splits the config into its parameters and the seed, if one was given.
    pub fn into_parts(self) -> (UnseededGeneratorConfig, Option<u64>) {
        match self {
            Self::Seeded(cfg) => (
                UnseededGeneratorConfig {
                    vertices: cfg.vertices,
                    attempts: cfg.attempts,
                    weight_range: cfg.weight_range,
                },
                Some(cfg.seed),
            ),
            Self::Unseeded(cfg) => (cfg, None),
        }
    }

    /// Applies the overrides on top of this config, fixes the seed and validates the result.
    /// A seed override wins over the config's seed. Without either a seed is drawn from the OS.
    pub fn with_overrides(self, overrides: &Overrides) -> Result<GeneratorConfig, ConfigError> {
        let (mut params, seed) = self.into_parts();
        if let Some(vertices) = overrides.vertices {
            params.vertices = vertices;
        }
        if let Some(attempts) = overrides.attempts {
            params.attempts = attempts;
        }
        if let Some(min) = overrides.min_weight {
            params.weight_range.0 = min;
        }
        if let Some(max) = overrides.max_weight {
            params.weight_range.1 = max;
        }

        let config = match overrides.seed.or(seed) {
            Some(seed) => params.seeded(seed),
            None => params.to_fixed()?,
        };
        config.validate()?;
        Ok(config)
    }
}
