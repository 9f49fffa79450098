use crate::error::ConfigError;
use nord_dither::{Accumulator, NordDitherer};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "NORDIFY_CONFIG";

/// Dithering configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DitherConfig {
    /// Noise intensity as a fraction of the channel range
    #[serde(default = "default_noise_amount")]
    pub noise_amount: f64,

    /// Seed for reproducible noise; random when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Working buffer storage model
    #[serde(default)]
    pub accumulator: AccumulatorSetting,

    /// Re-compress output with oxipng
    #[serde(default)]
    pub optimize: bool,
}

fn default_noise_amount() -> f64 {
    nord_dither::dither::DEFAULT_NOISE_AMOUNT
}

/// Config-file spelling of [`Accumulator`]
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccumulatorSetting {
    #[default]
    Float,
    Byte,
}

impl From<AccumulatorSetting> for Accumulator {
    fn from(setting: AccumulatorSetting) -> Self {
        match setting {
            AccumulatorSetting::Float => Accumulator::Float,
            AccumulatorSetting::Byte => Accumulator::Byte,
        }
    }
}

/// Values given on the command line, applied on top of the file
#[derive(Debug, Default, Clone)]
pub struct DitherOverrides {
    pub noise_amount: Option<f64>,
    pub seed: Option<u64>,
    pub byte_accumulator: bool,
    pub optimize: bool,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            noise_amount: default_noise_amount(),
            seed: None,
            accumulator: AccumulatorSetting::Float,
            optimize: false,
        }
    }
}

impl DitherConfig {
    /// Parse configuration from YAML. An empty document yields defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            noise_amount = config.noise_amount,
            seeded = config.seed.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load from an explicit path, else from `$NORDIFY_CONFIG`, else defaults.
    ///
    /// A path that was named but cannot be read is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path: Option<PathBuf> = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        match path {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command line overrides
    pub fn apply(mut self, overrides: &DitherOverrides) -> Self {
        if let Some(amount) = overrides.noise_amount {
            self.noise_amount = amount;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if overrides.byte_accumulator {
            self.accumulator = AccumulatorSetting::Byte;
        }
        self.optimize |= overrides.optimize;
        self
    }

    /// Build a ditherer from this configuration
    pub fn ditherer(&self) -> Result<NordDitherer, ConfigError> {
        let mut ditherer = NordDitherer::new()
            .try_noise_amount(self.noise_amount)?
            .accumulator(self.accumulator.into());
        if let Some(seed) = self.seed {
            ditherer = ditherer.seed(seed);
        }
        Ok(ditherer)
    }
}
