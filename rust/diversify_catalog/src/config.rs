// src/config.rs

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{CatalogError, Result};

pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const DEFAULT_GENERATED_COUNT: usize = 24;
pub const DEFAULT_ACCREDITED_PROBABILITY: f64 = 0.3;
pub const DEFAULT_RATING_FLOOR: f64 = 3.5;
pub const DEFAULT_RATING_SPREAD: f64 = 1.5;
pub const MIN_INVESTMENT_CHOICES: [u64; 9] = [10, 50, 100, 500, 1000, 2500, 5000, 10000, 25000];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GeneratorConfig {
    // Number of synthetic listings appended after the seed records
    #[validate(range(max = 10000))]
    pub generated_count: usize,
    #[validate(range(min = 0.0, max = 1.0))]
    pub accredited_probability: f64,
    #[validate(range(min = 1.0, max = 5.0))]
    pub rating_floor: f64,
    #[validate(range(min = 0.0, max = 4.0))]
    pub rating_spread: f64,
    #[validate(length(min = 1))]
    pub min_investment_choices: Vec<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            generated_count: DEFAULT_GENERATED_COUNT,
            accredited_probability: DEFAULT_ACCREDITED_PROBABILITY,
            rating_floor: DEFAULT_RATING_FLOOR,
            rating_spread: DEFAULT_RATING_SPREAD,
            min_investment_choices: MIN_INVESTMENT_CHOICES.to_vec(),
        }
    }
}

impl GeneratorConfig {
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| CatalogError::Configuration(format!("Invalid generator config: {}", e)))?;
        if self.rating_floor + self.rating_spread > 5.0 {
            return Err(CatalogError::Configuration(format!(
                "Rating floor {} plus spread {} exceeds the 5.0 scale",
                self.rating_floor, self.rating_spread
            )));
        }
        Ok(())
    }
}

/// Settings for building and browsing a catalog. Every field has a default,
/// so a config file only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CatalogConfig {
    #[validate(range(min = 1, max = 100))]
    pub page_size: usize,
    #[validate(nested)]
    pub generator: GeneratorConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            page_size: DEFAULT_PAGE_SIZE,
            generator: GeneratorConfig::default(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading catalog config");
        Self::from_json_str(&contents)
    }

    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| CatalogError::Configuration(format!("Invalid catalog config: {}", e)))?;
        self.generator.check()
    }
}
