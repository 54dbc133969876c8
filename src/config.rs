//! Match configuration
//!
//! Data-driven setup for a match: screen geometry and the terrain source.
//! Loadable from a JSON file; every field falls back to its default when
//! omitted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::CELL_WIDTH;
use crate::error::ConfigError;
use crate::sim::Terrain;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Visible width in world units; drives the lag-death margin, the
    /// respawn offset and the lone-leader camera lead
    pub screen_width: f32,
    /// Explicit terrain map ('_' low, '-' high, ' ' gap); overrides
    /// procedural generation when set
    pub terrain: Option<String>,
    /// Cell count for procedural generation
    pub terrain_len: usize,
    /// Seed for procedural generation
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            screen_width: 80.0,
            terrain: None,
            terrain_len: 64,
            seed: 0x5ca_4be4,
        }
    }
}

impl MatchConfig {
    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject geometry the death rules cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = 2.0 * CELL_WIDTH;
        if self.screen_width <= min {
            return Err(ConfigError::ScreenTooNarrow {
                got: self.screen_width,
                min,
            });
        }
        Ok(())
    }

    /// Build the match terrain from the explicit map or the seed
    pub fn build_terrain(&self) -> Result<Terrain, ConfigError> {
        match &self.terrain {
            Some(map) => Terrain::parse(map),
            None => Terrain::generate(self.terrain_len, self.seed),
        }
    }
}
