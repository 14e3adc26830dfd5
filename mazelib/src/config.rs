use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// World-session parameters. Immutable for the lifetime of a session:
/// regenerating a chunk under a different seed or chunk size would silently
/// disagree with chunks already resident, so [`crate::game_world::GameWorld`]
/// takes the config at build time and exposes no mutator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub chunk_size: f64,
    pub view_distance: u32,
    pub wall_height: f64,
    pub corridor_width: f64,
    pub seed: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: 32.0,
            view_distance: 3,
            wall_height: 3.0,
            corridor_width: 3.0,
            seed: 42,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("chunk_size must be positive, got {0}")]
    NonPositiveChunkSize(f64),
    #[error("wall_height must be positive, got {0}")]
    NonPositiveWallHeight(f64),
    #[error("corridor_width must be positive, got {0}")]
    NonPositiveCorridorWidth(f64),
}

impl WorldConfig {
    /// Rejects malformed configuration up front; generation itself is total
    /// and never revalidates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.chunk_size > 0.0) {
            return Err(ConfigError::NonPositiveChunkSize(self.chunk_size));
        }
        if !(self.wall_height > 0.0) {
            return Err(ConfigError::NonPositiveWallHeight(self.wall_height));
        }
        if !(self.corridor_width > 0.0) {
            return Err(ConfigError::NonPositiveCorridorWidth(self.corridor_width));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(WorldConfig::default().validate(), Ok(()));
        let d = WorldConfig::default();
        assert_eq!(d.chunk_size, 32.0);
        assert_eq!(d.view_distance, 3);
        assert_eq!(d.seed, 42);
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let mut cfg = WorldConfig::default();
        cfg.chunk_size = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveChunkSize(0.0)));
        let mut cfg = WorldConfig::default();
        cfg.wall_height = -1.0;
        assert!(cfg.validate().is_err());
        let mut cfg = WorldConfig::default();
        cfg.chunk_size = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let cfg = WorldConfig::default();
        let txt = serde_json::to_string(&cfg).unwrap();
        assert_eq!(serde_json::from_str::<WorldConfig>(&txt).unwrap(), cfg);
    }
}
